//! Grants and awards, memberships, professional services, and skills.
//!
//! The first two are timelines with a scalar year, sorted newest-first.
//! Services and skills are reference/catalog listings, the only two
//! collections sorted ascending — by (type, name).

use crate::error::{Error, Result};
use crate::sort;
use vitae_record::rows::{GrantAwardRow, MembershipRow, ServiceRow, SkillRow};
use vitae_record::{FromRecord, RecordSource};

/// One grant or award.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantAward {
    pub year: i64,
    pub description: String,
    pub institution: Option<String>,
    pub country: Option<String>,
    pub value: Option<String>,
}

/// The grants and awards collection, newest first.
#[derive(Debug, Clone, Default)]
pub struct GrantsAwards {
    entries: Vec<GrantAward>,
}

impl GrantsAwards {
    pub const SECTION: &'static str = "Grants_awards";

    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Description", index);
            let row = GrantAwardRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label,
                source: e,
            })?;
            entries.push(GrantAward {
                year: row.year,
                description: row.description,
                institution: row.institution,
                country: row.country,
                value: row.value,
            });
        }
        entries.sort_by(|a, b| sort::descending(&a.year, &b.year));
        tracing::debug!(count = entries.len(), "loaded grants and awards");
        Ok(GrantsAwards { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GrantAward> {
        self.entries.iter()
    }

    /// The oldest year on record.
    pub fn oldest_year(&self) -> Option<i64> {
        self.entries.last().map(|g| g.year)
    }
}

/// One professional membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub year: i64,
    pub membership: String,
}

/// The memberships collection, newest first.
#[derive(Debug, Clone, Default)]
pub struct Memberships {
    entries: Vec<Membership>,
}

impl Memberships {
    pub const SECTION: &'static str = "Professional_memberships";

    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Membership", index);
            let row = MembershipRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label,
                source: e,
            })?;
            entries.push(Membership {
                year: row.year,
                membership: row.membership,
            });
        }
        entries.sort_by(|a, b| sort::descending(&a.year, &b.year));
        tracing::debug!(count = entries.len(), "loaded memberships");
        Ok(Memberships { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Membership> {
        self.entries.iter()
    }
}

/// One professional service (editorships, reviewing, committees).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub kind: String,
    pub venue: String,
    pub link: Option<String>,
}

/// The services catalog, ascending by (type, venue).
#[derive(Debug, Clone, Default)]
pub struct Services {
    entries: Vec<Service>,
}

impl Services {
    pub const SECTION: &'static str = "Professional_services";

    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Venue", index);
            let row = ServiceRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label,
                source: e,
            })?;
            entries.push(Service {
                kind: row.kind,
                venue: row.venue,
                link: row.link,
            });
        }
        entries.sort_by(|a, b| (&a.kind, &a.venue).cmp(&(&b.kind, &b.venue)));
        tracing::debug!(count = entries.len(), "loaded services");
        Ok(Services { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.entries.iter()
    }

    /// Distinct service kinds, first-occurrence order.
    pub fn kinds_ordered(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for service in &self.entries {
            if !kinds.contains(&service.kind.as_str()) {
                kinds.push(&service.kind);
            }
        }
        kinds
    }
}

/// One skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub kind: String,
    pub name: String,
    pub level: Option<String>,
}

/// The skills catalog, ascending by (type, name).
#[derive(Debug, Clone, Default)]
pub struct Skills {
    entries: Vec<Skill>,
}

impl Skills {
    pub const SECTION: &'static str = "Skills";

    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Skill", index);
            let row = SkillRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label,
                source: e,
            })?;
            entries.push(Skill {
                kind: row.kind,
                name: row.name,
                level: row.level,
            });
        }
        entries.sort_by(|a, b| (&a.kind, &a.name).cmp(&(&b.kind, &b.name)));
        tracing::debug!(count = entries.len(), "loaded skills");
        Ok(Skills { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.entries.iter()
    }

    /// Distinct skill kinds, first-occurrence order.
    pub fn kinds_ordered(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = Vec::new();
        for skill in &self.entries {
            if !kinds.contains(&skill.kind.as_str()) {
                kinds.push(&skill.kind);
            }
        }
        kinds
    }

    /// The skills of one kind, in catalog order.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Skill> {
        self.entries.iter().filter(move |s| s.kind == kind)
    }

    /// Number of skills of one kind.
    pub fn count_by_kind(&self, kind: &str) -> usize {
        self.of_kind(kind).count()
    }

    /// Number of skills not of the given kind.
    pub fn count_except_kind(&self, kind: &str) -> usize {
        self.entries.iter().filter(|s| s.kind != kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_record::{MemorySource, Record};

    #[test]
    fn grants_sort_newest_first_and_expose_oldest() {
        let mut source = MemorySource::new();
        let mut a = Record::new();
        a.set("Year", 2019).set("Description", "Travel grant");
        let mut b = Record::new();
        b.set("Year", 2023).set("Description", "Best paper");
        source.insert(GrantsAwards::SECTION, vec![a, b]);

        let grants = GrantsAwards::load(&source).unwrap();
        let years: Vec<i64> = grants.iter().map(|g| g.year).collect();
        assert_eq!(years, vec![2023, 2019]);
        assert_eq!(grants.oldest_year(), Some(2019));
    }

    #[test]
    fn skills_sort_ascending_by_kind_then_name() {
        let mut source = MemorySource::new();
        let mut rust = Record::new();
        rust.set("Type", "Programming").set("Skill", "Rust");
        let mut da = Record::new();
        da.set("Type", "Languages").set("Skill", "Danish");
        let mut c = Record::new();
        c.set("Type", "Programming").set("Skill", "C");
        source.insert(Skills::SECTION, vec![rust, da, c]);

        let skills = Skills::load(&source).unwrap();
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Danish", "C", "Rust"]);
        assert_eq!(skills.kinds_ordered(), vec!["Languages", "Programming"]);
        assert_eq!(skills.count_by_kind("Programming"), 2);
        assert_eq!(skills.count_except_kind("Programming"), 1);
    }

    #[test]
    fn services_sort_ascending() {
        let mut source = MemorySource::new();
        let mut reviewer = Record::new();
        reviewer.set("Type", "Reviewer").set("Venue", "IEEE TMC");
        let mut chair = Record::new();
        chair.set("Type", "Chair").set("Venue", "ACM X");
        source.insert(Services::SECTION, vec![reviewer, chair]);

        let services = Services::load(&source).unwrap();
        let kinds: Vec<&str> = services.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Chair", "Reviewer"]);
    }

    #[test]
    fn membership_rows_require_a_year() {
        let mut source = MemorySource::new();
        let mut r = Record::new();
        r.set("Membership", "IEEE");
        source.insert(Memberships::SECTION, vec![r]);
        let err = Memberships::load(&source).unwrap_err();
        assert!(
            matches!(err, Error::Record { ref section, .. } if section == "Professional_memberships"),
            "got {err}"
        );
    }
}
