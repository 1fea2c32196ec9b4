//! Education, experience, teaching, and supervision.
//!
//! All four are timeline collections: built once, cross-checked against
//! the author registry where they reference people, and ordered
//! newest-first by the latest end of their date ranges (supervision by
//! its scalar year).

use crate::date::{self, DatePrecision, DateRangeSet, Instant};
use crate::error::{Error, Result};
use crate::registry::{Author, Authors};
use crate::resolve;
use crate::sort;
use std::cmp::Reverse;
use vitae_record::rows::{EducationRow, ExperienceRow, SupervisionRow, TeachingRow};
use vitae_record::{FromRecord, RecordSource};

fn parse_period(
    raw: &str,
    precision: DatePrecision,
    accept_present: bool,
    section: &str,
    record: &str,
) -> Result<DateRangeSet> {
    DateRangeSet::parse(raw, precision, accept_present).map_err(|e| match e {
        date::DateError::Empty => Error::EmptyRange {
            section: section.to_string(),
            record: record.to_string(),
            field: "Year".to_string(),
        },
        date::DateError::BadToken(token) => Error::Parse {
            section: section.to_string(),
            record: record.to_string(),
            field: "Year".to_string(),
            token,
        },
    })
}

fn parse_advisor_ids(
    raw: Option<&str>,
    authors: &Authors,
    section: &str,
    record: &str,
    field: &str,
) -> Result<Vec<i64>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let ids = resolve::parse_id_list(raw).map_err(|token| Error::Parse {
        section: section.to_string(),
        record: record.to_string(),
        field: field.to_string(),
        token,
    })?;
    for &id in &ids {
        if authors.get(id).is_none() {
            return Err(Error::UnresolvedAuthor {
                section: section.to_string(),
                record: record.to_string(),
                author_id: id,
                affiliation_id: None,
            });
        }
    }
    Ok(ids)
}

/// One degree.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationItem {
    pub degree: String,
    pub award: Option<String>,
    pub institution: Option<String>,
    /// Day-precision study period.
    pub period: DateRangeSet,
    pub thesis: Option<String>,
    pub thesis_link: Option<String>,
    /// Validated against the author registry at load.
    pub advisor_ids: Vec<i64>,
}

impl EducationItem {
    /// The advisors, resolved against the registry.
    pub fn advisors<'a>(&'a self, authors: &'a Authors) -> impl Iterator<Item = &'a Author> {
        self.advisor_ids.iter().filter_map(|&id| authors.get(id))
    }
}

/// The education collection, newest degree first.
#[derive(Debug, Clone, Default)]
pub struct Education {
    entries: Vec<EducationItem>,
}

impl Education {
    pub const SECTION: &'static str = "Education";

    pub fn load(source: &dyn RecordSource, authors: &Authors) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Degree", index);
            let row = EducationRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label.clone(),
                source: e,
            })?;
            let period = parse_period(
                &row.year,
                DatePrecision::DayMonthYear,
                false,
                Self::SECTION,
                &label,
            )?;
            let advisor_ids =
                parse_advisor_ids(row.advisor.as_deref(), authors, Self::SECTION, &label, "Advisor")?;
            entries.push(EducationItem {
                degree: row.degree,
                award: row.award,
                institution: row.institution,
                period,
                thesis: row.thesis,
                thesis_link: row.thesis_link,
                advisor_ids,
            });
        }
        let today = date::today();
        entries.sort_by_key(|e| Reverse(e.period.end_for_ordering(today)));
        tracing::debug!(count = entries.len(), "loaded education");
        Ok(Education { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EducationItem> {
        self.entries.iter()
    }

    /// End of the oldest (last-listed) degree.
    pub fn oldest_end(&self, today: Instant) -> Option<Instant> {
        self.entries.last().and_then(|e| e.period.latest_end(today))
    }
}

/// One position held.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceItem {
    /// Month-precision tenure; `present` marks an ongoing position.
    pub period: DateRangeSet,
    pub position: String,
    pub institution: Option<String>,
    pub description: Option<String>,
    pub responsibilities: Option<String>,
}

impl ExperienceItem {
    /// Whether the position is currently held.
    pub fn is_ongoing(&self) -> bool {
        self.period.is_ongoing()
    }
}

/// The experience collection, most recent position first.
#[derive(Debug, Clone, Default)]
pub struct Experience {
    entries: Vec<ExperienceItem>,
}

impl Experience {
    pub const SECTION: &'static str = "Experience";

    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Position", index);
            let row = ExperienceRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label.clone(),
                source: e,
            })?;
            // `present` is accepted here and nowhere else
            let period = parse_period(
                &row.year,
                DatePrecision::MonthYear,
                true,
                Self::SECTION,
                &label,
            )?;
            entries.push(ExperienceItem {
                period,
                position: row.position,
                institution: row.institution,
                description: row.description,
                responsibilities: row.responsibilities,
            });
        }
        let today = date::today();
        entries.sort_by_key(|e| Reverse(e.period.end_for_ordering(today)));
        tracing::debug!(count = entries.len(), "loaded experience");
        Ok(Experience { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExperienceItem> {
        self.entries.iter()
    }
}

/// One teaching engagement.
#[derive(Debug, Clone, PartialEq)]
pub struct TeachingItem {
    pub period: DateRangeSet,
    pub position: Option<String>,
    pub course: String,
    pub link: Option<String>,
    pub kind: Option<String>,
    pub institution: Option<String>,
    pub supervisor: Option<String>,
    pub responsibilities: Option<String>,
}

/// The teaching collection, most recent engagement first.
#[derive(Debug, Clone, Default)]
pub struct Teaching {
    entries: Vec<TeachingItem>,
}

impl Teaching {
    pub const SECTION: &'static str = "Teaching";

    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Course", index);
            let row = TeachingRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label.clone(),
                source: e,
            })?;
            let period = parse_period(
                &row.year,
                DatePrecision::MonthYear,
                false,
                Self::SECTION,
                &label,
            )?;
            entries.push(TeachingItem {
                period,
                position: row.position,
                course: row.course,
                link: row.link,
                kind: row.kind,
                institution: row.institution,
                supervisor: row.supervisor,
                responsibilities: row.responsibilities,
            });
        }
        let today = date::today();
        entries.sort_by_key(|e| Reverse(e.period.end_for_ordering(today)));
        tracing::debug!(count = entries.len(), "loaded teaching");
        Ok(Teaching { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeachingItem> {
        self.entries.iter()
    }

    /// Distinct engagement kinds, first-occurrence order.
    pub fn kinds_ordered(&self) -> Vec<&str> {
        distinct(self.entries.iter().filter_map(|t| t.kind.as_deref()))
    }

    /// Number of engagements of one kind.
    pub fn count_by_kind(&self, kind: &str) -> usize {
        self.entries
            .iter()
            .filter(|t| t.kind.as_deref() == Some(kind))
            .count()
    }
}

/// One supervised student project.
#[derive(Debug, Clone, PartialEq)]
pub struct SupervisionItem {
    pub year: i64,
    pub title: String,
    pub program: Option<String>,
    pub kind: Option<String>,
    pub institution: Option<String>,
    /// Validated against the author registry at load.
    pub supervisor_ids: Vec<i64>,
    pub students: Option<String>,
}

impl SupervisionItem {
    /// The co-supervisors, resolved against the registry.
    pub fn supervisors<'a>(&'a self, authors: &'a Authors) -> impl Iterator<Item = &'a Author> {
        self.supervisor_ids.iter().filter_map(|&id| authors.get(id))
    }
}

/// The supervision collection, most recent year first.
#[derive(Debug, Clone, Default)]
pub struct Supervision {
    entries: Vec<SupervisionItem>,
}

impl Supervision {
    pub const SECTION: &'static str = "Supervision";

    pub fn load(source: &dyn RecordSource, authors: &Authors) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Title", index);
            let row = SupervisionRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label.clone(),
                source: e,
            })?;
            let supervisor_ids = parse_advisor_ids(
                row.supervisors.as_deref(),
                authors,
                Self::SECTION,
                &label,
                "Supervisors",
            )?;
            entries.push(SupervisionItem {
                year: row.year,
                title: row.title,
                program: row.program,
                kind: row.kind,
                institution: row.institution,
                supervisor_ids,
                students: row.students,
            });
        }
        entries.sort_by(|a, b| sort::descending(&a.year, &b.year));
        tracing::debug!(count = entries.len(), "loaded supervision");
        Ok(Supervision { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SupervisionItem> {
        self.entries.iter()
    }

    /// Distinct supervision kinds, first-occurrence order.
    pub fn kinds_ordered(&self) -> Vec<&str> {
        distinct(self.entries.iter().filter_map(|s| s.kind.as_deref()))
    }

    /// Number of supervisions of one kind.
    pub fn count_by_kind(&self, kind: &str) -> usize {
        self.entries
            .iter()
            .filter(|s| s.kind.as_deref() == Some(kind))
            .count()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
