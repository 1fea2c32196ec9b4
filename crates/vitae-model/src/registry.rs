//! Entity registries: institutes, authors, software.
//!
//! Each registry is built by one pass over its section in source order and
//! never mutated afterwards. Lookups return `Option` — absence is a
//! sentinel, not an error; callers decide whether a miss is fatal. The
//! maps preserve insertion order, which is what makes "first match" a
//! deterministic policy.

use crate::error::{Error, Result};
use crate::resolve;
use hashlink::LinkedHashMap;
use vitae_record::rows::{AuthorRow, InstituteRow, SoftwareRow};
use vitae_record::{FromRecord, RecordSource};

/// An institute (university, company, research lab).
#[derive(Debug, Clone, PartialEq)]
pub struct Institute {
    pub id: i64,
    pub name: String,
    pub name_abbr: Option<String>,
    pub department: Option<String>,
    pub department_abbr: Option<String>,
    // location
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// `(latitude, longitude)`, southern and western hemispheres negative.
    pub coordinates: Option<(f64, f64)>,
    pub url: Option<String>,
}

/// The institute registry, keyed by unique id.
#[derive(Debug, Clone, Default)]
pub struct Institutes {
    entries: LinkedHashMap<i64, Institute>,
}

impl Institutes {
    pub const SECTION: &'static str = "Institutes";

    /// Build the registry from the `Institutes` section.
    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = LinkedHashMap::new();
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Name", index);
            let row = InstituteRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label.clone(),
                source: e,
            })?;
            let institute = Institute::from_row(row, &label)?;
            let id = institute.id;
            if entries.insert(id, institute).is_some() {
                return Err(Error::DuplicateId {
                    section: Self::SECTION.to_string(),
                    record: label,
                    id,
                    affiliation_id: None,
                });
            }
        }
        tracing::debug!(count = entries.len(), "loaded institutes");
        Ok(Institutes { entries })
    }

    /// First structural match for the given id.
    pub fn get(&self, id: i64) -> Option<&Institute> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate institutes in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Institute> {
        self.entries.values()
    }
}

impl Institute {
    fn from_row(row: InstituteRow, label: &str) -> Result<Self> {
        let coordinates = match &row.coordinates {
            None => None,
            Some(raw) => Some(parse_coordinates(raw).map_err(|token| Error::Parse {
                section: Institutes::SECTION.to_string(),
                record: label.to_string(),
                field: "Coordinates".to_string(),
                token,
            })?),
        };
        Ok(Institute {
            id: row.id,
            name: row.name,
            name_abbr: row.name_abbr,
            department: row.department,
            department_abbr: row.department_abbr,
            address: row.address,
            city: row.city,
            country: row.country,
            coordinates,
            url: row.url,
        })
    }
}

/// Parse a `"48.1351° N, 11.5820° E"`-style coordinate pair. Southern and
/// western hemispheres come out negative.
fn parse_coordinates(raw: &str) -> std::result::Result<(f64, f64), String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [latitude, longitude] = parts.as_slice() else {
        return Err(raw.to_string());
    };
    Ok((parse_coordinate(latitude)?, parse_coordinate(longitude)?))
}

fn parse_coordinate(token: &str) -> std::result::Result<f64, String> {
    let cleaned = token.replace('°', "");
    let cleaned = cleaned.trim();
    let negative = cleaned.contains('S') || cleaned.contains('W');
    let number = cleaned
        .trim_end_matches(['N', 'E', 'S', 'W'])
        .trim()
        .parse::<f64>()
        .map_err(|_| token.to_string())?;
    Ok(if negative { -number } else { number })
}

/// One author identity.
///
/// A source row whose `Affiliations` cell carries several ids materializes
/// into one `Author` per affiliation, so `(id, affiliation_id)` is the
/// unique key and the plain `id` is not unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i64,
    /// The affiliated institute's id, validated against [`Institutes`] at
    /// load.
    pub affiliation_id: i64,
    // personal
    pub name: String,
    pub lastname: String,
    pub alias_long: Option<String>,
    pub alias_short: String,
    pub job_title: Option<String>,
    // contact
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub location: Option<String>,
    // social
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub google_scholar: Option<String>,
    pub orcid: Option<String>,
    pub researchgate: Option<String>,
    // security
    pub fingerprint: Option<String>,
    pub public_key: Option<String>,
}

impl Author {
    /// The affiliated institute.
    pub fn affiliation<'a>(&self, institutes: &'a Institutes) -> Option<&'a Institute> {
        institutes.get(self.affiliation_id)
    }

    fn from_row(row: &AuthorRow, affiliation_id: i64) -> Self {
        Author {
            id: row.id,
            affiliation_id,
            name: row.name.clone(),
            lastname: row.lastname.clone(),
            alias_long: row.alias_long.clone(),
            alias_short: row.alias_short.clone(),
            job_title: row.job_title.clone(),
            email: row.email.clone(),
            telephone: row.telephone.clone(),
            website: row.website.clone(),
            address: row.address.clone(),
            location: row.location.clone(),
            linkedin: row.linkedin.clone(),
            github: row.github.clone(),
            google_scholar: row.google_scholar.clone(),
            orcid: row.orcid.clone(),
            researchgate: row.researchgate.clone(),
            fingerprint: row.fingerprint.clone(),
            public_key: row.public_key.clone(),
        }
    }
}

/// The author registry, keyed by the `(id, affiliation_id)` composite.
#[derive(Debug, Clone, Default)]
pub struct Authors {
    entries: LinkedHashMap<(i64, i64), Author>,
}

impl Authors {
    pub const SECTION: &'static str = "Authors";

    /// Build the registry from the `Authors` section. Institutes must
    /// already be built: every affiliation id resolves against them.
    pub fn load(source: &dyn RecordSource, institutes: &Institutes) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries: LinkedHashMap<(i64, i64), Author> = LinkedHashMap::new();
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Name", index);
            let row = AuthorRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label.clone(),
                source: e,
            })?;
            let affiliation_ids =
                resolve::parse_id_list(&row.affiliations).map_err(|token| Error::Parse {
                    section: Self::SECTION.to_string(),
                    record: label.clone(),
                    field: "Affiliations".to_string(),
                    token,
                })?;
            for affiliation_id in affiliation_ids {
                if institutes.get(affiliation_id).is_none() {
                    return Err(Error::UnresolvedInstitute {
                        section: Self::SECTION.to_string(),
                        record: label,
                        institute_id: affiliation_id,
                    });
                }
                let author = Author::from_row(&row, affiliation_id);
                if entries.insert((row.id, affiliation_id), author).is_some() {
                    return Err(Error::DuplicateId {
                        section: Self::SECTION.to_string(),
                        record: label,
                        id: row.id,
                        affiliation_id: Some(affiliation_id),
                    });
                }
            }
        }
        tracing::debug!(count = entries.len(), "loaded authors");
        Ok(Authors { entries })
    }

    /// First-loaded author with the given id.
    ///
    /// When an author has several affiliations, load order decides which
    /// identity this returns; [`Authors::get_by_affiliation`] is exact.
    pub fn get(&self, id: i64) -> Option<&Author> {
        self.entries.values().find(|author| author.id == id)
    }

    /// Exact composite lookup by `(id, affiliation_id)`.
    pub fn get_by_affiliation(&self, id: i64, affiliation_id: i64) -> Option<&Author> {
        self.entries.get(&(id, affiliation_id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate authors in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Author> {
        self.entries.values()
    }
}

/// A software project.
#[derive(Debug, Clone, PartialEq)]
pub struct Software {
    pub id: i64,
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    // links
    pub repository: Option<String>,
    pub demo: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
    pub license: Option<String>,
}

/// The software registry, keyed by unique id.
#[derive(Debug, Clone, Default)]
pub struct SoftwareRegistry {
    entries: LinkedHashMap<i64, Software>,
}

impl SoftwareRegistry {
    pub const SECTION: &'static str = "Software";

    /// Build the registry from the `Software` section.
    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = LinkedHashMap::new();
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Name", index);
            let row = SoftwareRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label.clone(),
                source: e,
            })?;
            let id = row.id;
            let software = Software {
                id: row.id,
                name: row.name,
                version: row.version,
                description: row.description,
                repository: row.repository,
                demo: row.demo,
                website: row.website,
                summary: row.summary,
                license: row.license,
            };
            if entries.insert(id, software).is_some() {
                return Err(Error::DuplicateId {
                    section: Self::SECTION.to_string(),
                    record: label,
                    id,
                    affiliation_id: None,
                });
            }
        }
        tracing::debug!(count = entries.len(), "loaded software");
        Ok(SoftwareRegistry { entries })
    }

    /// First structural match for the given id.
    pub fn get(&self, id: i64) -> Option<&Software> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate software in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Software> {
        self.entries.values()
    }

    /// Software sorted alphabetically by name, for catalog listings.
    pub fn iter_alphabetical(&self) -> Vec<&Software> {
        let mut all: Vec<&Software> = self.entries.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}
