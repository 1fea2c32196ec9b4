//! Profile sections: intro, research interests, news, personal
//! references, and presentations.

use crate::date::{DatePrecision, Instant, parse_instant};
use crate::error::{Error, Result};
use crate::registry::{Author, Authors, Institute, Institutes};
use crate::resolve;
use crate::sort;
use vitae_record::rows::{IntroRow, NewsRow, PresentationRow, ReferenceRow, ResearchInterestsRow};
use vitae_record::{FromRecord, RecordSource};

/// The site introduction: one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intro {
    pub short_summary: String,
    pub welcome: String,
    pub tagline: String,
}

impl Intro {
    pub const SECTION: &'static str = "Intro";

    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let record = records.first().ok_or_else(|| Error::EmptySection {
            section: Self::SECTION.to_string(),
        })?;
        let row = IntroRow::from_record(record).map_err(|e| Error::Record {
            section: Self::SECTION.to_string(),
            record: record.label("Tagline", 0),
            source: e,
        })?;
        Ok(Intro {
            short_summary: row.short_summary,
            welcome: row.welcome,
            tagline: row.tagline,
        })
    }
}

/// Research interests: one interests text plus a keyword list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchInterests {
    pub interests: String,
    pub keywords: Vec<String>,
}

impl ResearchInterests {
    pub const SECTION: &'static str = "Research_Interests";

    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        if records.is_empty() {
            return Err(Error::EmptySection {
                section: Self::SECTION.to_string(),
            });
        }
        let mut interests = None;
        let mut keywords = Vec::new();
        for (index, record) in records.iter().enumerate() {
            let row = ResearchInterestsRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: record.label("Keywords", index),
                source: e,
            })?;
            // the interests text lives on the first row
            if index == 0 {
                interests = row.interests;
            }
            if let Some(keyword) = row.keyword {
                keywords.push(keyword);
            }
        }
        let interests = interests.ok_or_else(|| Error::Record {
            section: Self::SECTION.to_string(),
            record: "#1".to_string(),
            source: vitae_record::RecordError::MissingField {
                field: "Interests".to_string(),
            },
        })?;
        Ok(ResearchInterests {
            interests,
            keywords,
        })
    }
}

/// One news item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    /// Day-precision date.
    pub date: Instant,
    pub description: Option<String>,
    // resources
    pub pdf: Option<String>,
    pub preprint: Option<String>,
    pub code: Option<String>,
    pub doi: Option<String>,
}

/// The news collection, in load order.
#[derive(Debug, Clone, Default)]
pub struct News {
    entries: Vec<NewsItem>,
}

impl News {
    pub const SECTION: &'static str = "News";

    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Title", index);
            let row = NewsRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label.clone(),
                source: e,
            })?;
            let date = parse_instant(&row.date, DatePrecision::DayMonthYear).map_err(|_| {
                Error::Parse {
                    section: Self::SECTION.to_string(),
                    record: label,
                    field: "Date".to_string(),
                    token: row.date.clone(),
                }
            })?;
            entries.push(NewsItem {
                title: row.title,
                date,
                description: row.description,
                pdf: row.pdf,
                preprint: row.preprint,
                code: row.code,
                doi: row.doi,
            });
        }
        tracing::debug!(count = entries.len(), "loaded news");
        Ok(News { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NewsItem> {
        self.entries.iter()
    }
}

/// One personal reference: a pointer into the author registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Validated against the author registry at load.
    pub author_ids: Vec<i64>,
}

impl Reference {
    /// The referenced people, resolved against the registry.
    pub fn people<'a>(&'a self, authors: &'a Authors) -> impl Iterator<Item = &'a Author> {
        self.author_ids.iter().filter_map(|&id| authors.get(id))
    }
}

/// The references collection, in load order.
#[derive(Debug, Clone, Default)]
pub struct References {
    entries: Vec<Reference>,
}

impl References {
    pub const SECTION: &'static str = "References";

    pub fn load(source: &dyn RecordSource, authors: &Authors) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Author id", index);
            let row = ReferenceRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label.clone(),
                source: e,
            })?;
            let author_ids =
                resolve::parse_id_list(&row.author_id).map_err(|token| Error::Parse {
                    section: Self::SECTION.to_string(),
                    record: label.clone(),
                    field: "Author id".to_string(),
                    token,
                })?;
            for &id in &author_ids {
                if authors.get(id).is_none() {
                    return Err(Error::UnresolvedAuthor {
                        section: Self::SECTION.to_string(),
                        record: label,
                        author_id: id,
                        affiliation_id: None,
                    });
                }
            }
            entries.push(Reference { author_ids });
        }
        tracing::debug!(count = entries.len(), "loaded references");
        Ok(References { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.entries.iter()
    }
}

/// One talk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub title: String,
    /// Month-precision date.
    pub date: Instant,
    /// Validated against the institute registry at load.
    pub institution_id: i64,
    pub event: Option<String>,
    pub slides: Option<String>,
}

impl Presentation {
    /// The hosting institute.
    pub fn institution<'a>(&self, institutes: &'a Institutes) -> Option<&'a Institute> {
        institutes.get(self.institution_id)
    }
}

/// The presentations collection, most recent first.
#[derive(Debug, Clone, Default)]
pub struct Presentations {
    entries: Vec<Presentation>,
}

impl Presentations {
    pub const SECTION: &'static str = "Presentations";

    pub fn load(source: &dyn RecordSource, institutes: &Institutes) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Title", index);
            let row = PresentationRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label.clone(),
                source: e,
            })?;
            if institutes.get(row.institution_id).is_none() {
                return Err(Error::UnresolvedInstitute {
                    section: Self::SECTION.to_string(),
                    record: label,
                    institute_id: row.institution_id,
                });
            }
            let date = parse_instant(&row.date, DatePrecision::MonthYear).map_err(|_| {
                Error::Parse {
                    section: Self::SECTION.to_string(),
                    record: label,
                    field: "Date".to_string(),
                    token: row.date.clone(),
                }
            })?;
            entries.push(Presentation {
                title: row.title,
                date,
                institution_id: row.institution_id,
                event: row.event,
                slides: row.slides,
            });
        }
        entries.sort_by(|a, b| sort::descending(&a.date, &b.date));
        tracing::debug!(count = entries.len(), "loaded presentations");
        Ok(Presentations { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Presentation> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_record::{MemorySource, Record};

    fn base_source() -> MemorySource {
        let mut source = MemorySource::new();
        let mut institute = Record::new();
        institute.set("id", 2).set("Name", "MIT");
        source.insert(Institutes::SECTION, vec![institute]);
        let mut author = Record::new();
        author
            .set("id", 1)
            .set("Affiliations", "2")
            .set("Name", "Ada")
            .set("Lastname", "Lovelace")
            .set("Alias Short", "Lovelace, A.");
        source.insert(Authors::SECTION, vec![author]);
        source
    }

    fn loaded(source: &MemorySource) -> (Institutes, Authors) {
        let institutes = Institutes::load(source).unwrap();
        let authors = Authors::load(source, &institutes).unwrap();
        (institutes, authors)
    }

    #[test]
    fn intro_takes_the_first_record() {
        let mut source = base_source();
        let mut r = Record::new();
        r.set("Short summary", "s")
            .set("Welcome", "w")
            .set("Tagline", "t");
        source.insert(Intro::SECTION, vec![r]);
        let intro = Intro::load(&source).unwrap();
        assert_eq!(intro.tagline, "t");

        source.insert(Intro::SECTION, vec![]);
        assert_eq!(
            Intro::load(&source).unwrap_err(),
            Error::EmptySection {
                section: "Intro".into()
            }
        );
    }

    #[test]
    fn research_interests_accumulate_keywords() {
        let mut source = base_source();
        let mut first = Record::new();
        first
            .set("Interests", "Networked embedded systems")
            .set("Keywords", "IoT");
        let mut second = Record::new();
        second.set("Keywords", "Scheduling");
        source.insert(ResearchInterests::SECTION, vec![first, second]);
        let interests = ResearchInterests::load(&source).unwrap();
        assert_eq!(interests.interests, "Networked embedded systems");
        assert_eq!(interests.keywords, vec!["IoT", "Scheduling"]);
    }

    #[test]
    fn news_parses_day_precision_dates() {
        let mut source = base_source();
        let mut r = Record::new();
        r.set("Title", "Paper accepted").set("Date", "12 Mar 2024");
        source.insert(News::SECTION, vec![r]);
        let news = News::load(&source).unwrap();
        let item = news.iter().next().unwrap();
        assert_eq!(item.date.to_string(), "2024-03-12");
    }

    #[test]
    fn references_validate_author_ids() {
        let mut source = base_source();
        let mut good = Record::new();
        good.set("Author id", 1);
        source.insert(References::SECTION, vec![good]);
        let (_, authors) = loaded(&source);
        let references = References::load(&source, &authors).unwrap();
        assert_eq!(references.len(), 1);
        let reference = references.iter().next().unwrap();
        assert_eq!(
            reference
                .people(&authors)
                .map(|a| a.alias_short.as_str())
                .collect::<Vec<_>>(),
            vec!["Lovelace, A."]
        );

        let mut bad = Record::new();
        bad.set("Author id", 9);
        source.insert(References::SECTION, vec![bad]);
        let err = References::load(&source, &authors).unwrap_err();
        assert!(
            matches!(err, Error::UnresolvedAuthor { author_id: 9, .. }),
            "got {err}"
        );
    }

    #[test]
    fn presentations_sort_descending_and_resolve_institutes() {
        let mut source = base_source();
        let mut older = Record::new();
        older
            .set("Title", "Old talk")
            .set("Date", "Jun 2022")
            .set("Institution id", 2);
        let mut newer = Record::new();
        newer
            .set("Title", "New talk")
            .set("Date", "Mar 2024")
            .set("Institution id", 2);
        source.insert(Presentations::SECTION, vec![older, newer]);
        let (institutes, _) = loaded(&source);
        let presentations = Presentations::load(&source, &institutes).unwrap();
        let titles: Vec<&str> = presentations.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New talk", "Old talk"]);
        assert_eq!(
            presentations
                .iter()
                .next()
                .unwrap()
                .institution(&institutes)
                .map(|i| i.name.as_str()),
            Some("MIT")
        );
    }
}
