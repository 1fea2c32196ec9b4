//! Publications: the bibliographic collection.

use crate::citation;
use crate::date::{DatePrecision, Instant, parse_instant, year_of};
use crate::error::{Error, Result};
use crate::registry::{Author, Authors};
use crate::resolve::{self, AuthorReference};
use crate::sort;
use vitae_record::rows::PublicationRow;
use vitae_record::{FromRecord, RecordSource};

/// One publication.
///
/// Author references are validated when the collection is built, but the
/// resolved authors are not stored: resolution happens again at
/// citation-build time against the current registry, so a publication
/// never carries stale identity data.
#[derive(Debug, Clone, PartialEq)]
pub struct Publication {
    pub authors: Vec<AuthorReference>,
    pub title: String,
    /// Publication month, completed to the 1st.
    pub date: Option<Instant>,
    /// The venue (journal, conference, publisher) — the sheet's `Source`.
    pub venue: Option<String>,
    pub volume: Option<i64>,
    pub issue: Option<i64>,
    pub art_no: Option<String>,
    pub page_start: Option<i64>,
    pub page_end: Option<i64>,
    pub doi: Option<String>,
    pub preprint_doi: Option<String>,
    pub document_type: String,
    // resources
    pub code: Option<String>,
    pub slides: Option<String>,
    pub abstract_: Option<String>,
    pub keywords: Option<String>,
    // rights
    pub jcr: Option<String>,
    pub license: Option<String>,
    pub copyright: Option<String>,
}

impl Publication {
    /// Publication year, when dated.
    pub fn year(&self) -> Option<i32> {
        self.date.map(year_of)
    }

    /// Resolve the author list against the registry, in order, one author
    /// per affiliation id.
    pub fn resolve_authors<'a>(&self, authors: &'a Authors) -> Result<Vec<&'a Author>> {
        resolve::resolve_author_list(&self.authors, authors).map_err(|miss| {
            Error::UnresolvedAuthor {
                section: Publications::SECTION.to_string(),
                record: self.title.clone(),
                author_id: miss.author_id,
                affiliation_id: miss.affiliation_id,
            }
        })
    }

    /// Build the APA citation for this publication.
    pub fn citation(&self, authors: &Authors) -> Result<String> {
        let resolved = self.resolve_authors(authors)?;
        Ok(citation::apa_citation(self, &resolved))
    }

    fn from_row(row: PublicationRow) -> Result<Self> {
        let authors = resolve::parse_author_list(&row.authors).map_err(|token| Error::Parse {
            section: Publications::SECTION.to_string(),
            record: row.title.clone(),
            field: "Authors".to_string(),
            token,
        })?;
        let date = match &row.year {
            None => None,
            Some(year) => Some(
                parse_instant(year, DatePrecision::MonthYear).map_err(|_| Error::Parse {
                    section: Publications::SECTION.to_string(),
                    record: row.title.clone(),
                    field: "Year".to_string(),
                    token: year.clone(),
                })?,
            ),
        };
        Ok(Publication {
            authors,
            title: row.title,
            date,
            venue: row.source,
            volume: row.volume,
            issue: row.issue,
            art_no: row.art_no,
            page_start: row.page_start,
            page_end: row.page_end,
            doi: row.doi,
            preprint_doi: row.preprint_doi,
            document_type: row.document_type,
            code: row.code,
            slides: row.slides,
            abstract_: row.abstract_,
            keywords: row.keywords,
            jcr: row.jcr,
            license: row.license,
            copyright: row.copyright,
        })
    }
}

/// The publication collection, in canonical order: document type then
/// date, both descending, load order breaking ties.
#[derive(Debug, Clone, Default)]
pub struct Publications {
    entries: Vec<Publication>,
}

impl Publications {
    pub const SECTION: &'static str = "Publications";

    /// Build the collection. The author registry must already be built:
    /// every reference is resolved once here, and a miss aborts the load
    /// — no partial publication is retained.
    pub fn load(source: &dyn RecordSource, authors: &Authors) -> Result<Self> {
        let records = source.section(Self::SECTION)?;
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let label = record.label("Title", index);
            let row = PublicationRow::from_record(record).map_err(|e| Error::Record {
                section: Self::SECTION.to_string(),
                record: label,
                source: e,
            })?;
            let publication = Publication::from_row(row)?;
            publication.resolve_authors(authors)?;
            entries.push(publication);
        }
        entries.sort_by(|a, b| {
            sort::descending(&a.document_type, &b.document_type)
                .then_with(|| sort::descending_missing_last(&a.date, &b.date))
        });
        tracing::debug!(count = entries.len(), "loaded publications");
        Ok(Publications { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate publications in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Publication> {
        self.entries.iter()
    }

    /// Find a publication by exact title.
    pub fn get_by_title(&self, title: &str) -> Option<&Publication> {
        self.entries.iter().find(|p| p.title == title)
    }

    /// Publications of one document type, in canonical order.
    pub fn iter_type<'a>(&'a self, document_type: &'a str) -> impl Iterator<Item = &'a Publication> {
        self.entries
            .iter()
            .filter(move |p| p.document_type == document_type)
    }

    /// Distinct document types, first-occurrence order over the canonical
    /// ordering.
    pub fn document_types_ordered(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for publication in &self.entries {
            if !types.contains(&publication.document_type.as_str()) {
                types.push(&publication.document_type);
            }
        }
        types
    }

    /// Number of publications of one document type.
    pub fn count_by_document_type(&self, document_type: &str) -> usize {
        self.iter_type(document_type).count()
    }

    /// Number of publications naming the given author id.
    pub fn count_by_author(&self, author_id: i64) -> usize {
        self.entries
            .iter()
            .filter(|p| p.authors.iter().any(|r| r.author_id == author_id))
            .count()
    }

    /// Earliest and latest publication years, over dated entries.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let years: Vec<i32> = self.entries.iter().filter_map(Publication::year).collect();
        match (years.iter().min(), years.iter().max()) {
            (Some(&min), Some(&max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Number of distinct venues.
    pub fn unique_venues(&self) -> usize {
        let mut venues: Vec<&str> = Vec::new();
        for publication in &self.entries {
            if let Some(venue) = &publication.venue
                && !venues.contains(&venue.as_str())
            {
                venues.push(venue);
            }
        }
        venues.len()
    }
}
