//! Error types for model construction and resolution.

use std::fmt;
use vitae_record::{RecordError, SourceError};
use vitae_report::{DiagnosticMessage, DiagnosticMessageBuilder, RecordLocation};

/// Result type alias for vitae-model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the CV model.
///
/// There is no partial-success mode: the first error aborts the whole
/// load. Every variant names the offending section and a
/// human-identifiable record label (a title, name, or id) so the failure
/// can be found in the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The record source failed (missing section, unreadable input).
    Source(SourceError),

    /// A record could not be mapped into its typed row.
    Record {
        section: String,
        record: String,
        source: RecordError,
    },

    /// A malformed date, number, or coordinate token.
    Parse {
        section: String,
        record: String,
        field: String,
        token: String,
    },

    /// A record required to carry at least one date range has none.
    EmptyRange {
        section: String,
        record: String,
        field: String,
    },

    /// A section required to carry at least one record has none.
    EmptySection { section: String },

    /// A cross-reference names an author that is not in the registry.
    UnresolvedAuthor {
        section: String,
        record: String,
        author_id: i64,
        affiliation_id: Option<i64>,
    },

    /// A cross-reference names an institute that is not in the registry.
    UnresolvedInstitute {
        section: String,
        record: String,
        institute_id: i64,
    },

    /// A registry id (or author composite key) appears twice.
    DuplicateId {
        section: String,
        record: String,
        id: i64,
        affiliation_id: Option<i64>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Source(e) => write!(f, "record source error: {}", e),
            Error::Record {
                section,
                record,
                source,
            } => {
                write!(f, "section '{}', record '{}': {}", section, record, source)
            }
            Error::Parse {
                section,
                record,
                field,
                token,
            } => write!(
                f,
                "section '{}', record '{}', field '{}': cannot parse '{}'",
                section, record, field, token
            ),
            Error::EmptyRange {
                section,
                record,
                field,
            } => write!(
                f,
                "section '{}', record '{}', field '{}': no date ranges",
                section, record, field
            ),
            Error::EmptySection { section } => {
                write!(f, "section '{}' has no records", section)
            }
            Error::UnresolvedAuthor {
                section,
                record,
                author_id,
                affiliation_id,
            } => {
                write!(
                    f,
                    "section '{}', record '{}': author {} ",
                    section, record, author_id
                )?;
                if let Some(affiliation) = affiliation_id {
                    write!(f, "with affiliation {} ", affiliation)?;
                }
                write!(f, "is not in the registry")
            }
            Error::UnresolvedInstitute {
                section,
                record,
                institute_id,
            } => write!(
                f,
                "section '{}', record '{}': institute {} is not in the registry",
                section, record, institute_id
            ),
            Error::DuplicateId {
                section,
                record,
                id,
                affiliation_id,
            } => {
                write!(
                    f,
                    "section '{}', record '{}': duplicate id {}",
                    section, record, id
                )?;
                if let Some(affiliation) = affiliation_id {
                    write!(f, " (affiliation {})", affiliation)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Error::Source(err)
    }
}

impl Error {
    /// Convert this error to a DiagnosticMessage.
    ///
    /// Model errors use V-* error codes: V-1-* for boundary problems,
    /// V-2-* for parsing, V-3-* for reference resolution.
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        match self {
            Error::Source(e) => DiagnosticMessageBuilder::error("Record Source Error")
                .with_code("V-1-1")
                .problem(e.to_string())
                .build(),

            Error::Record {
                section,
                record,
                source,
            } => DiagnosticMessageBuilder::error("Invalid Record")
                .with_code("V-1-2")
                .problem(source.to_string())
                .with_location(
                    RecordLocation::section(section.clone())
                        .with_record(record.clone())
                        .with_field(source.field()),
                )
                .build(),

            Error::Parse {
                section,
                record,
                field,
                token,
            } => DiagnosticMessageBuilder::error("Parse Error")
                .with_code("V-2-1")
                .problem(format!("Cannot parse '{}'", token))
                .with_location(
                    RecordLocation::section(section.clone())
                        .with_record(record.clone())
                        .with_field(field.clone()),
                )
                .add_hint("dates look like 'Mon YYYY', 'D Mon YYYY', or 'YYYY'")
                .build(),

            Error::EmptyRange {
                section,
                record,
                field,
            } => DiagnosticMessageBuilder::error("Empty Date Range")
                .with_code("V-2-2")
                .problem("The record must carry at least one date range")
                .with_location(
                    RecordLocation::section(section.clone())
                        .with_record(record.clone())
                        .with_field(field.clone()),
                )
                .build(),

            Error::EmptySection { section } => DiagnosticMessageBuilder::error("Empty Section")
                .with_code("V-2-3")
                .problem("The section must carry at least one record")
                .with_location(RecordLocation::section(section.clone()))
                .build(),

            Error::UnresolvedAuthor {
                section,
                record,
                author_id,
                affiliation_id,
            } => {
                let mut builder = DiagnosticMessageBuilder::error("Unresolved Reference")
                    .with_code("V-3-1")
                    .problem(format!("Author {} is not in the registry", author_id))
                    .with_location(
                        RecordLocation::section(section.clone()).with_record(record.clone()),
                    );
                if let Some(affiliation) = affiliation_id {
                    builder = builder
                        .add_detail(format!("the reference names affiliation {}", affiliation));
                }
                builder.build()
            }

            Error::UnresolvedInstitute {
                section,
                record,
                institute_id,
            } => DiagnosticMessageBuilder::error("Unresolved Reference")
                .with_code("V-3-2")
                .problem(format!("Institute {} is not in the registry", institute_id))
                .with_location(
                    RecordLocation::section(section.clone()).with_record(record.clone()),
                )
                .build(),

            Error::DuplicateId {
                section,
                record,
                id,
                affiliation_id,
            } => {
                let mut builder = DiagnosticMessageBuilder::error("Duplicate Id")
                    .with_code("V-3-3")
                    .problem(format!("Id {} appears more than once", id))
                    .with_location(
                        RecordLocation::section(section.clone()).with_record(record.clone()),
                    );
                if let Some(affiliation) = affiliation_id {
                    builder = builder.add_detail(format!(
                        "the (id, affiliation) pair ({}, {}) is already registered",
                        id, affiliation
                    ));
                }
                builder.build()
            }
        }
    }
}
