//! Records and record sources.

use crate::cell::Cell;
use crate::error::{RecordError, SourceError};
use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

/// One row of a section: an ordered field-name → cell map, exactly as the
/// reader collaborator produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: LinkedHashMap<String, Cell>,
}

impl Record {
    /// An empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, cell: impl Into<Cell>) -> &mut Self {
        self.fields.insert(field.into(), cell.into());
        self
    }

    /// The raw cell for a field, if the column exists.
    pub fn cell(&self, field: &str) -> Option<&Cell> {
        self.fields.get(field)
    }

    /// Optional text field. An absent column or a missing cell is `None`.
    pub fn text(&self, field: &str) -> Option<String> {
        self.fields.get(field).and_then(Cell::as_text)
    }

    /// Required text field.
    pub fn required_text(&self, field: &str) -> Result<String, RecordError> {
        self.text(field).ok_or_else(|| RecordError::MissingField {
            field: field.to_string(),
        })
    }

    /// Optional integer field. Absent columns, missing cells, and
    /// fractional floats are `None`; unparseable text is a type error.
    pub fn integer(&self, field: &str) -> Result<Option<i64>, RecordError> {
        match self.fields.get(field) {
            None => Ok(None),
            Some(cell) => cell.as_integer().map_err(|value| RecordError::Type {
                field: field.to_string(),
                expected: "integer",
                found: cell.type_name(),
                value,
            }),
        }
    }

    /// Required integer field.
    pub fn required_integer(&self, field: &str) -> Result<i64, RecordError> {
        self.integer(field)?.ok_or_else(|| RecordError::MissingField {
            field: field.to_string(),
        })
    }

    /// A human-identifiable label for this record: the given field's text
    /// when present, otherwise the 1-based row number.
    pub fn label(&self, field: &str, index: usize) -> String {
        self.text(field).unwrap_or_else(|| format!("#{}", index + 1))
    }

    /// Iterate fields in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The input capability: something that yields one ordered sequence of
/// records per named section.
///
/// Implementations parse whatever container the records live in; the
/// model core only ever sees this trait.
pub trait RecordSource {
    /// The records of the named section, in source order.
    fn section(&self, name: &str) -> Result<Vec<Record>, SourceError>;
}

/// An in-memory record source, deserializable from a JSON object of the
/// shape `{"SectionName": [{"Column": value, …}, …], …}`.
///
/// Used by tests and the CLI demonstrator; a spreadsheet reader would
/// produce the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemorySource {
    sections: LinkedHashMap<String, Vec<Record>>,
}

impl MemorySource {
    /// An empty source.
    pub fn new() -> Self {
        MemorySource::default()
    }

    /// Parse a JSON section dump.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        serde_json::from_str(json).map_err(|e| SourceError::Read {
            message: e.to_string(),
        })
    }

    /// Insert a section, replacing any previous one of the same name.
    pub fn insert(&mut self, name: impl Into<String>, records: Vec<Record>) -> &mut Self {
        self.sections.insert(name.into(), records);
        self
    }

    /// Names of the sections, in insertion order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

impl RecordSource for MemorySource {
    fn section(&self, name: &str) -> Result<Vec<Record>, SourceError> {
        self.sections
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::SectionNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        let mut r = Record::new();
        r.set("Title", "A Paper")
            .set("Volume", 3.0)
            .set("Issue", f64::NAN)
            .set("Year", "2020");
        r
    }

    #[test]
    fn field_accessors() {
        let r = record();
        assert_eq!(r.text("Title"), Some("A Paper".to_string()));
        assert_eq!(r.integer("Volume").unwrap(), Some(3));
        assert_eq!(r.integer("Issue").unwrap(), None);
        assert_eq!(r.integer("Absent").unwrap(), None);
        assert_eq!(
            r.required_text("Nope"),
            Err(RecordError::MissingField {
                field: "Nope".into()
            })
        );
    }

    #[test]
    fn label_falls_back_to_row_number() {
        let r = record();
        assert_eq!(r.label("Title", 0), "A Paper");
        assert_eq!(r.label("Nope", 4), "#5");
    }

    #[test]
    fn memory_source_round_trips_json() {
        let src = MemorySource::from_json(
            r#"{"Institutes": [{"id": 1, "Name": "MIT", "City": null}]}"#,
        )
        .unwrap();
        let records = src.section("Institutes").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].integer("id").unwrap(), Some(1));
        assert_eq!(records[0].text("City"), None);

        assert_eq!(
            src.section("Authors"),
            Err(SourceError::SectionNotFound {
                name: "Authors".into()
            })
        );
    }
}
