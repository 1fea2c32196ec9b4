//! Core diagnostic message types.
//!
//! Structure follows tidyverse-style guidelines: a title, a problem
//! statement, bulleted details, and optional hints.

use serde::{Deserialize, Serialize};

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An error that prevents completion
    Error,
    /// A warning that doesn't prevent completion but indicates a problem
    Warning,
    /// Informational message
    Info,
}

/// How detail items should be presented (tidyverse x/i bullet style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailKind {
    /// Error detail (✖ bullet)
    Error,
    /// Info detail (i bullet)
    Info,
    /// Plain bullet
    Note,
}

/// Where in the record set a diagnostic points.
///
/// Tabular input has no byte offsets; the addressable unit is the section,
/// the row within it, the record's human-identifiable label (a title, name,
/// or id), and the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLocation {
    /// Section (sheet) name.
    pub section: String,
    /// Zero-based row index within the section, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    /// Human-identifiable record label (title, name, id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,
    /// Field (column) name, when the problem is field-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl RecordLocation {
    /// Location naming only a section.
    pub fn section(section: impl Into<String>) -> Self {
        RecordLocation {
            section: section.into(),
            ..Default::default()
        }
    }

    /// Attach a record label.
    pub fn with_record(mut self, record: impl Into<String>) -> Self {
        self.record = Some(record.into());
        self
    }

    /// Attach a field name.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl std::fmt::Display for RecordLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "section '{}'", self.section)?;
        if let Some(record) = &self.record {
            write!(f, ", record '{}'", record)?;
        } else if let Some(row) = self.row {
            write!(f, ", row {}", row + 1)?;
        }
        if let Some(field) = &self.field {
            write!(f, ", field '{}'", field)?;
        }
        Ok(())
    }
}

/// A detail item in a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailItem {
    /// The kind of detail (error, info, note)
    pub kind: DetailKind,
    /// The content of the detail
    pub content: String,
}

/// A diagnostic message.
///
/// 1. **Code**: optional error code (e.g. "V-2-1") for searchability
/// 2. **Title**: brief error message
/// 3. **Problem**: what went wrong (the "must" or "can't" statement)
/// 4. **Details**: specific information, bulleted
/// 5. **Hints**: optional guidance for fixing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    /// Error code, e.g. "V-2-1".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Brief title.
    pub title: String,
    /// Message kind.
    pub kind: DiagnosticKind,
    /// The problem statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    /// Bulleted details.
    pub details: Vec<DetailItem>,
    /// Hints for fixing the problem.
    pub hints: Vec<String>,
    /// Where in the record set the problem lies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<RecordLocation>,
}

impl DiagnosticMessage {
    /// Render the message as plain text for terminal output.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        match self.kind {
            DiagnosticKind::Error => out.push_str("Error"),
            DiagnosticKind::Warning => out.push_str("Warning"),
            DiagnosticKind::Info => out.push_str("Info"),
        }
        if let Some(code) = &self.code {
            out.push_str(&format!(" [{}]", code));
        }
        out.push_str(&format!(": {}", self.title));
        if let Some(problem) = &self.problem {
            out.push_str(&format!("\n  {}", problem));
        }
        if let Some(location) = &self.location {
            out.push_str(&format!("\n  at {}", location));
        }
        for detail in &self.details {
            let bullet = match detail.kind {
                DetailKind::Error => "✖",
                DetailKind::Info => "ℹ",
                DetailKind::Note => "•",
            };
            out.push_str(&format!("\n  {} {}", bullet, detail.content));
        }
        for hint in &self.hints {
            out.push_str(&format!("\n  ? {}", hint));
        }
        out
    }

    /// Serialize to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Builder for [`DiagnosticMessage`].
#[derive(Debug, Clone)]
pub struct DiagnosticMessageBuilder {
    message: DiagnosticMessage,
}

impl DiagnosticMessageBuilder {
    /// Start an error-kind message with the given title.
    pub fn error(title: impl Into<String>) -> Self {
        Self::with_kind(DiagnosticKind::Error, title)
    }

    /// Start a warning-kind message with the given title.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::with_kind(DiagnosticKind::Warning, title)
    }

    fn with_kind(kind: DiagnosticKind, title: impl Into<String>) -> Self {
        DiagnosticMessageBuilder {
            message: DiagnosticMessage {
                code: None,
                title: title.into(),
                kind,
                problem: None,
                details: Vec::new(),
                hints: Vec::new(),
                location: None,
            },
        }
    }

    /// Set the error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.message.code = Some(code.into());
        self
    }

    /// Set the problem statement.
    pub fn problem(mut self, problem: impl Into<String>) -> Self {
        self.message.problem = Some(problem.into());
        self
    }

    /// Add an error-kind detail.
    pub fn add_detail(mut self, content: impl Into<String>) -> Self {
        self.message.details.push(DetailItem {
            kind: DetailKind::Error,
            content: content.into(),
        });
        self
    }

    /// Add an info-kind detail.
    pub fn add_info(mut self, content: impl Into<String>) -> Self {
        self.message.details.push(DetailItem {
            kind: DetailKind::Info,
            content: content.into(),
        });
        self
    }

    /// Add a hint.
    pub fn add_hint(mut self, hint: impl Into<String>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    /// Set the record location.
    pub fn with_location(mut self, location: RecordLocation) -> Self {
        self.message.location = Some(location);
        self
    }

    /// Finish building.
    pub fn build(self) -> DiagnosticMessage {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_all_parts() {
        let msg = DiagnosticMessageBuilder::error("Unresolved Reference")
            .with_code("V-2-3")
            .problem("Author 99 is not defined")
            .add_detail("the publication names an author id with no matching row")
            .add_hint("check the Authors sheet for id 99")
            .with_location(
                RecordLocation::section("Publications")
                    .with_record("A Great Paper")
                    .with_field("Authors"),
            )
            .build();

        assert_eq!(msg.code.as_deref(), Some("V-2-3"));
        assert_eq!(msg.kind, DiagnosticKind::Error);
        assert_eq!(msg.details.len(), 1);

        let text = msg.to_text();
        assert!(text.contains("Error [V-2-3]: Unresolved Reference"), "Got: {}", text);
        assert!(text.contains("section 'Publications'"), "Got: {}", text);
        assert!(text.contains("record 'A Great Paper'"), "Got: {}", text);
        assert!(text.contains("field 'Authors'"), "Got: {}", text);
    }

    #[test]
    fn location_display_prefers_record_over_row() {
        let loc = RecordLocation {
            section: "Education".into(),
            row: Some(3),
            record: Some("PhD".into()),
            field: None,
        };
        assert_eq!(loc.to_string(), "section 'Education', record 'PhD'");

        let loc = RecordLocation {
            section: "Education".into(),
            row: Some(3),
            record: None,
            field: None,
        };
        assert_eq!(loc.to_string(), "section 'Education', row 4");
    }

    #[test]
    fn json_round_trips() {
        let msg = DiagnosticMessageBuilder::warning("Odd value").build();
        let json = msg.to_json();
        let back: DiagnosticMessage = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
    }
}
