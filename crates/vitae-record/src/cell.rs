//! Raw cell values.

use serde::{Deserialize, Serialize};

/// A raw cell value as produced by the tabular reader.
///
/// Readers yield strings, integers, floats, or nothing at all; spreadsheet
/// back ends typically surface empty numeric cells as NaN. Both `Missing`
/// and a NaN float are the missing-value sentinel — a legitimate zero or
/// empty string is *not* missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// No value recorded (JSON `null`).
    Missing,
    /// An integer cell.
    Int(i64),
    /// A floating-point cell. NaN counts as missing.
    Float(f64),
    /// A text cell.
    Text(String),
}

impl Cell {
    /// The one presence predicate.
    ///
    /// Every field-presence decision downstream (citation synthesis,
    /// collection ordering, row mapping) goes through this.
    pub fn is_present(&self) -> bool {
        match self {
            Cell::Missing => false,
            Cell::Float(f) => !f.is_nan(),
            Cell::Int(_) | Cell::Text(_) => true,
        }
    }

    /// Coerce to text. Absent values yield `None`; numbers render without
    /// a trailing `.0` when integral.
    pub fn as_text(&self) -> Option<String> {
        if !self.is_present() {
            return None;
        }
        match self {
            Cell::Text(s) => Some(s.clone()),
            Cell::Int(i) => Some(i.to_string()),
            Cell::Float(f) if f.fract() == 0.0 => Some((*f as i64).to_string()),
            Cell::Float(f) => Some(f.to_string()),
            Cell::Missing => None,
        }
    }

    /// Coerce to an integer.
    ///
    /// Absent values yield `Ok(None)`; a fractional float also counts as
    /// absent rather than being truncated to a wrong number. Text that
    /// does not parse as an integer is a type mismatch, reported as
    /// `Err` with this cell's rendering.
    pub fn as_integer(&self) -> Result<Option<i64>, String> {
        if !self.is_present() {
            return Ok(None);
        }
        match self {
            Cell::Int(i) => Ok(Some(*i)),
            Cell::Float(f) if f.fract() == 0.0 => Ok(Some(*f as i64)),
            Cell::Float(_) => Ok(None),
            Cell::Text(s) => match s.trim().parse::<i64>() {
                Ok(i) => Ok(Some(i)),
                Err(_) => Err(s.clone()),
            },
            Cell::Missing => Ok(None),
        }
    }

    /// Name of this cell's shape, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Cell::Missing => "missing",
            Cell::Int(_) => "integer",
            Cell::Float(_) => "float",
            Cell::Text(_) => "text",
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Missing, Cell::Missing) => true,
            (Cell::Int(a), Cell::Int(b)) => a == b,
            // NaN cells compare equal: both are the missing sentinel
            (Cell::Float(a), Cell::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Cell::Text(a), Cell::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}
