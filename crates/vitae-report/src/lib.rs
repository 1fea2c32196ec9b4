//! Diagnostic messages for vitae.
//!
//! Load and resolution failures in a CV model are reported against sheet
//! records, not source files, so the "location" of a problem is a section
//! name, a row, and a human-identifiable record label rather than a byte
//! span. This crate provides the message structure and builder used by the
//! model's `to_diagnostic()` conversions.

pub mod diagnostic;

pub use diagnostic::{
    DetailItem, DetailKind, DiagnosticKind, DiagnosticMessage, DiagnosticMessageBuilder,
    RecordLocation,
};
