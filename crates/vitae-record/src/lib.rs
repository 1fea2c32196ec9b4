//! Tabular record boundary for vitae.
//!
//! The CV model is built from a multi-sheet tabular record set. The reader
//! that parses the file container is an external collaborator; this crate
//! defines what it must yield and turns the raw name→cell maps into typed
//! per-section rows, so the model core never does string-keyed lookups.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          vitae-model                            │
//! │        registries + cross-references + citations + order        │
//! └──────────────────────────────┬──────────────────────────────────┘
//!                                │ typed rows
//! ┌──────────────────────────────▼──────────────────────────────────┐
//! │                          vitae-record                           │
//! │     RecordSource → Vec<Record> → InstituteRow, AuthorRow, …     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`Cell`] carries the one missing-value sentinel for the whole system;
//! [`Cell::is_present`] is the single presence predicate every downstream
//! check goes through.

pub mod cell;
pub mod error;
pub mod record;
pub mod rows;

pub use cell::Cell;
pub use error::{RecordError, SourceError};
pub use record::{MemorySource, Record, RecordSource};
pub use rows::FromRecord;
