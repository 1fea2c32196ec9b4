//! CV document model: entity resolution and bibliographic synthesis.
//!
//! This crate turns a multi-sheet tabular record set describing a
//! curriculum vitae into an in-memory, cross-referenced document model:
//!
//! - date/year-range strings become normalized [`date::DateRangeSet`]s;
//! - numeric identifiers scattered across sheets resolve into live
//!   registry entries, with an author disambiguated by the
//!   `(id, affiliation id)` pair when one person appears under several
//!   institutes;
//! - a publication plus its resolved author list synthesizes into an
//!   APA-style citation string.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            Cv::load                             │
//! │   registries (institutes, software, authors)  →  sections that  │
//! │   cross-reference them  →  canonical per-collection ordering    │
//! └──────────────────────────────┬──────────────────────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          vitae-record                           │
//! │        RecordSource → Record → typed per-section rows           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use vitae_model::Cv;
//! use vitae_record::MemorySource;
//!
//! let source = MemorySource::from_json(&std::fs::read_to_string("cv.json")?)?;
//! let cv = Cv::load(&source)?;
//! for citation in cv.citations()? {
//!     println!("{citation}");
//! }
//! ```

pub mod career;
pub mod citation;
pub mod cv;
pub mod date;
pub mod error;
pub mod listings;
pub mod profile;
pub mod publications;
pub mod registry;
pub mod resolve;

mod sort;

// Re-export main types
pub use cv::Cv;
pub use date::{DatePrecision, DateRange, DateRangeSet, Instant};
pub use error::{Error, Result};
pub use publications::{Publication, Publications};
pub use registry::{Author, Authors, Institute, Institutes, Software, SoftwareRegistry};
pub use resolve::AuthorReference;
