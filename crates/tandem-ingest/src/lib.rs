//! Tandem Ingest
//!
//! Turns the raw intake CSV into typed [`BusinessRecord`]s.
//!
//! # Overview
//!
//! The intake form exports a CSV with a fixed set of column names. This
//! crate reads it, sanitizes every free-text field (trim, 1000-character
//! cap, sentinel defaults), derives a deterministic id per row, and
//! infers an industry category from keyword matching. Malformed rows are
//! skipped with a warning count rather than failing the whole parse; an
//! unreadable file is a fatal error.
//!
//! # Example
//!
//! ```
//! use tandem_ingest::parse_csv;
//!
//! let csv = "\
//! Company / Brand Name,Name,Your Product or Service in one sentence,Contact EMAIL
//! Acme Robotics,Jo Smith,We build warehouse automation software,jo@acme.example
//! ";
//! let outcome = parse_csv(csv.as_bytes()).unwrap();
//! assert_eq!(outcome.businesses.len(), 1);
//! assert_eq!(outcome.businesses[0].industry.label(), "Technology");
//! ```

#![warn(missing_docs)]

mod error;
mod industry;
mod parser;
mod sanitize;

pub use error::IngestError;
pub use industry::infer_industry;
pub use parser::{parse_csv, parse_csv_path, ParseOutcome};
pub use sanitize::{sanitize_text, MAX_FIELD_LEN, NOT_SPECIFIED};
