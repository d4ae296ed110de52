//! Ingestion of the franchise location export into [`LocationDocument`]s.
//!
//! Stages run top to bottom per line: [`tokenize`] splits the raw line,
//! [`extract`] maps positions to fields using the row's [`layout`],
//! [`coordinates`] recovers latitude/longitude, [`hours`] normalizes the
//! opening-hours blobs, and [`document`] assembles the result. [`pipeline`]
//! drives the whole thing over one source.
//!
//! [`LocationDocument`]: hortonmap_core::LocationDocument

pub mod coordinates;
pub mod document;
pub mod error;
pub mod extract;
pub mod hours;
pub mod layout;
pub mod pipeline;
pub mod report;
pub mod tokenize;

pub use coordinates::{resolve_coordinates, CoordinateScan, COORDINATE_SCAN_START};
pub use document::{build_document, BuiltDocument};
pub use error::{HoursError, IngestError};
pub use extract::{extract_fields, ExtractedFields, Extraction};
pub use hours::{normalize_hours, NormalizedHours};
pub use layout::{ColumnMap, LayoutVariant};
pub use pipeline::{parse_reader, parse_source, parse_text};
pub use report::{AnomalyKind, HoursColumn, ParseReport, RowAnomaly};
pub use tokenize::{has_unbalanced_quotes, tokenize_line, RawRow};
