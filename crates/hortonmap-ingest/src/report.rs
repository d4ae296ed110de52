//! Run summary and per-row diagnostics.

use std::fmt;

use hortonmap_core::LocationDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoursColumn {
    DiningRoom,
    DriveThru,
}

impl fmt::Display for HoursColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoursColumn::DiningRoom => write!(f, "dining_room"),
            HoursColumn::DriveThru => write!(f, "drive_thru"),
        }
    }
}

/// Something wrong with a row that did not stop it from producing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnomalyKind {
    UnbalancedQuotes,
    MissingAddress,
    MissingPhone,
    MissingHoursBlob { column: HoursColumn },
    /// No numeric token after the scan start; the point was written at `(0, 0)`.
    CoordinatesDefaulted,
    InvalidCoordinate { value: String },
    MalformedHours { column: HoursColumn, reason: String },
    UnparseableTime { column: HoursColumn, value: String },
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyKind::UnbalancedQuotes => write!(f, "unbalanced quotes"),
            AnomalyKind::MissingAddress => write!(f, "missing address"),
            AnomalyKind::MissingPhone => write!(f, "missing phone"),
            AnomalyKind::MissingHoursBlob { column } => write!(f, "missing {column} hours"),
            AnomalyKind::CoordinatesDefaulted => write!(f, "no coordinates, defaulted to (0, 0)"),
            AnomalyKind::InvalidCoordinate { value } => write!(f, "invalid coordinate {value:?}"),
            AnomalyKind::MalformedHours { column, reason } => {
                write!(f, "malformed {column} hours: {reason}")
            }
            AnomalyKind::UnparseableTime { column, value } => {
                write!(f, "unparseable {column} time {value:?}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAnomaly {
    /// 1-based line number in the source.
    pub line: usize,
    pub row_id: String,
    pub kind: AnomalyKind,
}

/// Output of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// Non-empty lines, header included.
    pub lines_seen: usize,
    /// Data rows, header excluded.
    pub rows_seen: usize,
    pub documents: Vec<LocationDocument>,
    pub anomalies: Vec<RowAnomaly>,
}

impl ParseReport {
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of anomalies matching `predicate`.
    pub fn count_anomalies(&self, predicate: impl Fn(&AnomalyKind) -> bool) -> usize {
        self.anomalies.iter().filter(|a| predicate(&a.kind)).count()
    }

    /// Rows whose point was written at the origin for lack of coordinates.
    #[must_use]
    pub fn defaulted_coordinates(&self) -> usize {
        self.count_anomalies(|kind| matches!(kind, AnomalyKind::CoordinatesDefaulted))
    }

    #[must_use]
    pub fn into_documents(self) -> Vec<LocationDocument> {
        self.documents
    }
}
