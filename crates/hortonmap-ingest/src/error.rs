use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read location source {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read location source: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum HoursError {
    #[error("hours blob is not a valid mapping: {reason}")]
    Malformed { reason: String },
}
