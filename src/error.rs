use std::path::PathBuf;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart calibration: {0}")]
    InvalidCalibration(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to read marker store `{}`: {reason}", path.display())]
    PersistenceRead { path: PathBuf, reason: String },

    #[error("failed to write marker store `{}`: {reason}", path.display())]
    PersistenceWrite { path: PathBuf, reason: String },

    #[error("position query failed: {0}")]
    PositionQuery(String),
}
