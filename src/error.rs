use thiserror::Error;

use crate::fields::Field;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed date in field {field}: {raw:?}")]
    MalformedDate { field: Field, raw: String },
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid detail record")]
    InvalidRecord(DecodeError),
}

impl From<DecodeError> for ProcessError {
    fn from(error: DecodeError) -> Self {
        Self::InvalidRecord(error)
    }
}
