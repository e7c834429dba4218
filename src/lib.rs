//! Semantic decoding of CNAB 400 return-file detail records: occurrence
//! classification, per-bank code tables, packed rejection reasons and typed
//! field accessors over a record already split by a layout engine.

pub mod bank;
pub mod detail;
pub mod error;
pub mod fields;
pub mod liquidation;
pub mod occurrence;
pub mod processor;
pub mod rejection;
pub mod table;
pub mod value;

pub use bank::Bank;
pub use detail::{DecodedDetail, DetailRecord};
pub use error::{DecodeError, ProcessError};
pub use fields::{Field, FieldMap, FieldSource};
