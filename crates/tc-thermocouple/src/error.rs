//! Thermocouple conversion errors.

use crate::code::TypeCode;
use crate::quantity::Quantity;
use thiserror::Error;

/// Result type for thermocouple operations.
pub type ThermocoupleResult<T> = Result<T, ThermocoupleError>;

/// Errors that can occur while building or querying a thermocouple model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermocoupleError {
    /// Input lies outside every declared interval of the table.
    #[error("Value {value} out of range for Type {code} {quantity} table")]
    OutOfRange {
        value: f64,
        code: TypeCode,
        quantity: Quantity,
    },

    /// The model carries no table for this quantity.
    #[error("{quantity} not implemented for Type {code}")]
    Unsupported { quantity: Quantity, code: TypeCode },

    /// Registry lookup for a code that is not one of the standard types.
    #[error("Thermocouple type '{code}' not supported. Available types: {available}")]
    UnknownType { code: String, available: String },

    /// Structurally broken reference data, rejected at construction.
    #[error("Invalid {quantity} table for Type {code}: {what}")]
    InvalidTable {
        code: TypeCode,
        quantity: Quantity,
        what: String,
    },
}
