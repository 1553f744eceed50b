//! tc-core: shared foundation for the thermocouple workspace.
//!
//! Contains:
//! - units (uom SI types + constructors for °C and volts)
//! - numeric (Real + tolerances + float helpers)
//! - error (errors for non-finite input and bad arguments)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::TcError;
pub use numeric::*;
pub use units::*;
