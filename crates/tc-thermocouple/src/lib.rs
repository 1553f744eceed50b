//! tc-thermocouple: piecewise-polynomial thermocouple models.
//!
//! Provides:
//! - Range tables: ordered `(interval, polynomial)` segments, first match wins
//! - Correction terms added to selected table families before scaling
//! - `ThermocoupleModel`: forward, inverse, Seebeck, dSeebeck/dT and
//!   per-leg conversions, with optional capabilities reported as `Unsupported`
//! - Cold-junction compensation on top of the model
//!
//! The crate holds no reference data; concrete tables for the standard types
//! live in `tc-reference`.
//!
//! # Example
//!
//! ```
//! use tc_thermocouple::{Segment, ThermocoupleModel, TypeCode};
//!
//! const EMF: &[Segment] = &[Segment::new(0.0, 100.0, &[0.0, 40.0])];
//! const INVERSE: &[Segment] = &[Segment::new(0.0, 4000.0, &[0.0, 0.025])];
//!
//! let model = ThermocoupleModel::builder(TypeCode::T, EMF, INVERSE)
//!     .build()
//!     .unwrap();
//! let volts = model.temperature_to_voltage(50.0).unwrap();
//! assert!((volts - 0.002).abs() < 1e-12);
//! assert!(model.temperature_to_seebeck(50.0).is_err());
//! ```

pub mod code;
pub mod compensation;
pub mod correction;
pub mod error;
pub mod model;
pub mod quantity;
pub mod table;

pub use code::TypeCode;
pub use correction::{Correction, CorrectionTerm};
pub use error::{ThermocoupleError, ThermocoupleResult};
pub use model::{ThermocoupleModel, ThermocoupleModelBuilder};
pub use quantity::{Leg, Quantity};
pub use table::{Interval, Polynomial, RangeTable, Segment, TableId};
