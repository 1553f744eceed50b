//! tc-reference: ITS-90 reference data for the letter-designated
//! thermocouple types and a registry over the resulting models.
//!
//! ```
//! use tc_reference::ThermocoupleRegistry;
//!
//! let registry = ThermocoupleRegistry::standard().unwrap();
//! let volts = registry.temperature_to_voltage("k", 100.0).unwrap();
//! assert!((volts - 0.004096).abs() < 1e-5);
//! ```

pub mod catalog;
pub mod registry;
pub mod tables;

pub use catalog::{ThermocoupleCatalogEntry, catalog_entry, filter_catalog, standard_catalog};
pub use registry::{ThermocoupleRegistry, reference_model};
