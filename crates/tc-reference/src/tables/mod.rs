//! ITS-90 reference functions per thermocouple type.
//!
//! Coefficients follow NIST Monograph 175. Segment order within each table
//! is the published order and decides which polynomial applies at a shared
//! boundary. Seebeck and dSeebeck/dT tables are the first and second
//! derivatives of the EMF polynomials.
//!
//! Leg tables give each thermoelement against platinum. For B, R and S the
//! thermocouple EMF is positive leg minus negative leg. For E, J, K, N and T
//! the negative thermoelement is tabulated as platinum against the element,
//! so the EMF is the sum of the two leg tables.
//!
//! E and K share their Ni-Cr positive leg, and E shares its Cu-Ni negative
//! leg with T. The Ni-Cr leg is the type E function less the Cu-Ni leg; the
//! type K Ni-Al leg is the type K function less the Ni-Cr leg. Both are
//! published only up to 1000 °C.

pub mod type_b;
pub mod type_e;
pub mod type_j;
pub mod type_k;
pub mod type_n;
pub mod type_r;
pub mod type_s;
pub mod type_t;
