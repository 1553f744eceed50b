//! Additive correction terms for reference functions that are not pure
//! polynomials.
//!
//! A correction is evaluated on the same raw input as the table it is
//! attached to and added to the polynomial result before any unit scaling.
//! The term itself decides where it applies: outside its own sub-domain it
//! must return 0.

use tc_core::Real;

/// A named, stateless correction function.
#[derive(Debug, Clone, Copy)]
pub struct CorrectionTerm {
    name: &'static str,
    term: fn(Real) -> Real,
}

impl CorrectionTerm {
    pub const fn new(name: &'static str, term: fn(Real) -> Real) -> Self {
        Self { name, term }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn eval(&self, x: Real) -> Real {
        (self.term)(x)
    }
}

/// Correction slot of a table family: absent, or a named term.
#[derive(Debug, Clone, Copy, Default)]
pub enum Correction {
    #[default]
    None,
    Term(CorrectionTerm),
}

impl Correction {
    /// Contribution at `x`; exactly 0 when absent.
    #[inline]
    pub fn apply(&self, x: Real) -> Real {
        match self {
            Correction::None => 0.0,
            Correction::Term(term) => term.eval(x),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Correction::Term(_))
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            Correction::None => None,
            Correction::Term(term) => Some(term.name()),
        }
    }
}

impl From<CorrectionTerm> for Correction {
    fn from(term: CorrectionTerm) -> Self {
        Correction::Term(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_above_zero(x: Real) -> Real {
        if x > 0.0 { 10.0 } else { 0.0 }
    }

    #[test]
    fn absent_correction_contributes_exactly_zero() {
        let c = Correction::default();
        assert!(!c.is_present());
        assert_eq!(c.apply(123.0), 0.0);
        assert_eq!(c.apply(f64::NAN), 0.0);
        assert_eq!(c.name(), None);
    }

    #[test]
    fn term_decides_its_own_sub_domain() {
        let c: Correction = CorrectionTerm::new("step", step_above_zero).into();
        assert!(c.is_present());
        assert_eq!(c.name(), Some("step"));
        assert_eq!(c.apply(-1.0), 0.0);
        assert_eq!(c.apply(0.0), 0.0);
        assert_eq!(c.apply(1.0), 10.0);
    }
}
