//! Piecewise-polynomial range tables.
//!
//! A [`RangeTable`] is an ordered list of [`Segment`]s. Lookup scans the
//! segments in declared order and evaluates the first one whose closed
//! interval contains the input. Adjacent segments usually share an endpoint,
//! so a value sitting exactly on that endpoint resolves to whichever segment
//! was declared first. Reference data relies on this, so the order of a
//! table's segments is part of its meaning.

use crate::code::TypeCode;
use crate::error::{ThermocoupleError, ThermocoupleResult};
use crate::quantity::Quantity;
use std::fmt;
use tc_core::{Real, ensure_finite};

/// Closed interval `[lo, hi]` in the table's input unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub lo: Real,
    pub hi: Real,
}

impl Interval {
    pub const fn new(lo: Real, hi: Real) -> Self {
        Self { lo, hi }
    }

    /// `lo <= x <= hi`. NaN is never contained.
    #[inline]
    pub fn contains(&self, x: Real) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Smallest interval covering both.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval::new(self.lo.min(other.lo), self.hi.max(other.hi))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Coefficients `c0..cn` of `sum c_i * x^i`; index is the power of `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    coefficients: &'static [Real],
}

impl Polynomial {
    pub const fn new(coefficients: &'static [Real]) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &'static [Real] {
        self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Power-series evaluation in f64, term by term.
    ///
    /// The running power is carried forward rather than recomputed, but the
    /// terms are still summed lowest order first as the reference functions
    /// are written. No compensated summation.
    pub fn eval(&self, x: Real) -> Real {
        let mut acc = 0.0;
        let mut power = 1.0;
        for &c in self.coefficients {
            acc += c * power;
            power *= x;
        }
        acc
    }

    /// Coefficients of `d/dx`, e.g. EMF to Seebeck coefficient.
    pub fn derivative(&self) -> Vec<Real> {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| i as Real * c)
            .collect()
    }
}

/// One `(interval, coefficients)` entry of a range table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub interval: Interval,
    pub polynomial: Polynomial,
}

impl Segment {
    pub const fn new(lo: Real, hi: Real, coefficients: &'static [Real]) -> Self {
        Self {
            interval: Interval::new(lo, hi),
            polynomial: Polynomial::new(coefficients),
        }
    }

    fn validate(&self) -> Result<(), String> {
        let Interval { lo, hi } = self.interval;
        ensure_finite(lo, "segment lower bound").map_err(|e| e.to_string())?;
        ensure_finite(hi, "segment upper bound").map_err(|e| e.to_string())?;
        if lo > hi {
            return Err(format!("segment bounds are inverted: {}", self.interval));
        }
        if self.polynomial.coefficients.is_empty() {
            return Err("segment has no coefficients".to_string());
        }
        for &c in self.polynomial.coefficients {
            ensure_finite(c, "segment coefficient").map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}

/// Which model and which quantity a table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId {
    pub code: TypeCode,
    pub quantity: Quantity,
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type {} {}", self.code, self.quantity)
    }
}

/// Ordered, validated sequence of segments for a single quantity.
#[derive(Debug, Clone, Copy)]
pub struct RangeTable {
    id: TableId,
    segments: &'static [Segment],
}

impl RangeTable {
    /// Check the structural invariants of `segments` and wrap them.
    ///
    /// Coefficients are not checked against any published values; only empty
    /// tables, inverted or non-finite bounds, and non-finite coefficients are
    /// rejected.
    pub fn new(id: TableId, segments: &'static [Segment]) -> ThermocoupleResult<Self> {
        let invalid = |what| ThermocoupleError::InvalidTable {
            code: id.code,
            quantity: id.quantity,
            what,
        };

        if segments.is_empty() {
            return Err(invalid("table has no segments".to_string()));
        }
        for segment in segments {
            segment.validate().map_err(invalid)?;
        }

        Ok(Self { id, segments })
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    /// First segment, in declared order, whose interval contains `x`.
    pub fn segment_for(&self, x: Real) -> Option<(usize, &'static Segment)> {
        self.segments
            .iter()
            .enumerate()
            .find(|(_, segment)| segment.interval.contains(x))
    }

    /// Evaluate the table at `x`, or fail with `OutOfRange` carrying this
    /// table's identity. Never clamps or extrapolates.
    pub fn evaluate(&self, x: Real) -> ThermocoupleResult<Real> {
        match self.segment_for(x) {
            Some((index, segment)) => {
                tracing::trace!(table = %self.id, x, segment = index, "selected segment");
                Ok(segment.polynomial.eval(x))
            }
            None => {
                tracing::debug!(table = %self.id, x, "value outside every segment");
                Err(ThermocoupleError::OutOfRange {
                    value: x,
                    code: self.id.code,
                    quantity: self.id.quantity,
                })
            }
        }
    }

    /// Hull of all segment intervals. Gaps between segments, if any, are
    /// still out of range even though they fall inside the hull.
    pub fn domain(&self) -> Interval {
        let first = self.segments[0].interval;
        self.segments[1..]
            .iter()
            .fold(first, |acc, segment| acc.hull(&segment.interval))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const CUBIC: &[Segment] = &[Segment::new(-100.0, 100.0, &[0.5, -1.25, 0.01, 2.0e-4])];

    proptest! {
        #[test]
        fn inside_domain_always_evaluates(x in -100.0_f64..=100.0) {
            let t = RangeTable::new(
                TableId { code: TypeCode::T, quantity: Quantity::Emf },
                CUBIC,
            ).unwrap();
            prop_assert!(t.evaluate(x).is_ok());
        }

        #[test]
        fn outside_domain_never_evaluates(offset in 1.0e-6_f64..1.0e6, below in any::<bool>()) {
            let t = RangeTable::new(
                TableId { code: TypeCode::T, quantity: Quantity::Emf },
                CUBIC,
            ).unwrap();
            let x = if below { -100.0 - offset } else { 100.0 + offset };
            let is_out_of_range = matches!(
                t.evaluate(x),
                Err(ThermocoupleError::OutOfRange { .. })
            );
            prop_assert!(is_out_of_range);
        }
    }
}
