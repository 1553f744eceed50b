//! Thermocouple model: the composition of range tables and correction terms
//! behind the public conversion operations.
//!
//! All temperatures are in °C. EMF results and arguments are in volts; the
//! underlying EMF tables are in microvolts and are scaled at the boundary.
//! Seebeck and dSeebeck/dT results are returned in the table's own unit
//! (µV/K and µV/K² for the bundled reference data) without scaling.

use crate::code::TypeCode;
use crate::correction::{Correction, CorrectionTerm};
use crate::error::{ThermocoupleError, ThermocoupleResult};
use crate::quantity::{Leg, Quantity};
use crate::table::{Interval, RangeTable, Segment, TableId};
use tc_core::units::{Temperature, Voltage, as_degc, as_volts, degc, volts};
use tc_core::{MICROVOLTS_PER_VOLT, Real};

/// Correction slots. The positive leg and the inverse function have none.
#[derive(Debug, Clone, Copy, Default)]
struct Corrections {
    emf: Correction,
    seebeck: Correction,
    dseebeck: Correction,
    negative_leg_emf: Correction,
}

/// Immutable model for one thermocouple type.
///
/// Built once through [`ThermocoupleModel::builder`] and only read afterwards,
/// so a model can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct ThermocoupleModel {
    code: TypeCode,
    emf: RangeTable,
    inverse_emf: RangeTable,
    seebeck: Option<RangeTable>,
    dseebeck: Option<RangeTable>,
    positive_leg_emf: Option<RangeTable>,
    negative_leg_emf: Option<RangeTable>,
    positive_leg_seebeck: Option<RangeTable>,
    negative_leg_seebeck: Option<RangeTable>,
    corrections: Corrections,
}

impl ThermocoupleModel {
    /// Start a model from its two mandatory tables.
    pub fn builder(
        code: TypeCode,
        emf: &'static [Segment],
        inverse_emf: &'static [Segment],
    ) -> ThermocoupleModelBuilder {
        ThermocoupleModelBuilder::new(code, emf, inverse_emf)
    }

    pub fn code(&self) -> TypeCode {
        self.code
    }

    /// Type letter, e.g. `"K"`.
    pub fn name(&self) -> &'static str {
        self.code.key()
    }

    /// Table backing `quantity`, if this type has one.
    pub fn table(&self, quantity: Quantity) -> Option<&RangeTable> {
        match quantity {
            Quantity::Emf => Some(&self.emf),
            Quantity::InverseEmf => Some(&self.inverse_emf),
            Quantity::Seebeck => self.seebeck.as_ref(),
            Quantity::DSeebeck => self.dseebeck.as_ref(),
            Quantity::LegEmf(Leg::Positive) => self.positive_leg_emf.as_ref(),
            Quantity::LegEmf(Leg::Negative) => self.negative_leg_emf.as_ref(),
            Quantity::LegSeebeck(Leg::Positive) => self.positive_leg_seebeck.as_ref(),
            Quantity::LegSeebeck(Leg::Negative) => self.negative_leg_seebeck.as_ref(),
        }
    }

    fn require(&self, quantity: Quantity) -> ThermocoupleResult<&RangeTable> {
        self.table(quantity)
            .ok_or(ThermocoupleError::Unsupported {
                quantity,
                code: self.code,
            })
    }

    pub fn supports(&self, quantity: Quantity) -> bool {
        self.table(quantity).is_some()
    }

    /// Quantities this model can evaluate, in [`Quantity::ALL`] order.
    pub fn capabilities(&self) -> Vec<Quantity> {
        Quantity::ALL
            .into_iter()
            .filter(|q| self.supports(*q))
            .collect()
    }

    /// Declared input domain of a quantity's table (°C, or µV for the inverse).
    pub fn domain(&self, quantity: Quantity) -> Option<Interval> {
        self.table(quantity).map(RangeTable::domain)
    }

    /// Name of the correction term attached to `quantity`, if any.
    pub fn correction_name(&self, quantity: Quantity) -> Option<&'static str> {
        match quantity {
            Quantity::Emf => self.corrections.emf.name(),
            Quantity::Seebeck => self.corrections.seebeck.name(),
            Quantity::DSeebeck => self.corrections.dseebeck.name(),
            Quantity::LegEmf(Leg::Negative) => self.corrections.negative_leg_emf.name(),
            _ => None,
        }
    }

    /// Thermoelectric voltage [V] at `temp_c` [°C], reference junction at 0 °C.
    pub fn temperature_to_voltage(&self, temp_c: Real) -> ThermocoupleResult<Real> {
        let microvolts = self.emf.evaluate(temp_c)? + self.corrections.emf.apply(temp_c);
        Ok(microvolts / MICROVOLTS_PER_VOLT)
    }

    /// Temperature [°C] for a thermoelectric voltage [V], reference junction at 0 °C.
    ///
    /// The inverse tables are independent fits, not algebraic inverses of the
    /// forward function, so no correction term applies here.
    pub fn voltage_to_temperature(&self, volts: Real) -> ThermocoupleResult<Real> {
        self.inverse_emf.evaluate(volts * MICROVOLTS_PER_VOLT)
    }

    /// Seebeck coefficient [µV/K] at `temp_c` [°C].
    pub fn temperature_to_seebeck(&self, temp_c: Real) -> ThermocoupleResult<Real> {
        let table = self.require(Quantity::Seebeck)?;
        Ok(table.evaluate(temp_c)? + self.corrections.seebeck.apply(temp_c))
    }

    /// dSeebeck/dT at `temp_c` [°C], in the table's unit.
    pub fn temperature_to_dsdt(&self, temp_c: Real) -> ThermocoupleResult<Real> {
        let table = self.require(Quantity::DSeebeck)?;
        Ok(table.evaluate(temp_c)? + self.corrections.dseebeck.apply(temp_c))
    }

    /// Voltage [V] of a single thermoelement versus platinum at `temp_c` [°C].
    pub fn temperature_to_leg_voltage(&self, leg: Leg, temp_c: Real) -> ThermocoupleResult<Real> {
        let table = self.require(Quantity::LegEmf(leg))?;
        let correction = match leg {
            Leg::Positive => Correction::None,
            Leg::Negative => self.corrections.negative_leg_emf,
        };
        let microvolts = table.evaluate(temp_c)? + correction.apply(temp_c);
        Ok(microvolts / MICROVOLTS_PER_VOLT)
    }

    /// Seebeck coefficient [µV/K] of a single thermoelement versus platinum.
    pub fn temperature_to_leg_seebeck(&self, leg: Leg, temp_c: Real) -> ThermocoupleResult<Real> {
        self.require(Quantity::LegSeebeck(leg))?.evaluate(temp_c)
    }

    /// Unit-typed [`Self::temperature_to_voltage`].
    pub fn emf(&self, t: Temperature) -> ThermocoupleResult<Voltage> {
        self.temperature_to_voltage(as_degc(t)).map(volts)
    }

    /// Unit-typed [`Self::voltage_to_temperature`].
    pub fn temperature(&self, v: Voltage) -> ThermocoupleResult<Temperature> {
        self.voltage_to_temperature(as_volts(v)).map(degc)
    }
}

/// Explicit assembly of a [`ThermocoupleModel`].
///
/// Every optional table and correction is a separate opt-in call; anything
/// not set is absent and surfaces as `Unsupported` (tables) or contributes
/// nothing (corrections).
#[derive(Debug, Clone)]
pub struct ThermocoupleModelBuilder {
    code: TypeCode,
    emf: &'static [Segment],
    inverse_emf: &'static [Segment],
    seebeck: Option<&'static [Segment]>,
    dseebeck: Option<&'static [Segment]>,
    positive_leg_emf: Option<&'static [Segment]>,
    negative_leg_emf: Option<&'static [Segment]>,
    positive_leg_seebeck: Option<&'static [Segment]>,
    negative_leg_seebeck: Option<&'static [Segment]>,
    corrections: Corrections,
}

impl ThermocoupleModelBuilder {
    pub fn new(code: TypeCode, emf: &'static [Segment], inverse_emf: &'static [Segment]) -> Self {
        Self {
            code,
            emf,
            inverse_emf,
            seebeck: None,
            dseebeck: None,
            positive_leg_emf: None,
            negative_leg_emf: None,
            positive_leg_seebeck: None,
            negative_leg_seebeck: None,
            corrections: Corrections::default(),
        }
    }

    pub fn seebeck(mut self, segments: &'static [Segment]) -> Self {
        self.seebeck = Some(segments);
        self
    }

    pub fn dseebeck(mut self, segments: &'static [Segment]) -> Self {
        self.dseebeck = Some(segments);
        self
    }

    pub fn leg_emf(mut self, leg: Leg, segments: &'static [Segment]) -> Self {
        match leg {
            Leg::Positive => self.positive_leg_emf = Some(segments),
            Leg::Negative => self.negative_leg_emf = Some(segments),
        }
        self
    }

    pub fn leg_seebeck(mut self, leg: Leg, segments: &'static [Segment]) -> Self {
        match leg {
            Leg::Positive => self.positive_leg_seebeck = Some(segments),
            Leg::Negative => self.negative_leg_seebeck = Some(segments),
        }
        self
    }

    pub fn emf_correction(mut self, term: CorrectionTerm) -> Self {
        self.corrections.emf = term.into();
        self
    }

    pub fn seebeck_correction(mut self, term: CorrectionTerm) -> Self {
        self.corrections.seebeck = term.into();
        self
    }

    pub fn dseebeck_correction(mut self, term: CorrectionTerm) -> Self {
        self.corrections.dseebeck = term.into();
        self
    }

    pub fn negative_leg_emf_correction(mut self, term: CorrectionTerm) -> Self {
        self.corrections.negative_leg_emf = term.into();
        self
    }

    /// Validate every table and assemble the model.
    ///
    /// A correction attached to a table family that has no table is rejected,
    /// since it could never be applied.
    pub fn build(self) -> ThermocoupleResult<ThermocoupleModel> {
        let code = self.code;
        let table = |quantity: Quantity, segments: &'static [Segment]| {
            RangeTable::new(TableId { code, quantity }, segments)
        };
        let optional = |quantity: Quantity, segments: Option<&'static [Segment]>| {
            segments.map(|s| table(quantity, s)).transpose()
        };

        let model = ThermocoupleModel {
            code,
            emf: table(Quantity::Emf, self.emf)?,
            inverse_emf: table(Quantity::InverseEmf, self.inverse_emf)?,
            seebeck: optional(Quantity::Seebeck, self.seebeck)?,
            dseebeck: optional(Quantity::DSeebeck, self.dseebeck)?,
            positive_leg_emf: optional(Quantity::LegEmf(Leg::Positive), self.positive_leg_emf)?,
            negative_leg_emf: optional(Quantity::LegEmf(Leg::Negative), self.negative_leg_emf)?,
            positive_leg_seebeck: optional(
                Quantity::LegSeebeck(Leg::Positive),
                self.positive_leg_seebeck,
            )?,
            negative_leg_seebeck: optional(
                Quantity::LegSeebeck(Leg::Negative),
                self.negative_leg_seebeck,
            )?,
            corrections: self.corrections,
        };

        let dangling = [
            (Quantity::Seebeck, model.corrections.seebeck),
            (Quantity::DSeebeck, model.corrections.dseebeck),
            (
                Quantity::LegEmf(Leg::Negative),
                model.corrections.negative_leg_emf,
            ),
        ]
        .into_iter()
        .find(|(quantity, correction)| correction.is_present() && !model.supports(*quantity));
        if let Some((quantity, _)) = dangling {
            return Err(ThermocoupleError::InvalidTable {
                code,
                quantity,
                what: "correction attached to a table the model does not have".to_string(),
            });
        }

        tracing::debug!(
            code = %code,
            capabilities = ?model.capabilities(),
            "built thermocouple model"
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tc_core::{Tolerances, nearly_equal};

    // 40 µV/°C straight line with its exact inverse, on -100..=100 °C.
    const LINE: &[Segment] = &[Segment::new(-100.0, 100.0, &[0.0, 40.0])];
    const LINE_INVERSE: &[Segment] = &[Segment::new(-4000.0, 4000.0, &[0.0, 0.025])];
    const SLOPE: &[Segment] = &[Segment::new(-100.0, 100.0, &[40.0])];
    const FLAT: &[Segment] = &[Segment::new(-100.0, 100.0, &[0.0])];
    const HALF_LINE: &[Segment] = &[Segment::new(-100.0, 100.0, &[0.0, 20.0])];

    fn plus_one(_: Real) -> Real {
        1.0
    }

    fn plus_ten_above_zero(t: Real) -> Real {
        if t > 0.0 { 10.0 } else { 0.0 }
    }

    fn minimal() -> ThermocoupleModel {
        ThermocoupleModel::builder(TypeCode::T, LINE, LINE_INVERSE)
            .build()
            .expect("minimal model is valid")
    }

    fn full() -> ThermocoupleModel {
        ThermocoupleModel::builder(TypeCode::K, LINE, LINE_INVERSE)
            .seebeck(SLOPE)
            .dseebeck(FLAT)
            .leg_emf(Leg::Positive, HALF_LINE)
            .leg_emf(Leg::Negative, HALF_LINE)
            .leg_seebeck(Leg::Positive, SLOPE)
            .leg_seebeck(Leg::Negative, FLAT)
            .emf_correction(CorrectionTerm::new("emf step", plus_ten_above_zero))
            .seebeck_correction(CorrectionTerm::new("seebeck one", plus_one))
            .dseebeck_correction(CorrectionTerm::new("dsdt one", plus_one))
            .negative_leg_emf_correction(CorrectionTerm::new("leg one", plus_one))
            .build()
            .expect("full model is valid")
    }

    #[test]
    fn name_matches_code() {
        let model = minimal();
        assert_eq!(model.code(), TypeCode::T);
        assert_eq!(model.name(), "T");
    }

    #[test]
    fn forward_scales_microvolts_to_volts() {
        let v = minimal().temperature_to_voltage(50.0).unwrap();
        assert!(nearly_equal(v, 2000.0e-6, Tolerances::default()));
    }

    #[test]
    fn inverse_scales_volts_to_microvolts() {
        let t = minimal().voltage_to_temperature(2000.0e-6).unwrap();
        assert!(nearly_equal(t, 50.0, Tolerances::default()));
    }

    #[test]
    fn correction_added_before_scaling() {
        let model = full();
        // 40 µV/°C * 50 °C + 10 µV correction = 2010 µV
        let v = model.temperature_to_voltage(50.0).unwrap();
        assert!(nearly_equal(v, 2010.0e-6, Tolerances::default()));
        // correction is zero at and below 0 °C
        assert_eq!(model.temperature_to_voltage(0.0).unwrap(), 0.0);
    }

    #[test]
    fn inverse_ignores_forward_correction() {
        let t = full().voltage_to_temperature(2010.0e-6).unwrap();
        assert!(nearly_equal(t, 50.25, Tolerances::default()));
    }

    #[test]
    fn seebeck_and_dsdt_are_unscaled_with_correction() {
        let model = full();
        assert_eq!(model.temperature_to_seebeck(20.0).unwrap(), 41.0);
        assert_eq!(model.temperature_to_dsdt(20.0).unwrap(), 1.0);
    }

    #[test]
    fn only_negative_leg_emf_is_corrected() {
        let model = full();
        let pos = model.temperature_to_leg_voltage(Leg::Positive, 10.0).unwrap();
        let neg = model.temperature_to_leg_voltage(Leg::Negative, 10.0).unwrap();
        assert!(nearly_equal(pos, 200.0e-6, Tolerances::default()));
        assert!(nearly_equal(neg, 201.0e-6, Tolerances::default()));
    }

    #[test]
    fn leg_seebeck_has_no_correction() {
        let model = full();
        assert_eq!(model.temperature_to_leg_seebeck(Leg::Positive, 10.0).unwrap(), 40.0);
        assert_eq!(model.temperature_to_leg_seebeck(Leg::Negative, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn missing_tables_are_unsupported() {
        let model = minimal();
        let checks: [(Quantity, ThermocoupleResult<Real>); 6] = [
            (Quantity::Seebeck, model.temperature_to_seebeck(10.0)),
            (Quantity::DSeebeck, model.temperature_to_dsdt(10.0)),
            (
                Quantity::LegEmf(Leg::Positive),
                model.temperature_to_leg_voltage(Leg::Positive, 10.0),
            ),
            (
                Quantity::LegEmf(Leg::Negative),
                model.temperature_to_leg_voltage(Leg::Negative, 10.0),
            ),
            (
                Quantity::LegSeebeck(Leg::Positive),
                model.temperature_to_leg_seebeck(Leg::Positive, 10.0),
            ),
            (
                Quantity::LegSeebeck(Leg::Negative),
                model.temperature_to_leg_seebeck(Leg::Negative, 10.0),
            ),
        ];
        for (quantity, result) in checks {
            assert_eq!(
                result.unwrap_err(),
                ThermocoupleError::Unsupported {
                    quantity,
                    code: TypeCode::T,
                }
            );
        }
    }

    #[test]
    fn unsupported_takes_precedence_over_range() {
        let err = minimal().temperature_to_seebeck(1.0e9).unwrap_err();
        assert!(matches!(err, ThermocoupleError::Unsupported { .. }));
    }

    #[test]
    fn out_of_range_names_the_table() {
        let model = full();
        let err = model.temperature_to_voltage(150.0).unwrap_err();
        assert_eq!(
            err,
            ThermocoupleError::OutOfRange {
                value: 150.0,
                code: TypeCode::K,
                quantity: Quantity::Emf,
            }
        );
        let err = model.voltage_to_temperature(0.01).unwrap_err();
        assert!(matches!(
            err,
            ThermocoupleError::OutOfRange {
                quantity: Quantity::InverseEmf,
                ..
            }
        ));
        let err = model.temperature_to_leg_seebeck(Leg::Negative, -101.0).unwrap_err();
        assert!(matches!(
            err,
            ThermocoupleError::OutOfRange {
                quantity: Quantity::LegSeebeck(Leg::Negative),
                ..
            }
        ));
    }

    #[test]
    fn capabilities_reflect_builder_calls() {
        assert_eq!(
            minimal().capabilities(),
            vec![Quantity::Emf, Quantity::InverseEmf]
        );
        assert_eq!(full().capabilities(), Quantity::ALL.to_vec());
    }

    #[test]
    fn domain_and_correction_names() {
        let model = full();
        assert_eq!(
            model.domain(Quantity::InverseEmf),
            Some(Interval::new(-4000.0, 4000.0))
        );
        assert_eq!(minimal().domain(Quantity::Seebeck), None);
        assert_eq!(model.correction_name(Quantity::Emf), Some("emf step"));
        assert_eq!(model.correction_name(Quantity::InverseEmf), None);
        assert_eq!(model.correction_name(Quantity::LegEmf(Leg::Positive)), None);
    }

    #[test]
    fn dangling_correction_is_rejected() {
        let err = ThermocoupleModel::builder(TypeCode::J, LINE, LINE_INVERSE)
            .negative_leg_emf_correction(CorrectionTerm::new("orphan", plus_one))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ThermocoupleError::InvalidTable {
                code: TypeCode::J,
                quantity: Quantity::LegEmf(Leg::Negative),
                ..
            }
        ));
    }

    #[test]
    fn broken_optional_table_is_rejected() {
        const INVERTED: &[Segment] = &[Segment::new(1.0, -1.0, &[0.0])];
        let err = ThermocoupleModel::builder(TypeCode::E, LINE, LINE_INVERSE)
            .dseebeck(INVERTED)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ThermocoupleError::InvalidTable {
                quantity: Quantity::DSeebeck,
                ..
            }
        ));
    }

    #[test]
    fn typed_conversions_agree_with_plain() {
        let model = minimal();
        let v = model.emf(degc(25.0)).unwrap();
        assert!(nearly_equal(as_volts(v), 1000.0e-6, Tolerances::new(1e-15, 1e-9)));
        let t = model.temperature(volts(1000.0e-6)).unwrap();
        assert!(nearly_equal(as_degc(t), 25.0, Tolerances::absolute(1e-9)));
    }

    #[test]
    fn model_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ThermocoupleModel>();
    }
}
