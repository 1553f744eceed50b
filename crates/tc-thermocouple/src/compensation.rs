//! Cold-junction compensation by the law of intermediate temperatures.
//!
//! A circuit with its measuring junction at `T` and its reference junction
//! at `Tref` produces `E(T) - E(Tref)`, where `E` is the reference function
//! taken against 0 °C. Adding `E(Tref)` back to the measured voltage gives
//! the EMF the same junction would produce against 0 °C, which the inverse
//! function then converts to temperature.

use crate::error::ThermocoupleResult;
use crate::model::ThermocoupleModel;
use tc_core::Real;
use tc_core::units::{Temperature, Voltage, as_degc, as_volts, degc, volts};

impl ThermocoupleModel {
    /// Junction temperature [°C] from a voltage [V] measured against a
    /// reference junction held at `ref_temp_c` [°C].
    ///
    /// An `OutOfRange` error names the failing table: `Emf` when the
    /// reference temperature is outside the forward function, `InverseEmf`
    /// when the compensated voltage is outside the inverse function.
    pub fn voltage_to_temperature_with_reference(
        &self,
        measured_volts: Real,
        ref_temp_c: Real,
    ) -> ThermocoupleResult<Real> {
        let ref_volts = self.temperature_to_voltage(ref_temp_c)?;
        let total_volts = measured_volts + ref_volts;
        tracing::trace!(
            code = %self.code(),
            measured_volts,
            ref_volts,
            total_volts,
            "compensated reference junction"
        );
        self.voltage_to_temperature(total_volts)
    }

    /// Voltage [V] an instrument reads for a junction at `temp_c` [°C] with
    /// its reference junction at `ref_temp_c` [°C].
    pub fn temperature_to_voltage_with_reference(
        &self,
        temp_c: Real,
        ref_temp_c: Real,
    ) -> ThermocoupleResult<Real> {
        Ok(self.temperature_to_voltage(temp_c)? - self.temperature_to_voltage(ref_temp_c)?)
    }

    /// Unit-typed [`Self::voltage_to_temperature_with_reference`].
    pub fn temperature_with_reference(
        &self,
        measured: Voltage,
        reference: Temperature,
    ) -> ThermocoupleResult<Temperature> {
        self.voltage_to_temperature_with_reference(as_volts(measured), as_degc(reference))
            .map(degc)
    }

    /// Unit-typed [`Self::temperature_to_voltage_with_reference`].
    pub fn emf_with_reference(
        &self,
        junction: Temperature,
        reference: Temperature,
    ) -> ThermocoupleResult<Voltage> {
        self.temperature_to_voltage_with_reference(as_degc(junction), as_degc(reference))
            .map(volts)
    }
}
