// tc-core/src/units.rs

use uom::si::f64::{
    ElectricPotential as UomElectricPotential,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Temperature = UomThermodynamicTemperature;
pub type Voltage = UomElectricPotential;

/// Reference tables are keyed in microvolts; public APIs speak volts.
pub const MICROVOLTS_PER_VOLT: f64 = 1.0e6;

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn kelvin(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn volts(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn millivolts(v: f64) -> Voltage {
    use uom::si::electric_potential::millivolt;
    Voltage::new::<millivolt>(v)
}

#[inline]
pub fn microvolts(v: f64) -> Voltage {
    use uom::si::electric_potential::microvolt;
    Voltage::new::<microvolt>(v)
}

/// Read a temperature back out in °C.
#[inline]
pub fn as_degc(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

/// Read a voltage back out in volts.
#[inline]
pub fn as_volts(v: Voltage) -> f64 {
    use uom::si::electric_potential::volt;
    v.get::<volt>()
}
