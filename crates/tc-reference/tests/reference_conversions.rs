//! Integration test: conversions against the ITS-90 reference data.

use proptest::prelude::*;
use tc_core::{MICROVOLTS_PER_VOLT, Tolerances, degc, nearly_equal};
use tc_reference::ThermocoupleRegistry;
use tc_reference::tables::{type_b, type_k, type_r, type_s};
use tc_thermocouple::{
    Leg, Quantity, ThermocoupleError, ThermocoupleModel, ThermocoupleResult, TypeCode,
};

fn registry() -> ThermocoupleRegistry {
    ThermocoupleRegistry::standard().expect("standard registry must build")
}

fn model(registry: &ThermocoupleRegistry, code: TypeCode) -> &ThermocoupleModel {
    registry.model(code).expect("registered type")
}

#[test]
fn type_k_at_100_c() {
    let registry = registry();
    let volts = registry
        .temperature_to_voltage("K", 100.0)
        .expect("100 °C is in range");
    assert!((volts - 0.004096).abs() < 1e-5, "got {volts}");

    let temp = registry
        .voltage_to_temperature("K", 0.004096)
        .expect("4.096 mV is in range");
    assert!((temp - 100.0).abs() < 0.1, "got {temp}");
}

#[test]
fn published_table_values() {
    // (type, °C, mV) from the ITS-90 tables.
    let cases = [
        (TypeCode::B, 1000.0, 4.834),
        (TypeCode::E, 500.0, 37.005),
        (TypeCode::J, 500.0, 27.393),
        (TypeCode::K, 1000.0, 41.276),
        (TypeCode::N, -200.0, -3.990),
        (TypeCode::R, 1000.0, 10.506),
        (TypeCode::S, 1000.0, 9.587),
        (TypeCode::T, 300.0, 14.862),
    ];
    let registry = registry();
    for (code, temp_c, millivolts) in cases {
        let volts = model(&registry, code)
            .temperature_to_voltage(temp_c)
            .expect("in range");
        assert!(
            (volts * 1.0e3 - millivolts).abs() < 1.0e-3,
            "Type {code} at {temp_c} °C: {volts} V"
        );
    }
}

#[test]
fn forward_then_inverse_recovers_temperature() {
    let cases: [(TypeCode, &[f64]); 8] = [
        (TypeCode::B, &[300.0, 500.0, 1000.0, 1500.0, 1800.0]),
        (TypeCode::E, &[-200.0, -100.0, 0.0, 100.0, 500.0, 900.0]),
        (TypeCode::J, &[-200.0, -100.0, 0.0, 100.0, 500.0, 1100.0]),
        (TypeCode::K, &[-100.0, 0.0, 100.0, 500.0, 1000.0, 1300.0]),
        (TypeCode::N, &[-150.0, 0.0, 100.0, 600.0, 1200.0]),
        (TypeCode::R, &[0.0, 200.0, 1000.0, 1500.0, 1700.0]),
        (TypeCode::S, &[0.0, 200.0, 1000.0, 1500.0, 1700.0]),
        (TypeCode::T, &[-200.0, -100.0, 0.0, 100.0, 350.0]),
    ];
    let registry = registry();
    for (code, temps) in cases {
        let model = model(&registry, code);
        for &t in temps {
            let v = model.temperature_to_voltage(t).expect("forward in range");
            let back = model.voltage_to_temperature(v).expect("inverse in range");
            assert!((back - t).abs() < 0.1, "Type {code}: {t} °C -> {v} V -> {back} °C");
        }
    }
}

fn evaluate(model: &ThermocoupleModel, quantity: Quantity, x: f64) -> ThermocoupleResult<f64> {
    match quantity {
        Quantity::Emf => model.temperature_to_voltage(x),
        Quantity::InverseEmf => model.voltage_to_temperature(x / MICROVOLTS_PER_VOLT),
        Quantity::Seebeck => model.temperature_to_seebeck(x),
        Quantity::DSeebeck => model.temperature_to_dsdt(x),
        Quantity::LegEmf(leg) => model.temperature_to_leg_voltage(leg, x),
        Quantity::LegSeebeck(leg) => model.temperature_to_leg_seebeck(leg, x),
    }
}

#[test]
fn out_of_range_names_the_table() {
    let registry = registry();
    for model in registry.iter() {
        for quantity in model.capabilities() {
            let domain = model.domain(quantity).expect("supported table");
            for x in [domain.lo - 1.0, domain.hi + 1.0] {
                let err = evaluate(model, quantity, x).expect_err("outside table");
                assert!(
                    matches!(
                        err,
                        ThermocoupleError::OutOfRange { code, quantity: q, .. }
                            if code == model.code() && q == quantity
                    ),
                    "Type {} {quantity} at {x}: {err}",
                    model.code()
                );
            }
            assert!(evaluate(model, quantity, f64::NAN).is_err());
        }

        let domain = model.domain(Quantity::Emf).expect("forward table");
        let below = domain.lo - 1.0;
        assert_eq!(
            model.temperature_to_voltage(below),
            Err(ThermocoupleError::OutOfRange {
                value: below,
                code: model.code(),
                quantity: Quantity::Emf,
            })
        );
    }
}

#[test]
fn type_k_seebeck_near_room_temperature() {
    let seebeck = registry()
        .temperature_to_seebeck("K", 100.0)
        .expect("in range");
    assert!(seebeck > 30.0 && seebeck < 50.0, "got {seebeck}");
}

#[test]
fn type_k_is_continuous_at_zero() {
    let registry = registry();
    let k = model(&registry, TypeCode::K);
    let below = k.temperature_to_voltage(-1e-9).expect("in range");
    let at = k.temperature_to_voltage(0.0).expect("in range");
    let above = k.temperature_to_voltage(1e-9).expect("in range");
    assert_eq!(at, 0.0);
    assert!((above - below).abs() < 1e-9);

    let s_below = k.temperature_to_seebeck(-1e-9).expect("in range");
    let s_above = k.temperature_to_seebeck(1e-9).expect("in range");
    assert!((s_above - s_below).abs() < 1e-3);
}

#[test]
fn shared_boundary_uses_first_declared_segment() {
    let registry = registry();

    let b = model(&registry, TypeCode::B);
    let table = b.table(Quantity::Emf).expect("forward table");
    assert_eq!(table.segment_for(630.615).map(|(i, _)| i), Some(0));
    let expected = type_b::EMF[0].polynomial.eval(630.615) / MICROVOLTS_PER_VOLT;
    assert_eq!(b.temperature_to_voltage(630.615).expect("in range"), expected);

    for (code, emf) in [(TypeCode::R, type_r::EMF), (TypeCode::S, type_s::EMF)] {
        let m = model(&registry, code);
        let expected = emf[0].polynomial.eval(1064.18) / MICROVOLTS_PER_VOLT;
        assert_eq!(m.temperature_to_voltage(1064.18).expect("in range"), expected);
    }
}

#[test]
fn platinum_negative_leg_is_zero() {
    let registry = registry();
    for code in [TypeCode::R, TypeCode::S] {
        let m = model(&registry, code);
        for t in [-50.0, 0.0, 500.0, 1768.1] {
            assert_eq!(m.temperature_to_leg_voltage(Leg::Negative, t), Ok(0.0));
            assert_eq!(m.temperature_to_leg_seebeck(Leg::Negative, t), Ok(0.0));
        }
        // The positive leg then carries the whole EMF.
        let leg = m.temperature_to_leg_voltage(Leg::Positive, 800.0).expect("in range");
        let emf = m.temperature_to_voltage(800.0).expect("in range");
        assert!((leg - emf).abs() < 1e-12);
    }
}

#[test]
fn legs_reconcile_with_thermocouple_emf() {
    let registry = registry();
    let cases = [
        (TypeCode::B, -1.0, [100.0, 600.0, 1200.0]),
        (TypeCode::E, 1.0, [-250.0, 100.0, 900.0]),
        (TypeCode::J, 1.0, [-200.0, 100.0, 700.0]),
        (TypeCode::K, 1.0, [-250.0, 127.0, 1000.0]),
        (TypeCode::N, 1.0, [-150.0, 100.0, 1200.0]),
        (TypeCode::T, 1.0, [-270.0, -250.0, 350.0]),
    ];
    for (code, sign, temps) in cases {
        let m = model(&registry, code);
        for t in temps {
            let pos = m.temperature_to_leg_voltage(Leg::Positive, t).expect("in range");
            let neg = m.temperature_to_leg_voltage(Leg::Negative, t).expect("in range");
            let emf = m.temperature_to_voltage(t).expect("in range");
            assert!(
                (pos + sign * neg - emf).abs() < 1e-9,
                "Type {code} at {t} °C: residual {}",
                pos + sign * neg - emf
            );
        }
    }
}

#[test]
fn type_k_negative_leg_carries_the_gaussian_term() {
    let registry = registry();
    let k = model(&registry, TypeCode::K);
    for t in [50.0, 126.9686, 400.0] {
        let neg = k.temperature_to_leg_voltage(Leg::Negative, t).expect("in range");
        let polynomial = type_k::NEGATIVE_LEG_EMF[1].polynomial.eval(t);
        let term = type_k::EMF_CORRECTION.eval(t);
        assert!(term > 0.0);
        assert!(((polynomial + term) / MICROVOLTS_PER_VOLT - neg).abs() < 1e-15);
    }
    assert_eq!(k.temperature_to_leg_voltage(Leg::Negative, 0.0), Ok(0.0));
}

#[test]
fn nickel_chromium_leg_is_shared_by_e_and_k() {
    let registry = registry();
    let e = model(&registry, TypeCode::E);
    let k = model(&registry, TypeCode::K);
    for t in [-200.0, 0.0, 300.0, 1000.0] {
        assert_eq!(
            e.temperature_to_leg_voltage(Leg::Positive, t),
            k.temperature_to_leg_voltage(Leg::Positive, t)
        );
    }
    let seebeck = k.temperature_to_leg_seebeck(Leg::Positive, 0.0).expect("in range");
    assert!(seebeck > 20.0 && seebeck < 30.0, "got {seebeck}");

    // E shares its Cu-Ni leg with T.
    let t_model = model(&registry, TypeCode::T);
    assert_eq!(
        e.temperature_to_leg_voltage(Leg::Negative, 200.0),
        t_model.temperature_to_leg_voltage(Leg::Negative, 200.0)
    );
}

#[test]
fn derivative_tables_match_differentiated_emf() {
    let tol = Tolerances::new(1e-12, 1e-9);
    let registry = registry();
    let pairs = [
        (Quantity::Emf, Quantity::Seebeck),
        (Quantity::Seebeck, Quantity::DSeebeck),
        (Quantity::LegEmf(Leg::Positive), Quantity::LegSeebeck(Leg::Positive)),
        (Quantity::LegEmf(Leg::Negative), Quantity::LegSeebeck(Leg::Negative)),
    ];
    for m in registry.iter() {
        for (source, derived) in pairs {
            let (Some(source), Some(derived)) = (m.table(source), m.table(derived)) else {
                continue;
            };
            assert_eq!(source.segments().len(), derived.segments().len());
            for (s, d) in source.segments().iter().zip(derived.segments()) {
                assert_eq!(s.interval, d.interval);
                let expected = s.polynomial.derivative();
                let actual = d.polynomial.coefficients();
                if expected.is_empty() {
                    assert!(actual.iter().all(|c| *c == 0.0));
                    continue;
                }
                assert_eq!(expected.len(), actual.len(), "{}", derived.id());
                for (e, a) in expected.iter().zip(actual) {
                    assert!(nearly_equal(*e, *a, tol), "{}: {e} vs {a}", derived.id());
                }
            }
        }
    }
}

#[test]
fn type_k_correction_terms_are_attached() {
    let registry = registry();
    let k = model(&registry, TypeCode::K);
    assert_eq!(
        k.correction_name(Quantity::Emf),
        Some(type_k::EMF_CORRECTION.name())
    );
    assert!(k.correction_name(Quantity::Seebeck).is_some());
    assert!(k.correction_name(Quantity::DSeebeck).is_some());
    assert_eq!(k.correction_name(Quantity::InverseEmf), None);
}

#[test]
fn cold_junction_compensation() {
    let registry = registry();
    let temp = registry
        .voltage_to_temperature_with_reference("K", 0.025, 25.0)
        .expect("in range");
    assert!(temp.is_finite());
    assert!((temp - 625.78).abs() < 0.05, "got {temp}");

    // A reference junction at 0 °C contributes nothing.
    let k = model(&registry, TypeCode::K);
    let plain = k.voltage_to_temperature(0.025).expect("in range");
    let compensated = k
        .voltage_to_temperature_with_reference(0.025, 0.0)
        .expect("in range");
    assert_eq!(plain, compensated);
}

#[test]
fn typed_units_agree_with_raw_api() {
    let registry = registry();
    let t = model(&registry, TypeCode::T);
    let raw = t.temperature_to_voltage(150.0).expect("in range");
    let typed = t.emf(degc(150.0)).expect("in range");
    assert!((tc_core::as_volts(typed) - raw).abs() < 1e-15);
}

proptest! {
    #[test]
    fn type_k_round_trip(t in 0.0f64..1300.0) {
        let registry = registry();
        let k = model(&registry, TypeCode::K);
        let v = k.temperature_to_voltage(t).unwrap();
        let back = k.voltage_to_temperature(v).unwrap();
        prop_assert!((back - t).abs() < 0.1);
    }

    #[test]
    fn compensation_inverts_referenced_emf(t in 50.0f64..1000.0, reference in -20.0f64..40.0) {
        let registry = registry();
        let j = model(&registry, TypeCode::J);
        let measured = j.temperature_to_voltage_with_reference(t, reference).unwrap();
        let back = j.voltage_to_temperature_with_reference(measured, reference).unwrap();
        prop_assert!((back - t).abs() < 0.1);
    }
}
