//! Integration test: registry lookup and capability reporting.

use tc_reference::tables::type_k;
use tc_reference::{ThermocoupleRegistry, catalog_entry};
use tc_thermocouple::{Leg, Quantity, ThermocoupleError, ThermocoupleModel, TypeCode};

fn registry() -> ThermocoupleRegistry {
    ThermocoupleRegistry::standard().expect("standard registry must build")
}

#[test]
fn all_eight_types_are_registered() {
    let registry = registry();
    assert_eq!(registry.len(), 8);
    assert_eq!(registry.codes(), TypeCode::ALL.to_vec());

    for code in TypeCode::ALL {
        let model = registry.get(code.key()).expect("registered type");
        assert_eq!(model.name(), code.key());
        assert_eq!(model.code(), code);
    }
}

#[test]
fn lookup_ignores_case_and_whitespace() {
    let registry = registry();
    for query in ["k", "K", " k ", "\tK\n"] {
        let model = registry.get(query).expect("K is registered");
        assert_eq!(model.code(), TypeCode::K);
    }
}

#[test]
fn unknown_type_lists_available_codes() {
    let err = registry().get("X").expect_err("X is not a thermocouple type");
    assert_eq!(
        err,
        ThermocoupleError::UnknownType {
            code: "X".to_string(),
            available: "B, E, J, K, N, R, S, T".to_string(),
        }
    );
    assert!(err.to_string().contains("B, E, J, K, N, R, S, T"));
}

#[test]
fn leg_operations_need_leg_tables() {
    let bare = ThermocoupleModel::builder(TypeCode::K, type_k::EMF, type_k::INVERSE_EMF)
        .build()
        .expect("forward and inverse tables are enough");
    let registry = ThermocoupleRegistry::from_models([bare]);
    let model = registry.get("k").expect("registered type");
    for leg in Leg::ALL {
        let err = model
            .temperature_to_leg_voltage(leg, 100.0)
            .expect_err("no leg tables");
        assert_eq!(
            err,
            ThermocoupleError::Unsupported {
                quantity: Quantity::LegEmf(leg),
                code: TypeCode::K,
            }
        );
        assert!(model.temperature_to_leg_seebeck(leg, 100.0).is_err());
    }
    assert!(registry.temperature_to_seebeck("K", 100.0).is_err());
    assert!(registry.temperature_to_voltage("K", 100.0).is_ok());
}

#[test]
fn capabilities_reflect_published_tables() {
    let registry = registry();
    for model in registry.iter() {
        assert_eq!(model.capabilities(), Quantity::ALL.to_vec(), "{}", model.code());
    }
}

#[test]
fn catalog_range_matches_forward_domain() {
    let registry = registry();
    for model in registry.iter() {
        let entry = catalog_entry(model.code()).expect("catalogued");
        let domain = model.domain(Quantity::Emf).expect("forward table");
        assert_eq!(entry.range_c, (domain.lo, domain.hi), "{}", model.code());
    }
}

#[test]
fn convenience_methods_dispatch_by_code() {
    let registry = registry();
    let direct = registry
        .get("J")
        .and_then(|m| m.temperature_to_voltage(250.0))
        .expect("in range");
    let via_registry = registry
        .temperature_to_voltage("j", 250.0)
        .expect("in range");
    assert_eq!(direct, via_registry);

    assert!(matches!(
        registry.temperature_to_seebeck("Q", 0.0),
        Err(ThermocoupleError::UnknownType { .. })
    ));
}
