//! Lookup of thermocouple models by type letter.

use std::collections::BTreeMap;

use tc_core::Real;
use tc_thermocouple::{Leg, ThermocoupleError, ThermocoupleModel, ThermocoupleResult, TypeCode};

use crate::tables::{type_b, type_e, type_j, type_k, type_n, type_r, type_s, type_t};

/// Assemble the ITS-90 reference model for one type.
///
/// Every type carries all eight tables. K adds its Gaussian correction to
/// the three forward families and to the negative leg EMF.
pub fn reference_model(code: TypeCode) -> ThermocoupleResult<ThermocoupleModel> {
    let builder = match code {
        TypeCode::B => ThermocoupleModel::builder(code, type_b::EMF, type_b::INVERSE_EMF)
            .seebeck(type_b::SEEBECK)
            .dseebeck(type_b::DSEEBECK)
            .leg_emf(Leg::Positive, type_b::POSITIVE_LEG_EMF)
            .leg_emf(Leg::Negative, type_b::NEGATIVE_LEG_EMF)
            .leg_seebeck(Leg::Positive, type_b::POSITIVE_LEG_SEEBECK)
            .leg_seebeck(Leg::Negative, type_b::NEGATIVE_LEG_SEEBECK),
        TypeCode::E => ThermocoupleModel::builder(code, type_e::EMF, type_e::INVERSE_EMF)
            .seebeck(type_e::SEEBECK)
            .dseebeck(type_e::DSEEBECK)
            .leg_emf(Leg::Positive, type_e::POSITIVE_LEG_EMF)
            .leg_emf(Leg::Negative, type_e::NEGATIVE_LEG_EMF)
            .leg_seebeck(Leg::Positive, type_e::POSITIVE_LEG_SEEBECK)
            .leg_seebeck(Leg::Negative, type_e::NEGATIVE_LEG_SEEBECK),
        TypeCode::J => ThermocoupleModel::builder(code, type_j::EMF, type_j::INVERSE_EMF)
            .seebeck(type_j::SEEBECK)
            .dseebeck(type_j::DSEEBECK)
            .leg_emf(Leg::Positive, type_j::POSITIVE_LEG_EMF)
            .leg_emf(Leg::Negative, type_j::NEGATIVE_LEG_EMF)
            .leg_seebeck(Leg::Positive, type_j::POSITIVE_LEG_SEEBECK)
            .leg_seebeck(Leg::Negative, type_j::NEGATIVE_LEG_SEEBECK),
        TypeCode::K => ThermocoupleModel::builder(code, type_k::EMF, type_k::INVERSE_EMF)
            .seebeck(type_k::SEEBECK)
            .dseebeck(type_k::DSEEBECK)
            .leg_emf(Leg::Positive, type_k::POSITIVE_LEG_EMF)
            .leg_emf(Leg::Negative, type_k::NEGATIVE_LEG_EMF)
            .leg_seebeck(Leg::Positive, type_k::POSITIVE_LEG_SEEBECK)
            .leg_seebeck(Leg::Negative, type_k::NEGATIVE_LEG_SEEBECK)
            .emf_correction(type_k::EMF_CORRECTION)
            .seebeck_correction(type_k::SEEBECK_CORRECTION)
            .dseebeck_correction(type_k::DSEEBECK_CORRECTION)
            .negative_leg_emf_correction(type_k::EMF_CORRECTION),
        TypeCode::N => ThermocoupleModel::builder(code, type_n::EMF, type_n::INVERSE_EMF)
            .seebeck(type_n::SEEBECK)
            .dseebeck(type_n::DSEEBECK)
            .leg_emf(Leg::Positive, type_n::POSITIVE_LEG_EMF)
            .leg_emf(Leg::Negative, type_n::NEGATIVE_LEG_EMF)
            .leg_seebeck(Leg::Positive, type_n::POSITIVE_LEG_SEEBECK)
            .leg_seebeck(Leg::Negative, type_n::NEGATIVE_LEG_SEEBECK),
        TypeCode::R => ThermocoupleModel::builder(code, type_r::EMF, type_r::INVERSE_EMF)
            .seebeck(type_r::SEEBECK)
            .dseebeck(type_r::DSEEBECK)
            .leg_emf(Leg::Positive, type_r::POSITIVE_LEG_EMF)
            .leg_emf(Leg::Negative, type_r::NEGATIVE_LEG_EMF)
            .leg_seebeck(Leg::Positive, type_r::POSITIVE_LEG_SEEBECK)
            .leg_seebeck(Leg::Negative, type_r::NEGATIVE_LEG_SEEBECK),
        TypeCode::S => ThermocoupleModel::builder(code, type_s::EMF, type_s::INVERSE_EMF)
            .seebeck(type_s::SEEBECK)
            .dseebeck(type_s::DSEEBECK)
            .leg_emf(Leg::Positive, type_s::POSITIVE_LEG_EMF)
            .leg_emf(Leg::Negative, type_s::NEGATIVE_LEG_EMF)
            .leg_seebeck(Leg::Positive, type_s::POSITIVE_LEG_SEEBECK)
            .leg_seebeck(Leg::Negative, type_s::NEGATIVE_LEG_SEEBECK),
        TypeCode::T => ThermocoupleModel::builder(code, type_t::EMF, type_t::INVERSE_EMF)
            .seebeck(type_t::SEEBECK)
            .dseebeck(type_t::DSEEBECK)
            .leg_emf(Leg::Positive, type_t::POSITIVE_LEG_EMF)
            .leg_emf(Leg::Negative, type_t::NEGATIVE_LEG_EMF)
            .leg_seebeck(Leg::Positive, type_t::POSITIVE_LEG_SEEBECK)
            .leg_seebeck(Leg::Negative, type_t::NEGATIVE_LEG_SEEBECK),
    };
    builder.build()
}

/// Immutable map from type letter to model.
///
/// Populated once and only read afterwards; `&ThermocoupleRegistry` is safe
/// to share across threads.
#[derive(Debug, Clone, Default)]
pub struct ThermocoupleRegistry {
    models: BTreeMap<TypeCode, ThermocoupleModel>,
}

impl ThermocoupleRegistry {
    /// All eight standard letter-designated types.
    pub fn standard() -> ThermocoupleResult<Self> {
        let models = TypeCode::ALL
            .into_iter()
            .map(reference_model)
            .collect::<ThermocoupleResult<Vec<_>>>()?;
        let registry = Self::from_models(models);
        tracing::debug!(types = %registry.available(), "built standard thermocouple registry");
        Ok(registry)
    }

    /// Registry over an arbitrary set of models. A later model with the same
    /// code replaces an earlier one.
    pub fn from_models(models: impl IntoIterator<Item = ThermocoupleModel>) -> Self {
        Self {
            models: models.into_iter().map(|m| (m.code(), m)).collect(),
        }
    }

    /// Look up a model by type letter. Surrounding whitespace and case are
    /// ignored.
    pub fn get(&self, code: &str) -> ThermocoupleResult<&ThermocoupleModel> {
        let wanted = code.trim().to_ascii_uppercase();
        wanted
            .parse::<TypeCode>()
            .ok()
            .and_then(|c| self.models.get(&c))
            .ok_or_else(|| ThermocoupleError::UnknownType {
                code: wanted,
                available: self.available(),
            })
    }

    pub fn model(&self, code: TypeCode) -> Option<&ThermocoupleModel> {
        self.models.get(&code)
    }

    /// Registered codes in alphabetical order.
    pub fn codes(&self) -> Vec<TypeCode> {
        self.models.keys().copied().collect()
    }

    /// Registered codes joined as `"B, E, J"`.
    pub fn available(&self) -> String {
        self.models
            .keys()
            .map(TypeCode::key)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThermocoupleModel> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn temperature_to_voltage(&self, code: &str, temp_c: Real) -> ThermocoupleResult<Real> {
        self.get(code)?.temperature_to_voltage(temp_c)
    }

    pub fn voltage_to_temperature(&self, code: &str, volts: Real) -> ThermocoupleResult<Real> {
        self.get(code)?.voltage_to_temperature(volts)
    }

    pub fn voltage_to_temperature_with_reference(
        &self,
        code: &str,
        volts: Real,
        ref_temp_c: Real,
    ) -> ThermocoupleResult<Real> {
        self.get(code)?.voltage_to_temperature_with_reference(volts, ref_temp_c)
    }

    pub fn temperature_to_seebeck(&self, code: &str, temp_c: Real) -> ThermocoupleResult<Real> {
        self.get(code)?.temperature_to_seebeck(temp_c)
    }

    pub fn temperature_to_dsdt(&self, code: &str, temp_c: Real) -> ThermocoupleResult<Real> {
        self.get(code)?.temperature_to_dsdt(temp_c)
    }
}
