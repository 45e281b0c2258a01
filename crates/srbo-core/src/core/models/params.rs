use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Parameter '{name}' must be strictly positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("Parameter '{name}' must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Parameter '{name}' = {value} lies outside the open interval ({lower}, {upper})")]
    OutOfRange {
        name: &'static str,
        value: f64,
        lower: f64,
        upper: f64,
    },
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFinite { name, value });
    }
    if value <= 0.0 {
        return Err(DomainError::NonPositive { name, value });
    }
    Ok(value)
}

/// Morse `alpha` exponent, `sqrt(ke / (2 De))`.
pub fn compute_alpha(de: f64, ke: f64) -> Result<f64, DomainError> {
    let de = require_positive("De", de)?;
    let ke = require_positive("ke", ke)?;
    Ok((ke / (2.0 * de)).sqrt())
}

/// Physical description of a diatomic molecule near its equilibrium geometry.
///
/// The three values must share a consistent unit system, e.g. bohr, hartree
/// and hartree/bohr² respectively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhysicalParameters {
    /// Equilibrium bond length.
    pub re: f64,
    /// Dissociation energy, the depth of the well.
    pub de: f64,
    /// Force constant at equilibrium.
    pub ke: f64,
}

impl PhysicalParameters {
    pub fn new(re: f64, de: f64, ke: f64) -> Result<Self, DomainError> {
        let params = Self { re, de, ke };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_positive("Re", self.re)?;
        require_positive("De", self.de)?;
        require_positive("ke", self.ke)?;
        Ok(())
    }

    pub fn alpha(&self) -> Result<f64, DomainError> {
        compute_alpha(self.de, self.ke)
    }
}
