use super::ReferencePotential;
use crate::core::models::params::{DomainError, PhysicalParameters};

/// Morse potential `V(r) = De (1 - exp(-alpha (r - Re)))²`, shifted so the minimum is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Morse {
    equilibrium_distance: f64,
    well_depth: f64,
    alpha: f64,
}

impl Morse {
    pub fn new(equilibrium_distance: f64, well_depth: f64, alpha: f64) -> Self {
        Self {
            equilibrium_distance,
            well_depth,
            alpha,
        }
    }

    pub fn from_parameters(params: &PhysicalParameters) -> Result<Self, DomainError> {
        params.validate()?;
        Ok(Self::new(params.re, params.de, params.alpha()?))
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Closed-form inverse on either side of the well.
    ///
    /// Returns `None` when `energy` is not reachable on the requested branch
    /// (negative, or at least `De` on the attractive side).
    pub fn inverse(&self, energy: f64, repulsive: bool) -> Option<f64> {
        if energy < 0.0 || !energy.is_finite() {
            return None;
        }
        let root = (energy / self.well_depth).sqrt();
        let arg = if repulsive { 1.0 + root } else { 1.0 - root };
        if arg <= 0.0 {
            return None;
        }
        Some(self.equilibrium_distance - arg.ln() / self.alpha)
    }
}

impl ReferencePotential for Morse {
    fn equilibrium_distance(&self) -> f64 {
        self.equilibrium_distance
    }

    fn well_depth(&self) -> f64 {
        self.well_depth
    }

    #[inline]
    fn energy(&self, r: f64) -> f64 {
        let x = 1.0 - (-self.alpha * (r - self.equilibrium_distance)).exp();
        self.well_depth * x * x
    }

    fn length_scale(&self) -> f64 {
        1.0 / self.alpha
    }
}
