//! # Reference Potentials
//!
//! Single-well model potentials used to locate the physically relevant region of a
//! bond-distance coordinate. The boundary solver only talks to the
//! [`ReferencePotential`] trait, so a different model family can be dropped in
//! without touching the root finder or the grid builder.

pub mod morse;

/// A one-dimensional potential-energy curve with a single minimum.
///
/// Energies are measured from the bottom of the well, so `energy(equilibrium_distance())`
/// is zero and `energy(r)` approaches `well_depth()` as `r` grows without bound.
pub trait ReferencePotential {
    fn equilibrium_distance(&self) -> f64;

    fn well_depth(&self) -> f64;

    fn energy(&self, r: f64) -> f64;

    /// Natural length over which the potential changes appreciably; used to size
    /// the first bracket step when searching for a crossing.
    fn length_scale(&self) -> f64;
}
