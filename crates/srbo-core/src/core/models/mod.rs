//! Physical input data describing the diatomic molecule.

pub mod params;
