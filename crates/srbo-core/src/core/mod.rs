//! # Core Module
//!
//! Stateless building blocks for space-reduced bond-order grids.
//!
//! ## Architecture
//!
//! - **Molecular Input** ([`models`]) - Physical parameters of the diatomic and their validation
//! - **Reference Potentials** ([`potentials`]) - The single-well model used to locate the
//!   physically relevant distance interval
//! - **Numerics** ([`numeric`]) - A bracketed root finder decoupled from any potential
//! - **Export** ([`io`]) - CSV output of grid points and reference curves

pub mod io;
pub mod models;
pub mod numeric;
pub mod potentials;
