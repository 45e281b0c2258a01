//! # Engine Module
//!
//! The two numerical stages that turn physical parameters into a grid.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Boundary thresholds, point counts and solver budgets
//! - **Boundary Solver** ([`boundaries`]) - Locates `rmin`/`rmax` on the reference potential
//!   and solves for the bond-order exponent `beta`
//! - **Grid Builder** ([`builder`]) - Samples bond order uniformly on each branch and maps
//!   the samples back to distances
//! - **Error Handling** ([`error`]) - The [`error::GridError`] taxonomy shared by both stages
//!
//! Both stages are pure functions of their inputs; nothing here holds state.

pub mod boundaries;
pub mod builder;
pub mod config;
pub mod error;
