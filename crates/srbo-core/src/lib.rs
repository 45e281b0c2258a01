//! # SRBO Grid Library
//!
//! Space-reduced bond-order (SRBO) grids for sampling the potential-energy curve of a
//! diatomic molecule, following Rampino, *J. Phys. Chem. A* **120**, 4683 (2016).
//!
//! Given the equilibrium bond length, dissociation energy and force constant, the
//! library derives the physically relevant distance interval from a Morse reference
//! potential and distributes points inside it uniformly in a bond-order coordinate,
//! which concentrates them where the curve bends most.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Input validation, the reference potential, a generic
//!   bracketed root finder and CSV export.
//!
//! - **[`engine`]: The Logic Core.** The boundary solver and the grid builder, both pure
//!   functions configured through explicit structs with documented defaults.
//!
//! - **[`workflows`]: The Public API.** [`workflows::generate::BondOrderGrid`] runs the
//!   pipeline once and exposes the result.
//!
//! ```
//! use srbogrid::core::models::params::PhysicalParameters;
//! use srbogrid::workflows::generate::BondOrderGrid;
//!
//! let params = PhysicalParameters::new(1.4034, 0.1727, 0.3707)?;
//! let grid = BondOrderGrid::with_defaults(params)?;
//! assert_eq!(grid.points().len(), 16);
//! assert_eq!(grid.points()[5], 1.4034);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
