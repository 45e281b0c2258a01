use crate::core::models::params::DomainError;
use crate::core::numeric::root::RootError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("Non-physical input: {0}")]
    Domain(#[from] DomainError),

    #[error("Boundaries violate rmin < Re < rmax: rmin = {rmin}, Re = {re}, rmax = {rmax}")]
    InvalidBoundary { rmin: f64, re: f64, rmax: f64 },

    #[error("Failed to determine {quantity}: {source}")]
    BoundaryNotFound {
        quantity: &'static str,
        #[source]
        source: RootError,
    },

    #[error(
        "Branch ratio {f} is unreachable: it must stay below (rmax - Re) / (Re - rmin) = {limit}"
    )]
    UnreachableBranchRatio { f: f64, limit: f64 },

    #[error("Invalid grid specification: {0}")]
    InvalidGridSpec(String),

    #[error(
        "Grid is not strictly increasing at index {index}: {previous} is followed by {current}"
    )]
    NonMonotonicGrid {
        index: usize,
        previous: f64,
        current: f64,
    },
}
