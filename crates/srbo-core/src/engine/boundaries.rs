use super::config::{BoundaryConfig, GridSpec};
use super::error::GridError;
use crate::core::models::params::{PhysicalParameters, compute_alpha};
use crate::core::numeric::root::{
    RootError, RootOptions, find_root_outward, march_bracket, ridders,
};
use crate::core::potentials::ReferencePotential;
use crate::core::potentials::morse::Morse;
use tracing::{debug, instrument, warn};

const BETA_BRACKET: (f64, f64) = (0.001, 2.0);

/// Distance interval and reference energies before the shape exponent is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRange {
    pub rmin: f64,
    pub rmax: f64,
    pub v_fact: f64,
    pub v_thrs: f64,
}

/// Physical boundaries of the grid together with the bond-order exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    pub rmin: f64,
    pub rmax: f64,
    pub v_fact: f64,
    pub v_thrs: f64,
    pub beta: f64,
}

/// Finds the distance on one side of the well where the potential reaches `energy`.
///
/// The search starts at the equilibrium distance and marches outward, towards
/// shorter distances when `repulsive` is set.
pub fn locate_crossing<P>(
    potential: &P,
    energy: f64,
    repulsive: bool,
    options: &RootOptions,
) -> Result<f64, RootError>
where
    P: ReferencePotential,
{
    let anchor = potential.equilibrium_distance();
    let direction = if repulsive { -1.0 } else { 1.0 };
    let step = direction * options.initial_step * potential.length_scale();
    find_root_outward(|r| potential.energy(r) - energy, anchor, step, options)
}

/// Locates `rmin` and `rmax` on an arbitrary reference potential.
///
/// `rmin` sits where `V = v_fact * De` on the repulsive wall and `rmax` where
/// `V = (1 - v_thrs) * De` on the attractive side. Explicit boundaries in `config`
/// bypass the search and back-compute the matching `v_fact` / `v_thrs`.
pub fn locate_boundaries<P>(
    potential: &P,
    config: &BoundaryConfig,
    options: &RootOptions,
) -> Result<BoundaryRange, GridError>
where
    P: ReferencePotential,
{
    config.validate()?;
    let re = potential.equilibrium_distance();
    let de = potential.well_depth();

    let (rmin, v_fact) = match config.rmin {
        Some(rmin) => (rmin, potential.energy(rmin) / de),
        None => {
            let rmin = locate_crossing(potential, config.v_fact * de, true, options).map_err(
                |source| GridError::BoundaryNotFound {
                    quantity: "rmin",
                    source,
                },
            )?;
            (rmin, config.v_fact)
        }
    };

    let (rmax, v_thrs) = match config.rmax {
        Some(rmax) => (rmax, (de - potential.energy(rmax)) / de),
        None => {
            let rmax = locate_crossing(potential, (1.0 - config.v_thrs) * de, false, options)
                .map_err(|source| GridError::BoundaryNotFound {
                    quantity: "rmax",
                    source,
                })?;
            (rmax, config.v_thrs)
        }
    };

    if !(0.0 < rmin && rmin < re && re < rmax) {
        return Err(GridError::InvalidBoundary { rmin, re, rmax });
    }

    debug!(rmin, rmax, v_fact, v_thrs, "Located grid boundaries");
    Ok(BoundaryRange {
        rmin,
        rmax,
        v_fact,
        v_thrs,
    })
}

/// Boundaries of the Morse reference potential built from `params`.
#[instrument(level = "debug", skip_all, fields(re = params.re, de = params.de, ke = params.ke))]
pub fn solve_boundaries(
    params: &PhysicalParameters,
    config: &BoundaryConfig,
    options: &RootOptions,
) -> Result<BoundaryRange, GridError> {
    let morse = Morse::from_parameters(params)?;
    locate_boundaries(&morse, config, options)
}

/// Ratio of the bond-order span on the attractive branch to the span on the
/// repulsive branch, for a given `beta`.
#[inline]
pub fn branch_span_ratio(beta: f64, re: f64, rmin: f64, rmax: f64) -> f64 {
    let attractive = -(-beta * (rmax - re)).exp_m1();
    let repulsive = (beta * (re - rmin)).exp_m1();
    attractive / repulsive
}

/// Upper bound of [`branch_span_ratio`], reached as `beta -> 0`.
#[inline]
pub fn branch_ratio_limit(re: f64, rmin: f64, rmax: f64) -> f64 {
    (rmax - re) / (re - rmin)
}

/// Solves for the bond-order exponent that gives a branch span ratio of `f`.
///
/// The ratio falls monotonically from [`branch_ratio_limit`] as `beta -> 0`
/// towards zero, so a solution exists only for `f` below that limit; anything
/// else is reported as [`GridError::UnreachableBranchRatio`] without searching.
#[instrument(level = "debug", skip(options))]
pub fn solve_beta(
    re: f64,
    rmin: f64,
    rmax: f64,
    f: f64,
    options: &RootOptions,
) -> Result<f64, GridError> {
    if !(rmin < re && re < rmax) {
        return Err(GridError::InvalidBoundary { rmin, re, rmax });
    }
    let limit = branch_ratio_limit(re, rmin, rmax);
    if !(f < limit) {
        return Err(GridError::UnreachableBranchRatio { f, limit });
    }
    let residual = |beta: f64| branch_span_ratio(beta, re, rmin, rmax) - f;
    let not_found = |source: RootError| GridError::BoundaryNotFound {
        quantity: "beta",
        source,
    };

    let (lower, upper) = BETA_BRACKET;
    let (lower, upper) = if residual(lower) * residual(upper) <= 0.0 {
        (lower, upper)
    } else {
        march_bracket(residual, lower, upper - lower, options).map_err(not_found)?
    };
    let beta = ridders(residual, lower, upper, options).map_err(not_found)?;

    debug!(beta, "Solved bond-order exponent");
    Ok(beta)
}

/// Runs the full boundary stage: physical interval first, then `beta`.
///
/// When the branch ratio cannot be met (very lopsided `natt / nrep`, or an explicit
/// `f` past the limit) `beta` falls back to the Morse exponent `alpha`. Each branch
/// is still sampled uniformly in bond order, so the grid stays valid; only the two
/// branches no longer share a common step.
pub fn derive_boundaries(
    params: &PhysicalParameters,
    config: &BoundaryConfig,
    spec: &GridSpec,
    options: &RootOptions,
) -> Result<Boundaries, GridError> {
    spec.validate()?;
    let range = solve_boundaries(params, config, options)?;
    let beta = match solve_beta(params.re, range.rmin, range.rmax, spec.branch_ratio(), options) {
        Err(GridError::UnreachableBranchRatio { f, limit }) => {
            let alpha = compute_alpha(params.de, params.ke)?;
            warn!(
                f,
                limit,
                beta = alpha,
                "Branch ratio unreachable, using Morse exponent for beta"
            );
            alpha
        }
        other => other?,
    };
    Ok(Boundaries {
        rmin: range.rmin,
        rmax: range.rmax,
        v_fact: range.v_fact,
        v_thrs: range.v_thrs,
        beta,
    })
}
