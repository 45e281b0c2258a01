use super::boundaries::Boundaries;
use super::config::GridSpec;
use super::error::GridError;
use tracing::{instrument, trace};

/// Bond-order coordinate `n(r) = exp(-beta (r - Re))`.
///
/// `n` equals one at equilibrium and decreases as the bond stretches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondOrderTransform {
    re: f64,
    beta: f64,
}

impl BondOrderTransform {
    pub fn new(re: f64, beta: f64) -> Self {
        Self { re, beta }
    }

    #[inline]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[inline]
    pub fn to_bond_order(&self, r: f64) -> f64 {
        (-self.beta * (r - self.re)).exp()
    }

    #[inline]
    pub fn to_distance(&self, n: f64) -> f64 {
        self.re - n.ln() / self.beta
    }
}

/// Places `nrep` points on the repulsive branch and `natt` on the attractive branch,
/// uniformly spaced in bond order, and returns the distances in ascending order.
///
/// The outermost point of each branch sits on the boundary (`rmin` or `rmax`) and
/// `Re` is stored exactly at index `nrep`.
#[instrument(level = "debug", skip(boundaries, spec), fields(nrep = spec.nrep, natt = spec.natt))]
pub fn build_grid(re: f64, boundaries: &Boundaries, spec: &GridSpec) -> Result<Vec<f64>, GridError> {
    spec.validate()?;
    let transform = BondOrderTransform::new(re, boundaries.beta);

    let n0 = 1.0;
    let n_min = transform.to_bond_order(boundaries.rmax);
    let n_max = transform.to_bond_order(boundaries.rmin);
    trace!(n_min, n_max, "Bond-order span");

    let rep_step = (n_max - n0) / spec.nrep as f64;
    let att_step = (n0 - n_min) / spec.natt as f64;

    let mut points = Vec::with_capacity(spec.npoints());
    points.extend(
        (1..=spec.nrep)
            .rev()
            .map(|k| transform.to_distance(n0 + k as f64 * rep_step)),
    );
    points.push(re);
    points.extend((1..=spec.natt).map(|k| transform.to_distance(n0 - k as f64 * att_step)));

    check_strictly_increasing(&points)?;
    Ok(points)
}

pub fn check_strictly_increasing(points: &[f64]) -> Result<(), GridError> {
    for (index, pair) in points.windows(2).enumerate() {
        // `!(a < b)` also catches NaN.
        if !(pair[0] < pair[1]) {
            return Err(GridError::NonMonotonicGrid {
                index: index + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}
