use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RootError {
    #[error("No sign change in [{lower}, {upper}] after {expansions} bracket expansion(s)")]
    NoSignChange {
        lower: f64,
        upper: f64,
        expansions: usize,
    },

    #[error("Root search did not converge within {iterations} iterations")]
    MaxIterations { iterations: usize },

    #[error("Function evaluated to a non-finite value at x = {x}")]
    NonFinite { x: f64 },
}

/// Iteration and tolerance budget shared by the bracketing and refinement stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootOptions {
    /// Absolute tolerance on the root location.
    pub x_tol: f64,
    /// Relative tolerance on the root location.
    pub r_tol: f64,
    pub max_iterations: usize,
    /// First outward step when marching a bracket, in units of the caller's length scale.
    pub initial_step: f64,
    pub max_expansions: usize,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            x_tol: 2e-12,
            r_tol: 4.0 * f64::EPSILON,
            max_iterations: 100,
            initial_step: 0.1,
            max_expansions: 60,
        }
    }
}

impl RootOptions {
    #[inline]
    fn tolerance(&self, x: f64) -> f64 {
        self.x_tol + self.r_tol * x.abs()
    }
}

fn evaluate<F>(f: &F, x: f64) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
{
    let value = f(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RootError::NonFinite { x })
    }
}

/// Marches away from `anchor` in the direction of `step` until `f` changes sign.
///
/// The step doubles after every unsuccessful probe and the inner end of the bracket
/// follows the last probe, so the returned interval is never wider than the final step.
/// The pair is returned ordered as `(lower, upper)`.
pub fn march_bracket<F>(
    f: F,
    anchor: f64,
    step: f64,
    options: &RootOptions,
) -> Result<(f64, f64), RootError>
where
    F: Fn(f64) -> f64,
{
    let mut inner = anchor;
    let mut f_inner = evaluate(&f, inner)?;
    let mut step = step;

    for expansion in 0..=options.max_expansions {
        let outer = inner + step;
        let f_outer = f(outer);
        trace!(expansion, inner, outer, f_outer, "Probing bracket");

        if f_outer.is_nan() {
            return Err(RootError::NonFinite { x: outer });
        }
        if f_inner == 0.0 || f_inner.signum() != f_outer.signum() {
            return Ok(if inner < outer {
                (inner, outer)
            } else {
                (outer, inner)
            });
        }
        if !f_outer.is_finite() {
            return Err(RootError::NonFinite { x: outer });
        }

        inner = outer;
        f_inner = f_outer;
        step *= 2.0;
    }

    let (lower, upper) = if anchor < inner {
        (anchor, inner)
    } else {
        (inner, anchor)
    };
    Err(RootError::NoSignChange {
        lower,
        upper,
        expansions: options.max_expansions,
    })
}

/// Ridders' method on a bracket `[a, b]` in which `f` changes sign.
pub fn ridders<F>(f: F, a: f64, b: f64, options: &RootOptions) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
{
    let (mut xl, mut xh) = (a, b);
    let mut fl = evaluate(&f, xl)?;
    let mut fh = evaluate(&f, xh)?;

    if fl == 0.0 {
        return Ok(xl);
    }
    if fh == 0.0 {
        return Ok(xh);
    }
    if fl.signum() == fh.signum() {
        return Err(RootError::NoSignChange {
            lower: a.min(b),
            upper: a.max(b),
            expansions: 0,
        });
    }

    let mut previous: Option<f64> = None;
    for iteration in 0..options.max_iterations {
        let xm = 0.5 * (xl + xh);
        let fm = evaluate(&f, xm)?;
        // `fl` and `fh` always differ in sign here, so `s > 0`.
        let s = (fm * fm - fl * fh).sqrt();

        let direction = if fl >= fh { 1.0 } else { -1.0 };
        let x_new = xm + (xm - xl) * direction * fm / s;
        if let Some(prev) = previous {
            if (x_new - prev).abs() <= options.tolerance(x_new) {
                return Ok(x_new);
            }
        }
        previous = Some(x_new);

        let f_new = evaluate(&f, x_new)?;
        trace!(iteration, x = x_new, f = f_new, "Ridders step");
        if f_new == 0.0 {
            return Ok(x_new);
        }

        if fm.signum() != f_new.signum() {
            xl = xm;
            fl = fm;
            xh = x_new;
            fh = f_new;
        } else if fl.signum() != f_new.signum() {
            xh = x_new;
            fh = f_new;
        } else {
            xl = x_new;
            fl = f_new;
        }

        if (xh - xl).abs() <= options.tolerance(x_new) {
            return Ok(x_new);
        }
    }

    Err(RootError::MaxIterations {
        iterations: options.max_iterations,
    })
}

/// Brackets a crossing by marching from `anchor` and refines it with [`ridders`].
pub fn find_root_outward<F>(
    f: F,
    anchor: f64,
    step: f64,
    options: &RootOptions,
) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
{
    let (lower, upper) = march_bracket(&f, anchor, step, options)?;
    ridders(&f, lower, upper, options)
}
