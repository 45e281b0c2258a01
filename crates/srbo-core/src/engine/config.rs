use super::error::GridError;
use crate::core::models::params::{DomainError, require_positive};
use crate::core::numeric::root::RootOptions;

/// How far up the walls of the reference well the grid extends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryConfig {
    /// `V(rmin) / De` on the repulsive wall.
    pub v_fact: f64,
    /// `(De - V(rmax)) / De` on the attractive side.
    pub v_thrs: f64,
    /// Explicit inner boundary; replaces the search driven by `v_fact`.
    pub rmin: Option<f64>,
    /// Explicit outer boundary; replaces the search driven by `v_thrs`.
    pub rmax: Option<f64>,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            v_fact: 1.5,
            v_thrs: 0.001,
            rmin: None,
            rmax: None,
        }
    }
}

impl BoundaryConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.rmin.is_none() {
            require_positive("Vfact", self.v_fact)?;
        }
        if self.rmax.is_none() {
            require_positive("Vthrs", self.v_thrs)?;
            if self.v_thrs >= 1.0 {
                return Err(DomainError::OutOfRange {
                    name: "Vthrs",
                    value: self.v_thrs,
                    lower: 0.0,
                    upper: 1.0,
                });
            }
        }
        if let Some(rmin) = self.rmin {
            require_positive("rmin", rmin)?;
        }
        if let Some(rmax) = self.rmax {
            require_positive("rmax", rmax)?;
        }
        Ok(())
    }
}

/// Number of points on each branch and the density ratio between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Points strictly inside `Re` (repulsive branch).
    pub nrep: usize,
    /// Points strictly outside `Re` (attractive branch).
    pub natt: usize,
    /// Branch ratio used to solve for `beta`.
    ///
    /// When unset it follows the point counts, `natt / nrep`, which is 2.0 for the
    /// default 5/10 split but e.g. 8/3 for `nrep = 3, natt = 8`. That choice gives
    /// both branches the same bond-order step. Set it explicitly to decouple the
    /// clustering from the counts.
    pub f: Option<f64>,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            nrep: 5,
            natt: 10,
            f: None,
        }
    }
}

impl GridSpec {
    pub fn validate(&self) -> Result<(), GridError> {
        if self.nrep < 1 {
            return Err(GridError::InvalidGridSpec(format!(
                "nrep must be at least 1, got {}",
                self.nrep
            )));
        }
        if self.natt < 1 {
            return Err(GridError::InvalidGridSpec(format!(
                "natt must be at least 1, got {}",
                self.natt
            )));
        }
        if let Some(f) = self.f {
            if !f.is_finite() || f <= 0.0 {
                return Err(GridError::InvalidGridSpec(format!(
                    "f must be a positive finite number, got {}",
                    f
                )));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn npoints(&self) -> usize {
        self.nrep + self.natt + 1
    }

    #[inline]
    pub fn branch_ratio(&self) -> f64 {
        self.f
            .unwrap_or_else(|| self.natt as f64 / self.nrep as f64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridConfig {
    pub boundaries: BoundaryConfig,
    pub grid: GridSpec,
    pub solver: RootOptions,
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), GridError> {
        self.boundaries.validate()?;
        self.grid.validate()
    }
}

#[derive(Default)]
pub struct GridConfigBuilder {
    v_fact: Option<f64>,
    v_thrs: Option<f64>,
    rmin: Option<f64>,
    rmax: Option<f64>,
    nrep: Option<usize>,
    natt: Option<usize>,
    f: Option<f64>,
    solver: Option<RootOptions>,
}

impl GridConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn v_fact(mut self, v_fact: f64) -> Self {
        self.v_fact = Some(v_fact);
        self
    }
    pub fn v_thrs(mut self, v_thrs: f64) -> Self {
        self.v_thrs = Some(v_thrs);
        self
    }
    pub fn rmin(mut self, rmin: f64) -> Self {
        self.rmin = Some(rmin);
        self
    }
    pub fn rmax(mut self, rmax: f64) -> Self {
        self.rmax = Some(rmax);
        self
    }
    pub fn nrep(mut self, nrep: usize) -> Self {
        self.nrep = Some(nrep);
        self
    }
    pub fn natt(mut self, natt: usize) -> Self {
        self.natt = Some(natt);
        self
    }
    pub fn f(mut self, f: f64) -> Self {
        self.f = Some(f);
        self
    }
    pub fn solver(mut self, options: RootOptions) -> Self {
        self.solver = Some(options);
        self
    }

    pub fn build(self) -> Result<GridConfig, GridError> {
        let boundary_defaults = BoundaryConfig::default();
        let grid_defaults = GridSpec::default();

        let config = GridConfig {
            boundaries: BoundaryConfig {
                v_fact: self.v_fact.unwrap_or(boundary_defaults.v_fact),
                v_thrs: self.v_thrs.unwrap_or(boundary_defaults.v_thrs),
                rmin: self.rmin,
                rmax: self.rmax,
            },
            grid: GridSpec {
                nrep: self.nrep.unwrap_or(grid_defaults.nrep),
                natt: self.natt.unwrap_or(grid_defaults.natt),
                f: self.f,
            },
            solver: self.solver.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_overrides_uses_documented_defaults() {
        let config = GridConfigBuilder::new().build().unwrap();
        assert_eq!(config.boundaries.v_fact, 1.5);
        assert_eq!(config.boundaries.v_thrs, 0.001);
        assert_eq!(config.grid.nrep, 5);
        assert_eq!(config.grid.natt, 10);
        assert_eq!(config.grid.branch_ratio(), 2.0);
        assert_eq!(config.grid.npoints(), 16);
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn builder_applies_overrides() {
        let config = GridConfigBuilder::new()
            .nrep(4)
            .natt(12)
            .f(2.5)
            .v_thrs(0.01)
            .build()
            .unwrap();
        assert_eq!(config.grid.npoints(), 17);
        assert_eq!(config.grid.branch_ratio(), 2.5);
        assert_eq!(config.boundaries.v_thrs, 0.01);
    }

    #[test]
    fn zero_repulsive_points_is_rejected() {
        let result = GridConfigBuilder::new().nrep(0).build();
        assert!(matches!(result, Err(GridError::InvalidGridSpec(_))));
    }

    #[test]
    fn zero_attractive_points_is_rejected() {
        let spec = GridSpec {
            natt: 0,
            ..GridSpec::default()
        };
        assert!(matches!(spec.validate(), Err(GridError::InvalidGridSpec(_))));
    }

    #[test]
    fn branch_ratio_follows_counts_unless_set() {
        assert_eq!(GridSpec::default().branch_ratio(), 2.0);

        let spec = GridSpec {
            nrep: 3,
            natt: 8,
            f: None,
        };
        assert!((spec.branch_ratio() - 8.0 / 3.0).abs() < 1e-15);

        let spec = GridSpec {
            f: Some(2.0),
            ..spec
        };
        assert_eq!(spec.branch_ratio(), 2.0);
    }

    #[test]
    fn non_positive_branch_ratio_is_rejected() {
        let result = GridConfigBuilder::new().f(0.0).build();
        assert!(matches!(result, Err(GridError::InvalidGridSpec(_))));
    }

    #[test]
    fn threshold_of_one_is_out_of_range() {
        let result = GridConfigBuilder::new().v_thrs(1.0).build();
        assert!(matches!(
            result,
            Err(GridError::Domain(DomainError::OutOfRange { name: "Vthrs", .. }))
        ));
    }

    #[test]
    fn explicit_boundaries_skip_threshold_validation() {
        let config = BoundaryConfig {
            v_fact: -1.0,
            v_thrs: 5.0,
            rmin: Some(0.7),
            rmax: Some(6.0),
        };
        assert!(config.validate().is_ok());
    }
}
