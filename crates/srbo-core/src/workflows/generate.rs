use crate::core::io::table::{CurveKind, CurveRecord, GridRecord};
use crate::core::models::params::PhysicalParameters;
use crate::core::potentials::ReferencePotential;
use crate::core::potentials::morse::Morse;
use crate::engine::boundaries::{Boundaries, derive_boundaries};
use crate::engine::builder::{BondOrderTransform, build_grid};
use crate::engine::config::{GridConfig, GridSpec};
use crate::engine::error::GridError;
use std::fmt;
use tracing::{info, instrument};

/// A space-reduced bond-order grid for one diatomic molecule.
///
/// All quantities are computed in [`BondOrderGrid::new`]; the object is immutable
/// afterwards. Build a new one to change any input.
#[derive(Debug, Clone, PartialEq)]
pub struct BondOrderGrid {
    params: PhysicalParameters,
    alpha: f64,
    spec: GridSpec,
    boundaries: Boundaries,
    points: Vec<f64>,
}

impl BondOrderGrid {
    #[instrument(skip_all, name = "grid_generation")]
    pub fn new(params: PhysicalParameters, config: &GridConfig) -> Result<Self, GridError> {
        params.validate()?;
        config.validate()?;
        let alpha = params.alpha()?;

        let boundaries =
            derive_boundaries(&params, &config.boundaries, &config.grid, &config.solver)?;
        let points = build_grid(params.re, &boundaries, &config.grid)?;

        info!(
            npoints = points.len(),
            rmin = boundaries.rmin,
            rmax = boundaries.rmax,
            beta = boundaries.beta,
            "Generated bond-order grid"
        );
        Ok(Self {
            params,
            alpha,
            spec: config.grid,
            boundaries,
            points,
        })
    }

    pub fn with_defaults(params: PhysicalParameters) -> Result<Self, GridError> {
        Self::new(params, &GridConfig::default())
    }

    /// Grid distances in ascending order; `Re` sits at index `nrep`.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }

    pub fn parameters(&self) -> &PhysicalParameters {
        &self.params
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn branch_ratio(&self) -> f64 {
        self.spec.branch_ratio()
    }

    pub fn npoints(&self) -> usize {
        self.points.len()
    }

    pub fn transform(&self) -> BondOrderTransform {
        BondOrderTransform::new(self.params.re, self.boundaries.beta)
    }

    pub fn bond_orders(&self) -> Vec<f64> {
        let transform = self.transform();
        self.points
            .iter()
            .map(|&r| transform.to_bond_order(r))
            .collect()
    }

    /// The Morse reference potential the boundaries were derived from.
    pub fn potential(&self) -> Morse {
        Morse::new(self.params.re, self.params.de, self.alpha)
    }

    /// `samples` evenly spaced points of the reference potential over `[rmin, rmax]`.
    pub fn potential_curve(&self, samples: usize) -> Result<Vec<CurveRecord>, GridError> {
        if samples < 2 {
            return Err(GridError::InvalidGridSpec(format!(
                "a potential curve needs at least 2 samples, got {}",
                samples
            )));
        }
        let morse = self.potential();
        let Boundaries { rmin, rmax, .. } = self.boundaries;
        let step = (rmax - rmin) / (samples - 1) as f64;

        Ok((0..samples)
            .map(|i| {
                let distance = if i == samples - 1 {
                    rmax
                } else {
                    rmin + i as f64 * step
                };
                CurveRecord {
                    kind: CurveKind::Curve,
                    distance,
                    energy: morse.energy(distance),
                }
            })
            .collect())
    }

    /// Grid points placed on the reference potential, for overlaying on the curve.
    pub fn grid_overlay(&self) -> Vec<CurveRecord> {
        let morse = self.potential();
        self.points
            .iter()
            .map(|&distance| CurveRecord {
                kind: CurveKind::Grid,
                distance,
                energy: morse.energy(distance),
            })
            .collect()
    }

    pub fn records(&self) -> Vec<GridRecord> {
        let morse = self.potential();
        let transform = self.transform();
        self.points
            .iter()
            .enumerate()
            .map(|(index, &distance)| GridRecord {
                index,
                distance,
                bond_order: transform.to_bond_order(distance),
                energy: morse.energy(distance),
            })
            .collect()
    }

    /// Text report of the inputs, boundaries and grid points.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, label: &str, value: f64) -> fmt::Result {
    writeln!(f, "\t{:<10}: {:>10.6}", label, value)
}

fn write_count(f: &mut fmt::Formatter<'_>, label: &str, value: usize) -> fmt::Result {
    writeln!(f, "\t{:<10}: {:>10}", label, value)
}

impl fmt::Display for BondOrderGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System info:")?;
        write_float(f, "Re", self.params.re)?;
        write_float(f, "De", self.params.de)?;
        write_float(f, "ke", self.params.ke)?;
        write_float(f, "alpha", self.alpha)?;

        writeln!(f, "\nBoundaries:")?;
        write_float(f, "rmin", self.boundaries.rmin)?;
        write_float(f, "rmax", self.boundaries.rmax)?;
        write_float(f, "Vfact", self.boundaries.v_fact)?;
        write_float(f, "Vthrs", self.boundaries.v_thrs)?;

        writeln!(f)?;
        write_float(f, "beta", self.boundaries.beta)?;

        writeln!(f, "\nGrid:")?;
        write_count(f, "nrep", self.spec.nrep)?;
        write_count(f, "natt", self.spec.natt)?;
        write_count(f, "npoints", self.npoints())?;
        write_float(f, "f", self.branch_ratio())?;

        writeln!(f, "\nGrid points:")?;
        for (i, r) in self.points.iter().enumerate() {
            writeln!(f, "\t{:>4}: {:>14.8}", i, r)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::params::DomainError;
    use crate::engine::config::GridConfigBuilder;

    const TOLERANCE: f64 = 1e-5;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn h2_like() -> PhysicalParameters {
        PhysicalParameters {
            re: 1.4034,
            de: 0.1727,
            ke: 0.3707,
        }
    }

    #[test]
    fn documented_example_produces_expected_grid() {
        let grid = BondOrderGrid::with_defaults(h2_like()).unwrap();
        let points = grid.points();

        assert_eq!(points.len(), 16);
        assert_eq!(points[5], 1.4034);
        assert!(f64_approx_equal(points[0], 0.63152744));
        assert!(f64_approx_equal(points[15], 8.7400997));
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn outer_points_match_boundaries() {
        let grid = BondOrderGrid::with_defaults(h2_like()).unwrap();
        let boundaries = grid.boundaries();
        assert!(boundaries.rmin < 1.4034 && 1.4034 < boundaries.rmax);
        assert!((grid.points()[0] - boundaries.rmin).abs() < 1e-9);
        assert!((grid.points()[15] - boundaries.rmax).abs() < 1e-9);
    }

    #[test]
    fn zero_dissociation_energy_is_rejected() {
        let params = PhysicalParameters {
            de: 0.0,
            ..h2_like()
        };
        let result = BondOrderGrid::with_defaults(params);
        assert!(matches!(
            result,
            Err(GridError::Domain(DomainError::NonPositive { name: "De", .. }))
        ));
    }

    #[test]
    fn zero_repulsive_points_is_rejected() {
        let mut config = GridConfig::default();
        config.grid.nrep = 0;
        let result = BondOrderGrid::new(h2_like(), &config);
        assert!(matches!(result, Err(GridError::InvalidGridSpec(_))));
    }

    #[test]
    fn identical_inputs_give_identical_grids() {
        let first = BondOrderGrid::with_defaults(h2_like()).unwrap();
        let second = BondOrderGrid::with_defaults(h2_like()).unwrap();
        assert_eq!(first.points(), second.points());
        assert_eq!(first, second);
    }

    #[test]
    fn larger_threshold_narrows_the_interval() {
        let tight = GridConfigBuilder::new().v_thrs(0.01).build().unwrap();
        let loose = GridConfigBuilder::new().v_thrs(0.0001).build().unwrap();
        let default = BondOrderGrid::with_defaults(h2_like()).unwrap();
        let tight = BondOrderGrid::new(h2_like(), &tight).unwrap();
        let loose = BondOrderGrid::new(h2_like(), &loose).unwrap();

        let width = |g: &BondOrderGrid| g.boundaries().rmax - g.boundaries().rmin;
        assert!(width(&tight) < width(&default));
        assert!(width(&default) < width(&loose));
    }

    #[test]
    fn custom_counts_keep_equilibrium_at_index_nrep() {
        let config = GridConfigBuilder::new().nrep(3).natt(8).build().unwrap();
        let grid = BondOrderGrid::new(h2_like(), &config).unwrap();
        assert_eq!(grid.npoints(), 12);
        assert_eq!(grid.points()[3], 1.4034);
        assert!((grid.branch_ratio() - 8.0 / 3.0).abs() < 1e-15);
    }

    fn assert_valid_layout(grid: &BondOrderGrid, nrep: usize, natt: usize) {
        let points = grid.points();
        assert_eq!(points.len(), nrep + natt + 1);
        assert_eq!(points[nrep], 1.4034);
        assert!(points.windows(2).all(|w| w[0] < w[1]), "{points:?}");
        assert!((points[0] - grid.boundaries().rmin).abs() < 1e-9);
        assert!((points[nrep + natt] - grid.boundaries().rmax).abs() < 1e-9);
    }

    #[test]
    fn single_point_per_branch_spans_the_boundaries() {
        let config = GridConfigBuilder::new().nrep(1).natt(1).build().unwrap();
        let grid = BondOrderGrid::new(h2_like(), &config).unwrap();
        assert_valid_layout(&grid, 1, 1);
    }

    #[test]
    fn lopsided_counts_past_the_ratio_limit_still_build() {
        for (nrep, natt) in [(1, 9), (1, 10), (1, 20), (2, 25)] {
            let config = GridConfigBuilder::new().nrep(nrep).natt(natt).build().unwrap();
            let grid = BondOrderGrid::new(h2_like(), &config).unwrap();
            assert_valid_layout(&grid, nrep, natt);
        }

        let config = GridConfigBuilder::new().nrep(1).natt(10).build().unwrap();
        let grid = BondOrderGrid::new(h2_like(), &config).unwrap();
        assert_eq!(grid.boundaries().beta, grid.alpha());
    }

    #[test]
    fn explicit_ratio_past_the_limit_uses_morse_exponent() {
        let config = GridConfigBuilder::new().f(12.0).build().unwrap();
        let grid = BondOrderGrid::new(h2_like(), &config).unwrap();
        assert_eq!(grid.boundaries().beta, grid.alpha());
        assert_valid_layout(&grid, 5, 10);
    }

    #[test]
    fn explicit_branch_ratio_changes_beta_but_not_boundaries() {
        let config = GridConfigBuilder::new().f(1.0).build().unwrap();
        let skewed = BondOrderGrid::new(h2_like(), &config).unwrap();
        let default = BondOrderGrid::with_defaults(h2_like()).unwrap();

        assert_eq!(skewed.boundaries().rmin, default.boundaries().rmin);
        assert_eq!(skewed.boundaries().rmax, default.boundaries().rmax);
        assert!(skewed.boundaries().beta > default.boundaries().beta);
        assert!(skewed.points().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(skewed.points()[5], 1.4034);
    }

    #[test]
    fn explicit_boundaries_are_used_verbatim() {
        let config = GridConfigBuilder::new().rmin(0.8).rmax(6.0).build().unwrap();
        let grid = BondOrderGrid::new(h2_like(), &config).unwrap();
        assert_eq!(grid.boundaries().rmin, 0.8);
        assert_eq!(grid.boundaries().rmax, 6.0);
        assert!(grid.boundaries().v_fact < 1.5);
        assert!(grid.boundaries().v_thrs > 0.001);
    }

    #[test]
    fn bond_orders_decrease_and_equal_one_at_equilibrium() {
        let grid = BondOrderGrid::with_defaults(h2_like()).unwrap();
        let orders = grid.bond_orders();
        assert_eq!(orders[5], 1.0);
        assert!(orders.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn bond_orders_are_evenly_spaced_for_default_ratio() {
        let grid = BondOrderGrid::with_defaults(h2_like()).unwrap();
        let orders = grid.bond_orders();
        let steps: Vec<f64> = orders.windows(2).map(|w| w[0] - w[1]).collect();
        for step in &steps {
            assert!((step - steps[0]).abs() < 1e-10);
        }
    }

    #[test]
    fn potential_curve_spans_the_boundaries() {
        let grid = BondOrderGrid::with_defaults(h2_like()).unwrap();
        let curve = grid.potential_curve(100).unwrap();
        assert_eq!(curve.len(), 100);
        assert_eq!(curve[0].distance, grid.boundaries().rmin);
        assert_eq!(curve[99].distance, grid.boundaries().rmax);
        assert!((curve[0].energy - 1.5 * 0.1727).abs() < 1e-9);
        assert!((curve[99].energy - 0.999 * 0.1727).abs() < 1e-9);
        assert!(curve.iter().all(|p| p.kind == CurveKind::Curve));
    }

    #[test]
    fn potential_curve_needs_two_samples() {
        let grid = BondOrderGrid::with_defaults(h2_like()).unwrap();
        assert!(matches!(
            grid.potential_curve(1),
            Err(GridError::InvalidGridSpec(_))
        ));
    }

    #[test]
    fn grid_overlay_has_zero_energy_at_equilibrium() {
        let grid = BondOrderGrid::with_defaults(h2_like()).unwrap();
        let overlay = grid.grid_overlay();
        assert_eq!(overlay.len(), 16);
        assert_eq!(overlay[5].energy, 0.0);
        assert!(overlay.iter().all(|p| p.kind == CurveKind::Grid));
    }

    #[test]
    fn records_carry_index_distance_and_bond_order() {
        let grid = BondOrderGrid::with_defaults(h2_like()).unwrap();
        let records = grid.records();
        assert_eq!(records.len(), 16);
        assert_eq!(records[5].index, 5);
        assert_eq!(records[5].distance, 1.4034);
        assert_eq!(records[5].bond_order, 1.0);
    }

    #[test]
    fn summary_lists_all_sections_and_points() {
        let grid = BondOrderGrid::with_defaults(h2_like()).unwrap();
        let summary = grid.summary();

        assert!(summary.starts_with("System info:\n\tRe        :   1.403400\n"));
        assert!(summary.contains("\talpha     :   1.035977\n"));
        assert!(summary.contains("\nBoundaries:\n\trmin      :   0.631527\n"));
        assert!(summary.contains("\trmax      :   8.740100\n"));
        assert!(summary.contains("\tVfact     :   1.500000\n"));
        assert!(summary.contains("\tVthrs     :   0.001000\n"));
        assert!(summary.contains("\tbeta      :   0.515422\n"));
        assert!(summary.contains("\tnrep      :          5\n"));
        assert!(summary.contains("\tnatt      :         10\n"));
        assert!(summary.contains("\tnpoints   :         16\n"));
        assert!(summary.contains("\tf         :   2.000000\n"));
        assert!(summary.contains("\t   5:     1.40340000\n"));
        assert_eq!(summary.lines().filter(|l| l.contains(':')).count(), 17 + 16);
    }
}
