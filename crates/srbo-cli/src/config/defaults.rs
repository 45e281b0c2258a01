use srbogrid::engine::config::{BoundaryConfig, GridSpec};

pub struct DefaultsConfig {
    pub v_fact: f64,
    pub v_thrs: f64,
    pub nrep: usize,
    pub natt: usize,
    pub curve_samples: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let boundaries = BoundaryConfig::default();
        let grid = GridSpec::default();
        Self {
            v_fact: boundaries.v_fact,
            v_thrs: boundaries.v_thrs,
            nrep: grid.nrep,
            natt: grid.natt,
            curve_samples: 100,
        }
    }
}
