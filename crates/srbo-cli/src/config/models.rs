use srbogrid::core::models::params::PhysicalParameters;
use srbogrid::engine::config::GridConfig;

pub struct AppConfig {
    pub params: PhysicalParameters,
    pub grid_config: GridConfig,
}
