use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::SystemArgs;
use crate::error::{CliError, Result};
use srbogrid::core::models::params::PhysicalParameters;
use srbogrid::engine::config::GridConfigBuilder;
use srbogrid::engine::error::GridError;
use std::str::FromStr;

pub fn build_config(args: &SystemArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let molecule_file = file_config.molecule.take().unwrap_or_default();
    let require = |cli: Option<f64>, file: Option<f64>, key: &str| -> Result<f64> {
        cli.or(file).ok_or_else(|| {
            CliError::Config(format!(
                "A value for '{}' is required either in the config file or via CLI argument.",
                key
            ))
        })
    };
    let re = require(args.re, molecule_file.re, "re")?;
    let de = require(args.de, molecule_file.de, "de")?;
    let ke = require(args.ke, molecule_file.ke, "ke")?;
    let params = PhysicalParameters::new(re, de, ke).map_err(GridError::from)?;

    let boundary_file = file_config.boundaries.take().unwrap_or_default();
    let grid_file = file_config.grid.take().unwrap_or_default();

    let mut builder = GridConfigBuilder::new()
        .v_fact(args.v_fact.or(boundary_file.v_fact).unwrap_or(defaults.v_fact))
        .v_thrs(args.v_thrs.or(boundary_file.v_thrs).unwrap_or(defaults.v_thrs))
        .nrep(args.nrep.or(grid_file.nrep).unwrap_or(defaults.nrep))
        .natt(args.natt.or(grid_file.natt).unwrap_or(defaults.natt));

    if let Some(rmin) = args.rmin.or(boundary_file.rmin) {
        builder = builder.rmin(rmin);
    }
    if let Some(rmax) = args.rmax.or(boundary_file.rmax) {
        builder = builder.rmax(rmax);
    }
    if let Some(f) = args.branch_ratio.or(grid_file.branch_ratio) {
        builder = builder.f(f);
    }

    let grid_config = builder.build()?;

    Ok(AppConfig {
        params,
        grid_config,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;

        match key {
            "molecule.re" => {
                config.molecule.get_or_insert_with(Default::default).re =
                    Some(parse_value(key, value_str, "float")?);
            }
            "molecule.de" => {
                config.molecule.get_or_insert_with(Default::default).de =
                    Some(parse_value(key, value_str, "float")?);
            }
            "molecule.ke" => {
                config.molecule.get_or_insert_with(Default::default).ke =
                    Some(parse_value(key, value_str, "float")?);
            }
            "boundaries.v-fact" => {
                config.boundaries.get_or_insert_with(Default::default).v_fact =
                    Some(parse_value(key, value_str, "float")?);
            }
            "boundaries.v-thrs" => {
                config.boundaries.get_or_insert_with(Default::default).v_thrs =
                    Some(parse_value(key, value_str, "float")?);
            }
            "boundaries.rmin" => {
                config.boundaries.get_or_insert_with(Default::default).rmin =
                    Some(parse_value(key, value_str, "float")?);
            }
            "boundaries.rmax" => {
                config.boundaries.get_or_insert_with(Default::default).rmax =
                    Some(parse_value(key, value_str, "float")?);
            }
            "grid.nrep" => {
                config.grid.get_or_insert_with(Default::default).nrep =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "grid.natt" => {
                config.grid.get_or_insert_with(Default::default).natt =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "grid.branch-ratio" => {
                config.grid.get_or_insert_with(Default::default).branch_ratio =
                    Some(parse_value(key, value_str, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
