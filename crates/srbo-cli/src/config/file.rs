use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileMoleculeConfig {
    pub re: Option<f64>,
    pub de: Option<f64>,
    pub ke: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileBoundaryConfig {
    #[serde(rename = "v-fact")]
    pub v_fact: Option<f64>,
    #[serde(rename = "v-thrs")]
    pub v_thrs: Option<f64>,
    pub rmin: Option<f64>,
    pub rmax: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileGridConfig {
    pub nrep: Option<usize>,
    pub natt: Option<usize>,
    #[serde(rename = "branch-ratio")]
    pub branch_ratio: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub molecule: Option<FileMoleculeConfig>,
    pub boundaries: Option<FileBoundaryConfig>,
    pub grid: Option<FileGridConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
