//! Flight request files and their defaults.

use std::fs::File;
use std::path::{Path, PathBuf};

use accel_core::constants::EARTH_MARS_MIN_DISTANCE_M;
use accel_propulsion::DEFAULT_ENGINE;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_DRY_MASS_KG: f64 = 1_000.0;
pub const DEFAULT_ACCELERATION_M_S2: f64 = 20.0;

/// A flight request as written in a scenario file. Omitted fields fall back to
/// the calculator defaults.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FlightConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_distance")]
    pub distance_m: f64,
    #[serde(default = "default_dry_mass")]
    pub dry_mass_kg: f64,
    #[serde(default = "default_acceleration")]
    pub acceleration_m_s2: f64,
    #[serde(default = "default_engine")]
    pub engine: String,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            name: None,
            distance_m: default_distance(),
            dry_mass_kg: default_dry_mass(),
            acceleration_m_s2: default_acceleration(),
            engine: default_engine(),
        }
    }
}

fn default_distance() -> f64 {
    EARTH_MARS_MIN_DISTANCE_M
}

fn default_dry_mass() -> f64 {
    DEFAULT_DRY_MASS_KG
}

fn default_acceleration() -> f64 {
    DEFAULT_ACCELERATION_M_S2
}

fn default_engine() -> String {
    DEFAULT_ENGINE.to_string()
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Load flight requests from a single file or from every scenario file in a
/// directory (sorted by path).
///
/// A YAML file may hold either one request or a list of them; a TOML file
/// holds exactly one.
pub fn load_flight_configs<P: AsRef<Path>>(path: P) -> Result<Vec<FlightConfig>, ConfigError> {
    let path = path.as_ref();
    let configs = if path.is_dir() {
        read_dir_records(path)?
    } else {
        read_file_records(path)?
    };
    info!(path = %path.display(), count = configs.len(), "loaded flight configs");
    Ok(configs)
}

fn read_file_records(path: &Path) -> Result<Vec<FlightConfig>, ConfigError> {
    match extension(path) {
        Some(Format::Toml) => {
            let contents = std::fs::read_to_string(path)?;
            Ok(vec![toml::from_str(&contents)?])
        }
        Some(Format::Yaml) => {
            let reader = File::open(path)?;
            let records: OneOrMany = serde_yaml::from_reader(reader)?;
            Ok(records.into_vec())
        }
        None => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn read_dir_records(dir: &Path) -> Result<Vec<FlightConfig>, ConfigError> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && extension(path).is_some())
        .collect();
    entries.sort();

    let mut records = Vec::new();
    for path in entries {
        debug!(path = %path.display(), "reading flight config");
        records.extend(read_file_records(&path)?);
    }
    Ok(records)
}

enum Format {
    Toml,
    Yaml,
}

fn extension(path: &Path) -> Option<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Some(Format::Toml),
        Some("yaml") | Some("yml") => Some(Format::Yaml),
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<FlightConfig>),
    One(FlightConfig),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<FlightConfig> {
        match self {
            OneOrMany::Many(records) => records,
            OneOrMany::One(record) => vec![record],
        }
    }
}
