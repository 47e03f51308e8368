pub mod toml_config;

use crate::core::store::DEFAULT_CAPACITY;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use std::path::{Path, PathBuf};
use toml_config::{TomlConfig, MAX_CAPACITY};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "marina")]
#[command(about = "Keeps track of the boats in a marina and what they owe")]
pub struct CliConfig {
    /// Boat data file, loaded at start and saved on exit
    pub data_file: PathBuf,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum number of boats (overrides the settings file)
    #[arg(long)]
    pub capacity: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Resolved configuration: command line over settings file over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: PathBuf,
    pub capacity: usize,
}

impl Settings {
    pub fn merge(data_file: PathBuf, capacity: Option<usize>, file: Option<&TomlConfig>) -> Self {
        let capacity = capacity
            .or_else(|| file.and_then(TomlConfig::capacity))
            .unwrap_or(DEFAULT_CAPACITY);
        Self {
            data_file,
            capacity,
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let settings = Self::merge(cli.data_file.clone(), cli.capacity, file.as_ref());
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file.to_string_lossy())?;
        validate_range("capacity", self.capacity, 1, MAX_CAPACITY)
    }
}
