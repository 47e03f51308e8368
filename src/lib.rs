pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod shell;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::Settings;
pub use core::{repository::Repository, store::Store};
pub use domain::location::{Location, LocationKind};
pub use domain::model::Record;
pub use shell::Shell;
pub use utils::error::{MarinaError, Result};
