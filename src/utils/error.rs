use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarinaError {
    #[error("Malformed line '{line}': {reason}")]
    MalformedLine { line: String, reason: String },

    #[error("Unknown location kind: {keyword}")]
    UnknownLocationKind { keyword: String },

    #[error("Invalid {kind} value '{value}': {reason}")]
    InvalidAuxiliaryFormat {
        kind: String,
        value: String,
        reason: String,
    },

    #[error("Invalid record field '{field}': {reason}")]
    InvalidRecord { field: String, reason: String },

    #[error("Store is full (capacity {capacity})")]
    StoreFull { capacity: usize },

    #[error("A boat named '{name}' already exists")]
    DuplicateName { name: String },

    #[error("No boat named '{name}'")]
    NotFound { name: String },

    #[error("Payment of {requested} for '{name}' exceeds the amount owed ({owed})")]
    OverPayment {
        name: String,
        owed: Decimal,
        requested: Decimal,
    },

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: String },

    #[error("Unrecognized command: {input}")]
    UnrecognizedCommand { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad text coming from a data file or the console.
    Input,
    /// A collection rule was violated.
    Store,
    Io,
    Config,
}

impl MarinaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MarinaError::MalformedLine { .. }
            | MarinaError::UnknownLocationKind { .. }
            | MarinaError::InvalidAuxiliaryFormat { .. }
            | MarinaError::InvalidRecord { .. }
            | MarinaError::InvalidAmount { .. }
            | MarinaError::UnrecognizedCommand { .. } => ErrorCategory::Input,
            MarinaError::StoreFull { .. }
            | MarinaError::DuplicateName { .. }
            | MarinaError::NotFound { .. }
            | MarinaError::OverPayment { .. } => ErrorCategory::Store,
            MarinaError::IoError(_) => ErrorCategory::Io,
            MarinaError::ConfigError { .. } | MarinaError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// Message shown at the console prompt.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MarinaError::StoreFull { .. } => "Marina is full, cannot add more boats.".to_string(),
            MarinaError::NotFound { .. } => "No boat with that name.".to_string(),
            MarinaError::OverPayment { owed, .. } => format!(
                "That is more than the amount owed, ${}",
                crate::domain::model::to_fixed_2(*owed)
            ),
            MarinaError::DuplicateName { name } => {
                format!("A boat named '{}' is already in the marina.", name)
            }
            MarinaError::UnknownLocationKind { keyword } => {
                format!("Unknown location type: {}", keyword)
            }
            MarinaError::UnrecognizedCommand { input } => format!("Invalid option {}", input),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MarinaError::MalformedLine { .. } | MarinaError::InvalidRecord { .. } => {
                "Use the form name,length,location,extra,amountOwed"
            }
            MarinaError::UnknownLocationKind { .. } => {
                "Location must be one of: slip, land, trailor, storage"
            }
            MarinaError::InvalidAuxiliaryFormat { .. } => {
                "Slip and storage need a number, land a bay letter, trailor a tag of at most 9 characters"
            }
            MarinaError::StoreFull { .. } => "Remove a boat or raise the configured capacity",
            MarinaError::DuplicateName { .. } => "Boat names must be unique, ignoring case",
            MarinaError::NotFound { .. } => "Check the name against the inventory",
            MarinaError::OverPayment { .. } => "Pay at most the amount owed",
            MarinaError::InvalidAmount { .. } => "Enter a positive amount such as 125.50",
            MarinaError::UnrecognizedCommand { .. } => {
                "Use (I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth or e(X)it"
            }
            MarinaError::IoError(_) => "Check that the data file exists and is writable",
            MarinaError::ConfigError { .. } | MarinaError::InvalidConfigValueError { .. } => {
                "Check the command line flags and the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MarinaError>;
