use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid seed zone: {0}")]
    InvalidSeedZone(String),

    #[error("Invalid number for {key}: {value}")]
    InvalidNumber { key: String, value: String },
}
