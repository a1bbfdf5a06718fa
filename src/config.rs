use crate::error::ConfigError;
use crate::zone::SoaTemplate;
use crate::zone::constants::DEFAULT_SEED_ZONE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// Zone created when the mock API starts (None = start empty)
    pub seed_zone: Option<String>,

    /// Values used for every created zone's SOA and NS records
    pub soa: SoaTemplate,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            seed_zone: Some(DEFAULT_SEED_ZONE.to_string()),
            soa: SoaTemplate::default(),
        }
    }
}

impl MockConfig {
    /// Create a MockConfig from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create a MockConfig from the defaults, overridden by whatever `lookup` returns
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed_zone) = lookup("DENOMINATOR_SEED_ZONE") {
            let seed_zone = seed_zone.trim();
            if seed_zone.is_empty() {
                config.seed_zone = None;
            } else if !seed_zone.ends_with('.') {
                return Err(ConfigError::InvalidSeedZone(seed_zone.to_string()));
            } else {
                config.seed_zone = Some(seed_zone.to_string());
            }
        }

        if let Some(minimum) = lookup("DENOMINATOR_SOA_MINIMUM") {
            config.soa.minimum = minimum.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                key: "DENOMINATOR_SOA_MINIMUM".to_string(),
                value: minimum.clone(),
            })?;
        }

        Ok(config)
    }
}
