#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::RosterConfig;

pub const EXOTIC_PETS_ENV: &str = "EXOTIC_PETS_ENABLED";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub exotic_pets_enabled: bool,
}

impl FeatureFlags {
    pub fn from_env() -> Self {
        Self {
            exotic_pets_enabled: std::env::var(EXOTIC_PETS_ENV)
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
        }
    }

    /// Environment wins when it turns a flag on.
    pub fn merge(self, other: FeatureFlags) -> Self {
        Self {
            exotic_pets_enabled: self.exotic_pets_enabled || other.exotic_pets_enabled,
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
