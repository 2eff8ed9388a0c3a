use crate::config::FeatureFlags;
use crate::domain::model::Pet;
use crate::domain::ports::RosterProvider;
use crate::utils::error::{AdoptionError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub center: CenterConfig,
    pub features: Option<FeaturesConfig>,
    #[serde(default)]
    pub pets: Vec<Pet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesConfig {
    pub exotic_pets_enabled: Option<bool>,
}

impl RosterConfig {
    /// 從 TOML 檔案載入名冊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析名冊
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AdoptionError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHELTER_NAME})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AdoptionError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn feature_flags(&self) -> FeatureFlags {
        FeatureFlags {
            exotic_pets_enabled: self
                .features
                .as_ref()
                .and_then(|f| f.exotic_pets_enabled)
                .unwrap_or(false),
        }
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("center.name", &self.center.name)?;
        for (index, pet) in self.pets.iter().enumerate() {
            pet.validate().map_err(|_| AdoptionError::MissingField {
                field: format!("pets[{}].name", index),
            })?;
        }
        Ok(())
    }
}

impl RosterProvider for RosterConfig {
    fn center_name(&self) -> &str {
        &self.center.name
    }

    fn load_pets(&self) -> Result<Vec<Pet>> {
        self.validate()?;
        Ok(self.pets.clone())
    }
}
