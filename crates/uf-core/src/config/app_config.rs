//! Application configuration domain model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::credential::CredentialParams;
use crate::registration::policy::{CredentialPolicy, PolicyKind, DEFAULT_MIN_LENGTH};

/// Application configuration.
///
/// Every section is optional in the file; missing values take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub registration: RegistrationConfig,
    pub credential: CredentialConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Suffix for the data directory name (`userflow-<profile>`).
    pub profile: Option<String>,
    /// Overrides the data root entirely.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    pub policy: PolicyKind,
    pub min_length: usize,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::NonEmpty,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl RegistrationConfig {
    pub fn build_policy(&self) -> Box<dyn CredentialPolicy> {
        self.policy.build(self.min_length)
    }
}

/// Argon2id cost parameters for stored passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        let params = CredentialParams::default();
        Self {
            memory_kib: params.m_cost,
            iterations: params.t_cost,
            parallelism: params.p_cost,
        }
    }
}

impl CredentialConfig {
    pub fn params(&self) -> CredentialParams {
        CredentialParams {
            m_cost: self.memory_kib,
            t_cost: self.iterations,
            p_cost: self.parallelism,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to `<data root>/logs/userflow.log`.
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { file: true }
    }
}

impl AppConfig {
    /// Map a parsed TOML document onto the config. Unknown keys are ignored.
    pub fn from_toml(value: &toml::Value) -> anyhow::Result<Self> {
        value
            .clone()
            .try_into()
            .map_err(|e| anyhow::anyhow!("Failed to map config: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let value: toml::Value = toml::from_str("").expect("parse");
        let config = AppConfig::from_toml(&value).expect("map");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.registration.policy, PolicyKind::NonEmpty);
        assert!(config.logging.file);
    }

    #[test]
    fn sections_are_mapped() {
        let value: toml::Value = toml::from_str(
            r#"
            [general]
            profile = "dev"

            [registration]
            policy = "min_length"
            min_length = 6

            [credential]
            memory_kib = 1024
            "#,
        )
        .expect("parse");
        let config = AppConfig::from_toml(&value).expect("map");

        assert_eq!(config.general.profile.as_deref(), Some("dev"));
        assert_eq!(config.registration.policy, PolicyKind::MinLength);
        assert_eq!(config.registration.min_length, 6);
        assert_eq!(config.credential.params().m_cost, 1024);
        assert_eq!(
            config.credential.iterations,
            CredentialParams::default().t_cost
        );
    }

    #[test]
    fn built_policy_follows_config() {
        let config = RegistrationConfig {
            policy: PolicyKind::MinLength,
            min_length: 5,
        };
        assert!(config.build_policy().validate("user", "pw").is_err());
        assert!(RegistrationConfig::default()
            .build_policy()
            .validate("user", "pw")
            .is_ok());
    }

    #[test]
    fn wrong_type_is_an_error() {
        let value: toml::Value = toml::from_str("[registration]\nmin_length = \"five\"").expect("parse");
        assert!(AppConfig::from_toml(&value).is_err());
    }
}
