//! Signing configuration models.

use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Android keystore container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeystoreType {
    Jks,
    Pkcs12,
}

impl KeystoreType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeystoreType::Jks => "jks",
            KeystoreType::Pkcs12 => "pkcs12",
        }
    }
}

impl std::str::FromStr for KeystoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jks" => Ok(KeystoreType::Jks),
            "pkcs12" => Ok(KeystoreType::Pkcs12),
            _ => Err(format!("Unknown keystore type: {}", s)),
        }
    }
}

impl std::fmt::Display for KeystoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved release signing configuration.
///
/// Produced once per resolution and never mutated. Passwords are held as
/// [`SecretString`] so `Debug` output and logs stay redacted.
#[derive(Debug)]
pub struct SigningConfig {
    /// Keystore location, resolved best-effort (may be an unverified literal
    /// path when no candidate base directory contained it).
    pub store_file: PathBuf,
    /// Keystore type override, passed through verbatim. `None` leaves the
    /// platform default in effect.
    pub store_type: Option<String>,
    pub store_password: SecretString,
    pub key_alias: String,
    pub key_password: SecretString,
    /// The candidate `key.properties` file that supplied this configuration.
    pub properties_file: PathBuf,
}

/// Secret-free view of a [`SigningConfig`] for display and JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct SigningConfigSummary {
    pub properties_file: PathBuf,
    pub store_file: PathBuf,
    pub store_type: Option<String>,
    pub key_alias: String,
    pub store_password_set: bool,
    pub key_password_set: bool,
}

impl From<&SigningConfig> for SigningConfigSummary {
    fn from(config: &SigningConfig) -> Self {
        Self {
            properties_file: config.properties_file.clone(),
            store_file: config.store_file.clone(),
            store_type: config.store_type.clone(),
            key_alias: config.key_alias.clone(),
            store_password_set: !config.store_password.expose_secret().is_empty(),
            key_password_set: !config.key_password.expose_secret().is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> SigningConfig {
        SigningConfig {
            store_file: PathBuf::from("/keys/release.jks"),
            store_type: Some("pkcs12".to_string()),
            store_password: SecretString::from("store-secret".to_string()),
            key_alias: "upload".to_string(),
            key_password: SecretString::from("key-secret".to_string()),
            properties_file: PathBuf::from("/project/android/key.properties"),
        }
    }

    #[test]
    fn test_keystore_type_round_trip() {
        assert_eq!("jks".parse::<KeystoreType>().unwrap(), KeystoreType::Jks);
        assert_eq!(
            "PKCS12".parse::<KeystoreType>().unwrap(),
            KeystoreType::Pkcs12
        );
        assert!("bks".parse::<KeystoreType>().is_err());
        assert_eq!(KeystoreType::Jks.to_string(), "jks");
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let rendered = format!("{:?}", sample_config());
        assert!(!rendered.contains("store-secret"));
        assert!(!rendered.contains("key-secret"));
        assert!(rendered.contains("upload"));
    }

    #[test]
    fn test_summary_has_no_secrets() {
        let summary = SigningConfigSummary::from(&sample_config());
        let json = serde_json::to_string(&summary).unwrap();

        assert!(!json.contains("store-secret"));
        assert!(!json.contains("key-secret"));
        assert!(json.contains("\"store_password_set\":true"));
        assert!(json.contains("\"key_alias\":\"upload\""));
    }

    #[test]
    fn test_summary_flags_empty_passwords() {
        let mut config = sample_config();
        config.store_password = SecretString::from(String::new());

        let summary = SigningConfigSummary::from(&config);
        assert!(!summary.store_password_set);
        assert!(summary.key_password_set);
    }
}
