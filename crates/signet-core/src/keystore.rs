//! Keystore container inspection.
//!
//! Detects the container format of a keystore file and runs best-effort
//! diagnostics over a resolved signing configuration. Inspection never
//! opens the keystore cryptographically; it only looks at the container
//! magic.

use std::path::Path;

use secrecy::ExposeSecret;

use crate::error::{Result, SignetError};
use crate::models::{KeystoreType, SigningConfig};

/// JKS files start with the magic bytes 0xFEEDFEED.
const JKS_MAGIC: [u8; 4] = [0xFE, 0xED, 0xFE, 0xED];

/// Detects the keystore container format from its leading bytes.
///
/// PKCS12 files start with an ASN.1 SEQUENCE (0x30); anything that is not
/// JKS is treated as PKCS12.
pub fn detect_type(data: &[u8]) -> KeystoreType {
    if data.len() >= 4 && data[..4] == JKS_MAGIC {
        return KeystoreType::Jks;
    }
    KeystoreType::Pkcs12
}

/// Reads a keystore file and detects its container format.
pub fn inspect(store_file: &Path) -> Result<KeystoreType> {
    let data = std::fs::read(store_file).map_err(|source| SignetError::io(store_file, source))?;
    Ok(detect_type(&data))
}

/// Diagnoses a resolved signing configuration.
///
/// Returns human-readable findings; an empty list means nothing looked
/// wrong. A missing store file is a finding rather than an error: the
/// resolver deliberately passes unresolved paths through, and packaging
/// reports the failure.
pub fn verify_config(config: &SigningConfig) -> Result<Vec<String>> {
    let mut findings = Vec::new();

    if config.store_password.expose_secret().is_empty() {
        findings.push("storePassword is empty".to_string());
    }
    if config.key_password.expose_secret().is_empty() {
        findings.push("keyPassword is empty".to_string());
    }

    if !config.store_file.exists() {
        findings.push(format!(
            "keystore not found: {}",
            config.store_file.display()
        ));
        return Ok(findings);
    }

    let detected = inspect(&config.store_file)?;
    tracing::debug!(
        "Keystore {} detected as {}",
        config.store_file.display(),
        detected
    );

    if let Some(declared) = &config.store_type {
        match declared.parse::<KeystoreType>() {
            Ok(declared_type) if declared_type != detected => findings.push(format!(
                "storeType is '{}' but the keystore looks like {}",
                declared, detected
            )),
            Ok(_) => {}
            Err(_) => findings.push(format!(
                "storeType '{}' is not a recognized container format; it is passed to the build as-is",
                declared
            )),
        }
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use std::path::PathBuf;

    fn config(store_file: PathBuf, store_type: Option<&str>) -> SigningConfig {
        SigningConfig {
            store_file,
            store_type: store_type.map(str::to_string),
            store_password: SecretString::from("sp".to_string()),
            key_alias: "upload".to_string(),
            key_password: SecretString::from("kp".to_string()),
            properties_file: PathBuf::from("key.properties"),
        }
    }

    #[test]
    fn test_detect_type_jks() {
        let jks_magic = [0xFE, 0xED, 0xFE, 0xED, 0x00, 0x00, 0x00, 0x02];
        assert_eq!(detect_type(&jks_magic), KeystoreType::Jks);
    }

    #[test]
    fn test_detect_type_pkcs12() {
        let pkcs12_start = [0x30, 0x82, 0x01, 0x00];
        assert_eq!(detect_type(&pkcs12_start), KeystoreType::Pkcs12);
    }

    #[test]
    fn test_detect_type_short_input() {
        assert_eq!(detect_type(&[0xFE, 0xED]), KeystoreType::Pkcs12);
    }

    #[test]
    fn test_verify_missing_keystore_is_a_finding() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path().join("release.jks"), None);

        let findings = verify_config(&config).unwrap();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("keystore not found"));
    }

    #[test]
    fn test_verify_clean_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release.jks");
        std::fs::write(&path, [0xFE, 0xED, 0xFE, 0xED, 0x00]).unwrap();

        let findings = verify_config(&config(path, Some("jks"))).unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn test_verify_store_type_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release.keystore");
        std::fs::write(&path, [0x30, 0x82, 0x01, 0x00]).unwrap();

        let findings = verify_config(&config(path, Some("jks"))).unwrap();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("looks like pkcs12"));
    }

    #[test]
    fn test_verify_unknown_store_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release.bks");
        std::fs::write(&path, [0x00, 0x01]).unwrap();

        let findings = verify_config(&config(path, Some("BKS"))).unwrap();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("not a recognized container format"));
    }

    #[test]
    fn test_verify_empty_passwords() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release.jks");
        std::fs::write(&path, [0xFE, 0xED, 0xFE, 0xED]).unwrap();

        let mut config = config(path, None);
        config.store_password = SecretString::from(String::new());

        let findings = verify_config(&config).unwrap();
        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("storePassword is empty"));
    }
}
