use std::fs;
use std::path::Path;

use lcd_core::{ErrorInfo, LcdError, ValidatorConfig};

/// Parses a YAML policy document; missing flags default to `false`.
pub fn policy_from_yaml(text: &str) -> Result<ValidatorConfig, LcdError> {
    serde_yaml::from_str(text)
        .map_err(|err| LcdError::Serde(ErrorInfo::new("policy-parse", err.to_string())))
}

/// Loads a YAML policy from disk.
pub fn load_policy(path: &Path) -> Result<ValidatorConfig, LcdError> {
    let text = fs::read_to_string(path).map_err(|err| {
        LcdError::Io(
            ErrorInfo::new("policy-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    policy_from_yaml(&text).map_err(|err| match err {
        LcdError::Serde(info) => {
            LcdError::Serde(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })
}
