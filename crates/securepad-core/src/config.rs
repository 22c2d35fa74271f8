//! Pad configuration.
//!
//! Every field has a default so a partial (or missing) `config.toml` still
//! yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Collection holding one document per space key.
pub const DEFAULT_COLLECTION: &str = "pads";
/// Quiet period before a debounced save fires.
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 2000;
/// How long the "Saved" indicator is considered fresh after a write.
pub const DEFAULT_SAVED_DISPLAY_MS: u64 = 2000;
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 6;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;
pub const DEFAULT_IMAGE_EMOJI_HEIGHT_PX: u32 = 24;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PadConfig {
    pub collection: String,
    pub quiet_period_ms: u64,
    pub saved_display_ms: u64,
    pub min_password_len: usize,
    pub max_suggestions: usize,
    pub image_emoji_height_px: u32,
    pub provider: ProviderConfig,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            quiet_period_ms: DEFAULT_QUIET_PERIOD_MS,
            saved_display_ms: DEFAULT_SAVED_DISPLAY_MS,
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            image_emoji_height_px: DEFAULT_IMAGE_EMOJI_HEIGHT_PX,
            provider: ProviderConfig::default(),
        }
    }
}

impl PadConfig {
    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }

    pub fn saved_display(&self) -> Duration {
        Duration::from_millis(self.saved_display_ms)
    }
}

/// Static deployment identity of the hosted identity/document provider.
///
/// Fixed per deployment; nothing in the pad changes it at runtime.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ProviderConfig {
    pub project_id: String,
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PadConfig::default();
        assert_eq!(config.collection, "pads");
        assert_eq!(config.quiet_period(), Duration::from_secs(2));
        assert_eq!(config.min_password_len, 6);
        assert_eq!(config.max_suggestions, 10);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: PadConfig = toml::from_str(
            r#"
quiet_period_ms = 500

[provider]
project_id = "pad-dev"
"#,
        )
        .unwrap();

        assert_eq!(config.quiet_period_ms, 500);
        assert_eq!(config.collection, DEFAULT_COLLECTION);
        assert_eq!(config.provider.project_id, "pad-dev");
        assert!(config.provider.api_key.is_empty());
    }
}
