/// Copy settings persisted in LocalStorage
use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

/// Id of the element whose text gets copied
pub const COPY_TARGET_ID: &str = "copyTarget";

const STORAGE_KEY: &str = "copytext_settings";

const MIN_FEEDBACK_MS: u32 = 100;
const MAX_FEEDBACK_MS: u32 = 10_000;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CopySettings {
    #[serde(default = "default_target_id")]
    pub target_id: String,
    /// How long the button shows "Copied!"
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u32,
    /// Show refused or failed copies to the user instead of only logging them
    #[serde(default = "default_surface_failures")]
    pub surface_failures: bool,
    /// Base URL of the OCR resource, e.g. `https://<name>.cognitiveservices.azure.com/`
    #[serde(default)]
    pub ocr_endpoint: String,
    #[serde(default)]
    pub ocr_key: String,
}

fn default_target_id() -> String {
    COPY_TARGET_ID.to_string()
}

fn default_feedback_ms() -> u32 {
    2000
}

fn default_surface_failures() -> bool {
    true
}

impl Default for CopySettings {
    fn default() -> Self {
        Self {
            target_id: default_target_id(),
            feedback_ms: default_feedback_ms(),
            surface_failures: default_surface_failures(),
            ocr_endpoint: String::new(),
            ocr_key: String::new(),
        }
    }
}

impl CopySettings {
    /// Replace out-of-range values with usable ones
    pub fn normalized(mut self) -> Self {
        let trimmed = self.target_id.trim();
        self.target_id = if trimmed.is_empty() {
            default_target_id()
        } else {
            trimmed.to_string()
        };
        self.feedback_ms = self.feedback_ms.clamp(MIN_FEEDBACK_MS, MAX_FEEDBACK_MS);
        self.ocr_endpoint = self.ocr_endpoint.trim().to_string();
        self.ocr_key = self.ocr_key.trim().to_string();
        self
    }

    /// Parse a stored settings blob, falling back to defaults when it is corrupt
    pub fn from_stored(json: &str) -> Self {
        match serde_json::from_str::<CopySettings>(json) {
            Ok(settings) => settings.normalized(),
            Err(e) => {
                log::warn!("Ignoring invalid stored settings: {}", e);
                Self::default()
            }
        }
    }
}

/// Global settings state
pub static SETTINGS: GlobalSignal<CopySettings> = Signal::global(CopySettings::default);

/// Load settings from localStorage, or keep the defaults
pub fn init_settings() {
    match LocalStorage::get::<serde_json::Value>(STORAGE_KEY) {
        Ok(value) => {
            let settings = CopySettings::from_stored(&value.to_string());
            log::info!("Loaded settings from storage (target #{})", settings.target_id);
            *SETTINGS.write() = settings;
        }
        Err(_) => {
            log::info!("No stored settings, using defaults");
            *SETTINGS.write() = CopySettings::default();
        }
    }
}

/// Update settings and persist them to localStorage
pub fn set_settings(settings: CopySettings) {
    let settings = settings.normalized();
    if *SETTINGS.read() == settings {
        return;
    }

    if let Err(e) = LocalStorage::set(STORAGE_KEY, &settings) {
        log::error!("Failed to persist settings: {}", e);
    }
    log::info!("Settings updated (target #{})", settings.target_id);
    *SETTINGS.write() = settings;
}

/// Get current settings
pub fn get_settings() -> CopySettings {
    SETTINGS.read().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CopySettings::default();
        assert_eq!(settings.target_id, "copyTarget");
        assert_eq!(settings.feedback_ms, 2000);
        assert!(settings.surface_failures);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = CopySettings::from_stored(r#"{"feedback_ms": 500}"#);
        assert_eq!(settings.target_id, COPY_TARGET_ID);
        assert_eq!(settings.feedback_ms, 500);
        assert!(settings.surface_failures);
        assert!(settings.ocr_endpoint.is_empty());
        assert!(settings.ocr_key.is_empty());
    }

    #[test]
    fn test_corrupt_blob_falls_back() {
        assert_eq!(CopySettings::from_stored("not json"), CopySettings::default());
    }

    #[test]
    fn test_normalized_clamps_and_trims() {
        let settings = CopySettings {
            target_id: "   ".to_string(),
            feedback_ms: 60_000,
            surface_failures: false,
            ocr_endpoint: "  https://example.cognitiveservices.azure.com/ ".to_string(),
            ocr_key: " abc123\n".to_string(),
        }
        .normalized();
        assert_eq!(settings.target_id, COPY_TARGET_ID);
        assert_eq!(settings.feedback_ms, MAX_FEEDBACK_MS);
        assert!(!settings.surface_failures);
        assert_eq!(settings.ocr_endpoint, "https://example.cognitiveservices.azure.com/");
        assert_eq!(settings.ocr_key, "abc123");

        let settings = CopySettings { feedback_ms: 0, ..CopySettings::default() }.normalized();
        assert_eq!(settings.feedback_ms, MIN_FEEDBACK_MS);
    }
}
