// SettingsManager Service
// Handles compiler settings persistence

use std::path::{Path, PathBuf};
use std::sync::RwLock;
use crate::models::CompilerSettings;
use serde_json::Value;

pub const SETTINGS_FILE_NAME: &str = "compiler-settings.json";

/// Manages compiler settings storage and retrieval
pub struct SettingsManager {
    settings_path: PathBuf,
    cache: RwLock<Option<CompilerSettings>>,
}

impl SettingsManager {
    /// Create a new SettingsManager with the given config directory
    pub fn new(config_dir: PathBuf) -> Self {
        let settings_path = config_dir.join(SETTINGS_FILE_NAME);
        Self {
            settings_path,
            cache: RwLock::new(None),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load(&self) -> Result<CompilerSettings, String> {
        // Check cache first
        if let Ok(cache) = self.cache.read() {
            if let Some(ref settings) = *cache {
                return Ok(settings.clone());
            }
        }

        let settings = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)
                .map_err(|e| format!("Failed to read compiler settings: {e}"))?;

            let mut user_value: Value = serde_json::from_str(&content)
                .map_err(|e| format!("Failed to parse compiler settings: {e}"))?;

            let defaults_value = serde_json::to_value(CompilerSettings::default())
                .map_err(|e| format!("Failed to build default compiler settings: {e}"))?;

            let changed = merge_missing_settings(&mut user_value, &defaults_value);

            let settings: CompilerSettings = serde_json::from_value(user_value)
                .map_err(|e| format!("Failed to parse compiler settings: {e}"))?;

            if changed {
                log::info!(
                    "Filled missing compiler settings in {}",
                    self.settings_path.display()
                );
                self.save_internal(&settings)?;
            }

            settings
        } else {
            // Return defaults and save them
            let defaults = CompilerSettings::default();
            self.save_internal(&defaults)?;
            defaults
        };

        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(settings.clone());
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, settings: &CompilerSettings) -> Result<(), String> {
        self.save_internal(settings)?;

        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(settings.clone());
        }

        Ok(())
    }

    /// Drop the cached copy so the next load reads the file again
    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.cache.write() {
            *cache = None;
        }
    }

    /// Internal save without cache update
    fn save_internal(&self, settings: &CompilerSettings) -> Result<(), String> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create settings directory: {e}"))?;
        }

        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| format!("Failed to serialize compiler settings: {e}"))?;

        // Write then rename so a crash never leaves a half-written file
        let tmp_path = self.settings_path.with_extension("json.tmp");
        std::fs::write(&tmp_path, content)
            .map_err(|e| format!("Failed to write compiler settings: {e}"))?;
        std::fs::rename(&tmp_path, &self.settings_path)
            .map_err(|e| format!("Failed to write compiler settings: {e}"))
    }
}

/// Insert keys present in `defaults` but absent from `target`, recursively.
/// Returns true if anything was added.
fn merge_missing_settings(target: &mut Value, defaults: &Value) -> bool {
    match (target, defaults) {
        (Value::Object(target_map), Value::Object(defaults_map)) => {
            let mut changed = false;
            for (key, default_value) in defaults_map {
                match target_map.get_mut(key) {
                    Some(target_value) => {
                        if merge_missing_settings(target_value, default_value) {
                            changed = true;
                        }
                    }
                    None => {
                        target_map.insert(key.clone(), default_value.clone());
                        changed = true;
                    }
                }
            }
            changed
        }
        _ => false,
    }
}
