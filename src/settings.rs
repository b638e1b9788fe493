//! Game settings and preferences
//!
//! Two flags, each stored under its own LocalStorage key as `"true"` or
//! `"false"` so the settings page and the game page share them. A missing or
//! unreadable value means enabled.

use serde::{Deserialize, Serialize};

/// Which flag a settings-page checkbox controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Music,
    Vibration,
}

impl SettingKey {
    /// LocalStorage key
    pub fn storage_key(&self) -> &'static str {
        match self {
            SettingKey::Music => "music",
            SettingKey::Vibration => "vibration",
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Play the win sound
    pub music: bool,
    /// Vibrate on win
    pub vibration: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music: true,
            vibration: true,
        }
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::Music => self.music,
            SettingKey::Vibration => self.vibration,
        }
    }

    /// Flip one flag and return its new value
    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let flag = match key {
            SettingKey::Music => &mut self.music,
            SettingKey::Vibration => &mut self.vibration,
        };
        *flag = !*flag;
        *flag
    }

    /// Decode a stored flag. Only an explicit `false` disables.
    pub fn parse_flag(stored: Option<&str>) -> bool {
        stored != Some("false")
    }

    /// Build settings from raw stored values
    pub fn from_stored(music: Option<&str>, vibration: Option<&str>) -> Self {
        Self {
            music: Self::parse_flag(music),
            vibration: Self::parse_flag(vibration),
        }
    }

    /// Encode a flag the way it is stored
    pub fn encode_flag(value: bool) -> String {
        value.to_string()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::info!("LocalStorage unavailable, using default settings");
            return Self::default();
        };

        let read = |key: SettingKey| storage.get_item(key.storage_key()).ok().flatten();
        let music = read(SettingKey::Music);
        let vibration = read(SettingKey::Vibration);
        let settings = Self::from_stored(music.as_deref(), vibration.as_deref());
        log::info!(
            "Loaded settings (music: {}, vibration: {})",
            settings.music,
            settings.vibration
        );
        settings
    }

    /// Save one flag to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save_flag(&self, key: SettingKey) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let value = Self::encode_flag(self.get(key));
            if storage.set_item(key.storage_key(), &value).is_ok() {
                log::info!("Setting {} saved ({})", key.storage_key(), value);
            } else {
                log::warn!("Failed to save setting {}", key.storage_key());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_flag(&self, _key: SettingKey) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enabled() {
        let settings = Settings::from_stored(None, None);
        assert_eq!(settings, Settings::default());
        assert!(settings.music && settings.vibration);
    }

    #[test]
    fn test_only_false_disables() {
        assert!(!Settings::parse_flag(Some("false")));
        assert!(Settings::parse_flag(Some("true")));
        assert!(Settings::parse_flag(Some("garbage")));
        assert!(Settings::parse_flag(Some("")));
        assert!(Settings::parse_flag(Some(" false")));
        assert!(Settings::parse_flag(Some("false\n")));
        assert!(Settings::parse_flag(Some("FALSE")));

        let settings = Settings::from_stored(Some("false"), Some("true"));
        assert!(!settings.music);
        assert!(settings.vibration);
    }

    #[test]
    fn test_toggle_round_trips_through_storage_format() {
        let mut settings = Settings::default();
        assert!(!settings.toggle(SettingKey::Vibration));
        let stored = Settings::encode_flag(settings.get(SettingKey::Vibration));
        assert_eq!(stored, "false");
        assert!(!Settings::parse_flag(Some(&stored)));
        assert!(settings.toggle(SettingKey::Vibration));
        assert_eq!(SettingKey::Music.storage_key(), "music");
    }
}
