//! Game configuration.
//!
//! The bundled `config/game.json` is the base. A host page can override any
//! subset of fields with a `<meta name="cityscope-config" content='{...}'>` tag,
//! which is how the Mapbox access token is supplied in deployments.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;
use crate::model::RoundRules;

const BUILTIN_CONFIG: &str = include_str!("../config/game.json");
const OVERRIDE_META: &str = "meta[name=\"cityscope-config\"]";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub access_token: String,
    pub style_url: String,
    pub interactive: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            style_url: "mapbox://styles/mapbox/satellite-streets-v12".to_string(),
            interactive: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub default_zoom: f64,
    pub hint_zoom: f64,
    pub hint_after_misses: u32,
    pub max_guesses: u32,
    /// Cap on autocomplete entries shown at once.
    pub suggestion_limit: usize,
    /// Delay before hiding suggestions on blur, so a click on one still lands.
    pub suggestion_hide_delay_ms: u32,
    pub log_level: String,
    pub map: MapConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        let rules = RoundRules::default();
        Self {
            default_zoom: rules.default_zoom,
            hint_zoom: rules.hint_zoom,
            hint_after_misses: rules.hint_after_misses,
            max_guesses: rules.max_guesses,
            suggestion_limit: 8,
            suggestion_hide_delay_ms: 100,
            log_level: "info".to_string(),
            map: MapConfig::default(),
        }
    }
}

impl GameConfig {
    /// Bundled config with the host page override merged on top.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_layers(BUILTIN_CONFIG, page_override().as_deref())
    }

    pub fn from_layers(base: &str, overlay: Option<&str>) -> Result<Self, ConfigError> {
        let mut merged: Value = serde_json::from_str(base)?;
        if let Some(raw) = overlay {
            merge(&mut merged, serde_json::from_str(raw)?);
        }
        let config: GameConfig = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_guesses == 0 {
            return Err(ConfigError::NoGuesses);
        }
        if self.hint_zoom >= self.default_zoom {
            return Err(ConfigError::HintZoom {
                hint: self.hint_zoom,
                default: self.default_zoom,
            });
        }
        if self.hint_after_misses >= self.max_guesses {
            return Err(ConfigError::HintAfter {
                hint_after: self.hint_after_misses,
                max: self.max_guesses,
            });
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn rules(&self) -> RoundRules {
        RoundRules {
            default_zoom: self.default_zoom,
            hint_zoom: self.hint_zoom,
            hint_after_misses: self.hint_after_misses,
            max_guesses: self.max_guesses,
        }
    }
}

/// Deep-merges `overlay` into `base`; objects merge key by key, anything else replaces.
fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn page_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(OVERRIDE_META).ok()??;
    meta.get_attribute("content").filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_matches_defaults() {
        let cfg = GameConfig::from_layers(BUILTIN_CONFIG, None).unwrap();
        assert_eq!(cfg, GameConfig::default());
        assert_eq!(cfg.rules(), RoundRules::default());
    }

    #[test]
    fn overlay_merges_nested_fields() {
        let cfg = GameConfig::from_layers(
            BUILTIN_CONFIG,
            Some(r#"{"map":{"access_token":"pk.test"},"suggestion_limit":5}"#),
        )
        .unwrap();
        assert_eq!(cfg.map.access_token, "pk.test");
        assert_eq!(cfg.map.style_url, MapConfig::default().style_url);
        assert_eq!(cfg.suggestion_limit, 5);
        assert_eq!(cfg.max_guesses, 3);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = GameConfig::from_layers("{}", None).unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn hint_zoom_must_be_wider() {
        let err = GameConfig::from_layers(BUILTIN_CONFIG, Some(r#"{"hint_zoom":14.0}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::HintZoom { .. }));
    }

    #[test]
    fn hint_must_come_before_last_guess() {
        let err = GameConfig::from_layers(BUILTIN_CONFIG, Some(r#"{"hint_after_misses":3}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::HintAfter { hint_after: 3, max: 3 }));
    }

    #[test]
    fn zero_guesses_is_rejected() {
        let err = GameConfig::from_layers(BUILTIN_CONFIG, Some(r#"{"max_guesses":0}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::NoGuesses));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let err = GameConfig::from_layers(BUILTIN_CONFIG, Some(r#"{"log_level":"loud"}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(l) if l == "loud"));
    }

    #[test]
    fn malformed_overlay_is_a_parse_error() {
        assert!(matches!(
            GameConfig::from_layers(BUILTIN_CONFIG, Some("{not json")),
            Err(ConfigError::Parse(_))
        ));
    }
}
