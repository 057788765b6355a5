//! App Configuration
//!
//! Persistence settings with defaults. The page can override them with a
//! `<meta name="todo-config" content='{...}'>` tag holding partial JSON.

use serde::Deserialize;

/// Key the todo list snapshot is stored under
pub const DEFAULT_STORAGE_KEY: &str = "todoList";

/// Name of the meta tag carrying config overrides
pub const CONFIG_META_NAME: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Key of the persisted snapshot
    pub storage_key: String,
    /// Total attempts per snapshot write
    pub write_attempts: u32,
    /// Linear backoff step between write attempts
    pub retry_delay_ms: u32,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            write_attempts: 3,
            retry_delay_ms: 250,
        }
    }
}

impl TodoConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Config from the page's meta tag, or defaults when absent
    pub fn load() -> Self {
        Self::from_overrides(config_meta_content().as_deref())
    }

    /// Apply optional JSON overrides; malformed overrides fall back to defaults
    pub fn from_overrides(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("[CONFIG] Ignoring malformed {CONFIG_META_NAME}: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn config_meta_content() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{CONFIG_META_NAME}\"]"))
        .ok()??;
    meta.get_attribute("content")
}

#[cfg(not(target_arch = "wasm32"))]
fn config_meta_content() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TodoConfig::default();
        assert_eq!(config.storage_key, "todoList");
        assert_eq!(config.write_attempts, 3);
        assert_eq!(config.retry_delay_ms, 250);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = TodoConfig::from_overrides(Some(r#"{"storage_key":"work"}"#));
        assert_eq!(config.storage_key, "work");
        assert_eq!(config.write_attempts, 3);
    }

    #[test]
    fn test_missing_or_malformed_overrides_use_defaults() {
        assert_eq!(TodoConfig::from_overrides(None), TodoConfig::default());
        assert_eq!(TodoConfig::from_overrides(Some("{not json")), TodoConfig::default());
        assert_eq!(TodoConfig::from_overrides(Some("{}")), TodoConfig::default());
    }

    #[test]
    fn test_load_without_page_uses_defaults() {
        assert_eq!(TodoConfig::load(), TodoConfig::default());
    }
}
