use lazy_static::lazy_static;
use serde::Deserialize;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

/// Where the app is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    // Always starts and ends with `/`. Every hash-history href and the
    // deferred view fragments are anchored here.
    base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
        }
    }
}

/// Shape accepted by `init_app_config_js`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeConfig {
    base_url: Option<String>,
}

impl AppConfig {
    /// Build from the `BASE_URL` variable present at compile time, if any.
    pub fn from_env() -> Self {
        Self::new(option_env!("BASE_URL").unwrap_or("/"))
    }

    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(base_url),
        }
    }

    /// Parse the JSON object handed over by the page bootstrap script.
    /// Missing keys keep the values of `self`.
    pub fn merged_with_json(&self, json: &str) -> Result<Self, serde_json::Error> {
        let runtime: RuntimeConfig = serde_json::from_str(json)?;
        Ok(Self::new(runtime.base_url.as_deref().unwrap_or(&self.base_url)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a static asset shipped next to the app, e.g. a view fragment.
    pub fn asset_url(&self, relative: &str) -> String {
        format!("{}{}", self.base_url, relative.trim_start_matches('/'))
    }
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

lazy_static! {
    static ref APP_CONFIG: RwLock<Option<AppConfig>> = RwLock::new(None);
}

/// Initialize the configuration from build-time values. Called once from
/// `start()`, which runs as soon as the module is instantiated, so any
/// `init_app_config_js` call comes later and overrides these values.
pub fn init_app_config() {
    let mut guard = APP_CONFIG.write().unwrap_or_else(|e| e.into_inner());
    if guard.is_none() {
        *guard = Some(AppConfig::from_env());
    }
}

/// Override the configuration from JS, e.g.
/// `init_app_config_js('{"baseUrl": "/rift-rewind/"}')`. The running app is
/// re-anchored on the new base, so hrefs and fetched views agree.
#[wasm_bindgen]
pub fn init_app_config_js(config_json: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing app config from JS: {}", config_json);
    let current = app_config();
    let config = current
        .merged_with_json(config_json)
        .map_err(|e| JsValue::from_str(&format!("invalid app config: {}", e)))?;
    *APP_CONFIG.write().unwrap_or_else(|e| e.into_inner()) = Some(config.clone());
    crate::app::config_changed(&config);
    Ok(())
}

/// Snapshot of the active configuration (build-time defaults when nothing
/// was initialised yet, which is what headless tests see).
pub fn app_config() -> AppConfig {
    APP_CONFIG
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
        .unwrap_or_else(AppConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        assert_eq!(AppConfig::new("").base_url(), "/");
        assert_eq!(AppConfig::new("/").base_url(), "/");
        assert_eq!(AppConfig::new("rift-rewind").base_url(), "/rift-rewind/");
        assert_eq!(AppConfig::new("/rift-rewind/").base_url(), "/rift-rewind/");
        assert_eq!(AppConfig::new("/a/b").base_url(), "/a/b/");
    }

    #[test]
    fn test_asset_url() {
        let cfg = AppConfig::new("/rift-rewind");
        assert_eq!(cfg.asset_url("views/about.html"), "/rift-rewind/views/about.html");
        assert_eq!(cfg.asset_url("/views/about.html"), "/rift-rewind/views/about.html");
    }

    #[test]
    fn test_runtime_override_keeps_missing_keys() {
        let cfg = AppConfig::new("/app/");
        let merged = cfg.merged_with_json(r#"{"baseUrl": "/other"}"#).unwrap();
        assert_eq!(merged.base_url(), "/other/");
        assert_eq!(cfg.merged_with_json("{}").unwrap().base_url(), "/app/");

        assert!(cfg.merged_with_json("not json").is_err());
    }
}
