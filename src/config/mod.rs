use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:8181";
pub(crate) const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Runtime configuration injected by the hosting page as `window.ENV`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub api_url: String,
    /// Serve the built-in sample ideas and handle launches in-process.
    pub use_mock: bool,
    pub request_timeout_ms: u32,
}

impl EnvConfig {
    pub fn new() -> Self {
        let Some(env) = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object())
        else {
            return Self::from_values(None, None, None);
        };

        // We support BOTH `window.ENV.API_URL` (documented) and the lower-case
        // spelling for compatibility with older deployments.
        let read = |upper: &str, lower: &str| -> Option<JsValue> {
            [upper, lower].into_iter().find_map(|k| {
                js_sys::Reflect::get(&env, &k.into())
                    .ok()
                    .filter(|v| !v.is_undefined() && !v.is_null())
            })
        };

        let api_url = read("API_URL", "api_url").and_then(|v| v.as_string());
        let use_mock = read("USE_MOCK", "use_mock").map(|v| match v.as_bool() {
            Some(b) => b.to_string(),
            None => v.as_string().unwrap_or_default(),
        });
        let timeout = read("REQUEST_TIMEOUT_MS", "request_timeout_ms").and_then(|v| {
            v.as_f64()
                .map(|f| f.to_string())
                .or_else(|| v.as_string())
        });

        Self::from_values(api_url, use_mock, timeout)
    }

    /// Build a config from raw string values, applying defaults.
    pub fn from_values(
        api_url: Option<String>,
        use_mock: Option<String>,
        request_timeout_ms: Option<String>,
    ) -> Self {
        let api_url = api_url
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let use_mock = use_mock
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let request_timeout_ms = request_timeout_ms
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|ms| *ms >= 1.0)
            .map(|ms| ms as u32)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        Self {
            api_url,
            use_mock,
            request_timeout_ms,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let cfg = EnvConfig::from_values(None, None, None);
        assert_eq!(cfg.api_url, "http://localhost:8181");
        assert!(!cfg.use_mock);
        assert_eq!(cfg.request_timeout_ms, 15_000);
    }

    #[test]
    fn test_api_url_trailing_slash_is_trimmed() {
        let cfg = EnvConfig::from_values(Some("https://api.example.com/".to_string()), None, None);
        assert_eq!(cfg.api_url, "https://api.example.com");
    }

    #[test]
    fn test_blank_api_url_falls_back_to_default() {
        let cfg = EnvConfig::from_values(Some("   ".to_string()), None, None);
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_mock_flag_accepts_common_truthy_forms() {
        for v in ["1", "true", "TRUE", "yes"] {
            assert!(EnvConfig::from_values(None, Some(v.to_string()), None).use_mock, "{v}");
        }
        for v in ["0", "false", "", "nope"] {
            assert!(!EnvConfig::from_values(None, Some(v.to_string()), None).use_mock, "{v}");
        }
    }

    #[test]
    fn test_timeout_parses_and_rejects_garbage() {
        let cfg = EnvConfig::from_values(None, None, Some("5000".to_string()));
        assert_eq!(cfg.request_timeout_ms, 5000);

        let cfg = EnvConfig::from_values(None, None, Some("0".to_string()));
        assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);

        let cfg = EnvConfig::from_values(None, None, Some("soon".to_string()));
        assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }
}
