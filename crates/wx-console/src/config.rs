//! Console configuration, loadable from TOML with environment overrides.

use serde::Deserialize;

/// Top-level configuration for the weather console.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Base URL of the chat backend; requests go to `{backend_url}/chat`.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub log_json: bool,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".into()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            timeout_secs: default_timeout_secs(),
            log_json: false,
        }
    }
}

impl ConsoleConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply `WX_BACKEND_URL` / `WX_TIMEOUT_SECS` from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("WX_BACKEND_URL").ok(),
            std::env::var("WX_TIMEOUT_SECS").ok(),
        )
    }

    fn with_overrides(
        mut self,
        backend_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Self {
        if let Some(url) = backend_url.filter(|u| !u.trim().is_empty()) {
            self.backend_url = url;
        }
        if let Some(raw) = timeout_secs {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "ignoring invalid WX_TIMEOUT_SECS"),
            }
        }
        self
    }

    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.backend_url.trim_end_matches('/'))
    }
}
