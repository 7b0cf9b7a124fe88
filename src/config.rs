//! Configuration for the vpnapi command-line tool.

use crate::client::{LookupClient, DEFAULT_BASE_URL};
use crate::observer::TracingObserver;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// API key (supports ${ENV_VAR} syntax).
    #[serde(default)]
    pub api_key: String,

    /// Lookup endpoint; the address is appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// User-Agent header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Log each request and raw response at debug level.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_ms: default_timeout(),
            user_agent: default_user_agent(),
            verbose: false,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    10000
}

fn default_user_agent() -> String {
    format!("vpnapi/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let expanded = expand_env_vars(&content);
        let config: Config = serde_yaml::from_str(&expanded)?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!("api_key is empty (set it in the config file or via VPNAPI_KEY)");
        }

        if self.timeout_ms == 0 {
            anyhow::bail!("timeout_ms must be greater than 0");
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            anyhow::bail!("base_url must be an http(s) URL: {}", self.base_url);
        }

        if !self.base_url.ends_with('/') {
            anyhow::bail!("base_url must end with '/': {}", self.base_url);
        }

        Ok(())
    }

    /// Build a lookup client from this configuration.
    pub fn client(&self) -> anyhow::Result<LookupClient> {
        let mut builder = LookupClient::builder(self.api_key.clone())
            .base_url(self.base_url.clone())
            .timeout(Duration::from_millis(self.timeout_ms))
            .user_agent(self.user_agent.clone());

        if self.verbose {
            builder = builder
                .request_observer(TracingObserver)
                .response_observer(TracingObserver);
        }

        Ok(builder.build()?)
    }

    /// Generate example configuration YAML.
    pub fn example() -> String {
        r#"# vpnapi Configuration

# API key from https://vpnapi.io/ (supports ${ENV_VAR} expansion)
api_key: "${VPNAPI_KEY}"

# Lookup endpoint; the address is appended directly
base_url: "https://vpnapi.io/api/"

timeout_ms: 10000              # Request timeout
# user_agent: "vpnapi/0.1.0"   # Defaults to vpnapi/<version>
verbose: false                 # Log requests and raw responses at debug level
"#
        .to_string()
    }
}

/// Expand environment variables in the format ${VAR_NAME}.
fn expand_env_vars(content: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").expect("static regex");

    re.replace_all(content, |cap: &regex::Captures| {
        std::env::var(&cap[1]).unwrap_or_default()
    })
    .into_owned()
}
