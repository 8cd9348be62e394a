//! Startup configuration defaults.
//!
//! Defaults are an explicit function called by the entry component rather
//! than ambient global state; build-time environment variables override the
//! public-instance fallbacks.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback instance when no build-time override is provided.
pub const DEFAULT_INSTANCE_URL: &str = "https://www.braintrust.dev";

/// Default lookback window in days.
pub const DEFAULT_DAYS_BACK: u32 = 30;

/// Initial values for the configuration form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultConfig {
    pub instance_url: String,
    pub org_name: String,
    pub project_name: String,
    pub api_key: String,
    pub days_back: u32,
}

/// Build the startup configuration from compile-time environment overrides.
#[must_use]
pub fn default_config() -> DefaultConfig {
    DefaultConfig {
        instance_url: option_env!("TRACE_EMBED_INSTANCE_URL")
            .unwrap_or(DEFAULT_INSTANCE_URL)
            .to_owned(),
        org_name: option_env!("TRACE_EMBED_ORG").unwrap_or_default().to_owned(),
        project_name: option_env!("TRACE_EMBED_PROJECT").unwrap_or_default().to_owned(),
        api_key: option_env!("TRACE_EMBED_API_KEY").unwrap_or_default().to_owned(),
        days_back: DEFAULT_DAYS_BACK,
    }
}
