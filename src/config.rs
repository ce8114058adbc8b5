//! Page configuration.
//!
//! Every field has a default matching the portal's server, so a page without
//! an embedded config behaves exactly like one with `{}`. The browser binding
//! looks for a JSON blob in `<script id="portal-ui-config">`; native callers
//! build the struct directly or parse their own JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::consts::{
    CURRENT_USER_ENDPOINT, LOGOUT_ENDPOINT, LOGOUT_REDIRECT, LOGOUT_REDIRECT_DELAY_MS, NOTIFICATION_DISPLAY_MS,
    NOTIFICATION_EXIT_MS, SUBMIT_RESTORE_MS,
};

/// Errors produced while reading a [`UiConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config blob is not valid JSON or has mistyped fields.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Origin prepended to relative URLs by the native transport. Browsers
    /// resolve relative URLs against the page and ignore it.
    pub base_url: String,
    pub current_user_endpoint: String,
    pub logout_endpoint: String,
    pub logout_redirect: String,
    pub notification_display_ms: u64,
    pub notification_exit_ms: u64,
    pub logout_redirect_delay_ms: u64,
    pub submit_restore_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            current_user_endpoint: CURRENT_USER_ENDPOINT.to_owned(),
            logout_endpoint: LOGOUT_ENDPOINT.to_owned(),
            logout_redirect: LOGOUT_REDIRECT.to_owned(),
            notification_display_ms: NOTIFICATION_DISPLAY_MS,
            notification_exit_ms: NOTIFICATION_EXIT_MS,
            logout_redirect_delay_ms: LOGOUT_REDIRECT_DELAY_MS,
            submit_restore_ms: SUBMIT_RESTORE_MS,
        }
    }
}

impl UiConfig {
    /// Parse a config blob. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.base_url = config.base_url.trim_end_matches('/').to_owned();
        Ok(config)
    }

    #[must_use]
    pub fn notification_display(&self) -> Duration {
        Duration::from_millis(self.notification_display_ms)
    }

    #[must_use]
    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    #[must_use]
    pub fn logout_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.logout_redirect_delay_ms)
    }

    #[must_use]
    pub fn submit_restore(&self) -> Duration {
        Duration::from_millis(self.submit_restore_ms)
    }
}
