//! Session helpers: auth check, current user, logout.
//!
//! ERROR HANDLING
//! ==============
//! Unlike [`RequestClient::request`], these helpers never return an error.
//! "Not signed in" and "server unreachable" look the same to callers
//! (`false` / `None`), and neither produces a toast. Logout reports its own
//! outcome with a toast because the user asked for it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use serde_json::Value;

use crate::config::UiConfig;
use crate::messages;
use crate::navigate::Navigator;
use crate::notify::NotificationCenter;
use crate::request::{HttpRequest, HttpResponse, RequestClient, Transport, TransportError};
use crate::schedule::Scheduler;

pub struct Session<T> {
    client: Rc<RequestClient<T>>,
    notifier: NotificationCenter,
    navigator: Rc<dyn Navigator>,
    scheduler: Rc<dyn Scheduler>,
    config: UiConfig,
}

impl<T: Transport> Session<T> {
    #[must_use]
    pub fn new(
        client: Rc<RequestClient<T>>,
        notifier: NotificationCenter,
        navigator: Rc<dyn Navigator>,
        scheduler: Rc<dyn Scheduler>,
        config: UiConfig,
    ) -> Self {
        Self { client, notifier, navigator, scheduler, config }
    }

    /// Whether the current-user endpoint answers 2xx.
    pub async fn check_auth(&self) -> bool {
        match self.fetch_current_user().await {
            Ok(response) => response.is_success(),
            Err(err) => {
                log::warn!("auth check failed: {err}");
                false
            }
        }
    }

    /// The signed-in user as returned by the server, or `None`.
    pub async fn current_user(&self) -> Option<Value> {
        let response = match self.fetch_current_user().await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("current user fetch failed: {err}");
                return None;
            }
        };
        if !response.is_success() {
            return None;
        }
        match serde_json::from_str(&response.body) {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("current user body is not JSON: {err}");
                None
            }
        }
    }

    /// End the session. On success the page leaves for the configured
    /// redirect once the success toast has had a moment on screen.
    pub async fn logout(&self) {
        let request = HttpRequest::new("POST", self.config.logout_endpoint.clone());
        match self.client.send_raw(request).await {
            Ok(response) if response.is_success() => {
                self.notifier.success(messages::LOGOUT_SUCCEEDED);
                let navigator = Rc::clone(&self.navigator);
                let target = self.config.logout_redirect.clone();
                self.scheduler.defer(
                    self.config.logout_redirect_delay(),
                    Box::new(move || navigator.assign(&target)),
                );
            }
            Ok(response) => {
                log::warn!("logout rejected with status {}", response.status);
                self.notifier.error(messages::LOGOUT_FAILED);
            }
            Err(err) => {
                log::error!("logout failed: {err}");
                self.notifier.error(messages::LOGOUT_FAILED);
            }
        }
    }

    async fn fetch_current_user(&self) -> Result<HttpResponse, TransportError> {
        let request = HttpRequest::new("GET", self.config.current_user_endpoint.clone());
        self.client.send_raw(request).await
    }
}
