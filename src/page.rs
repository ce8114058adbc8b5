//! Per-page service wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! A [`Page`] is built once per page load from a [`UiConfig`] and the
//! platform [`Services`]. It owns the notification center, request client,
//! session helpers and dispatcher, and executes the commands the dispatcher
//! produces. Nothing here is global; two pages in one process (tests, for
//! instance) share nothing.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::rc::Rc;

use crate::clipboard::Clipboard;
use crate::config::UiConfig;
use crate::dispatch::{Command, Dispatcher, InputEvent, Routed};
use crate::form::{SubmitButton, hold_submit};
use crate::nav;
use crate::navigate::Navigator;
use crate::notify::{NotificationCenter, Surface, Timing};
use crate::request::{RequestClient, Transport};
use crate::schedule::Scheduler;
use crate::session::Session;

/// Platform implementations a page runs on.
pub struct Services<T> {
    pub surface: Rc<dyn Surface>,
    pub scheduler: Rc<dyn Scheduler>,
    pub transport: T,
    pub navigator: Rc<dyn Navigator>,
    pub clipboard: Rc<dyn Clipboard>,
}

pub struct Page<T> {
    config: UiConfig,
    notifier: NotificationCenter,
    client: Rc<RequestClient<T>>,
    session: Session<T>,
    scheduler: Rc<dyn Scheduler>,
    navigator: Rc<dyn Navigator>,
    clipboard: Rc<dyn Clipboard>,
    dispatcher: Dispatcher,
}

impl<T: Transport> Page<T> {
    #[must_use]
    pub fn new(config: UiConfig, services: Services<T>) -> Self {
        let Services { surface, scheduler, transport, navigator, clipboard } = services;
        let notifier = NotificationCenter::new(surface, Rc::clone(&scheduler), Timing::from_config(&config));
        let client = Rc::new(RequestClient::new(transport, notifier.clone()));
        let session = Session::new(
            Rc::clone(&client),
            notifier.clone(),
            Rc::clone(&navigator),
            Rc::clone(&scheduler),
            config.clone(),
        );
        Self { config, notifier, client, session, scheduler, navigator, clipboard, dispatcher: Dispatcher::new() }
    }

    #[must_use]
    pub fn notifier(&self) -> &NotificationCenter {
        &self.notifier
    }

    #[must_use]
    pub fn client(&self) -> &RequestClient<T> {
        &self.client
    }

    #[must_use]
    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Mutable access for registering page-specific handlers.
    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    /// Active flags for the page's nav links, in input order.
    #[must_use]
    pub fn highlight(&self, hrefs: &[Option<&str>]) -> Vec<bool> {
        nav::active_links(&self.navigator.current_path(), hrefs)
    }

    /// Resolve an input event. Synchronous so the caller can honor
    /// `prevent_default` before yielding.
    #[must_use]
    pub fn route(&self, event: &InputEvent) -> Routed {
        self.dispatcher.route(event)
    }

    /// Run routed commands in order.
    pub async fn execute(&self, routed: Routed, submit_button: Option<Rc<dyn SubmitButton>>) {
        for command in routed.commands {
            match command {
                Command::Notify { message, severity } => self.notifier.show(message, severity),
                Command::Copy { text, confirmation } => match self.clipboard.write_text(&text).await {
                    Ok(()) => self.notifier.success(confirmation),
                    Err(err) => log::warn!("copy failed: {err}"),
                },
                Command::Logout => self.session.logout().await,
                Command::HoldSubmit => match &submit_button {
                    Some(button) => hold_submit(Rc::clone(button), self.scheduler.as_ref(), self.config.submit_restore()),
                    None => log::debug!("submitted form has no submit button"),
                },
            }
        }
    }

    /// Route and execute `event`. Returns whether the default action should
    /// have been prevented.
    pub async fn handle(&self, event: InputEvent) -> bool {
        let routed = self.route(&event);
        let prevent_default = routed.prevent_default;
        self.execute(routed, event.submit_button).await;
        prevent_default
    }
}
