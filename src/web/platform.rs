//! Browser implementations of the scheduling, navigation, clipboard and
//! submit-button seams.

use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlButtonElement;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::form::SubmitButton;
use crate::navigate::Navigator;
use crate::schedule::{Scheduler, Task};

/// `setTimeout`-backed scheduler. The clock reads `Date.now()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now(&self) -> Duration {
        Duration::from_millis(js_sys::Date::now().max(0.0) as u64)
    }

    fn defer(&self, delay: Duration, task: Task) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        match web_sys::window().map(|w| w.location().pathname()) {
            Some(Ok(path)) => path,
            Some(Err(err)) => {
                log::warn!("location.pathname unavailable: {err:?}");
                String::new()
            }
            None => String::new(),
        }
    }

    fn assign(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(href) {
            log::error!("navigation to {href} failed: {err:?}");
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let clipboard = window.navigator().clipboard();
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(format!("{e:?}")))
    }
}

pub struct DomSubmitButton(pub HtmlButtonElement);

impl SubmitButton for DomSubmitButton {
    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }
}
