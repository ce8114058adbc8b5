//! Browser entry point and DOM bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! `boot()` is exported to JavaScript. It installs logging, reads the page
//! config, builds a [`Page`] on the DOM implementations in this module,
//! highlights nav links and attaches the document listeners. It must run
//! after the document is parsed; a `type="module"` script already does.
//!
//! The returned [`PortalUi`] handle is the page script's only way into the
//! services: there are no `window` globals.

pub mod events;
pub mod fetch;
pub mod platform;
pub mod surface;

use std::rc::Rc;

use js_sys::Promise;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::Document;

use crate::config::UiConfig;
use crate::notify::Severity;
use crate::page::{Page, Services};
use crate::request::RequestOptions;

pub use fetch::FetchTransport;
pub use platform::{BrowserClipboard, BrowserNavigator, BrowserScheduler, DomSubmitButton};
pub use surface::DomSurface;

/// Id of the optional `<script type="application/json">` holding a [`UiConfig`].
pub const CONFIG_ELEMENT_ID: &str = "portal-ui-config";

pub type BrowserPage = Page<FetchTransport>;

/// Route `log` to the console and panics to `console.error`.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

fn read_config(document: &Document) -> UiConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring page config: {err}");
            UiConfig::default()
        }
    }
}

/// Build a page wired to the browser.
#[must_use]
pub fn build_page(document: &Document) -> BrowserPage {
    Page::new(
        read_config(document),
        Services {
            surface: Rc::new(DomSurface::new(document.clone())),
            scheduler: Rc::new(BrowserScheduler),
            transport: FetchTransport,
            navigator: Rc::new(BrowserNavigator),
            clipboard: Rc::new(BrowserClipboard),
        },
    )
}

// =============================================================================
// JS HANDLE
// =============================================================================

/// Services exposed to page scripts.
#[wasm_bindgen]
pub struct PortalUi {
    page: Rc<BrowserPage>,
}

#[wasm_bindgen]
impl PortalUi {
    /// Show a toast. `severity` is `info`, `success`, `warning` or `error`;
    /// anything else is `info`.
    pub fn show(&self, message: &str, severity: Option<String>) {
        let severity = severity.as_deref().map_or(Severity::Info, Severity::from_name);
        self.page.notifier().show(message, severity);
    }

    /// JSON request. Resolves with the parsed body, rejects with an `Error`
    /// whose message is the user-facing failure text.
    pub fn request(&self, url: String, method: Option<String>, body: JsValue, headers: JsValue) -> Promise {
        let page = Rc::clone(&self.page);
        future_to_promise(async move {
            let options = request_options(method, &body, &headers)?;
            let value = page
                .client()
                .request(&url, options)
                .await
                .map_err(|e| JsValue::from(js_sys::Error::new(&e.message())))?;
            to_js(&value)
        })
    }

    #[wasm_bindgen(js_name = checkAuth)]
    pub fn check_auth(&self) -> Promise {
        let page = Rc::clone(&self.page);
        future_to_promise(async move { Ok(JsValue::from_bool(page.session().check_auth().await)) })
    }

    #[wasm_bindgen(js_name = getCurrentUser)]
    pub fn current_user(&self) -> Promise {
        let page = Rc::clone(&self.page);
        future_to_promise(async move {
            match page.session().current_user().await {
                Some(user) => to_js(&user),
                None => Ok(JsValue::NULL),
            }
        })
    }

    pub fn logout(&self) -> Promise {
        let page = Rc::clone(&self.page);
        future_to_promise(async move {
            page.session().logout().await;
            Ok(JsValue::UNDEFINED)
        })
    }
}

fn to_js(value: &Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}

fn from_js(value: &JsValue) -> Result<Option<Value>, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    let text = String::from(js_sys::JSON::stringify(value)?);
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn request_options(method: Option<String>, body: &JsValue, headers: &JsValue) -> Result<RequestOptions, JsValue> {
    let mut options = RequestOptions::new();
    if let Some(method) = method {
        options = options.method(method);
    }
    if let Some(body) = from_js(body)? {
        options = options.json(body);
    }
    if let Some(Value::Object(headers)) = from_js(headers)? {
        for (name, value) in headers {
            let value = match value {
                Value::String(text) => text,
                other => other.to_string(),
            };
            options = options.header(name, value);
        }
    }
    Ok(options)
}

/// Wire the current document. Call once per page load.
///
/// # Errors
///
/// Fails when there is no document or a listener cannot be attached.
#[wasm_bindgen]
pub fn boot() -> Result<PortalUi, JsValue> {
    init_logging();
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let page = Rc::new(build_page(&document));
    events::highlight_nav(&page, &document);
    events::install(&page, &document)?;
    log::info!("portal ui ready");
    Ok(PortalUi { page })
}
