//! # portal-ui
//!
//! Browser-side glue for the portal pages: toast notifications, a JSON
//! request wrapper with uniform error reporting, session helpers, and an
//! explicit input dispatcher for the static markup.
//!
//! The crate is split so that all behavior can be exercised natively. Every
//! browser concern sits behind a small trait (`Surface`, `Scheduler`,
//! `Transport`, `Navigator`, `Clipboard`, `SubmitButton`); the `hydrate`
//! feature provides the DOM implementations and the `native` feature provides
//! `reqwest`/`tokio` ones.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`notify`] | `NotificationCenter` and the toast lifecycle |
//! | [`schedule`] | Deferred-task scheduling (virtual, tokio, browser) |
//! | [`request`] | `RequestClient`, transports and `RequestError` |
//! | [`session`] | Auth check, current user, logout |
//! | [`dispatch`] | Input events, capabilities and the handler table |
//! | [`page`] | Wiring of all services and command execution |
//! | [`nav`] | Current-page link highlighting |
//! | [`form`] | Submit button busy state |
//! | [`clipboard`] | Clipboard seam |
//! | [`navigate`] | Page navigation seam |
//! | [`config`] | `UiConfig` |
//! | [`messages`] | User-facing strings |
//! | [`consts`] | Timings and endpoints |

pub mod clipboard;
pub mod config;
pub mod consts;
pub mod dispatch;
pub mod form;
pub mod messages;
pub mod nav;
pub mod navigate;
pub mod notify;
pub mod page;
pub mod request;
pub mod schedule;
pub mod session;
#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
mod test_support;

pub use config::UiConfig;
pub use notify::{NotificationCenter, Severity};
pub use page::Page;
pub use request::{RequestClient, RequestError, RequestOptions};
pub use session::Session;
