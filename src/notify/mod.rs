//! Toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any part of the page reports status through [`NotificationCenter::show`].
//! The center mounts an overlay on a [`Surface`] and hands its dismissal to a
//! [`Scheduler`]; the caller is never blocked and never sees an error.
//!
//! LIFECYCLE
//! =========
//! `show` → mounted → (display, 3000 ms) → exiting → (exit, 300 ms) → removed.
//!
//! Each call owns its element and its two timers. Nothing is shared between
//! notifications, so rapid calls overlap on screen without limit. There is no
//! queue and no cap; callers that flood the page get a flooded page.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod surface;

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::UiConfig;
use crate::schedule::Scheduler;

pub use surface::{MemorySurface, MountedNotification, Phase, Surface};

/// Classes shared by every toast regardless of severity.
pub const OVERLAY_CLASS: &str =
    "fixed top-4 right-4 z-50 px-6 py-4 rounded-lg shadow-lg transform transition-all duration-300";

/// Inline transform applied when a toast starts leaving.
pub const EXIT_TRANSFORM: &str = "translateX(100%)";

// =============================================================================
// SEVERITY
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Visual treatment of one severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub class: &'static str,
    pub icon: &'static str,
}

impl Severity {
    /// Parse a severity name. Anything unrecognized is `Info`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn presentation(self) -> Presentation {
        match self {
            Self::Info => Presentation {
                class: "bg-blue-50 text-blue-800 border border-blue-200",
                icon: "fas fa-info-circle",
            },
            Self::Success => Presentation {
                class: "bg-green-50 text-green-800 border border-green-200",
                icon: "fas fa-check-circle",
            },
            Self::Warning => Presentation {
                class: "bg-yellow-50 text-yellow-800 border border-yellow-200",
                icon: "fas fa-exclamation-triangle",
            },
            Self::Error => Presentation {
                class: "bg-red-50 text-red-800 border border-red-200",
                icon: "fas fa-times-circle",
            },
        }
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// NOTIFICATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NotificationId(Uuid);

impl NotificationId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    /// Scheduler clock reading at the time of `show`.
    pub created_at: Duration,
}

impl Notification {
    /// Full class attribute for the overlay element.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("{OVERLAY_CLASS} {}", self.severity.presentation().class)
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.severity.presentation().icon
    }
}

// =============================================================================
// CENTER
// =============================================================================

/// How long a toast is shown and how long it takes to leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub display: Duration,
    pub exit: Duration,
}

impl Timing {
    #[must_use]
    pub fn from_config(config: &UiConfig) -> Self {
        Self { display: config.notification_display(), exit: config.notification_exit() }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

/// Shows toasts. Cheap to clone; clones share the surface and scheduler.
#[derive(Clone)]
pub struct NotificationCenter {
    surface: Rc<dyn Surface>,
    scheduler: Rc<dyn Scheduler>,
    timing: Timing,
}

impl NotificationCenter {
    #[must_use]
    pub fn new(surface: Rc<dyn Surface>, scheduler: Rc<dyn Scheduler>, timing: Timing) -> Self {
        Self { surface, scheduler, timing }
    }

    /// Show `message` and schedule its dismissal.
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let notification = Notification {
            id: NotificationId::new(),
            message: message.into(),
            severity,
            created_at: self.scheduler.now(),
        };
        let id = notification.id;
        log::debug!("notification {id} shown ({severity})");
        self.surface.mount(&notification);

        let surface = Rc::clone(&self.surface);
        let scheduler = Rc::clone(&self.scheduler);
        let exit = self.timing.exit;
        self.scheduler.defer(
            self.timing.display,
            Box::new(move || {
                surface.begin_exit(id);
                scheduler.defer(
                    exit,
                    Box::new(move || {
                        surface.remove(id);
                        log::debug!("notification {id} removed");
                    }),
                );
            }),
        );
    }

    /// [`NotificationCenter::show`] with the default `Info` severity.
    pub fn info(&self, message: impl Into<String>) {
        self.show(message, Severity::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }

    #[must_use]
    pub fn timing(&self) -> Timing {
        self.timing
    }
}
