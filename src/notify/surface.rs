//! Where notifications are drawn.
//!
//! A [`Surface`] receives three calls per notification, always in this order:
//! `mount`, `begin_exit`, `remove`. Implementations must not fail observably;
//! a surface that cannot draw logs and carries on.

use std::cell::{Cell, RefCell};

use super::{Notification, NotificationId, Severity};

pub trait Surface {
    /// Render a new overlay for `notification`.
    fn mount(&self, notification: &Notification);

    /// Start the exit transition of a mounted overlay.
    fn begin_exit(&self, id: NotificationId);

    /// Drop the overlay entirely.
    fn remove(&self, id: NotificationId);
}

/// Visible state of a mounted notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Shown,
    Exiting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountedNotification {
    pub notification: Notification,
    pub class_name: String,
    pub icon: &'static str,
    pub phase: Phase,
}

/// In-memory surface. Keeps mounted notifications in mount order, like
/// children appended to a document body.
#[derive(Default)]
pub struct MemorySurface {
    mounted: RefCell<Vec<MountedNotification>>,
    total_mounted: Cell<usize>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything currently mounted.
    #[must_use]
    pub fn mounted(&self) -> Vec<MountedNotification> {
        self.mounted.borrow().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mounted.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounted.borrow().is_empty()
    }

    /// Messages currently mounted with `severity`.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.mounted
            .borrow()
            .iter()
            .filter(|m| m.notification.severity == severity)
            .map(|m| m.notification.message.clone())
            .collect()
    }

    /// Notifications ever mounted, including removed ones.
    #[must_use]
    pub fn total_mounted(&self) -> usize {
        self.total_mounted.get()
    }
}

impl Surface for MemorySurface {
    fn mount(&self, notification: &Notification) {
        self.mounted.borrow_mut().push(MountedNotification {
            notification: notification.clone(),
            class_name: notification.class_name(),
            icon: notification.icon(),
            phase: Phase::Shown,
        });
        self.total_mounted.set(self.total_mounted.get() + 1);
    }

    fn begin_exit(&self, id: NotificationId) {
        if let Some(entry) = self.mounted.borrow_mut().iter_mut().find(|m| m.notification.id == id) {
            entry.phase = Phase::Exiting;
        }
    }

    fn remove(&self, id: NotificationId) {
        self.mounted.borrow_mut().retain(|m| m.notification.id != id);
    }
}
