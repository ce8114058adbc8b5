//! Input dispatch for the static page markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser binding turns each click or submit into an [`InputEvent`]: the
//! trigger plus a description of every element from the target up to the
//! root. The [`Dispatcher`] finds, for each [`Capability`], the closest
//! element on that path that has it, and runs the handler registered for
//! `(capability, trigger)`. Handlers are pure: they return [`Command`]s and
//! the page executes them.
//!
//! DESIGN
//! ======
//! Capabilities are checked in a fixed order (see [`Capability::ALL`]), so a
//! single click can fire several handlers, e.g. a `.code-example` that also
//! carries `data-copy`. Their commands are concatenated in that order and
//! `prevent_default` is set if any handler asks for it.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod element;
mod handlers;

use std::collections::HashMap;
use std::rc::Rc;

use crate::form::SubmitButton;
use crate::notify::Severity;

pub use element::ElementInfo;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    Click,
    Submit,
}

/// Something an element can do, derived from its markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `.open-project-btn`
    OpenProject,
    /// `.download-btn`
    Download,
    /// `.code-example`
    CodeExample,
    /// `[data-logout]`
    Logout,
    /// `[data-copy]`
    Copy,
    /// `<form>`
    Form,
}

impl Capability {
    /// Every capability, in handler order.
    pub const ALL: [Self; 6] = [
        Self::OpenProject,
        Self::Download,
        Self::CodeExample,
        Self::Logout,
        Self::Copy,
        Self::Form,
    ];

    #[must_use]
    pub fn matches(self, element: &ElementInfo) -> bool {
        match self {
            Self::OpenProject => element.has_class("open-project-btn"),
            Self::Download => element.has_class("download-btn"),
            Self::CodeExample => element.has_class("code-example"),
            Self::Logout => element.has_attr("data-logout"),
            Self::Copy => element.has_attr("data-copy"),
            Self::Form => element.tag == "form",
        }
    }
}

/// A user input as seen by the dispatcher.
#[derive(Clone)]
pub struct InputEvent {
    pub trigger: Trigger,
    /// Target first, then each ancestor up to the root.
    pub path: Vec<ElementInfo>,
    /// For submits: the form's `button[type="submit"]`, if it has one.
    pub submit_button: Option<Rc<dyn SubmitButton>>,
}

impl InputEvent {
    #[must_use]
    pub fn click(path: Vec<ElementInfo>) -> Self {
        Self { trigger: Trigger::Click, path, submit_button: None }
    }

    #[must_use]
    pub fn submit(path: Vec<ElementInfo>, submit_button: Option<Rc<dyn SubmitButton>>) -> Self {
        Self { trigger: Trigger::Submit, path, submit_button }
    }
}

/// The element a capability resolved to, with its ancestors.
#[derive(Clone, Copy, Debug)]
pub struct Matched<'a> {
    pub element: &'a ElementInfo,
    pub ancestors: &'a [ElementInfo],
}

impl<'a> Matched<'a> {
    /// The element itself or its nearest ancestor carrying `class`.
    #[must_use]
    pub fn closest_with_class(&self, class: &str) -> Option<&'a ElementInfo> {
        std::iter::once(self.element)
            .chain(self.ancestors.iter())
            .find(|el| el.has_class(class))
    }
}

/// Work a handler asks the page to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Notify { message: String, severity: Severity },
    /// Copy `text`, then show `confirmation` as a success toast.
    Copy { text: String, confirmation: String },
    Logout,
    HoldSubmit,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Routed {
    pub prevent_default: bool,
    pub commands: Vec<Command>,
}

impl Routed {
    #[must_use]
    pub fn command(command: Command) -> Self {
        Self { prevent_default: false, commands: vec![command] }
    }

    #[must_use]
    pub fn prevent(mut self) -> Self {
        self.prevent_default = true;
        self
    }

    fn absorb(&mut self, other: Routed) {
        self.prevent_default |= other.prevent_default;
        self.commands.extend(other.commands);
    }
}

pub type Handler = Box<dyn Fn(Matched<'_>) -> Routed>;

/// Handler table keyed by `(capability, trigger)`.
pub struct Dispatcher {
    handlers: HashMap<(Capability, Trigger), Handler>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        let mut dispatcher = Self::empty();
        dispatcher
            .on(Capability::OpenProject, Trigger::Click, handlers::open_project)
            .on(Capability::Download, Trigger::Click, handlers::download)
            .on(Capability::CodeExample, Trigger::Click, handlers::copy_code_example)
            .on(Capability::Logout, Trigger::Click, handlers::logout)
            .on(Capability::Copy, Trigger::Click, handlers::copy_text)
            .on(Capability::Form, Trigger::Submit, handlers::hold_submit);
        dispatcher
    }
}

impl Dispatcher {
    /// The portal's standard handler table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher with no handlers.
    #[must_use]
    pub fn empty() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// Register `handler`, replacing any previous one for the same key.
    pub fn on<F>(&mut self, capability: Capability, trigger: Trigger, handler: F) -> &mut Self
    where
        F: Fn(Matched<'_>) -> Routed + 'static,
    {
        self.handlers.insert((capability, trigger), Box::new(handler));
        self
    }

    /// Drop the handler for `(capability, trigger)`.
    pub fn off(&mut self, capability: Capability, trigger: Trigger) -> &mut Self {
        self.handlers.remove(&(capability, trigger));
        self
    }

    #[must_use]
    pub fn handles(&self, capability: Capability, trigger: Trigger) -> bool {
        self.handlers.contains_key(&(capability, trigger))
    }

    /// Resolve `event` against the table.
    #[must_use]
    pub fn route(&self, event: &InputEvent) -> Routed {
        let mut routed = Routed::default();
        for capability in Capability::ALL {
            let Some(handler) = self.handlers.get(&(capability, event.trigger)) else {
                continue;
            };
            let Some(index) = event.path.iter().position(|el| capability.matches(el)) else {
                continue;
            };
            let matched = Matched { element: &event.path[index], ancestors: &event.path[index + 1..] };
            routed.absorb(handler(matched));
        }
        routed
    }
}
