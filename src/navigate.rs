//! Page navigation seam.

use std::cell::RefCell;

pub trait Navigator {
    /// Path of the current page, e.g. `/projects`.
    fn current_path(&self) -> String;

    /// Leave the current page for `href`.
    fn assign(&self, href: &str);
}

/// Records navigations instead of performing them.
#[derive(Default)]
pub struct MemoryNavigator {
    path: RefCell<String>,
    visited: RefCell<Vec<String>>,
}

impl MemoryNavigator {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: RefCell::new(path.into()), visited: RefCell::new(Vec::new()) }
    }

    /// Every `href` passed to [`Navigator::assign`], oldest first.
    #[must_use]
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn assign(&self, href: &str) {
        self.visited.borrow_mut().push(href.to_owned());
        *self.path.borrow_mut() = href.to_owned();
    }
}
