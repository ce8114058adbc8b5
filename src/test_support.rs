//! Shared fixtures for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::notify::{MemorySurface, NotificationCenter, Timing};
use crate::request::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::schedule::ManualScheduler;

// =========================================================================
// MockTransport
// =========================================================================

/// Replays canned outcomes in order and records every request it receives.
/// Once the script runs out it answers `200 {}`.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.script.borrow_mut().push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.script.borrow_mut().push_back(Err(TransportError::new(message)));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, "{}")))
    }
}

// =========================================================================
// Notification fixtures
// =========================================================================

pub struct Toasts {
    pub surface: Rc<MemorySurface>,
    pub scheduler: Rc<ManualScheduler>,
    pub center: NotificationCenter,
}

pub fn toasts() -> Toasts {
    let surface = Rc::new(MemorySurface::new());
    let scheduler = Rc::new(ManualScheduler::new());
    let center = NotificationCenter::new(surface.clone(), scheduler.clone(), Timing::default());
    Toasts { surface, scheduler, center }
}
