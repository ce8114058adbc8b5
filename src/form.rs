//! Submit button busy state.
//!
//! On submit the form's button shows a spinner and is disabled, then gets its
//! original label back after a fixed delay. The delay is not tied to any
//! request: forms here post normally and the page usually navigates away
//! before the restore fires.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::rc::Rc;
use std::time::Duration;

use crate::messages::SUBMIT_BUSY_HTML;
use crate::schedule::Scheduler;

/// The pieces of a `<button type="submit">` this module touches.
pub trait SubmitButton {
    fn inner_html(&self) -> String;
    fn set_inner_html(&self, html: &str);
    fn set_disabled(&self, disabled: bool);
}

/// Put `button` into the busy state and schedule its restore after `restore_after`.
pub fn hold_submit(button: Rc<dyn SubmitButton>, scheduler: &dyn Scheduler, restore_after: Duration) {
    let original = button.inner_html();
    button.set_inner_html(SUBMIT_BUSY_HTML);
    button.set_disabled(true);
    scheduler.defer(
        restore_after,
        Box::new(move || {
            button.set_inner_html(&original);
            button.set_disabled(false);
        }),
    );
}
