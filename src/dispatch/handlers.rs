//! Default handlers for the portal markup.

use crate::messages;
use crate::notify::Severity;

use super::{Command, Matched, Routed};

pub(super) fn open_project(matched: Matched<'_>) -> Routed {
    let from_card = || {
        matched
            .closest_with_class("card")
            .and_then(|card| card.heading.as_deref())
            .map(str::trim)
            .filter(|h| !h.is_empty())
    };
    let name = matched
        .element
        .non_empty_attr("data-project")
        .or_else(from_card)
        .unwrap_or_else(|| matched.element.text.trim());

    if name.is_empty() {
        log::warn!("open-project button has no project name");
        return Routed::default();
    }
    Routed::command(Command::Notify { message: messages::opening_project(name), severity: Severity::Info })
}

pub(super) fn download(matched: Matched<'_>) -> Routed {
    let name = matched
        .element
        .non_empty_attr("data-filename")
        .unwrap_or(messages::DEFAULT_DOWNLOAD_NAME);
    Routed::command(Command::Notify { message: messages::file_downloaded(name), severity: Severity::Success })
}

pub(super) fn copy_code_example(matched: Matched<'_>) -> Routed {
    Routed::command(Command::Copy {
        text: matched.element.text.clone(),
        confirmation: messages::CODE_COPIED.to_owned(),
    })
}

pub(super) fn logout(_matched: Matched<'_>) -> Routed {
    Routed::command(Command::Logout).prevent()
}

pub(super) fn copy_text(matched: Matched<'_>) -> Routed {
    let text = matched
        .element
        .non_empty_attr("data-copy-text")
        .unwrap_or(matched.element.text.as_str());
    Routed::command(Command::Copy { text: text.to_owned(), confirmation: messages::TEXT_COPIED.to_owned() })
        .prevent()
}

pub(super) fn hold_submit(_matched: Matched<'_>) -> Routed {
    Routed::command(Command::HoldSubmit)
}
