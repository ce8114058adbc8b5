//! Document-level listeners feeding the dispatcher.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlButtonElement};

use crate::dispatch::{Capability, ElementInfo, InputEvent, Trigger};
use crate::form::SubmitButton;
use crate::nav::{ACTIVE_CLASS, NAV_LINK_CLASS};
use crate::page::Page;
use crate::request::Transport;

use super::platform::DomSubmitButton;

/// Describe `target` and each of its ancestors, target first.
#[must_use]
pub fn element_path(target: &Element) -> Vec<ElementInfo> {
    let mut path = Vec::new();
    let mut current = Some(target.clone());
    while let Some(element) = current {
        path.push(describe(&element));
        current = element.parent_element();
    }
    path
}

fn describe(element: &Element) -> ElementInfo {
    let mut info = ElementInfo::new(&element.tag_name());

    let classes = element.class_list();
    for i in 0..classes.length() {
        if let Some(class) = classes.item(i) {
            info.classes.push(class);
        }
    }
    for name in element.get_attribute_names().iter() {
        if let Some(name) = name.as_string() {
            if let Some(value) = element.get_attribute(&name) {
                info.attributes.insert(name, value);
            }
        }
    }

    // Text is only read where a handler can use it; `body.textContent` on
    // every click would copy the whole page.
    if Capability::ALL.iter().any(|c| c.matches(&info)) {
        info.text = element.text_content().unwrap_or_default();
    }
    if info.has_class("card") {
        if let Ok(Some(heading)) = element.query_selector("h3") {
            info.heading = heading.text_content();
        }
    }
    info
}

fn submit_button(form: &Element) -> Option<Rc<dyn SubmitButton>> {
    let Ok(Some(element)) = form.query_selector("button[type=\"submit\"]") else {
        return None;
    };
    match element.dyn_into::<HtmlButtonElement>() {
        Ok(button) => Some(Rc::new(DomSubmitButton(button))),
        Err(element) => {
            log::debug!("submit control <{}> is not a button", element.tag_name());
            None
        }
    }
}

fn on_event<T: Transport + 'static>(page: &Rc<Page<T>>, event: &Event, trigger: Trigger) {
    let Some(target) = event.target() else {
        return;
    };
    let Ok(target) = target.dyn_into::<Element>() else {
        return;
    };

    let path = element_path(&target);
    let input = match trigger {
        Trigger::Click => InputEvent::click(path),
        Trigger::Submit => InputEvent::submit(path, submit_button(&target)),
    };

    let routed = page.route(&input);
    if routed.prevent_default {
        event.prevent_default();
    }
    if routed.commands.is_empty() {
        return;
    }

    let page = Rc::clone(page);
    let button = input.submit_button;
    wasm_bindgen_futures::spawn_local(async move {
        page.execute(routed, button).await;
    });
}

/// Attach the click and submit listeners to `document`. The listeners live
/// as long as the page.
///
/// # Errors
///
/// Returns the DOM exception if a listener cannot be attached.
pub fn install<T: Transport + 'static>(page: &Rc<Page<T>>, document: &Document) -> Result<(), JsValue> {
    for (name, trigger) in [("click", Trigger::Click), ("submit", Trigger::Submit)] {
        let page = Rc::clone(page);
        let listener = Closure::wrap(Box::new(move |event: Event| on_event(&page, &event, trigger)) as Box<dyn FnMut(Event)>);
        document.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())?;
        listener.forget();
    }
    Ok(())
}

/// Toggle `active` on every `.nav-link` according to the current path.
pub fn highlight_nav<T: Transport>(page: &Page<T>, document: &Document) {
    let links = match document.query_selector_all(&format!(".{NAV_LINK_CLASS}")) {
        Ok(links) => links,
        Err(err) => {
            log::warn!("nav links unavailable: {err:?}");
            return;
        }
    };

    let elements: Vec<Element> = (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|node| match node.dyn_into::<Element>() {
            Ok(element) => Some(element),
            Err(node) => {
                log::debug!("skipping non-element nav node {}", node.node_name());
                None
            }
        })
        .collect();
    let hrefs: Vec<Option<String>> = elements.iter().map(|el| el.get_attribute("href")).collect();
    let borrowed: Vec<Option<&str>> = hrefs.iter().map(Option::as_deref).collect();

    for (element, active) in elements.iter().zip(page.highlight(&borrowed)) {
        let class_list = element.class_list();
        let result = if active { class_list.add_1(ACTIVE_CLASS) } else { class_list.remove_1(ACTIVE_CLASS) };
        if let Err(err) = result {
            log::warn!("nav highlight failed: {err:?}");
        }
    }
}
