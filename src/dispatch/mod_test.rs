use super::*;
use crate::messages;

fn body() -> ElementInfo {
    ElementInfo::new("body")
}

fn notify(message: &str, severity: Severity) -> Command {
    Command::Notify { message: message.to_owned(), severity }
}

// =============================================================
// ElementInfo
// =============================================================

#[test]
fn element_tag_is_lowercased() {
    assert_eq!(ElementInfo::new("FORM").tag, "form");
}

#[test]
fn element_empty_attr_counts_as_present_but_not_value() {
    let el = ElementInfo::new("a").attr("data-logout", "");
    assert!(el.has_attr("data-logout"));
    assert_eq!(el.non_empty_attr("data-logout"), None);
}

// =============================================================
// Capability
// =============================================================

#[test]
fn capability_matches_markup() {
    assert!(Capability::OpenProject.matches(&ElementInfo::new("button").class("open-project-btn")));
    assert!(Capability::Download.matches(&ElementInfo::new("button").class("download-btn")));
    assert!(Capability::CodeExample.matches(&ElementInfo::new("pre").class("code-example")));
    assert!(Capability::Logout.matches(&ElementInfo::new("a").attr("data-logout", "")));
    assert!(Capability::Copy.matches(&ElementInfo::new("span").attr("data-copy", "")));
    assert!(Capability::Form.matches(&ElementInfo::new("form")));
    assert!(!Capability::Form.matches(&ElementInfo::new("div").class("form")));
}

// =============================================================
// Default table
// =============================================================

#[test]
fn default_table_registers_every_capability() {
    let dispatcher = Dispatcher::new();
    for capability in Capability::ALL {
        let trigger = if capability == Capability::Form { Trigger::Submit } else { Trigger::Click };
        assert!(dispatcher.handles(capability, trigger), "{capability:?}");
    }
    assert!(!dispatcher.handles(Capability::Form, Trigger::Click));
}

#[test]
fn click_on_plain_element_routes_nothing() {
    let routed = Dispatcher::new().route(&InputEvent::click(vec![ElementInfo::new("p"), body()]));
    assert_eq!(routed, Routed::default());
}

#[test]
fn open_project_uses_data_attribute() {
    let button = ElementInfo::new("button").class("open-project-btn").attr("data-project", "Blog API");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![button, body()]));
    assert_eq!(routed.commands, vec![notify(&messages::opening_project("Blog API"), Severity::Info)]);
    assert!(!routed.prevent_default);
}

#[test]
fn open_project_falls_back_to_card_heading() {
    let icon = ElementInfo::new("i").class("fas");
    let button = ElementInfo::new("button").class("open-project-btn").text("Открыть");
    let card = ElementInfo::new("div").class("card").heading("  Todo App ");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![icon, button, card, body()]));
    assert_eq!(routed.commands, vec![notify("Открываем проект: Todo App", Severity::Info)]);
}

#[test]
fn open_project_falls_back_to_button_text() {
    let button = ElementInfo::new("button").class("open-project-btn").text("  Shop  ");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![button, body()]));
    assert_eq!(routed.commands, vec![notify("Открываем проект: Shop", Severity::Info)]);
}

#[test]
fn open_project_without_any_name_is_silent() {
    let button = ElementInfo::new("button").class("open-project-btn");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![button, body()]));
    assert!(routed.commands.is_empty());
}

#[test]
fn download_uses_filename_or_default() {
    let named = ElementInfo::new("a").class("download-btn").attr("data-filename", "main.py");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![named]));
    assert_eq!(routed.commands, vec![notify("Файл main.py скачан", Severity::Success)]);

    let unnamed = ElementInfo::new("a").class("download-btn");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![unnamed]));
    assert_eq!(routed.commands, vec![notify("Файл generated_code скачан", Severity::Success)]);
}

#[test]
fn code_example_copies_untrimmed_text() {
    let code = ElementInfo::new("pre").class("code-example").text("  fn main() {}\n");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![code]));
    assert_eq!(
        routed.commands,
        vec![Command::Copy { text: "  fn main() {}\n".to_owned(), confirmation: messages::CODE_COPIED.to_owned() }]
    );
}

#[test]
fn logout_prevents_default() {
    let span = ElementInfo::new("span").text("Выйти");
    let link = ElementInfo::new("a").attr("data-logout", "").attr("href", "#");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![span, link, body()]));
    assert!(routed.prevent_default);
    assert_eq!(routed.commands, vec![Command::Logout]);
}

#[test]
fn copy_prefers_copy_text_attribute() {
    let el = ElementInfo::new("button").attr("data-copy", "").attr("data-copy-text", "pip install x").text("Copy");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![el]));
    assert!(routed.prevent_default);
    assert_eq!(
        routed.commands,
        vec![Command::Copy { text: "pip install x".to_owned(), confirmation: messages::TEXT_COPIED.to_owned() }]
    );
}

#[test]
fn copy_falls_back_to_text() {
    let el = ElementInfo::new("code").attr("data-copy", "").text("token-123");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![el]));
    assert_eq!(
        routed.commands,
        vec![Command::Copy { text: "token-123".to_owned(), confirmation: messages::TEXT_COPIED.to_owned() }]
    );
}

#[test]
fn closest_match_wins() {
    let inner = ElementInfo::new("button").class("download-btn").attr("data-filename", "inner.txt");
    let outer = ElementInfo::new("div").class("download-btn").attr("data-filename", "outer.txt");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![inner, outer]));
    assert_eq!(routed.commands, vec![notify("Файл inner.txt скачан", Severity::Success)]);
}

#[test]
fn several_capabilities_fire_in_order() {
    let code = ElementInfo::new("pre").class("code-example").text("x = 1");
    let wrapper = ElementInfo::new("div").attr("data-copy", "").attr("data-copy-text", "wrapped");
    let routed = Dispatcher::new().route(&InputEvent::click(vec![code, wrapper]));
    assert!(routed.prevent_default);
    assert_eq!(routed.commands.len(), 2);
    assert!(matches!(&routed.commands[0], Command::Copy { text, .. } if text == "x = 1"));
    assert!(matches!(&routed.commands[1], Command::Copy { text, .. } if text == "wrapped"));
}

#[test]
fn submit_on_form_holds_button() {
    let routed = Dispatcher::new().route(&InputEvent::submit(vec![ElementInfo::new("form"), body()], None));
    assert_eq!(routed.commands, vec![Command::HoldSubmit]);
    assert!(!routed.prevent_default);
}

#[test]
fn click_does_not_trigger_submit_handlers() {
    let routed = Dispatcher::new().route(&InputEvent::click(vec![ElementInfo::new("form")]));
    assert!(routed.commands.is_empty());
}

// =============================================================
// Custom handlers
// =============================================================

#[test]
fn on_replaces_handler() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.on(Capability::Download, Trigger::Click, |m| {
        Routed::command(Command::Notify { message: format!("custom {}", m.element.tag), severity: Severity::Warning })
    });
    let routed = dispatcher.route(&InputEvent::click(vec![ElementInfo::new("a").class("download-btn")]));
    assert_eq!(routed.commands, vec![notify("custom a", Severity::Warning)]);
}

#[test]
fn off_removes_handler() {
    let mut dispatcher = Dispatcher::new();
    dispatcher.off(Capability::Logout, Trigger::Click);
    let routed = dispatcher.route(&InputEvent::click(vec![ElementInfo::new("a").attr("data-logout", "")]));
    assert_eq!(routed, Routed::default());
}

#[test]
fn empty_dispatcher_routes_nothing() {
    let routed = Dispatcher::empty().route(&InputEvent::click(vec![ElementInfo::new("a").attr("data-logout", "")]));
    assert_eq!(routed, Routed::default());
}
