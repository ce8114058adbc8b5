//! Toasts as DOM nodes appended to `<body>`.

use std::cell::RefCell;
use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::notify::{EXIT_TRANSFORM, Notification, NotificationId, Surface};

pub struct DomSurface {
    document: Document,
    mounted: RefCell<HashMap<NotificationId, Element>>,
}

impl DomSurface {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document, mounted: RefCell::new(HashMap::new()) }
    }

    // <div class="..."><div class="flex items-center"><i class="icon mr-3"></i><span>msg</span></div></div>
    fn build(&self, notification: &Notification) -> Result<Element, JsValue> {
        let root = self.document.create_element("div")?;
        root.set_class_name(&notification.class_name());

        let row = self.document.create_element("div")?;
        row.set_class_name("flex items-center");

        let icon = self.document.create_element("i")?;
        icon.set_class_name(&format!("{} mr-3", notification.icon()));

        let text = self.document.create_element("span")?;
        text.set_text_content(Some(&notification.message));

        row.append_child(&icon)?;
        row.append_child(&text)?;
        root.append_child(&row)?;
        Ok(root)
    }

    fn attach(&self, notification: &Notification) -> Result<Element, JsValue> {
        let body = self.document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
        let element = self.build(notification)?;
        body.append_child(&element)?;
        Ok(element)
    }
}

impl Surface for DomSurface {
    fn mount(&self, notification: &Notification) {
        match self.attach(notification) {
            Ok(element) => {
                self.mounted.borrow_mut().insert(notification.id, element);
            }
            Err(err) => log::warn!("notification {} not rendered: {err:?}", notification.id),
        }
    }

    fn begin_exit(&self, id: NotificationId) {
        let mounted = self.mounted.borrow();
        let Some(element) = mounted.get(&id).and_then(|el| el.dyn_ref::<HtmlElement>()) else {
            return;
        };
        if let Err(err) = element.style().set_property("transform", EXIT_TRANSFORM) {
            log::warn!("notification {id} exit transition failed: {err:?}");
        }
    }

    fn remove(&self, id: NotificationId) {
        if let Some(element) = self.mounted.borrow_mut().remove(&id) {
            element.remove();
        }
    }
}
