//! Browser wiring: `WebHost` over `web_sys`, plus the wasm entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches real DOM listeners and timers. It
//! boots a `PageController` once the document has loaded, attaches one
//! listener per reported element and schedules banner fades with gloo timers.
//! Listeners and timers live for the page lifetime, so both are `forget`-ed.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::config::{CONFIG_ELEMENT_ID, PageConfig};
use crate::controller::PageController;
use crate::error::PageError;
use crate::host::{CalendarDate, Host};
use crate::prefs::LocalStore;

pub type WebController = PageController<WebHost, LocalStore>;

fn dom_error(err: &JsValue) -> PageError {
    PageError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;
        Ok(Self { window, document })
    }

    fn collect(list: &web_sys::NodeList) -> Vec<Element> {
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect()
    }
}

impl Host for WebHost {
    type Node = Element;

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, PageError> {
        let list = self.document.query_selector_all(selector).map_err(|e| dom_error(&e))?;
        Ok(Self::collect(&list))
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Result<Vec<Element>, PageError> {
        let list = scope.query_selector_all(selector).map_err(|e| dom_error(&e))?;
        Ok(Self::collect(&list))
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn root(&self) -> Result<Element, PageError> {
        self.document.document_element().ok_or(PageError::NoRoot)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), PageError> {
        node.set_attribute(name, value).map_err(|e| dom_error(&e))
    }

    fn remove_attribute(&self, node: &Element, name: &str) -> Result<(), PageError> {
        node.remove_attribute(name).map_err(|e| dom_error(&e))
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<web_sys::HtmlInputElement>() {
            input.value()
        } else if let Some(area) = node.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = node.dyn_ref::<web_sys::HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) -> Result<(), PageError> {
        let Some(el) = node.dyn_ref::<web_sys::HtmlElement>() else {
            return Err(PageError::Dom(format!("<{}> has no inline style", node.tag_name())));
        };
        el.style().set_property(property, value).map_err(|e| dom_error(&e))
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn detach(&self, node: &Element) {
        node.remove();
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {}", dom_error(&err));
        }
    }

    fn confirm(&self, message: &str) -> bool {
        // A prompt the browser refuses to show counts as declined.
        self.window.confirm_with_message(message).unwrap_or_else(|err| {
            log::warn!("confirm failed: {}", dom_error(&err));
            false
        })
    }

    fn today(&self) -> CalendarDate {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).unwrap_or_default();
        CalendarDate::new(year, now.get_month() + 1, now.get_date())
    }

    fn prefers_dark(&self) -> bool {
        match self.window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(mq)) => mq.matches(),
            Ok(None) => false,
            Err(err) => {
                log::debug!("prefers-color-scheme query failed: {}", dom_error(&err));
                false
            }
        }
    }
}

fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("adding {event} listener failed: {}", dom_error(&err));
    }
    closure.forget();
}

fn read_config(host: &WebHost) -> PageConfig {
    let raw = host.by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    PageConfig::from_page(raw.as_deref())
}

/// Boot the controller and attach every listener and timer.
pub fn install(host: WebHost, config: PageConfig) -> Rc<WebController> {
    let page = Rc::new(PageController::new(host, LocalStore::open(), config));
    let report = page.boot();

    log::info!(
        "pageglue: {} form(s), {} confirm target(s), {} message(s), theme {}, toggle {}",
        report.forms.len(),
        report.confirms.len(),
        report.messages.len(),
        report.theme,
        if report.toggle.is_some() { "wired" } else { "absent" },
    );

    for form in report.forms {
        let page = Rc::clone(&page);
        let target = form.clone();
        listen(&form, "submit", move |event| {
            if page.submit(&target).is_cancel() {
                event.prevent_default();
            }
        });
    }

    for element in report.confirms {
        let page = Rc::clone(&page);
        let target = element.clone();
        listen(&element, "click", move |event| {
            if page.click_confirm(&target).is_cancel() {
                event.prevent_default();
            }
        });
    }

    if let Some(control) = report.toggle {
        let page = Rc::clone(&page);
        let target = control.clone();
        listen(&control, "click", move |_event| {
            page.click_toggle(&target);
        });
    }

    let timeline = report.fade.timeline();
    for message in report.messages {
        for (at_ms, step) in timeline {
            let page = Rc::clone(&page);
            let target = message.clone();
            Timeout::new(at_ms, move || page.fade_step(&target, step)).forget();
        }
    }

    page
}

fn boot_page() {
    match WebHost::new() {
        Ok(host) => {
            let config = read_config(&host);
            install(host, config);
        }
        Err(err) => log::error!("pageglue: cannot start: {err}"),
    }
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("pageglue: {}", PageError::NoDocument);
        return;
    };
    if document.ready_state() == "loading" {
        let closure = Closure::once_into_js(boot_page);
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref()) {
            log::error!("pageglue: waiting for DOMContentLoaded failed: {}", dom_error(&err));
        }
    } else {
        boot_page();
    }
}
