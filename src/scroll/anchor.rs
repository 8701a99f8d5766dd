use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::HEADER_OFFSET;
use crate::dom::EventListener;

/// Id targeted by an in-page link, or `None` when the click should keep its
/// default behaviour (bare `#` or not a fragment link at all).
pub fn fragment_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Scroll position that puts an element at `offset_top` just below the fixed header.
pub fn scroll_top_for(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET
}

/// Smooth scrolling for every `a[href^="#"]` on the page, handled through a
/// single delegated click listener on the document.
pub struct AnchorScroller {
    _listener: EventListener,
}

impl AnchorScroller {
    pub fn install(document: &Document) -> Result<Self, JsValue> {
        let doc = document.clone();
        let listener = EventListener::new(document, "click", move |event| {
            handle_click(&doc, &event);
        })?;
        Ok(Self { _listener: listener })
    }
}

fn handle_click(document: &Document, event: &Event) {
    let Some(anchor) = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a[href^='#']").ok().flatten())
    else {
        return;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return;
    };
    let Some(id) = fragment_target(&href) else {
        return;
    };

    event.prevent_default();

    let Some(target) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("No element with id {:?} to scroll to", id);
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_top_for(f64::from(target.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_keeps_default() {
        assert_eq!(fragment_target("#"), None);
    }

    #[test]
    fn fragment_links_resolve_to_ids() {
        assert_eq!(fragment_target("#services"), Some("services"));
        assert_eq!(fragment_target("#faq"), Some("faq"));
    }

    #[test]
    fn non_fragment_links_are_ignored() {
        assert_eq!(fragment_target("/privacy"), None);
        assert_eq!(fragment_target("https://example.com/#top"), None);
    }

    #[test]
    fn header_offset_is_subtracted() {
        assert_eq!(scroll_top_for(500.0), 420.0);
        assert_eq!(scroll_top_for(0.0), -80.0);
    }
}
