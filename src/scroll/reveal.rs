use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::{
    REVEAL_HIDDEN_TRANSFORM, REVEAL_ROOT_MARGIN, REVEAL_SELECTORS, REVEAL_SHOWN_TRANSFORM, REVEAL_THRESHOLD,
    REVEAL_TRANSITION,
};

/// Fades card-like elements in as they scroll into view.
///
/// Each element is unobserved after its first reveal; the end state is the
/// same either way.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn install(document: &Document) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    let style = element.style();
                    let revealed = style
                        .set_property("opacity", "1")
                        .and_then(|_| style.set_property("transform", REVEAL_SHOWN_TRANSFORM));
                    if let Err(e) = revealed {
                        warn!("Failed to reveal card: {:?}", e);
                    }
                }
                observer.unobserve(&target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let cards = document.query_selector_all(REVEAL_SELECTORS)?;
        for i in 0..cards.length() {
            let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let style = card.style();
            style.set_property("opacity", "0")?;
            style.set_property("transform", REVEAL_HIDDEN_TRANSFORM)?;
            style.set_property("transition", REVEAL_TRANSITION)?;
            observer.observe(&card);
        }
        debug!("Watching {} cards for fade-in", cards.length());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
