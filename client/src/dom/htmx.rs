//! `Hypermedia` implementation backed by the document and htmx.
//!
//! TRADE-OFFS
//! ==========
//! htmx is reached through its global object rather than an npm binding, so
//! a page that failed to load htmx surfaces as a caught JS exception on the
//! first trigger or fetch. Those are logged and the event is considered
//! handled; the socket keeps running.

use js_sys::{Object, Reflect};
use realtime::{ClientEvent, Hypermedia, RegionId, Swap};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = htmx, js_name = trigger, catch)]
    fn htmx_trigger(elt: &Element, name: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = htmx, js_name = ajax, catch)]
    fn htmx_ajax(verb: &str, path: &str, context: &JsValue) -> Result<JsValue, JsValue>;
}

/// The board page as seen by the dispatch table.
pub struct HtmxPage {
    document: Document,
}

impl HtmxPage {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Page adapter for the current window, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }
}

impl Hypermedia for HtmxPage {
    type Region = Element;

    fn find(&self, id: &RegionId) -> Option<Element> {
        self.document.get_element_by_id(id.as_str())
    }

    fn set_text(&self, region: &Element, text: &str) {
        region.set_text_content(Some(text));
    }

    fn trigger(&self, region: &Element, event: ClientEvent) {
        if let Err(e) = htmx_trigger(region, event.as_str()) {
            log::warn!("htmx.trigger({}, {event}) failed: {e:?}", region.id());
        }
    }

    fn remove(&self, region: Element) {
        region.remove();
    }

    fn fetch(&self, url: &str, target: &Element, swap: Swap) {
        let context = Object::new();
        let selector = format!("#{}", target.id());
        let set = Reflect::set(&context, &JsValue::from_str("target"), &JsValue::from_str(&selector))
            .and_then(|_| Reflect::set(&context, &JsValue::from_str("swap"), &JsValue::from_str(swap.as_str())));
        if let Err(e) = set {
            log::warn!("could not build htmx.ajax context: {e:?}");
            return;
        }

        // The returned promise is dropped; htmx performs the swap itself.
        if let Err(e) = htmx_ajax("GET", url, &context) {
            log::warn!("htmx.ajax(GET {url}) failed: {e:?}");
        }
    }
}
