//! DOM element bindings.
//!
//! All elements are resolved once at mount. The canvas and the entry
//! textarea are required; the buttons, error region, and history list are
//! optional so a page can leave any of them out.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, HtmlTextAreaElement};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn by_id_typed<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)
        .and_then(|e| e.dyn_into::<T>().ok())
}

pub struct Elements {
    pub canvas: HtmlCanvasElement,
    pub entries: HtmlTextAreaElement,
    pub spin_btn: Option<Element>,
    pub reset_btn: Option<Element>,
    pub error: Option<HtmlElement>,
    pub history: Option<Element>,
}

impl Elements {
    pub fn bind() -> Result<Self, JsValue> {
        let doc = document()?;
        let canvas = by_id_typed::<HtmlCanvasElement>(&doc, "wheelCanvas")
            .ok_or_else(|| JsValue::from_str("#wheelCanvas not found"))?;
        let entries = by_id_typed::<HtmlTextAreaElement>(&doc, "entries")
            .ok_or_else(|| JsValue::from_str("#entries not found"))?;
        Ok(Self {
            canvas,
            entries,
            spin_btn: doc.get_element_by_id("spinBtn"),
            reset_btn: doc.get_element_by_id("resetBtn"),
            error: by_id_typed(&doc, "error"),
            history: doc.get_element_by_id("history"),
        })
    }

    pub fn entries_text(&self) -> String {
        self.entries.value()
    }

    pub fn set_entries_text(&self, text: &str) {
        self.entries.set_value(text);
    }

    /// Show `msg` in the error region, or hide the region.
    pub fn set_error(&self, msg: Option<&str>) {
        let Some(el) = &self.error else {
            return;
        };
        match msg {
            Some(msg) => {
                el.set_text_content(Some(msg));
                el.set_hidden(false);
            }
            None => {
                el.set_hidden(true);
                el.set_text_content(Some(""));
            }
        }
    }

    /// Prepend one line to the history list.
    pub fn prepend_history(&self, line: &str) -> Result<(), JsValue> {
        let Some(list) = &self.history else {
            return Ok(());
        };
        let item = document()?.create_element("li")?;
        item.set_text_content(Some(line));
        list.prepend_with_node_1(&item)
    }
}
