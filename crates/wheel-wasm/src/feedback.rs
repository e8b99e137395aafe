//! Post-spin feedback overlays: confetti canvas and winner popup.

use crate::dom::document;
use crate::render2d::Canvas2d;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement};
use wheel_render::Confetti;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn viewport_size() -> (f64, f64) {
    let window = web_sys::window();
    let dim = |v: Option<Result<JsValue, JsValue>>| {
        v.and_then(|r| r.ok()).and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (
        dim(window.as_ref().map(|w| w.inner_width())),
        dim(window.as_ref().map(|w| w.inner_height())),
    )
}

/// Full-viewport confetti canvas. `make` builds the burst for the given
/// viewport size. The canvas removes itself when the burst ends.
pub fn celebrate(make: impl FnOnce(f64, f64) -> Confetti) -> Result<(), JsValue> {
    let doc = document()?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
    let (width, height) = viewport_size();

    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    canvas.set_class_name("confetti");
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    body.append_child(&canvas)?;

    let mut surface = match Canvas2d::from_canvas(&canvas) {
        Ok(surface) => surface,
        Err(e) => {
            canvas.remove();
            return Err(JsValue::from_str(&e.to_string()));
        }
    };
    let mut confetti = make(width, height);

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let handle = callback.clone();
    *callback.borrow_mut() = Some(Closure::new(move |_now: f64| {
        let more = confetti.tick(&mut surface).unwrap_or_else(|e| {
            log::warn!("Confetti frame failed: {e}");
            false
        });
        if more && request_frame(&handle).is_ok() {
            return;
        }
        surface.canvas().remove();
        // Release the closure once this call returns.
        let _ = handle.borrow_mut().take();
    }));
    request_frame(&callback)
}

pub(crate) fn request_frame(callback: &FrameCallback) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let cb = callback.borrow();
    let cb = cb
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback released"))?;
    window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}

/// Winner popup with a dismiss button. Focus moves to the button; closing
/// removes the popup from the document.
pub fn show_winner(name: &str) -> Result<(), JsValue> {
    let doc = document()?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let popup = doc.create_element("div")?;
    popup.set_class_name("winner-popup");
    popup.set_attribute("role", "dialog")?;
    popup.set_attribute("aria-modal", "true")?;
    popup.set_attribute("aria-label", "Winner")?;

    let title = doc.create_element("h2")?;
    title.set_text_content(Some("Winner!"));
    popup.append_child(&title)?;

    let winner = doc.create_element("p")?;
    winner.set_class_name("winner-name");
    winner.set_text_content(Some(name));
    popup.append_child(&winner)?;

    let close: HtmlElement = doc.create_element("button")?.dyn_into()?;
    close.set_attribute("type", "button")?;
    close.set_text_content(Some("Close"));
    popup.append_child(&close)?;

    let root = popup.clone();
    let on_close = Closure::once_into_js(move || root.remove());
    close.add_event_listener_with_callback("click", on_close.unchecked_ref())?;

    body.append_child(&popup)?;
    close.focus()?;
    Ok(())
}
