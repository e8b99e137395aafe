//! WASM bridge for the prize wheel.
//!
//! Compiled via `wasm-pack build --target web`. Pages either call
//! [`mount`] and let Rust bind the DOM and drive the frame loop, or create
//! a [`PrizeWheel`] and feed it clicks, edits, and frame timestamps from JS.

mod dom;
mod feedback;
mod logger;
mod render2d;
mod storage;

pub use render2d::Canvas2d;
pub use storage::LocalStorage;

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;
use wheel_core::WheelConfig;
use wheel_editor::{WheelController, WheelEffect, WheelInput};

type Controller = WheelController<LocalStorage, StdRng>;

fn new_controller(config_json: Option<String>) -> Controller {
    console_error_panic_hook_setup();
    logger::install();

    WheelController::new(
        config_or_default(config_json.as_deref()),
        LocalStorage::new(),
        StdRng::from_entropy(),
        Box::new(locale_timestamp),
    )
}

/// Host config, or the defaults when it is missing or invalid.
fn config_or_default(json: Option<&str>) -> WheelConfig {
    let Some(json) = json else {
        return WheelConfig::default();
    };
    WheelConfig::from_json(json).unwrap_or_else(|e| {
        log::warn!("Ignoring wheel config: {e}");
        WheelConfig::default()
    })
}

fn locale_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Set the console log level (`"error"` … `"trace"`).
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    logger::set_level(logger::level_from_name(Some(level)));
}

// ─── JS-driven controller ────────────────────────────────────────────────

/// The wheel controller for hosts that run their own frame loop.
///
/// Every input method returns the resulting effects as a JSON array, e.g.
/// `[{"type":"error","message":null},{"type":"requestFrame"}]`.
#[wasm_bindgen]
pub struct PrizeWheel {
    controller: Controller,
}

#[wasm_bindgen]
impl PrizeWheel {
    /// Create a wheel. `config_json` may override any `WheelConfig` field.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Self {
        Self {
            controller: new_controller(config_json),
        }
    }

    /// Restore saved entries and draw the idle wheel. Returns the text to
    /// put in the entry field, or `undefined` when nothing was saved.
    pub fn startup(
        &mut self,
        ctx: &CanvasRenderingContext2d,
        initial_text: &str,
    ) -> Result<Option<String>, JsValue> {
        let mut surface = surface_for(ctx)?;
        Ok(self.controller.startup(initial_text, &mut surface))
    }

    pub fn spin(
        &mut self,
        ctx: &CanvasRenderingContext2d,
        text: &str,
        now_ms: f64,
    ) -> Result<String, JsValue> {
        self.dispatch(ctx, WheelInput::spin(text, now_ms))
    }

    /// Advance the animation to a `requestAnimationFrame` timestamp.
    pub fn tick(&mut self, ctx: &CanvasRenderingContext2d, now_ms: f64) -> Result<String, JsValue> {
        self.dispatch(ctx, WheelInput::frame(now_ms))
    }

    pub fn reset(&mut self, ctx: &CanvasRenderingContext2d, text: &str) -> Result<String, JsValue> {
        self.dispatch(ctx, WheelInput::reset(text))
    }

    pub fn set_text(
        &mut self,
        ctx: &CanvasRenderingContext2d,
        text: &str,
    ) -> Result<String, JsValue> {
        self.dispatch(ctx, WheelInput::edit(text))
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let mut surface = surface_for(ctx)?;
        self.controller
            .redraw(&mut surface)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn is_spinning(&self) -> bool {
        self.controller.is_spinning()
    }

    pub fn rotation(&self) -> f64 {
        self.controller.rotation()
    }

    pub fn error(&self) -> Option<String> {
        self.controller.error().map(str::to_string)
    }

    /// Results so far, most recent first, as JSON `[{"winner":..,"timestamp":..}]`.
    pub fn history_json(&self) -> String {
        let results: Vec<_> = self.controller.history().iter().collect();
        serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
    }

    /// Start the confetti overlay. Hosts call this on a `landed` effect.
    pub fn celebrate(&mut self) -> Result<(), JsValue> {
        feedback::celebrate(|w, h| self.controller.confetti(w, h))
    }

    /// Show the winner popup.
    pub fn show_winner(&self, name: &str) -> Result<(), JsValue> {
        feedback::show_winner(name)
    }
}

impl PrizeWheel {
    fn dispatch(
        &mut self,
        ctx: &CanvasRenderingContext2d,
        input: WheelInput,
    ) -> Result<String, JsValue> {
        let mut surface = surface_for(ctx)?;
        let effects = self.controller.handle(input, &mut surface);
        Ok(effects_to_json(&effects).to_string())
    }
}

fn surface_for(ctx: &CanvasRenderingContext2d) -> Result<Canvas2d, JsValue> {
    Canvas2d::from_context(ctx).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn effects_to_json(effects: &[WheelEffect]) -> serde_json::Value {
    let items = effects
        .iter()
        .map(|effect| match effect {
            WheelEffect::ErrorChanged(message) => serde_json::json!({
                "type": "error",
                "message": message,
            }),
            WheelEffect::RequestFrame => serde_json::json!({ "type": "requestFrame" }),
            WheelEffect::Landed(result) => serde_json::json!({
                "type": "landed",
                "winner": result.winner,
                "timestamp": result.timestamp,
                "line": result.display_line(),
            }),
        })
        .collect();
    serde_json::Value::Array(items)
}

// ─── Self-mounting widget ────────────────────────────────────────────────

struct App {
    controller: Controller,
    surface: Canvas2d,
    els: dom::Elements,
}

type Shared<T> = Rc<RefCell<T>>;

/// Bind the page's wheel elements and run the widget.
///
/// Expects `#wheelCanvas` and `#entries`; `#spinBtn`, `#resetBtn`,
/// `#error`, and `#history` are wired when present.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<(), JsValue> {
    let mut controller = new_controller(config_json);
    let els = dom::Elements::bind()?;
    let mut surface =
        Canvas2d::from_canvas(&els.canvas).map_err(|e| JsValue::from_str(&e.to_string()))?;

    if let Some(text) = controller.startup(&els.entries_text(), &mut surface) {
        els.set_entries_text(&text);
    }

    let app: Shared<App> = Rc::new(RefCell::new(App {
        controller,
        surface,
        els,
    }));
    let frame: Shared<Option<Closure<dyn FnMut(f64)>>> = Rc::new(RefCell::new(None));

    {
        let app = app.clone();
        let handle = frame.clone();
        *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
            dispatch(&app, &handle, WheelInput::frame(now));
        }));
    }

    let borrowed = app.borrow();
    if let Some(btn) = &borrowed.els.spin_btn {
        let app = app.clone();
        let frame = frame.clone();
        listen(btn, "click", move || {
            let text = app.borrow().els.entries_text();
            dispatch(&app, &frame, WheelInput::spin(text, now_ms()));
        })?;
    }
    if let Some(btn) = &borrowed.els.reset_btn {
        let app = app.clone();
        let frame = frame.clone();
        listen(btn, "click", move || {
            let text = app.borrow().els.entries_text();
            dispatch(&app, &frame, WheelInput::reset(text));
        })?;
    }
    {
        let app = app.clone();
        let frame = frame.clone();
        listen(&borrowed.els.entries, "input", move || {
            let text = app.borrow().els.entries_text();
            dispatch(&app, &frame, WheelInput::edit(text));
        })?;
    }
    log::debug!("wheel mounted");
    Ok(())
}

fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        handler()
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn dispatch(app: &Shared<App>, frame: &Shared<Option<Closure<dyn FnMut(f64)>>>, input: WheelInput) {
    let effects = {
        let mut guard = app.borrow_mut();
        let App {
            controller,
            surface,
            ..
        } = &mut *guard;
        controller.handle(input, surface)
    };

    for effect in effects {
        match effect {
            WheelEffect::ErrorChanged(message) => app.borrow().els.set_error(message.as_deref()),
            WheelEffect::RequestFrame => {
                if let Err(e) = feedback::request_frame(frame) {
                    log::error!("Could not schedule frame: {e:?}");
                }
            }
            WheelEffect::Landed(result) => {
                if let Err(e) = app.borrow().els.prepend_history(&result.display_line()) {
                    log::warn!("Could not update history: {e:?}");
                }
                let celebrated = feedback::celebrate(|w, h| app.borrow_mut().controller.confetti(w, h));
                if let Err(e) = celebrated {
                    log::warn!("Confetti failed: {e:?}");
                }
                if let Err(e) = feedback::show_winner(&result.winner) {
                    log::warn!("Winner popup failed: {e:?}");
                }
            }
        }
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Prize wheel WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
