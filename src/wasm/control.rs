//! Mounting on the page and the exported `window.__codeBg` control object.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render::CanvasHost;
use crate::config::Config;
use crate::controller::Controller;
use crate::error::{MountError, MountResult};
use crate::random::SeededRandom;

type Runtime = Rc<RefCell<Controller<CanvasHost, SeededRandom>>>;

/// Global property the control object is published under.
const CONTROL_PROPERTY: &str = "__codeBg";

/// Runtime control over the mounted background.
#[wasm_bindgen]
pub struct CodeRain {
    runtime: Runtime,
}

#[wasm_bindgen]
impl CodeRain {
    /// Stop animating and hide the canvas.
    pub fn pause(&self) {
        if let Ok(mut controller) = self.runtime.try_borrow_mut() {
            controller.pause();
        }
    }

    /// Show the canvas and animate again if not already running.
    pub fn resume(&self) {
        if let Ok(mut controller) = self.runtime.try_borrow_mut() {
            controller.resume();
        }
    }

    /// Set the canvas display opacity. Accepts a number or a CSS string.
    #[wasm_bindgen(js_name = setOpacity)]
    pub fn set_opacity(&self, value: JsValue) {
        let value = opacity_value(&value);
        if let Ok(mut controller) = self.runtime.try_borrow_mut() {
            controller.set_opacity(&value);
        }
    }

    /// Whether a frame is currently scheduled.
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.runtime
            .try_borrow()
            .map(|c| c.state() == crate::lifecycle::RunState::Running)
            .unwrap_or(true)
    }
}

fn opacity_value(value: &JsValue) -> String {
    match value.as_f64() {
        Some(n) => n.to_string(),
        None => value.as_string().unwrap_or_default(),
    }
}

fn host_err(e: JsValue) -> MountError {
    MountError::Host(format!("{e:?}"))
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn page_random() -> SeededRandom {
    let seed = js_sys::Date::now().to_bits() ^ (js_sys::Math::random() * u64::MAX as f64) as u64;
    SeededRandom::from_seed(seed)
}

/// Mounts the background on the configured canvas and starts animating.
///
/// Returns `Ok(None)` when the user asked for reduced motion; in that case
/// nothing is registered with the page.
pub fn mount(config: Config) -> MountResult<Option<CodeRain>> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    if prefers_reduced_motion(&window) {
        return Ok(None);
    }
    let document = window.document().ok_or(MountError::NoDocument)?;
    let canvas = document
        .get_element_by_id(&config.canvas_id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| MountError::MissingCanvas(config.canvas_id.clone()))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(host_err)?
        .ok_or(MountError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| MountError::NoContext)?;

    let host = CanvasHost::new(window.clone(), canvas, ctx);
    let frame_slot = host.frame_slot();
    let resize_slot = host.resize_slot();
    let runtime: Runtime = Rc::new(RefCell::new(Controller::new(host, config, page_random())));

    // Animation loop. The host requests frames with this closure, so it is
    // stored in the slot the host reads from.
    {
        let runtime = runtime.clone();
        *frame_slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if let Ok(mut controller) = runtime.try_borrow_mut() {
                controller.on_frame(timestamp);
            }
        }) as Box<dyn FnMut(f64)>));
    }

    // Debounce timer target.
    {
        let runtime = runtime.clone();
        *resize_slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Ok(mut controller) = runtime.try_borrow_mut() {
                controller.on_resize_timer();
            }
        }) as Box<dyn FnMut()>));
    }

    let resize_closure = {
        let runtime = runtime.clone();
        Closure::wrap(Box::new(move || {
            if let Ok(mut controller) = runtime.try_borrow_mut() {
                controller.on_resize_event();
            }
        }) as Box<dyn FnMut()>)
    };
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "resize",
            resize_closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(host_err)?;
    resize_closure.forget();

    let visibility_closure = {
        let runtime = runtime.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move || {
            if let Ok(mut controller) = runtime.try_borrow_mut() {
                controller.on_visibility_change(document.hidden());
            }
        }) as Box<dyn FnMut()>)
    };
    document
        .add_event_listener_with_callback("visibilitychange", visibility_closure.as_ref().unchecked_ref())
        .map_err(host_err)?;
    visibility_closure.forget();

    runtime.borrow_mut().start();

    let published = CodeRain {
        runtime: runtime.clone(),
    };
    js_sys::Reflect::set(&window, &JsValue::from_str(CONTROL_PROPERTY), &JsValue::from(published))
        .map_err(host_err)?;

    Ok(Some(CodeRain { runtime }))
}
