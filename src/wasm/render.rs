
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::controller::Host;
use crate::debounce::{Timer, TimerHandle};
use crate::layout::Viewport;
use crate::lifecycle::{FrameHandle, FrameScheduler};
use crate::paint::Painter;

/// Slot for a callback that is created after the host that schedules it.
pub type CallbackSlot<T> = Rc<RefCell<Option<Closure<T>>>>;

/// The page side of the controller: canvas, 2D context and window timers.
///
/// Draw calls that fail are ignored; the output is decorative.
pub struct CanvasHost {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    frame_callback: CallbackSlot<dyn FnMut(f64)>,
    resize_callback: CallbackSlot<dyn FnMut()>,
}

impl CanvasHost {
    pub fn new(window: Window, canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self {
            window,
            canvas,
            ctx,
            frame_callback: Rc::new(RefCell::new(None)),
            resize_callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn frame_slot(&self) -> CallbackSlot<dyn FnMut(f64)> {
        self.frame_callback.clone()
    }

    pub fn resize_slot(&self) -> CallbackSlot<dyn FnMut()> {
        self.resize_callback.clone()
    }

    fn set_style(&self, name: &str, value: &str) {
        self.canvas.style().set_property(name, value).ok();
    }
}

fn window_dimension(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> Option<f64> {
    value.ok().and_then(|v| v.as_f64())
}

impl Painter for CanvasHost {
    fn set_backing_size(&mut self, width: u32, height: u32, logical_width: f64, logical_height: f64) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.set_style("width", &format!("{logical_width}px"));
        self.set_style("height", &format!("{logical_height}px"));
    }

    fn set_scale(&mut self, scale: f64) {
        self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0).ok();
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ctx.translate(x, y).ok();
    }

    fn rotate(&mut self, angle: f64) {
        self.ctx.rotate(angle).ok();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ctx.fill_text(text, x, y).ok();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}

impl FrameScheduler for CanvasHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.frame_callback.borrow();
        let callback = slot.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.window.cancel_animation_frame(handle).ok();
    }
}

impl Timer for CanvasHost {
    fn set_timer(&mut self, delay_ms: i32) -> Option<TimerHandle> {
        let slot = self.resize_callback.borrow();
        let callback = slot.as_ref()?;
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()
    }

    fn clear_timer(&mut self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle);
    }
}

impl Host for CanvasHost {
    fn measure(&self) -> Viewport {
        Viewport {
            element_width: f64::from(self.canvas.client_width()),
            element_height: f64::from(self.canvas.client_height()),
            window_width: window_dimension(self.window.inner_width()),
            window_height: window_dimension(self.window.inner_height()),
            dpr: Some(self.window.device_pixel_ratio()),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        if visible {
            self.canvas.style().remove_property("display").ok();
        } else {
            self.set_style("display", "none");
        }
    }

    fn set_opacity(&mut self, value: &str) {
        self.set_style("opacity", value);
    }
}
