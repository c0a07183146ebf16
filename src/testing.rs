//! Recording host and scripted randomness for unit tests.

use crate::controller::Host;
use crate::debounce::{Timer, TimerHandle};
use crate::layout::Viewport;
use crate::lifecycle::{FrameHandle, FrameScheduler};
use crate::paint::Painter;
use crate::random::RandomSource;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Backing(u32, u32, f64, f64),
    Scale(f64),
    Clear(f64, f64),
    Font(String),
    Fill(String),
    Alpha(f64),
    Translate(f64, f64),
    Rotate(f64),
    Text(String, f64, f64),
    Save,
    Restore,
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub ops: Vec<Op>,
    pub viewport: Viewport,
    pub next_handle: i32,
    pub refuse_frames: bool,
    pub frames_requested: Vec<FrameHandle>,
    pub frames_cancelled: Vec<FrameHandle>,
    /// `(handle, delay_ms)` per scheduled timer.
    pub timers_set: Vec<(TimerHandle, i32)>,
    pub timers_cleared: Vec<TimerHandle>,
    pub visible: Option<bool>,
    pub opacity: Option<String>,
}

impl RecordingHost {
    pub fn with_viewport(width: f64, height: f64, dpr: f64) -> Self {
        Self {
            viewport: Viewport {
                element_width: width,
                element_height: height,
                window_width: None,
                window_height: None,
                dpr: Some(dpr),
            },
            ..Self::default()
        }
    }

    pub fn texts(&self) -> Vec<(String, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t, x, y) => Some((t.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn backing_sizes(&self) -> Vec<(u32, u32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Backing(w, h, _, _) => Some((*w, *h)),
                _ => None,
            })
            .collect()
    }

    fn handle(&mut self) -> i32 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl Painter for RecordingHost {
    fn set_backing_size(&mut self, width: u32, height: u32, logical_width: f64, logical_height: f64) {
        self.ops.push(Op::Backing(width, height, logical_width, logical_height));
    }

    fn set_scale(&mut self, scale: f64) {
        self.ops.push(Op::Scale(scale));
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Clear(width, height));
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(Op::Font(font.to_string()));
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(Op::Fill(style.to_string()));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(Op::Alpha(alpha));
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Translate(x, y));
    }

    fn rotate(&mut self, angle: f64) {
        self.ops.push(Op::Rotate(angle));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(Op::Text(text.to_string(), x, y));
    }

    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
}

impl FrameScheduler for RecordingHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse_frames {
            return None;
        }
        let handle = self.handle();
        self.frames_requested.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames_cancelled.push(handle);
    }
}

impl Timer for RecordingHost {
    fn set_timer(&mut self, delay_ms: i32) -> Option<TimerHandle> {
        let handle = self.handle();
        self.timers_set.push((handle, delay_ms));
        Some(handle)
    }

    fn clear_timer(&mut self, handle: TimerHandle) {
        self.timers_cleared.push(handle);
    }
}

impl Host for RecordingHost {
    fn measure(&self) -> Viewport {
        self.viewport
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }

    fn set_opacity(&mut self, value: &str) {
        self.opacity = Some(value.to_string());
    }
}

/// Replays a fixed cycle of samples.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty());
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
