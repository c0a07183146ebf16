//! The owned context tying the scene to the host's clocks and controls.

use log::debug;

use crate::config::Config;
use crate::debounce::{Debouncer, Timer};
use crate::layout::Viewport;
use crate::lifecycle::{Animator, FrameScheduler, RunState};
use crate::paint::Painter;
use crate::random::RandomSource;
use crate::scene::Scene;

/// Everything the controller needs from the page.
pub trait Host: Painter + FrameScheduler + Timer {
    /// Current size signals of the mount element and window.
    fn measure(&self) -> Viewport;
    /// Show or hide the mount element.
    fn set_visible(&mut self, visible: bool);
    /// Write `value` verbatim as the element's display opacity.
    fn set_opacity(&mut self, value: &str);
}

/// Single owner of the scene, the frame loop state and the resize debouncer.
#[derive(Debug)]
pub struct Controller<H, R> {
    host: H,
    scene: Scene<R>,
    animator: Animator,
    resize: Debouncer,
}

impl<H: Host, R: RandomSource> Controller<H, R> {
    /// Lays out the surface; nothing is scheduled until [`Controller::start`].
    pub fn new(host: H, config: Config, random: R) -> Self {
        let resize = Debouncer::new(config.resize_debounce_ms);
        let mut controller = Self {
            host,
            scene: Scene::new(config, random),
            animator: Animator::new(),
            resize,
        };
        controller.relayout();
        controller
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scene(&self) -> &Scene<R> {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene<R> {
        &mut self.scene
    }

    pub fn state(&self) -> RunState {
        self.animator.state()
    }

    pub fn start(&mut self) {
        self.animator.resume(&mut self.host);
    }

    /// Frame callback: advance by the elapsed time, draw, schedule the next.
    pub fn on_frame(&mut self, timestamp: f64) {
        let delta_ms = self.animator.begin_frame(timestamp);
        self.scene.frame(&mut self.host, delta_ms);
        self.animator.end_frame(&mut self.host);
    }

    pub fn on_resize_event(&mut self) {
        self.resize.trigger(&mut self.host);
    }

    /// Debounce timer callback.
    pub fn on_resize_timer(&mut self) {
        if self.resize.fire() {
            self.relayout();
        }
    }

    /// Re-measures the host and rebuilds the column set.
    pub fn relayout(&mut self) {
        let config = self.scene.config();
        let surface = self
            .host
            .measure()
            .to_surface(config.fallback_width, config.fallback_height);
        self.scene.resize(surface, &mut self.host);
    }

    pub fn on_visibility_change(&mut self, hidden: bool) {
        debug!("page {}", if hidden { "hidden" } else { "visible" });
        self.animator.visibility_changed(&mut self.host, hidden);
    }

    /// Stops animating and hides the surface.
    pub fn pause(&mut self) {
        self.animator.pause(&mut self.host);
        self.host.set_visible(false);
    }

    /// Shows the surface and animates again if no frame is pending.
    pub fn resume(&mut self) {
        self.host.set_visible(true);
        self.animator.resume(&mut self.host);
    }

    pub fn set_opacity(&mut self, value: &str) {
        self.host.set_opacity(value);
    }
}
