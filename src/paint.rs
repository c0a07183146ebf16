//! 2D drawing abstraction shared by the renderers.

use std::ops::{Deref, DerefMut};

/// The drawing operations the effect needs from a canvas.
///
/// Coordinates are in logical pixels once [`Painter::set_scale`] has been
/// applied with the device pixel ratio.
pub trait Painter {
    /// Resize the backing store to `width × height` device pixels while the
    /// element keeps a logical size of `logical_width × logical_height`.
    fn set_backing_size(&mut self, width: u32, height: u32, logical_width: f64, logical_height: f64);
    /// Replace the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f64);
    fn clear(&mut self, width: f64, height: f64);
    fn set_font(&mut self, font: &str);
    fn set_fill_style(&mut self, style: &str);
    fn set_global_alpha(&mut self, alpha: f64);
    fn translate(&mut self, x: f64, y: f64);
    /// Rotate by `angle` radians.
    fn rotate(&mut self, angle: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn save(&mut self);
    fn restore(&mut self);
}

/// Drawing state snapshot that is restored when dropped.
pub struct SavedState<'a, P: Painter + ?Sized> {
    painter: &'a mut P,
}

impl<'a, P: Painter + ?Sized> SavedState<'a, P> {
    pub fn new(painter: &'a mut P) -> Self {
        painter.save();
        Self { painter }
    }
}

impl<P: Painter + ?Sized> Deref for SavedState<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.painter
    }
}

impl<P: Painter + ?Sized> DerefMut for SavedState<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.painter
    }
}

impl<P: Painter + ?Sized> Drop for SavedState<'_, P> {
    fn drop(&mut self) {
        self.painter.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Op, RecordingHost};

    fn draw_unless(painter: &mut RecordingHost, skip: bool) {
        let mut state = SavedState::new(painter);
        state.translate(1.0, 2.0);
        if skip {
            return;
        }
        state.fill_text("x", 0.0, 0.0);
    }

    #[test]
    fn restores_on_every_exit() {
        let mut host = RecordingHost::default();
        draw_unless(&mut host, true);
        draw_unless(&mut host, false);
        assert_eq!(
            host.ops,
            vec![
                Op::Save,
                Op::Translate(1.0, 2.0),
                Op::Restore,
                Op::Save,
                Op::Translate(1.0, 2.0),
                Op::Text("x".into(), 0.0, 0.0),
                Op::Restore,
            ]
        );
    }
}
