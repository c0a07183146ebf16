//! Surface geometry: device pixel ratio, glyph size and column grid.

use crate::paint::Painter;

/// Smallest glyph or snippet font size in logical pixels.
pub const MIN_FONT_SIZE: f64 = 12.0;
/// Column pitch as a fraction of the glyph size.
pub const COLUMN_PITCH: f64 = 0.6;

/// The drawable area in logical pixels plus its device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Surface {
    /// Builds a surface; a ratio that is not a finite number of at least 1
    /// is replaced with 1.
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() { dpr.max(1.0) } else { 1.0 };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr,
        }
    }

    fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Font size of the falling glyphs.
    pub fn glyph_size(&self) -> f64 {
        (self.min_side() / 80.0).round().max(MIN_FONT_SIZE)
    }

    /// Horizontal distance between neighbouring columns.
    pub fn column_pitch(&self) -> f64 {
        self.glyph_size() * COLUMN_PITCH
    }

    pub fn column_count(&self) -> usize {
        (self.width / self.column_pitch()).floor() as usize
    }

    /// Base font size for snippets before per-snippet jitter.
    pub fn snippet_base_size(&self) -> f64 {
        (self.min_side() / 50.0).round().max(MIN_FONT_SIZE)
    }

    /// Backing store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }

    pub fn glyph_font(&self) -> String {
        format!("{}px monospace", self.glyph_size())
    }

    /// Sizes the backing store, installs the ratio transform and selects the
    /// glyph font. Resizing a canvas resets its context state, so this must
    /// run after every resize.
    pub fn apply<P: Painter + ?Sized>(&self, painter: &mut P) {
        let (w, h) = self.backing_size();
        painter.set_backing_size(w, h, self.width, self.height);
        painter.set_scale(self.dpr);
        painter.set_font(&self.glyph_font());
    }
}

/// Raw size signals read from the host at resize time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    /// Client size of the mount element; 0 when it has no layout yet.
    pub element_width: f64,
    pub element_height: f64,
    pub window_width: Option<f64>,
    pub window_height: Option<f64>,
    pub dpr: Option<f64>,
}

impl Viewport {
    /// Resolves the signals to a surface, substituting defaults for anything
    /// the host could not report.
    pub fn to_surface(&self, fallback_width: f64, fallback_height: f64) -> Surface {
        Surface::new(
            pick_dimension(self.element_width, self.window_width, fallback_width),
            pick_dimension(self.element_height, self.window_height, fallback_height),
            self.dpr.unwrap_or(1.0),
        )
    }
}

/// Element size if it has one, else the viewport size, else `fallback`.
pub fn pick_dimension(element: f64, viewport: Option<f64>, fallback: f64) -> f64 {
    if element > 0.0 {
        return element;
    }
    match viewport {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => fallback,
    }
}
