//! Tuning for the code rain effect.

use crate::chars::{GLYPHS, PHRASES};

/// An `(r, g, b)` triple; alpha is chosen per draw.
pub type Rgb = (u8, u8, u8);

/// Every constant the effect depends on.
///
/// `Default` reproduces the stock look. Tests build variants of it to force
/// or suppress snippet spawns.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Element id of the canvas to mount on.
    pub canvas_id: String,
    /// Alphabet for the falling glyphs.
    pub glyphs: Vec<char>,
    /// Phrases picked by snippets.
    pub phrases: Vec<String>,
    /// Glyphs drawn per column per frame.
    pub glyphs_per_column: usize,
    /// Lowest glyph alpha.
    pub glyph_alpha_min: f64,
    /// Width of the glyph alpha band above `glyph_alpha_min`.
    pub glyph_alpha_spread: f64,
    pub glyph_color: Rgb,
    pub snippet_color: Rgb,
    /// Highest snippet alpha; the spawned alpha is `max - r * spread`.
    pub snippet_alpha_max: f64,
    pub snippet_alpha_spread: f64,
    /// Probability per column per frame of spawning a snippet.
    pub spawn_chance: f64,
    /// Horizontal jitter applied around the column, in logical pixels.
    pub spawn_jitter: f64,
    /// Fraction of the surface height (from the top) snippets may appear in.
    pub spawn_band: f64,
    /// How far below the surface a column travels before wrapping.
    pub wrap_margin: f64,
    /// Snippet lifetime range `[min, min + spread)` in milliseconds.
    pub lifetime_min_ms: f64,
    pub lifetime_spread_ms: f64,
    /// Both the base angle and the spin are drawn from `[-range, range)` degrees.
    pub angle_range_deg: f64,
    /// Upper bound on the random size added to a snippet's base font size.
    pub snippet_size_jitter: f64,
    /// Quiet period before a resize is applied.
    pub resize_debounce_ms: i32,
    /// Used when neither the element nor the viewport report a size.
    pub fallback_width: f64,
    pub fallback_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_id: "code-bg".to_string(),
            glyphs: GLYPHS.to_vec(),
            phrases: PHRASES.iter().map(|p| p.to_string()).collect(),
            glyphs_per_column: 3,
            glyph_alpha_min: 0.06,
            glyph_alpha_spread: 0.18,
            glyph_color: (120, 200, 255),
            snippet_color: (180, 230, 255),
            snippet_alpha_max: 0.9,
            snippet_alpha_spread: 0.5,
            spawn_chance: 0.002,
            spawn_jitter: 20.0,
            spawn_band: 0.7,
            wrap_margin: 50.0,
            lifetime_min_ms: 2500.0,
            lifetime_spread_ms: 3000.0,
            angle_range_deg: 20.0,
            snippet_size_jitter: 8.0,
            resize_debounce_ms: 120,
            fallback_width: 1280.0,
            fallback_height: 720.0,
        }
    }
}

/// Formats a CSS `rgba()` colour.
pub fn rgba((r, g, b): Rgb, alpha: f64) -> String {
    format!("rgba({r},{g},{b},{alpha:.3})")
}
