//! Falling glyph columns (stateful).

use log::trace;

use crate::config::{rgba, Config};
use crate::layout::Surface;
use crate::paint::Painter;
use crate::random::RandomSource;
use crate::snippets::SnippetField;

/// Length of a nominal 60Hz frame; speeds are expressed per nominal frame.
pub const NOMINAL_FRAME_MS: f64 = 16.67;

/// State for a single vertical track.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Horizontal position, fixed until the next resize.
    pub x: f64,
    /// Vertical offset of the first glyph.
    pub y: f64,
    /// Pixels per nominal frame.
    pub speed: f64,
    pub font_size: f64,
}

/// Offset in `[-height, 0)` so the column streams in from above.
fn entry_offset<R: RandomSource + ?Sized>(random: &mut R, height: f64) -> f64 {
    random.between(-height, 0.0)
}

fn random_speed<R: RandomSource + ?Sized>(random: &mut R, font_size: f64) -> f64 {
    random.between(0.6, 2.0) * (font_size / 12.0)
}

/// The full set of columns for the current surface.
#[derive(Debug, Clone, Default)]
pub struct ColumnField {
    columns: Vec<Column>,
}

impl ColumnField {
    /// Lays out one column per pitch across the surface width.
    pub fn build<R: RandomSource + ?Sized>(surface: &Surface, random: &mut R) -> Self {
        let font_size = surface.glyph_size();
        let pitch = surface.column_pitch();
        let columns = (0..surface.column_count())
            .map(|i| Column {
                x: i as f64 * pitch,
                y: entry_offset(random, surface.height),
                speed: random_speed(random, font_size),
                font_size,
            })
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Draws, advances and recycles every column for one frame, occasionally
    /// spawning a snippet near a column.
    pub fn step<P, R>(
        &mut self,
        painter: &mut P,
        surface: &Surface,
        config: &Config,
        delta_ms: f64,
        random: &mut R,
        snippets: &mut SnippetField,
    ) where
        P: Painter + ?Sized,
        R: RandomSource + ?Sized,
    {
        let advance = delta_ms.max(0.0) / NOMINAL_FRAME_MS;

        for col in &mut self.columns {
            if !config.glyphs.is_empty() {
                for k in 0..config.glyphs_per_column {
                    let glyph = config.glyphs[random.index(config.glyphs.len())];
                    let alpha = config.glyph_alpha_min + random.next_unit() * config.glyph_alpha_spread;
                    painter.set_fill_style(&rgba(config.glyph_color, alpha));
                    let mut buf = [0u8; 4];
                    painter.fill_text(glyph.encode_utf8(&mut buf), col.x, col.y + k as f64 * col.font_size);
                }
            }

            col.y += col.speed * advance;

            if random.next_unit() < config.spawn_chance {
                let x = col.x + random.between(-config.spawn_jitter, config.spawn_jitter);
                let y = random.next_unit() * surface.height * config.spawn_band;
                trace!("snippet spawned at ({x:.1}, {y:.1})");
                snippets.spawn(x, y, surface, config, random);
            }

            // Infinite rain: never destroyed, only sent back to the top.
            if col.y > surface.height + config.wrap_margin {
                col.y = entry_offset(random, surface.height);
                col.speed = random_speed(random, col.font_size);
            }
        }
    }
}
