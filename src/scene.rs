//! Per-frame composition of the column field and the snippets.

use log::debug;

use crate::columns::ColumnField;
use crate::config::Config;
use crate::layout::Surface;
use crate::paint::Painter;
use crate::random::RandomSource;
use crate::snippets::SnippetField;

/// Everything drawn on the surface plus the random source driving it.
#[derive(Debug)]
pub struct Scene<R> {
    config: Config,
    surface: Surface,
    columns: ColumnField,
    snippets: SnippetField,
    random: R,
}

impl<R: RandomSource> Scene<R> {
    /// An empty scene; call [`Scene::resize`] before the first frame.
    pub fn new(config: Config, random: R) -> Self {
        Self {
            config,
            surface: Surface::new(0.0, 0.0, 1.0),
            columns: ColumnField::default(),
            snippets: SnippetField::default(),
            random,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn columns(&self) -> &ColumnField {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut ColumnField {
        &mut self.columns
    }

    pub fn snippets(&self) -> &SnippetField {
        &self.snippets
    }

    /// Applies the new surface to the painter and rebuilds every column.
    pub fn resize<P: Painter + ?Sized>(&mut self, surface: Surface, painter: &mut P) {
        surface.apply(painter);
        self.columns = ColumnField::build(&surface, &mut self.random);
        self.surface = surface;
        debug!(
            "surface {}x{} @{}x, glyph {}px, {} columns",
            surface.width,
            surface.height,
            surface.dpr,
            surface.glyph_size(),
            self.columns.len()
        );
    }

    /// Draws one frame: columns first (which may spawn snippets), then the
    /// snippets.
    pub fn frame<P: Painter + ?Sized>(&mut self, painter: &mut P, delta_ms: f64) {
        painter.clear(self.surface.width, self.surface.height);
        self.columns.step(
            painter,
            &self.surface,
            &self.config,
            delta_ms,
            &mut self.random,
            &mut self.snippets,
        );
        self.snippets.render(painter, delta_ms);
    }
}
