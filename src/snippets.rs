//! Rotating code snippet overlays.

use crate::config::{rgba, Config};
use crate::layout::Surface;
use crate::paint::{Painter, SavedState};
use crate::random::RandomSource;

/// Peak global alpha of a freshly spawned snippet.
pub const SNIPPET_PEAK_ALPHA: f64 = 0.9;

/// A single short-lived overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Snippet {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub size: f64,
    /// Milliseconds since spawn.
    pub age: f64,
    pub lifetime: f64,
    /// Base rotation in degrees.
    pub angle: f64,
    /// Additional rotation reached at the end of the lifetime, in degrees.
    pub spin: f64,
    /// CSS fill colour.
    pub color: String,
}

impl Snippet {
    pub fn progress(&self) -> f64 {
        self.age / self.lifetime
    }

    /// Linear fade-out, 0 at and after the end of life.
    pub fn fade(&self) -> f64 {
        (1.0 - self.progress()).max(0.0)
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.angle + self.progress() * self.spin
    }

    pub fn is_expired(&self) -> bool {
        self.age > self.lifetime
    }

    fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        let mut state = SavedState::new(painter);
        state.translate(self.x, self.y);
        state.rotate(self.rotation_degrees().to_radians());
        state.set_global_alpha(SNIPPET_PEAK_ALPHA * self.fade());
        state.set_fill_style(&self.color);
        state.set_font(&format!("{}px 'Courier New', monospace", self.size));
        state.fill_text(&self.text, 0.0, 0.0);
    }
}

/// The live snippets.
///
/// Snippets spawned since the last [`SnippetField::render`] sit at the tail of
/// the list and are drawn at age 0 before they start ageing.
#[derive(Debug, Clone, Default)]
pub struct SnippetField {
    live: Vec<Snippet>,
    fresh: usize,
}

impl SnippetField {
    pub fn live(&self) -> &[Snippet] {
        &self.live
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn clear(&mut self) {
        self.live.clear();
        self.fresh = 0;
    }

    /// Adds a snippet at `(x, y)` with random text, size, lifetime, rotation
    /// and alpha.
    pub fn spawn<R: RandomSource + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        surface: &Surface,
        config: &Config,
        random: &mut R,
    ) {
        if config.phrases.is_empty() {
            return;
        }
        let text = config.phrases[random.index(config.phrases.len())].clone();
        let size = surface.snippet_base_size() + random.next_unit() * config.snippet_size_jitter;
        let lifetime = config.lifetime_min_ms + random.next_unit() * config.lifetime_spread_ms;
        let range = config.angle_range_deg;
        let angle = random.between(-range, range);
        let spin = random.between(-range, range);
        let alpha = config.snippet_alpha_max - random.next_unit() * config.snippet_alpha_spread;

        self.live.push(Snippet {
            x,
            y,
            text,
            size,
            age: 0.0,
            lifetime,
            angle,
            spin,
            color: rgba(config.snippet_color, alpha),
        });
        self.fresh += 1;
    }

    /// Ages every snippet by `delta_ms`, drops the expired ones and draws the
    /// rest.
    pub fn render<P: Painter + ?Sized>(&mut self, painter: &mut P, delta_ms: f64) {
        let delta_ms = delta_ms.max(0.0);
        let aged = self.live.len() - self.fresh;
        let mut index = 0;
        self.live.retain_mut(|snippet| {
            if index < aged {
                snippet.age += delta_ms;
            }
            index += 1;
            if snippet.is_expired() {
                return false;
            }
            snippet.draw(painter);
            true
        });
        self.fresh = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Op, RecordingHost, ScriptedRandom};

    fn snippet(age: f64, lifetime: f64) -> Snippet {
        Snippet {
            x: 10.0,
            y: 20.0,
            text: "let i = 0;".into(),
            size: 14.0,
            age,
            lifetime,
            angle: 10.0,
            spin: -8.0,
            color: "rgba(180,230,255,0.700)".into(),
        }
    }

    #[test]
    fn halfway_through_life() {
        let s = snippet(1500.0, 3000.0);
        assert_eq!(s.progress(), 0.5);
        assert_eq!(s.fade(), 0.5);
        assert_eq!(s.rotation_degrees(), 10.0 + 0.5 * -8.0);
    }

    #[test]
    fn fade_reaches_zero_at_end_of_life() {
        assert_eq!(snippet(3000.0, 3000.0).fade(), 0.0);
        assert_eq!(snippet(4000.0, 3000.0).fade(), 0.0);
        assert_eq!(snippet(0.0, 3000.0).fade(), 1.0);
    }

    #[test]
    fn spawn_uses_scripted_samples() {
        let surface = Surface::new(800.0, 600.0, 1.0);
        let config = Config::default();
        let mut field = SnippetField::default();
        // text index 2, size +4, lifetime 4000, angle 10, spin -20, alpha 0.9
        let mut random = ScriptedRandom::new(vec![0.2, 0.5, 0.5, 0.75, 0.0, 0.0]);
        field.spawn(1.0, 2.0, &surface, &config, &mut random);

        let s = &field.live()[0];
        assert_eq!(s.text, "let i = 0;");
        assert_eq!(s.size, 12.0 + 4.0);
        assert_eq!(s.lifetime, 4000.0);
        assert_eq!(s.angle, 10.0);
        assert_eq!(s.spin, -20.0);
        assert_eq!(s.color, "rgba(180,230,255,0.900)");
        assert_eq!(s.age, 0.0);
    }

    #[test]
    fn spawn_ranges_hold() {
        let surface = Surface::new(1920.0, 1080.0, 1.0);
        let config = Config::default();
        let mut field = SnippetField::default();
        let mut random = crate::random::SeededRandom::from_seed(11);
        for _ in 0..500 {
            field.spawn(0.0, 0.0, &surface, &config, &mut random);
        }
        for s in field.live() {
            assert!((2500.0..5500.0).contains(&s.lifetime));
            assert!((-20.0..20.0).contains(&s.angle));
            assert!((-20.0..20.0).contains(&s.spin));
            assert!((22.0..30.0).contains(&s.size));
            assert!(config.phrases.contains(&s.text));
        }
    }

    #[test]
    fn draw_is_scoped_and_rotated() {
        let mut host = RecordingHost::default();
        let mut field = SnippetField::default();
        field.live.push(snippet(1400.0, 3000.0));
        field.render(&mut host, 100.0);

        assert_eq!(host.ops.first(), Some(&Op::Save));
        assert_eq!(host.ops.last(), Some(&Op::Restore));
        assert!(host.ops.contains(&Op::Translate(10.0, 20.0)));
        assert!(host.ops.contains(&Op::Rotate(6.0_f64.to_radians())));
        assert!(host.ops.contains(&Op::Alpha(0.9 * 0.5)));
        assert!(host.ops.contains(&Op::Font("14px 'Courier New', monospace".into())));
        assert_eq!(host.texts(), vec![("let i = 0;".to_string(), 0.0, 0.0)]);
    }

    #[test]
    fn expired_snippets_are_pruned_without_skipping() {
        let mut host = RecordingHost::default();
        let mut field = SnippetField::default();
        field.live.push(snippet(2950.0, 3000.0));
        field.live.push(snippet(2990.0, 3000.0));
        field.live.push(snippet(0.0, 3000.0));
        field.live.push(snippet(2999.0, 3000.0));
        field.render(&mut host, 20.0);

        let ages: Vec<f64> = field.live().iter().map(|s| s.age).collect();
        assert_eq!(ages, vec![2970.0, 20.0]);
        assert_eq!(host.texts().len(), 2);
    }

    #[test]
    fn kept_exactly_at_lifetime_removed_after() {
        let mut host = RecordingHost::default();
        let mut field = SnippetField::default();
        field.live.push(snippet(2900.0, 3000.0));
        field.render(&mut host, 100.0);
        assert_eq!(field.len(), 1);
        field.render(&mut host, 0.5);
        assert!(field.is_empty());
    }

    #[test]
    fn fresh_spawn_drawn_at_age_zero() {
        let surface = Surface::new(800.0, 600.0, 1.0);
        let config = Config::default();
        let mut host = RecordingHost::default();
        let mut field = SnippetField::default();
        field.live.push(snippet(100.0, 3000.0));
        let mut random = ScriptedRandom::new(vec![0.0]);
        field.spawn(0.0, 0.0, &surface, &config, &mut random);

        field.render(&mut host, 16.0);
        assert_eq!(field.live()[0].age, 116.0);
        assert_eq!(field.live()[1].age, 0.0);

        field.render(&mut host, 16.0);
        assert_eq!(field.live()[1].age, 16.0);
    }

    #[test]
    fn age_never_decreases() {
        let mut host = RecordingHost::default();
        let mut field = SnippetField::default();
        field.live.push(snippet(100.0, 3000.0));
        field.render(&mut host, -50.0);
        assert_eq!(field.live()[0].age, 100.0);
    }
}
