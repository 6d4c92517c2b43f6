mod heading;
mod motion;
mod render;
mod rng;
mod surface;
mod trail;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use heading::{HeadingController, BOUNCE_INTERVAL_MS, POLL_PERIOD_MS};
pub use render::Renderer;
pub use rng::{RandomSource, SplitMix64};
pub use surface::{GradientStop, Hsla, LinearGradient, Paint, StrokeStyle, Surface};
pub use trail::{Point, TrailBuffer, SEED_COUNT};

/// External speed input that maps to a displacement multiplier of 1.
pub const NEUTRAL_SPEED: f32 = 50.0;
pub const DEFAULT_RETENTION_MS: f64 = 5_000.0;
pub const DEFAULT_LINE_WIDTH: f32 = 4.0;

const MIN_RETENTION_MS: f64 = 100.0;
const MAX_RETENTION_MS: f64 = 600_000.0;
const MIN_LINE_WIDTH: f32 = 0.5;
const MAX_LINE_WIDTH: f32 = 64.0;

pub(crate) fn clamp_finite(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

pub(crate) fn clamp_finite_f64(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GraphConfig {
    pub retention_ms: f64,
    /// Carried for hosts that build their own paints; the renderer's cycling
    /// hue does not read it.
    pub line_color: Hsla,
    pub line_width: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            retention_ms: DEFAULT_RETENTION_MS,
            line_color: Hsla::new(120.0, 100.0, 50.0, 1.0),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl GraphConfig {
    pub fn sanitize(&mut self) {
        self.retention_ms = clamp_finite_f64(
            self.retention_ms,
            MIN_RETENTION_MS,
            MAX_RETENTION_MS,
            DEFAULT_RETENTION_MS,
        );
        self.line_width = clamp_finite(
            self.line_width,
            MIN_LINE_WIDTH,
            MAX_LINE_WIDTH,
            DEFAULT_LINE_WIDTH,
        );
        self.line_color.alpha = clamp_finite(self.line_color.alpha, 0.0, 1.0, 1.0);
    }
}

/// One wandering-trail instance: the timestamped point buffer, the randomized
/// heading state and the per-frame renderer, driven entirely through injected
/// timestamps so it runs headless. The host schedules three cadences against
/// it: a frame callback (`frame`), a fixed 100 ms heading poll
/// (`poll_heading`) and ad hoc speed input (`set_value`).
pub struct Graph<R: RandomSource = SplitMix64> {
    config: GraphConfig,
    width: f32,
    height: f32,
    trail: TrailBuffer,
    heading: HeadingController,
    renderer: Renderer,
    rng: R,
    alive: bool,
}

impl Graph<SplitMix64> {
    pub fn new(config: GraphConfig, width: f32, height: f32, now: f64) -> Self {
        Self::with_random(config, width, height, now, SplitMix64::from_entropy())
    }
}

impl<R: RandomSource> Graph<R> {
    pub fn with_random(mut config: GraphConfig, width: f32, height: f32, now: f64, mut rng: R) -> Self {
        config.sanitize();
        let trail = TrailBuffer::seeded(width, height, NEUTRAL_SPEED, now);
        let heading = HeadingController::new(now, &mut rng);
        let renderer = Renderer::new(config.line_width, config.retention_ms);
        Self {
            config,
            width,
            height,
            trail,
            heading,
            renderer,
            rng,
            alive: true,
        }
    }

    /// External speed input in `[0, 100]`; appends one trail point.
    pub fn set_value(&mut self, value: f32, now: f64) {
        if !self.alive {
            return;
        }
        self.advance_point(value, now);
    }

    pub fn frame(&mut self, now: f64, surface: &mut dyn Surface) {
        if !self.alive {
            return;
        }
        self.renderer.render_frame(
            now,
            &self.trail,
            &mut self.rng,
            surface,
            self.width,
            self.height,
        );
    }

    pub fn poll_heading(&mut self, now: f64) {
        if !self.alive {
            return;
        }
        self.heading.maybe_reallocate(now, &mut self.rng);
    }

    /// Updates the extents used for boundary math. Buffered points keep their
    /// coordinates; nothing is rescaled.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        if !self.alive {
            return;
        }
        self.width = width;
        self.height = height;
    }

    /// Drops the live flag. Every call after this is a no-op, so an in-flight
    /// host callback can still fire once without touching released resources.
    pub fn destroy(&mut self) {
        self.alive = false;
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn heading(&self) -> &HeadingController {
        &self.heading
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn heading_mut(&mut self) -> &mut HeadingController {
        &mut self.heading
    }
}
