use crate::rng::RandomSource;
use crate::surface::{GradientStop, Hsla, LinearGradient, Paint, StrokeStyle, Surface};
use crate::trail::{Point, TrailBuffer};

const BACKGROUND: Hsla = Hsla::new(0.0, 0.0, 4.0, 0.05);
const HUE_BASE: f32 = 120.0;
const HUE_WAVE_AMPLITUDE: f32 = 30.0;
const HUE_STEP: f32 = 1.0;
const GRADIENT_HUE_SHIFT: f32 = 60.0;
const GLOW_BLUR: f32 = 15.0;
const TAIL_MIN_POINTS: usize = 10;
const TAIL_WINDOW: usize = 20;
const PARTICLE_WINDOW: usize = 10;
const PARTICLE_CHANCE: f32 = 0.3;
const PARTICLE_RADIUS_MIN: f32 = 1.0;
const PARTICLE_RADIUS_SPAN: f32 = 3.0;
const PARTICLE_HUE: f32 = 120.0;

/// Paints the trail each frame: persistence-fade background, gradient main
/// stroke with glow, fading tail overlay, stochastic particles. Holds only
/// cosmetic state (the hue phase); the trail itself is read-only here.
pub struct Renderer {
    hue_phase: f32,
    line_width: f32,
    retention_ms: f64,
}

impl Renderer {
    pub fn new(line_width: f32, retention_ms: f64) -> Self {
        Self {
            hue_phase: 0.0,
            line_width,
            retention_ms,
        }
    }

    pub fn render_frame(
        &mut self,
        now: f64,
        trail: &TrailBuffer,
        rng: &mut dyn RandomSource,
        surface: &mut dyn Surface,
        width: f32,
        height: f32,
    ) {
        // Translucent fill instead of a clear so earlier frames ghost through.
        surface.fill_rect(0.0, 0.0, width, height, BACKGROUND);

        let points = trail.as_slice();
        if points.len() < 2 {
            return;
        }

        self.hue_phase = (self.hue_phase + HUE_STEP) % 360.0;
        let hue =
            (HUE_BASE + self.hue_phase.to_radians().sin() * HUE_WAVE_AMPLITUDE) % 360.0;

        let gradient = LinearGradient {
            from: (0.0, 0.0),
            to: (width, height),
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: Hsla::new(hue, 100.0, 50.0, 0.6),
                },
                GradientStop {
                    offset: 0.5,
                    color: Hsla::new(hue + GRADIENT_HUE_SHIFT, 100.0, 70.0, 0.8),
                },
                GradientStop {
                    offset: 1.0,
                    color: Hsla::new(hue, 100.0, 50.0, 0.6),
                },
            ],
        };

        surface.begin_path();
        surface.move_to(points[0].x, points[0].y);
        for point in &points[1..] {
            surface.line_to(point.x, point.y);
        }
        surface.set_glow(Hsla::new(hue, 100.0, 50.0, 0.5), GLOW_BLUR);
        surface.stroke(&StrokeStyle {
            paint: Paint::Linear(gradient),
            width: self.line_width,
        });
        surface.clear_glow();

        if points.len() > TAIL_MIN_POINTS {
            self.draw_tail(points, hue, surface);
        }

        self.draw_particles(now, points, rng, surface);
    }

    /// Restrokes the newest points as individual segments whose alpha and
    /// width grow towards the head, over the uniform main stroke.
    fn draw_tail(&self, points: &[Point], hue: f32, surface: &mut dyn Surface) {
        let tail_len = TAIL_WINDOW.min(points.len());
        let start = points.len() - tail_len;
        for i in start..points.len() - 1 {
            let alpha = (i - start) as f32 / tail_len as f32;

            surface.begin_path();
            surface.move_to(points[i].x, points[i].y);
            surface.line_to(points[i + 1].x, points[i + 1].y);
            surface.stroke(&StrokeStyle {
                paint: Paint::Solid(Hsla::new(hue, 100.0, 50.0, alpha * 0.8)),
                width: self.line_width * alpha,
            });
        }
    }

    fn draw_particles(
        &self,
        now: f64,
        points: &[Point],
        rng: &mut dyn RandomSource,
        surface: &mut dyn Surface,
    ) {
        let count = PARTICLE_WINDOW.min(points.len());
        for point in &points[points.len() - count..] {
            let age = ((now - point.t) / self.retention_ms) as f32;
            if rng.next_unit() < PARTICLE_CHANCE {
                let radius = rng.next_unit() * PARTICLE_RADIUS_SPAN + PARTICLE_RADIUS_MIN;
                let alpha = (1.0 - age) * 0.5;
                surface.fill_circle(
                    point.x,
                    point.y,
                    radius,
                    Hsla::new(PARTICLE_HUE, 100.0, 70.0, alpha),
                );
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn hue_phase(&self) -> f32 {
        self.hue_phase
    }
}
