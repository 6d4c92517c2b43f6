use crate::rng::RandomSource;
use crate::trail::Point;
use crate::{Graph, NEUTRAL_SPEED};

impl<R: RandomSource> Graph<R> {
    /// Appends exactly one point in the current heading, reflecting and
    /// clamping at the viewport edges.
    pub(super) fn advance_point(&mut self, value: f32, now: f64) {
        let last = *self.trail.latest();
        let multiplier = value / NEUTRAL_SPEED;
        let (dx, dy) = self.heading.direction();
        let candidate_x = last.x + dx * multiplier;
        let candidate_y = last.y + dy * multiplier;

        // Inclusive comparisons: a candidate landing exactly on an edge
        // reflects that axis even when the motion was inward.
        let mut bounced = false;
        if candidate_x <= 0.0 || candidate_x >= self.width {
            self.heading.reflect_x();
            bounced = true;
        }
        if candidate_y <= 0.0 || candidate_y >= self.height {
            self.heading.reflect_y();
            bounced = true;
        }

        self.trail.push(Point {
            x: candidate_x.clamp(0.0, self.width),
            y: candidate_y.clamp(0.0, self.height),
            value,
            t: now,
        });

        if bounced {
            self.heading.force_short_interval();
        }

        self.trail.prune(now - self.config.retention_ms);
    }
}
