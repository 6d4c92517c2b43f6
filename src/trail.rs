pub const SEED_COUNT: usize = 100;
pub const SEED_SPACING_MS: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub value: f32,
    pub t: f64,
}

/// Ordered trail of timestamped points. Insertion order is chronological, so
/// retention pruning always removes a contiguous oldest prefix.
pub struct TrailBuffer {
    points: Vec<Point>,
}

impl TrailBuffer {
    /// Seeds the buffer with synthetic center points, oldest first, so the
    /// first frame already has a full trail to draw.
    pub fn seeded(width: f32, height: f32, value: f32, now: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        let mut points = Vec::with_capacity(SEED_COUNT + 1);
        for i in 0..SEED_COUNT {
            points.push(Point {
                x: center_x,
                y: center_y,
                value,
                t: now - (SEED_COUNT - 1 - i) as f64 * SEED_SPACING_MS,
            });
        }
        Self { points }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Drops every point older than `cutoff`. The caller appends a point with
    /// `t = now` before pruning, so at least one point always survives.
    pub fn prune(&mut self, cutoff: f64) {
        let keep_from = self.points.partition_point(|p| p.t < cutoff);
        if keep_from > 0 {
            self.points.drain(..keep_from);
        }
    }

    pub fn latest(&self) -> &Point {
        self.points.last().expect("trail buffer is seeded non-empty")
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}
