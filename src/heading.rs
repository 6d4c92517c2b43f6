use crate::rng::RandomSource;

/// Period at which the driver is expected to call `maybe_reallocate`.
pub const POLL_PERIOD_MS: f64 = 100.0;
/// Interval forced after a boundary bounce so the next poll re-rolls soon.
pub const BOUNCE_INTERVAL_MS: f64 = 200.0;

const INITIAL_INTERVAL_MIN_MS: f64 = 1_000.0;
const INITIAL_INTERVAL_SPAN_MS: f64 = 2_000.0;
const REROLL_INTERVAL_MIN_MS: f64 = 500.0;
const REROLL_INTERVAL_SPAN_MS: f64 = 2_500.0;

/// Current travel direction plus the deadline for the next random re-roll.
/// Pure function of injected time and randomness; no scheduler involved.
pub struct HeadingController {
    direction_x: f32,
    direction_y: f32,
    last_change: f64,
    next_interval: f64,
}

impl HeadingController {
    pub fn new(now: f64, rng: &mut dyn RandomSource) -> Self {
        Self {
            direction_x: 1.0,
            direction_y: 0.0,
            last_change: now,
            next_interval: INITIAL_INTERVAL_MIN_MS
                + rng.next_unit() as f64 * INITIAL_INTERVAL_SPAN_MS,
        }
    }

    /// Re-rolls the heading once the current interval has elapsed, then draws
    /// a fresh interval in `[500, 3000]` ms. No-op before the deadline.
    pub fn maybe_reallocate(&mut self, now: f64, rng: &mut dyn RandomSource) {
        if now - self.last_change <= self.next_interval {
            return;
        }

        let angle = rng.next_unit() * std::f32::consts::TAU;
        self.direction_x = angle.cos();
        self.direction_y = angle.sin();
        self.last_change = now;
        self.next_interval =
            REROLL_INTERVAL_MIN_MS + rng.next_unit() as f64 * REROLL_INTERVAL_SPAN_MS;
    }

    /// Shortens the deadline after a bounce without touching the direction or
    /// the change timestamp.
    pub fn force_short_interval(&mut self) {
        self.next_interval = BOUNCE_INTERVAL_MS;
    }

    pub fn reflect_x(&mut self) {
        self.direction_x = -self.direction_x;
    }

    pub fn reflect_y(&mut self) {
        self.direction_y = -self.direction_y;
    }

    pub fn direction(&self) -> (f32, f32) {
        (self.direction_x, self.direction_y)
    }

    pub fn next_interval(&self) -> f64 {
        self.next_interval
    }

    pub fn last_change(&self) -> f64 {
        self.last_change
    }

    #[cfg(test)]
    pub(crate) fn set_direction(&mut self, x: f32, y: f32) {
        self.direction_x = x;
        self.direction_y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::{HeadingController, BOUNCE_INTERVAL_MS};
    use crate::rng::ScriptedRandom;

    #[test]
    fn initial_interval_is_in_range() {
        let mut rng = ScriptedRandom::new(&[0.0, 0.999]);
        let low = HeadingController::new(0.0, &mut rng);
        let high = HeadingController::new(0.0, &mut rng);

        assert_eq!(low.next_interval(), 1_000.0);
        assert!(high.next_interval() > 2_990.0 && high.next_interval() < 3_000.0);
    }

    #[test]
    fn poll_within_interval_changes_nothing() {
        let mut rng = ScriptedRandom::new(&[0.5]);
        let mut heading = HeadingController::new(1_000.0, &mut rng);
        let before = (heading.direction(), heading.last_change());

        heading.maybe_reallocate(1_000.0, &mut rng);
        heading.maybe_reallocate(1_000.0, &mut rng);

        assert_eq!((heading.direction(), heading.last_change()), before);
    }

    #[test]
    fn elapsed_interval_picks_unit_heading_and_new_deadline() {
        let mut rng = ScriptedRandom::new(&[0.5, 0.25, 0.4]);
        let mut heading = HeadingController::new(0.0, &mut rng);

        let now = heading.next_interval() + 1.0;
        heading.maybe_reallocate(now, &mut rng);

        let (dx, dy) = heading.direction();
        let angle = 0.25 * std::f32::consts::TAU;
        assert!((dx - angle.cos()).abs() < 1.0e-6);
        assert!((dy - angle.sin()).abs() < 1.0e-6);
        assert!((dx * dx + dy * dy - 1.0).abs() < 1.0e-6);
        assert_eq!(heading.last_change(), now);
        assert!((heading.next_interval() - 1_500.0).abs() < 1.0e-3);
    }

    #[test]
    fn forced_interval_overrides_without_moving_deadline_clock() {
        let mut rng = ScriptedRandom::new(&[0.9]);
        let mut heading = HeadingController::new(3_000.0, &mut rng);
        let direction = heading.direction();
        let last_change = heading.last_change();

        heading.force_short_interval();

        assert_eq!(heading.next_interval(), BOUNCE_INTERVAL_MS);
        assert_eq!(heading.direction(), direction);
        assert_eq!(heading.last_change(), last_change);
    }

    #[test]
    fn reflection_flips_one_axis_and_keeps_magnitude() {
        let mut rng = ScriptedRandom::new(&[0.1]);
        let mut heading = HeadingController::new(0.0, &mut rng);
        heading.set_direction(0.6, 0.8);

        heading.reflect_x();
        assert_eq!(heading.direction(), (-0.6, 0.8));

        heading.reflect_y();
        let (dx, dy) = heading.direction();
        assert_eq!((dx, dy), (-0.6, -0.8));
        assert!((dx * dx + dy * dy - 1.0).abs() < 1.0e-6);
    }

    #[test]
    fn boundary_equal_elapsed_does_not_fire() {
        // The comparison is strict: elapsed == interval keeps the heading.
        let mut rng = ScriptedRandom::new(&[0.0]);
        let mut heading = HeadingController::new(0.0, &mut rng);
        let before = heading.direction();

        heading.maybe_reallocate(heading.next_interval(), &mut rng);

        assert_eq!(heading.direction(), before);
    }
}
