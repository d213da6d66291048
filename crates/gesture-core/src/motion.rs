//! Relative-motion filter: palm deltas → smoothed absolute cursor targets.
//!
//! Tracking is delta-based rather than absolute: mapping landmark
//! positions directly to screen coordinates teleports the cursor
//! whenever the hand re-enters the frame or drifts. Instead the filter
//! accumulates per-frame palm deltas onto the last smoothed cursor
//! position and applies an exponential moving average to suppress
//! landmark jitter.
//!
//! On activation the filter is seeded with the pointer's current
//! position, so control always picks up from wherever the cursor
//! already is. If the hand disappears mid-session the palm reference is
//! dropped; the first frame after reacquisition re-primes against the
//! current palm and emits no movement, so a gap never produces a jump.

use airpoint_hand_model::landmark::Point2D;

use crate::config::EngineConfig;

/// Screen dimensions in physical pixels, queried once at session start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl ScreenSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The motion filter.
#[derive(Debug)]
pub struct MotionFilter {
    smoothing_factor: f64,
    sensitivity: f64,

    /// Last smoothed cursor position (screen pixels).
    smoothed: Point2D,

    /// Palm position on the previous frame (normalized).
    prev_palm: Point2D,

    /// Whether `prev_palm` is a valid reference for the next delta.
    primed: bool,
}

impl MotionFilter {
    /// Create an unprimed filter from engine tunables.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            smoothing_factor: config.smoothing_factor.clamp(0.0, 0.999),
            sensitivity: config.sensitivity,
            smoothed: Point2D::new(0.0, 0.0),
            prev_palm: Point2D::new(0.0, 0.0),
            primed: false,
        }
    }

    /// Seed the filter from the pointer's current position.
    ///
    /// Called once per activation. Drops the palm reference so the next
    /// [`update`](Self::update) re-primes and emits no movement.
    pub fn seed(&mut self, cursor: Point2D) {
        self.smoothed = cursor;
        self.primed = false;
        tracing::debug!(x = cursor.x, y = cursor.y, "Motion filter seeded");
    }

    /// Drop the palm reference (hand lost while active).
    ///
    /// The smoothed cursor position is kept: the cursor does not move
    /// during a gap, so the next visible frame resumes from it without
    /// computing a delta against the stale palm.
    pub fn interrupt(&mut self) {
        self.primed = false;
    }

    /// Feed the current palm position; returns the new absolute cursor
    /// target, or `None` on a priming frame.
    pub fn update(&mut self, palm: Point2D, screen: ScreenSize) -> Option<Point2D> {
        if !self.primed {
            self.prev_palm = palm;
            self.primed = true;
            return None;
        }

        let delta_x = (palm.x - self.prev_palm.x) * screen.width * self.sensitivity;
        let delta_y = (palm.y - self.prev_palm.y) * screen.height * self.sensitivity;

        let target_x = self.smoothed.x + delta_x;
        let target_y = self.smoothed.y + delta_y;

        self.smoothed = Point2D::new(
            self.smoothed.x * self.smoothing_factor + target_x * (1.0 - self.smoothing_factor),
            self.smoothed.y * self.smoothing_factor + target_y * (1.0 - self.smoothing_factor),
        );
        self.prev_palm = palm;

        Some(self.smoothed)
    }

    /// Last smoothed cursor position.
    pub fn position(&self) -> Point2D {
        self.smoothed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCREEN: ScreenSize = ScreenSize {
        width: 1920.0,
        height: 1080.0,
    };

    fn filter() -> MotionFilter {
        MotionFilter::new(&EngineConfig::default())
    }

    #[test]
    fn test_priming_frame_emits_no_movement() {
        let mut f = filter();
        f.seed(Point2D::new(960.0, 540.0));

        assert_eq!(f.update(Point2D::new(0.5, 0.5), SCREEN), None);
        assert_eq!(f.position(), Point2D::new(960.0, 540.0));
    }

    #[test]
    fn test_delta_moves_in_palm_direction() {
        let mut f = filter();
        f.seed(Point2D::new(960.0, 540.0));
        f.update(Point2D::new(0.5, 0.5), SCREEN);

        let target = f.update(Point2D::new(0.52, 0.5), SCREEN).unwrap();
        assert!(target.x > 960.0);
        assert_eq!(target.y, 540.0);
    }

    #[test]
    fn test_stationary_palm_holds_position() {
        let mut f = filter();
        f.seed(Point2D::new(100.0, 100.0));
        f.update(Point2D::new(0.5, 0.5), SCREEN);
        f.update(Point2D::new(0.6, 0.6), SCREEN);

        let held = f.position();
        let next = f.update(Point2D::new(0.6, 0.6), SCREEN).unwrap();
        assert_eq!(next, held);
    }

    #[test]
    fn test_interrupt_prevents_jump_after_gap() {
        let mut f = filter();
        f.seed(Point2D::new(960.0, 540.0));
        f.update(Point2D::new(0.5, 0.5), SCREEN);
        f.update(Point2D::new(0.51, 0.5), SCREEN);
        let before_gap = f.position();

        // Hand leaves the frame, then reappears somewhere else entirely
        f.interrupt();
        assert_eq!(f.update(Point2D::new(0.9, 0.9), SCREEN), None);
        assert_eq!(f.position(), before_gap);

        // Tracking resumes relative to the reacquired palm
        let target = f.update(Point2D::new(0.91, 0.9), SCREEN).unwrap();
        assert!((target.x - before_gap.x).abs() < 0.01 * SCREEN.width * 2.5 + 1e-9);
    }

    #[test]
    fn test_seed_restarts_from_cursor() {
        let mut f = filter();
        f.seed(Point2D::new(10.0, 10.0));
        f.update(Point2D::new(0.5, 0.5), SCREEN);
        f.update(Point2D::new(0.8, 0.8), SCREEN);

        f.seed(Point2D::new(500.0, 500.0));
        assert_eq!(f.position(), Point2D::new(500.0, 500.0));
        assert_eq!(f.update(Point2D::new(0.1, 0.1), SCREEN), None);
    }

    proptest! {
        /// Constant-direction palm motion: each smoothed step moves
        /// toward the raw target and never overshoots it.
        #[test]
        fn prop_smoothing_never_overshoots(
            smoothing in 0.01f64..0.99,
            step in 0.001f64..0.02,
            frames in 2usize..40,
        ) {
            let config = EngineConfig {
                smoothing_factor: smoothing,
                ..EngineConfig::default()
            };
            let mut f = MotionFilter::new(&config);
            f.seed(Point2D::new(0.0, 0.0));

            let mut palm = Point2D::new(0.1, 0.5);
            f.update(palm, SCREEN);

            for _ in 0..frames {
                palm = Point2D::new(palm.x + step, palm.y);
                let before = f.position().x;
                let raw_delta = step * SCREEN.width * config.sensitivity;
                let after = f.update(palm, SCREEN).unwrap().x;

                let moved = after - before;
                // Moves in the delta direction, but by less than the
                // raw (unsmoothed) delta
                prop_assert!(moved > 0.0);
                prop_assert!(moved < raw_delta);
                // Never past the raw target
                prop_assert!(after < before + raw_delta);
            }
        }

        /// For any smoothing factor in (0, 1), a single step lands at
        /// exactly (1 - factor) of the raw delta.
        #[test]
        fn prop_single_step_fraction(smoothing in 0.01f64..0.99) {
            let config = EngineConfig {
                smoothing_factor: smoothing,
                ..EngineConfig::default()
            };
            let mut f = MotionFilter::new(&config);
            f.seed(Point2D::new(0.0, 0.0));
            f.update(Point2D::new(0.5, 0.5), SCREEN);

            let raw = 0.01 * SCREEN.width * config.sensitivity;
            let target = f.update(Point2D::new(0.51, 0.5), SCREEN).unwrap();
            prop_assert!((target.x - raw * (1.0 - smoothing)).abs() < 1e-6);
        }
    }
}
