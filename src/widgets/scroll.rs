use std::time::Duration;

/// Smooth scroll state for the page viewport (rendering-agnostic)
///
/// `offset` is the top page row currently shown; `target` is where an
/// animation is headed. `tick(dt)` eases the offset toward the target
/// without overshooting. Retargeting mid-flight simply redirects the
/// animation, the way a second anchor click supersedes a running smooth
/// scroll.
#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: f32,
    target: f32,
    max_offset: f32,
    /// Time constant of the ease-out curve; convergence takes roughly four
    tau: Duration,
}

/// Below this distance the animation snaps to the target and stops
const SETTLE: f32 = 0.05;

impl ScrollState {
    /// Create a scroller whose animations settle in about `animation` time
    pub fn new(animation: Duration) -> Self {
        Self {
            offset: 0.0,
            target: 0.0,
            max_offset: 0.0,
            tau: animation / 4,
        }
    }

    /// Recompute the clamp bound from page and viewport heights, in rows
    ///
    /// Shrinking the page pulls both offset and target back into range.
    pub fn set_bounds(&mut self, page_height: u16, viewport: u16) {
        self.max_offset = page_height.saturating_sub(viewport) as f32;
        self.offset = self.offset.clamp(0.0, self.max_offset);
        self.target = self.target.clamp(0.0, self.max_offset);
    }

    /// Animate toward an absolute page row
    pub fn scroll_to(&mut self, row: u16) {
        self.target = (row as f32).clamp(0.0, self.max_offset);
    }

    /// Nudge the target by a signed number of rows (keyboard scrolling)
    pub fn scroll_by(&mut self, rows: i32) {
        self.target = (self.target + rows as f32).clamp(0.0, self.max_offset);
    }

    /// Advance the animation. Returns true while still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let diff = self.target - self.offset;
        if diff.abs() < SETTLE {
            if diff != 0.0 {
                self.offset = self.target;
            }
            return false;
        }
        if self.tau.is_zero() {
            self.offset = self.target;
            return true;
        }
        // Ease-out: cover a dt/tau share of the remaining distance each
        // frame, capped at the full distance so a long frame cannot
        // overshoot
        let step = (dt.as_secs_f32() / self.tau.as_secs_f32()).min(1.0);
        self.offset += diff * step;
        true
    }

    /// Current offset as the integer top row to render
    pub fn row(&self) -> u16 {
        self.offset.round() as u16
    }
}
