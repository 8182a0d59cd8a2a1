use std::time::Duration;

/// Fade-in phase for a page section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Not yet revealed; the section renders blank
    Hidden,
    /// Revealed, brightness still ramping up
    FadingIn,
    /// Fully visible; terminal state
    Visible,
}

/// Scroll-reveal state for one page section (rendering-agnostic)
///
/// Sections start hidden and are revealed when the viewport scrolls close
/// enough (see [`FadeState::should_reveal`]). Revealing is monotonic for
/// the session: once a section is visible it never hides again.
#[derive(Debug, Clone)]
pub struct FadeState {
    phase: FadePhase,
    /// Time spent fading in so far
    elapsed: Duration,
    ramp: Duration,
}

impl FadeState {
    /// A section that fades in over `ramp` once revealed
    pub fn new(ramp: Duration) -> Self {
        Self {
            phase: FadePhase::Hidden,
            elapsed: Duration::ZERO,
            ramp,
        }
    }

    /// A section that never fades; starts and stays fully visible
    pub fn always_visible() -> Self {
        Self {
            phase: FadePhase::Visible,
            elapsed: Duration::ZERO,
            ramp: Duration::ZERO,
        }
    }

    /// The reveal rule, in page rows: a section whose top row is above
    /// `offset + viewport - margin` is close enough to view to fade in
    pub fn should_reveal(top: u16, offset: u16, viewport: u16, margin: u16) -> bool {
        (top as i32) < offset as i32 + viewport as i32 - margin as i32
    }

    /// Begin fading in. Idempotent: revealing an already revealed section
    /// has no effect.
    pub fn reveal(&mut self) {
        if self.phase == FadePhase::Hidden {
            self.phase = if self.ramp.is_zero() {
                FadePhase::Visible
            } else {
                FadePhase::FadingIn
            };
            self.elapsed = Duration::ZERO;
        }
    }

    /// Advance the brightness ramp. Returns true while still animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.phase != FadePhase::FadingIn {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.ramp {
            self.phase = FadePhase::Visible;
        }
        true
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// True once revealed, whether still ramping or fully visible
    pub fn is_revealed(&self) -> bool {
        self.phase != FadePhase::Hidden
    }
}
