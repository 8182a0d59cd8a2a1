use std::time::Duration;

/// Typewriter effect state (rendering-agnostic)
///
/// Reveals a fixed message one character per tick interval. The machine is
/// driven by `tick(dt)` with caller-supplied elapsed time, so tests can
/// advance it without real timers. Once the full message is revealed it
/// stops permanently; there is no reset and no way to restart.
#[derive(Debug, Clone)]
pub struct TypewriterState {
    message: String,
    /// Characters revealed so far
    pos: usize,
    /// Total character count (the message never changes)
    len: usize,
    interval: Duration,
    /// Elapsed time carried over from previous ticks, not yet spent on a character
    carry: Duration,
}

impl TypewriterState {
    /// Create a typewriter revealing one character of `message` per `interval`
    ///
    /// An empty message starts in the finished state, which is how a page
    /// without a tagline disables the effect.
    pub fn new(message: impl Into<String>, interval: Duration) -> Self {
        let message = message.into();
        let len = message.chars().count();
        Self {
            message,
            pos: 0,
            len,
            interval,
            carry: Duration::ZERO,
        }
    }

    /// Advance the effect by `dt` elapsed time
    ///
    /// Reveals as many characters as whole intervals fit into the
    /// accumulated time, so a long frame catches up instead of dropping
    /// characters. Returns true if any character was revealed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.is_done() {
            return false;
        }
        if self.interval.is_zero() {
            // Zero interval means no animation: reveal everything at once
            self.pos = self.len;
            return true;
        }

        self.carry += dt;
        let before = self.pos;
        while self.carry >= self.interval && self.pos < self.len {
            self.carry -= self.interval;
            self.pos += 1;
        }
        if self.is_done() {
            self.carry = Duration::ZERO;
        }
        self.pos != before
    }

    /// The revealed prefix of the message
    pub fn visible_text(&self) -> &str {
        match self.message.char_indices().nth(self.pos) {
            Some((byte, _)) => &self.message[..byte],
            None => &self.message,
        }
    }

    /// True once every character has been revealed
    pub fn is_done(&self) -> bool {
        self.pos >= self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MESSAGE: &str = "Welcome to BababoiOS — Fast, Secure, and Open.";

    #[test]
    fn test_reveals_one_char_per_interval() {
        let mut tw = TypewriterState::new("abc", Duration::from_millis(50));
        assert_eq!(tw.visible_text(), "");

        assert!(!tw.tick(Duration::from_millis(49)));
        assert_eq!(tw.visible_text(), "");

        assert!(tw.tick(Duration::from_millis(1)));
        assert_eq!(tw.visible_text(), "a");

        // A long frame catches up by revealing several characters
        assert!(tw.tick(Duration::from_millis(100)));
        assert_eq!(tw.visible_text(), "abc");
        assert!(tw.is_done());
    }

    #[test]
    fn test_full_message_appears_exactly_once() {
        let mut tw = TypewriterState::new(MESSAGE, Duration::from_millis(50));
        let chars = MESSAGE.chars().count();

        // Enough elapsed time for every character
        tw.tick(Duration::from_millis(50 * chars as u64));
        assert_eq!(tw.visible_text(), MESSAGE);
        assert!(tw.is_done());

        // Further ticks never append a second copy of the prefix
        assert!(!tw.tick(Duration::from_secs(10)));
        assert_eq!(tw.visible_text(), MESSAGE);
    }

    #[test]
    fn test_multibyte_boundaries() {
        // The em dash is multi-byte; the visible prefix must always split
        // on a character boundary
        let mut tw = TypewriterState::new(MESSAGE, Duration::from_millis(50));
        for _ in 0..MESSAGE.chars().count() {
            tw.tick(Duration::from_millis(50));
            let _ = tw.visible_text();
        }
        assert_eq!(tw.visible_text(), MESSAGE);
    }

    #[test]
    fn test_empty_message_starts_done() {
        let mut tw = TypewriterState::new("", Duration::from_millis(50));
        assert!(tw.is_done());
        assert!(!tw.tick(Duration::from_secs(1)));
        assert_eq!(tw.visible_text(), "");
    }

    #[test]
    fn test_zero_interval_reveals_all() {
        let mut tw = TypewriterState::new("hello", Duration::ZERO);
        assert!(tw.tick(Duration::from_millis(1)));
        assert_eq!(tw.visible_text(), "hello");
        assert!(tw.is_done());
    }
}
