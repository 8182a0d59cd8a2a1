/// Icon shown on the toggle control while music plays
pub const ICON_PLAYING: &str = "🔊";
/// Icon shown while music is paused or unavailable
pub const ICON_MUTED: &str = "🔇";

/// Background music toggle state (rendering-agnostic)
///
/// Mirrors the playback state of the music player; it does not read the
/// player back. When no audio output or track is available the control is
/// disabled: it renders muted and toggling does nothing.
#[derive(Debug, Clone)]
pub struct MusicToggleState {
    is_playing: bool,
    available: bool,
}

impl MusicToggleState {
    pub fn new(available: bool, start_playing: bool) -> Self {
        Self {
            is_playing: available && start_playing,
            available,
        }
    }

    /// Flip the playing flag
    ///
    /// Returns the new flag so the caller can pause or resume the actual
    /// player, or None when the control is disabled.
    pub fn toggle(&mut self) -> Option<bool> {
        if !self.available {
            return None;
        }
        self.is_playing = !self.is_playing;
        Some(self.is_playing)
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Icon for the toggle control
    pub fn icon(&self) -> &'static str {
        if self.is_playing {
            ICON_PLAYING
        } else {
            ICON_MUTED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_playing() {
        let toggle = MusicToggleState::new(true, true);
        assert!(toggle.is_playing());
        assert_eq!(toggle.icon(), ICON_PLAYING);
    }

    #[test]
    fn test_click_sequence_flips_flag_and_icon() {
        let mut toggle = MusicToggleState::new(true, true);

        // First click pauses and shows the muted glyph
        assert_eq!(toggle.toggle(), Some(false));
        assert_eq!(toggle.icon(), ICON_MUTED);

        // Second click resumes and shows the unmuted glyph
        assert_eq!(toggle.toggle(), Some(true));
        assert_eq!(toggle.icon(), ICON_PLAYING);
    }

    #[test]
    fn test_unavailable_control_is_inert() {
        let mut toggle = MusicToggleState::new(false, true);
        assert!(!toggle.is_playing());
        assert_eq!(toggle.icon(), ICON_MUTED);

        assert_eq!(toggle.toggle(), None);
        assert!(!toggle.is_playing());
    }

    #[test]
    fn test_start_paused() {
        let toggle = MusicToggleState::new(true, false);
        assert!(!toggle.is_playing());
        assert_eq!(toggle.icon(), ICON_MUTED);
    }
}
