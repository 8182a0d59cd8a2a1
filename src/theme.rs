//! Application-wide theme system
//!
//! Two built-in themes (dark and light) mirroring the page's theme
//! toggle. Every UI element reads its colors from the active `AppTheme`
//! so a toggle repaints the whole page on the next frame.

use ratatui::style::Color;

/// Which of the two built-in themes is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Parse a configured theme name; unknown names return None
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Complete application theme defining all UI colors
#[derive(Debug, Clone)]
pub struct AppTheme {
    // Page
    pub page_background: Color,
    pub heading: Color,
    pub text_primary: Color,
    pub text_secondary: Color,

    // Nav bar
    pub nav_background: Color,
    pub nav_brand: Color,
    pub nav_link: Color,

    // Status bar
    pub status_background: Color,
    pub status_text: Color,
    pub status_hint: Color,

    // Hero typing effect
    pub typing_text: Color,
    pub typing_cursor: Color,

    // Feature tabs
    pub tab_active: Color,
    pub tab_inactive: Color,

    // Gallery
    pub gallery_border: Color,
    pub gallery_title: Color,
    pub gallery_caption: Color,
    pub gallery_control: Color,

    // Contact form
    pub form_label: Color,
    pub form_label_focused: Color,
    pub form_field_background: Color,
    pub form_field_text: Color,
    pub form_cursor: Color,
    pub form_button: Color,
    pub form_button_focused: Color,
    pub form_error: Color,
    pub form_success: Color,

    // Theme/music toggles
    pub toggle_active: Color,
    pub toggle_disabled: Color,
}

/// Built-in theme presets
pub struct ThemePresets;

impl ThemePresets {
    pub fn for_mode(mode: ThemeMode) -> AppTheme {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Default dark theme
    pub fn dark() -> AppTheme {
        AppTheme {
            // Page
            page_background: Color::Black,
            heading: Color::Cyan,
            text_primary: Color::White,
            text_secondary: Color::Gray,

            // Nav bar
            nav_background: Color::Rgb(20, 20, 20),
            nav_brand: Color::Cyan,
            nav_link: Color::White,

            // Status bar
            status_background: Color::Rgb(20, 20, 20),
            status_text: Color::Gray,
            status_hint: Color::DarkGray,

            // Hero
            typing_text: Color::White,
            typing_cursor: Color::Yellow,

            // Tabs
            tab_active: Color::Yellow,
            tab_inactive: Color::Gray,

            // Gallery
            gallery_border: Color::Cyan,
            gallery_title: Color::White,
            gallery_caption: Color::Gray,
            gallery_control: Color::Cyan,

            // Form
            form_label: Color::Rgb(100, 149, 237), // Cornflower blue
            form_label_focused: Color::Yellow,
            form_field_background: Color::Rgb(30, 30, 30),
            form_field_text: Color::Cyan,
            form_cursor: Color::Yellow,
            form_button: Color::Cyan,
            form_button_focused: Color::Yellow,
            // Feedback colors are the same in both themes
            form_error: Color::Rgb(255, 102, 102),
            form_success: Color::Rgb(50, 205, 50),

            // Toggles
            toggle_active: Color::Green,
            toggle_disabled: Color::DarkGray,
        }
    }

    /// Light theme for daytime use
    pub fn light() -> AppTheme {
        AppTheme {
            // Page
            page_background: Color::White,
            heading: Color::Blue,
            text_primary: Color::Black,
            text_secondary: Color::Rgb(80, 80, 80),

            // Nav bar
            nav_background: Color::Rgb(245, 245, 245),
            nav_brand: Color::Blue,
            nav_link: Color::Black,

            // Status bar
            status_background: Color::Rgb(245, 245, 245),
            status_text: Color::Rgb(80, 80, 80),
            status_hint: Color::Rgb(160, 160, 160),

            // Hero
            typing_text: Color::Black,
            typing_cursor: Color::Rgb(255, 140, 0), // Dark orange

            // Tabs
            tab_active: Color::Rgb(0, 0, 139), // Dark blue
            tab_inactive: Color::Rgb(128, 128, 128),

            // Gallery
            gallery_border: Color::Blue,
            gallery_title: Color::Black,
            gallery_caption: Color::Rgb(80, 80, 80),
            gallery_control: Color::Blue,

            // Form
            form_label: Color::Rgb(0, 0, 139),
            form_label_focused: Color::Rgb(255, 140, 0),
            form_field_background: Color::Rgb(250, 250, 250),
            form_field_text: Color::Black,
            form_cursor: Color::Rgb(255, 140, 0),
            form_button: Color::Blue,
            form_button_focused: Color::Rgb(255, 140, 0),
            // Feedback colors are the same in both themes
            form_error: Color::Rgb(255, 102, 102),
            form_success: Color::Rgb(50, 205, 50),

            // Toggles
            toggle_active: Color::Rgb(0, 128, 0),
            toggle_disabled: Color::Rgb(180, 180, 180),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_name() {
        assert_eq!(ThemeMode::from_name("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("LIGHT"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("solarized"), None);
    }

    #[test]
    fn test_toggle_flips_between_the_two_modes() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_presets_differ() {
        let dark = ThemePresets::dark();
        let light = ThemePresets::light();
        assert_ne!(dark.page_background, light.page_background);
        assert_ne!(dark.text_primary, light.text_primary);
    }

    #[test]
    fn test_feedback_colors_stable_across_themes() {
        let dark = ThemePresets::dark();
        let light = ThemePresets::light();
        assert_eq!(dark.form_error, light.form_error);
        assert_eq!(dark.form_success, light.form_success);
    }
}
