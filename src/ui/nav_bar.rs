//! Fixed navigation bar across the top row.
//!
//! Brand on the left, section links in the middle, theme and music
//! toggles on the right. Everything clickable registers a
//! screen-coordinate target.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;

use crate::app::ClickTarget;
use crate::page::PageView;
use crate::theme::AppTheme;
use crate::widgets::MusicToggleState;

/// Theme toggle glyph, same in both themes
const THEME_ICON: &str = "◐";

pub fn render(
    frame: &mut Frame,
    view: &PageView,
    music: &MusicToggleState,
    theme: &AppTheme,
    area: Rect,
    targets: &mut Vec<(Rect, ClickTarget)>,
) {
    let buf = frame.buffer_mut();
    buf.set_style(area, Style::default().bg(theme.nav_background));

    let brand_style = Style::default()
        .fg(theme.nav_brand)
        .add_modifier(Modifier::BOLD);
    let link_style = Style::default().fg(theme.nav_link);

    // Brand
    let mut x = area.x + 1;
    let brand = view.page.title.as_str();
    buf.set_string(x, area.y, brand, brand_style);
    x += brand.chars().count() as u16 + 3;

    // Icons live on the right edge: music toggle, then theme toggle
    let music_style = if !music.is_available() {
        Style::default().fg(theme.toggle_disabled)
    } else if music.is_playing() {
        Style::default().fg(theme.toggle_active)
    } else {
        Style::default().fg(theme.nav_link)
    };
    // Emoji icons occupy two cells
    let theme_x = area.right().saturating_sub(3);
    let music_x = theme_x.saturating_sub(4);

    buf.set_string(music_x, area.y, music.icon(), music_style);
    buf.set_string(theme_x, area.y, THEME_ICON, link_style);
    targets.push((Rect::new(music_x, area.y, 2, 1), ClickTarget::MusicToggle));
    targets.push((Rect::new(theme_x, area.y, 2, 1), ClickTarget::ThemeToggle));

    // Section links, dropped one by one if the row runs out of room
    for (index, link) in view.page.nav.iter().enumerate() {
        let width = link.label.chars().count() as u16;
        if x + width + 2 >= music_x {
            break;
        }
        buf.set_string(x, area.y, &link.label, link_style);
        targets.push((Rect::new(x, area.y, width, 1), ClickTarget::NavLink(index)));
        x += width + 2;
    }
}
