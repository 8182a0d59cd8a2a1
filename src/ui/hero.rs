//! Hero section: big heading plus the typed tagline.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::page::{HEAD_ROWS, PAD_X};
use crate::theme::AppTheme;
use crate::widgets::TypewriterState;

/// Block cursor shown while the tagline is still typing
const CURSOR: &str = "█";

pub fn render(
    heading: &str,
    typewriter: &TypewriterState,
    theme: &AppTheme,
    rect: Rect,
    buf: &mut Buffer,
) {
    super::render_heading(heading, theme, rect, buf);

    let y = rect.y + HEAD_ROWS;
    let x = rect.x + PAD_X;
    let text_style = Style::default().fg(theme.typing_text);

    let visible = typewriter.visible_text();
    buf.set_string(x, y, visible, text_style);

    if !typewriter.is_done() {
        let cursor_x = x + visible.chars().count() as u16;
        if cursor_x < rect.right() {
            let cursor_style = Style::default()
                .fg(theme.typing_cursor)
                .add_modifier(Modifier::SLOW_BLINK);
            buf.set_string(cursor_x, y, CURSOR, cursor_style);
        }
    }
}
