//! Plain text section: heading plus wrapped paragraphs.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::page::{text_width, wrap_text, HEAD_ROWS, PAD_X};
use crate::theme::AppTheme;

pub fn render(
    heading: &str,
    paragraphs: &[String],
    theme: &AppTheme,
    rect: Rect,
    buf: &mut Buffer,
) {
    super::render_heading(heading, theme, rect, buf);

    let style = Style::default().fg(theme.text_primary);
    let width = text_width(rect.width);
    let x = rect.x + PAD_X;
    let mut y = rect.y + HEAD_ROWS;

    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i > 0 {
            y += 1;
        }
        for line in wrap_text(paragraph, width) {
            if y >= rect.bottom() {
                return;
            }
            buf.set_string(x, y, &line, style);
            y += 1;
        }
    }
}
