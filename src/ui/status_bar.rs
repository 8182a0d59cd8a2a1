//! Status bar with per-mode key hints and the scroll position.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;

use crate::app::InputMode;
use crate::page::PageView;
use crate::theme::AppTheme;

pub fn render(
    frame: &mut Frame,
    view: &PageView,
    mode: InputMode,
    theme: &AppTheme,
    area: Rect,
) {
    let buf = frame.buffer_mut();
    buf.set_style(area, Style::default().bg(theme.status_background));

    let hint_style = Style::default().fg(theme.status_hint);
    let text_style = Style::default().fg(theme.status_text);

    let hints = match mode {
        InputMode::Browse => {
            " j/k scroll  1-9 jump  h/l slides  [/] tabs  c contact  t theme  m music  q quit"
        }
        InputMode::Form => " Tab next field  Enter advance/send  Ctrl+S send  Esc back",
    };
    buf.set_string(area.x, area.y, hints, hint_style);

    // Scroll position on the right
    let position = format!("{}/{} ", view.scroll.row(), view.total_height());
    let width = position.chars().count() as u16;
    if area.width > width {
        buf.set_string(area.right() - width, area.y, &position, text_style);
    }
}
