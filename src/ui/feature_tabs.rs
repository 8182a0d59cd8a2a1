//! Feature tabs: a row of tab buttons over a shared content pane.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::HitMap;
use crate::app::ClickTarget;
use crate::content::{TabButton, TabPane};
use crate::page::{text_width, wrap_text, HEAD_ROWS, PAD_X};
use crate::theme::AppTheme;
use crate::widgets::TabsState;

#[allow(clippy::too_many_arguments)]
pub fn render(
    heading: &str,
    buttons: &[TabButton],
    panes: &[TabPane],
    tabs: &TabsState,
    theme: &AppTheme,
    rect: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    super::render_heading(heading, theme, rect, buf);

    // Tab bar
    let bar_y = rect.y + HEAD_ROWS;
    let mut x = rect.x + PAD_X;
    for (index, button) in buttons.iter().enumerate() {
        let style = if tabs.is_button_active(index) {
            Style::default()
                .fg(theme.tab_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.tab_inactive)
        };
        let label = format!(" {} ", button.label);
        let width = label.chars().count() as u16;
        if x + width >= rect.right() {
            break;
        }
        buf.set_string(x, bar_y, &label, style);
        hits.push(Rect::new(x, bar_y, width, 1), ClickTarget::TabButton(index));
        x += width;
        if index + 1 < buttons.len() {
            buf.set_string(x, bar_y, "│", Style::default().fg(theme.tab_inactive));
            x += 1;
        }
    }

    // Pane content below a blank row; no pane shows until the first
    // activation
    let width = text_width(rect.width);
    let pane_x = rect.x + PAD_X;
    let mut y = bar_y + 2;

    let active = tabs
        .active_pane()
        .and_then(|key| panes.iter().find(|p| p.key == key));
    match active {
        Some(pane) => {
            let style = Style::default().fg(theme.text_primary);
            for line in &pane.lines {
                for wrapped in wrap_text(line, width) {
                    if y >= rect.bottom() {
                        return;
                    }
                    buf.set_string(pane_x, y, &wrapped, style);
                    y += 1;
                }
            }
        }
        None => {
            let style = Style::default().fg(theme.text_secondary);
            buf.set_string(pane_x, y, "Select a tab to read more.", style);
        }
    }
}
