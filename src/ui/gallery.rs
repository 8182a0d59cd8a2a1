//! Screenshot gallery: one framed slide with prev/next controls.
//!
//! The frame is sized for the tallest slide so switching slides never
//! reflows the page.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use super::HitMap;
use crate::app::ClickTarget;
use crate::content::Slide;
use crate::page::{gallery_art_rows, text_width, HEAD_ROWS, PAD_X};
use crate::theme::AppTheme;
use crate::widgets::CarouselState;

pub fn render(
    heading: &str,
    slides: &[Slide],
    carousel: &CarouselState,
    theme: &AppTheme,
    rect: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    super::render_heading(heading, theme, rect, buf);

    let box_rect = Rect::new(
        rect.x + PAD_X,
        rect.y + HEAD_ROWS,
        text_width(rect.width),
        gallery_art_rows(slides) + 4,
    );

    let slide = slides.get(carousel.current());
    let title = slide.map(|s| s.title.as_str()).unwrap_or("");

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.gallery_border))
        .title(title)
        .title_style(
            Style::default()
                .fg(theme.gallery_title)
                .add_modifier(Modifier::BOLD),
        )
        .render(box_rect, buf);

    let inner_w = box_rect.width.saturating_sub(2);
    let center = |text_w: u16| box_rect.x + 1 + inner_w.saturating_sub(text_w) / 2;

    match slide {
        Some(slide) => {
            let art_style = Style::default().fg(theme.text_primary);
            let mut y = box_rect.y + 1;
            for line in &slide.art {
                let w = line.chars().count() as u16;
                buf.set_string(center(w.min(inner_w)), y, line, art_style);
                y += 1;
            }

            let caption_style = Style::default().fg(theme.gallery_caption);
            let caption_y = box_rect.bottom() - 2;
            let w = slide.caption.chars().count() as u16;
            buf.set_string(center(w.min(inner_w)), caption_y, &slide.caption, caption_style);
        }
        None => {
            let style = Style::default().fg(theme.text_secondary);
            buf.set_string(center(18), box_rect.y + 1, "No screenshots yet", style);
        }
    }

    // Controls row below the frame
    let controls_y = box_rect.bottom() + 1;
    let counter = format!("{}/{}", carousel.current() + 1, carousel.count().max(1));
    let prev = "‹ Prev";
    let next = "Next ›";
    let total = (prev.chars().count() + 3 + counter.chars().count() + 3 + next.chars().count()) as u16;
    let mut x = box_rect.x + inner_w.saturating_sub(total) / 2;

    let control_style = if carousel.is_disabled() {
        Style::default().fg(theme.toggle_disabled)
    } else {
        Style::default()
            .fg(theme.gallery_control)
            .add_modifier(Modifier::BOLD)
    };
    let counter_style = Style::default().fg(theme.text_secondary);

    buf.set_string(x, controls_y, prev, control_style);
    if !carousel.is_disabled() {
        hits.push(
            Rect::new(x, controls_y, prev.chars().count() as u16, 1),
            ClickTarget::CarouselPrev,
        );
    }
    x += prev.chars().count() as u16 + 3;

    buf.set_string(x, controls_y, &counter, counter_style);
    x += counter.chars().count() as u16 + 3;

    buf.set_string(x, controls_y, next, control_style);
    if !carousel.is_disabled() {
        hits.push(
            Rect::new(x, controls_y, next.chars().count() as u16, 1),
            ClickTarget::CarouselNext,
        );
    }
}
