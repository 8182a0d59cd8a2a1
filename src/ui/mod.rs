//! Page rendering.
//!
//! Sections are rendered into an offscreen buffer in page coordinates
//! (y counted from the top of the page), which is then blitted through
//! the scrolled viewport between the nav bar and the status bar. Mouse
//! targets are collected in page coordinates alongside the drawing and
//! converted to screen coordinates after the blit; the two bars push
//! screen-coordinate targets directly.

mod contact_form;
mod feature_tabs;
mod gallery;
mod hero;
mod nav_bar;
mod status_bar;
mod text_section;

pub use contact_form::{ContactForm, FormAction};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;

use crate::app::{App, ClickTarget, InputMode};
use crate::content::Section;
use crate::page::PAD_X;
use crate::theme::AppTheme;
use crate::widgets::FadePhase;

/// Rows of the fixed nav bar at the top
pub const NAV_ROWS: u16 = 1;
/// Rows of the fixed status bar at the bottom
pub const STATUS_ROWS: u16 = 1;

/// Click targets collected during rendering, in page coordinates
#[derive(Default)]
pub struct HitMap {
    targets: Vec<(Rect, ClickTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect, target: ClickTarget) {
        if rect.width > 0 && rect.height > 0 {
            self.targets.push((rect, target));
        }
    }

    /// Convert page-coordinate targets to screen coordinates, dropping
    /// whatever the viewport clips away
    pub fn into_screen(self, offset: u16, content: Rect) -> Vec<(Rect, ClickTarget)> {
        let band_bottom = offset.saturating_add(content.height);
        self.targets
            .into_iter()
            .filter_map(|(rect, target)| {
                let top = rect.y.max(offset);
                let bottom = rect.bottom().min(band_bottom);
                if bottom <= top {
                    return None;
                }
                let width = rect.width.min(content.width.saturating_sub(rect.x));
                if width == 0 {
                    return None;
                }
                let screen = Rect::new(
                    content.x + rect.x,
                    content.y + (top - offset),
                    width,
                    bottom - top,
                );
                Some((screen, target))
            })
            .collect()
    }
}

/// Render one frame: nav bar, scrolled page content, status bar
pub fn draw(frame: &mut Frame, app: &mut App) {
    let App {
        view,
        typewriter,
        carousel,
        tabs,
        music,
        form,
        theme,
        input_mode,
        click_targets,
        ..
    } = app;

    click_targets.clear();

    let area = frame.area();
    if area.width == 0 || area.height < NAV_ROWS + STATUS_ROWS + 1 {
        return;
    }

    let nav_area = Rect::new(area.x, area.y, area.width, NAV_ROWS);
    let content = Rect::new(
        area.x,
        area.y + NAV_ROWS,
        area.width,
        area.height - NAV_ROWS - STATUS_ROWS,
    );
    let status_area = Rect::new(
        area.x,
        area.y + area.height - STATUS_ROWS,
        area.width,
        STATUS_ROWS,
    );

    let form_active = *input_mode == InputMode::Form;
    form.sync_styles(theme, form_active);

    // Render every visible section into a page-coordinate canvas
    let offset = view.scroll.row();
    let canvas_area = Rect::new(0, 0, content.width, view.total_height().max(1));
    let mut canvas = Buffer::empty(canvas_area);
    canvas.set_style(canvas_area, Style::default().bg(theme.page_background));

    let mut hits = HitMap::new();
    let band_bottom = offset.saturating_add(content.height);

    for (index, section) in view.page.sections.iter().enumerate() {
        let layout = view.layouts()[index];
        let fade = &view.fades()[index];
        if !fade.is_revealed() {
            continue;
        }
        if layout.bottom() <= offset || layout.top >= band_bottom {
            continue;
        }

        let rect = Rect::new(0, layout.top, content.width, layout.height);
        match section {
            Section::Hero { heading, .. } => {
                hero::render(heading, typewriter, theme, rect, &mut canvas);
            }
            Section::Text {
                heading,
                paragraphs,
                ..
            } => {
                text_section::render(heading, paragraphs, theme, rect, &mut canvas);
            }
            Section::Tabs {
                heading,
                buttons,
                panes,
                ..
            } => {
                feature_tabs::render(
                    heading,
                    buttons,
                    panes,
                    tabs,
                    theme,
                    rect,
                    &mut canvas,
                    &mut hits,
                );
            }
            Section::Gallery {
                heading, slides, ..
            } => {
                gallery::render(
                    heading,
                    slides,
                    carousel,
                    theme,
                    rect,
                    &mut canvas,
                    &mut hits,
                );
            }
            Section::Contact { heading, blurb, .. } => {
                contact_form::render(
                    heading,
                    blurb,
                    form,
                    form_active,
                    theme,
                    rect,
                    &mut canvas,
                    &mut hits,
                );
            }
        }

        // Sections mid-fade render dimmed until the ramp completes
        if fade.phase() == FadePhase::FadingIn {
            canvas.set_style(rect, Style::default().add_modifier(Modifier::DIM));
        }
    }

    // Blit the scrolled band of the canvas into the content area
    let buf = frame.buffer_mut();
    for row in 0..content.height {
        let page_y = offset.saturating_add(row);
        if page_y >= canvas_area.height {
            break;
        }
        for col in 0..content.width {
            if let (Some(src), Some(dst)) = (
                canvas.cell((col, page_y)),
                buf.cell_mut((content.x + col, content.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }

    click_targets.extend(hits.into_screen(offset, content));

    nav_bar::render(frame, view, music, theme, nav_area, click_targets);
    status_bar::render(frame, view, *input_mode, theme, status_area);
}

/// Section heading on the second row of the section rect
fn render_heading(heading: &str, theme: &AppTheme, rect: Rect, buf: &mut Buffer) {
    let style = Style::default()
        .fg(theme.heading)
        .add_modifier(Modifier::BOLD);
    buf.set_string(rect.x + PAD_X, rect.y + 1, heading, style);
}
