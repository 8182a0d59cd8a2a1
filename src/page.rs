//! Page layout engine.
//!
//! Lays the configured sections out as one tall vertical strip measured
//! in terminal rows ("page coordinates"), and owns the scroll position
//! plus the per-section fade states that depend on it. Rendering reads
//! the computed `SectionLayout`s; input handlers call `scroll_to_section`
//! and friends.

use std::time::Duration;

use crate::content::{Page, Section};
use crate::widgets::{FadeState, ScrollState};

/// Horizontal padding inside a section, in columns
pub const PAD_X: u16 = 2;
/// Rows above the body: blank, heading, blank
pub const HEAD_ROWS: u16 = 3;
/// Blank rows below the body
const TAIL_ROWS: u16 = 2;
/// Rows taken by the contact form below the blurb: three labelled
/// fields (message gets three rows), a submit button and a status line,
/// with blank rows between
pub const CONTACT_FORM_ROWS: u16 = 11;

/// Where a section sits in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    /// First row of the section
    pub top: u16,
    /// Total rows including heading and padding
    pub height: u16,
}

impl SectionLayout {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// The page plus everything whose state depends on scroll position
pub struct PageView {
    pub page: Page,
    pub scroll: ScrollState,
    layouts: Vec<SectionLayout>,
    fades: Vec<FadeState>,
    total_height: u16,
    viewport: u16,
    margin_rows: u16,
}

impl PageView {
    pub fn new(
        page: Page,
        scroll_animation: Duration,
        fade_ramp: Duration,
        margin_rows: u16,
    ) -> Self {
        let fades = page
            .sections
            .iter()
            .map(|section| {
                if section.base().fade {
                    FadeState::new(fade_ramp)
                } else {
                    FadeState::always_visible()
                }
            })
            .collect();

        Self {
            page,
            scroll: ScrollState::new(scroll_animation),
            layouts: Vec::new(),
            fades,
            total_height: 0,
            viewport: 0,
            margin_rows,
        }
    }

    /// Recompute the layout for a new content area size
    ///
    /// Must be called before the first render and on every terminal
    /// resize. Re-applies the reveal rule afterwards since the boundary
    /// moved with the viewport.
    pub fn resize(&mut self, width: u16, viewport: u16) {
        self.viewport = viewport;

        self.layouts.clear();
        let mut top: u16 = 0;
        for section in &self.page.sections {
            let height = section_height(section, width);
            self.layouts.push(SectionLayout { top, height });
            top = top.saturating_add(height);
        }
        self.total_height = top;

        self.scroll.set_bounds(self.total_height, viewport);
        self.apply_reveal_rule();
    }

    /// Reveal every section whose top edge has crossed the boundary
    /// `margin_rows` above the viewport bottom
    fn apply_reveal_rule(&mut self) {
        let offset = self.scroll.row();
        let viewport = self.viewport;
        let margin = self.margin_rows;

        for (layout, fade) in self.layouts.iter().zip(self.fades.iter_mut()) {
            if FadeState::should_reveal(layout.top, offset, viewport, margin) {
                fade.reveal();
            }
        }
    }

    /// Advance scroll and fade animations; returns true while anything
    /// is still moving and needs another frame
    pub fn tick(&mut self, dt: Duration) -> bool {
        let scrolling = self.scroll.tick(dt);
        if scrolling {
            self.apply_reveal_rule();
        }

        let mut fading = false;
        for fade in &mut self.fades {
            if fade.tick(dt) {
                fading = true;
            }
        }

        scrolling || fading
    }

    /// Smooth-scroll so the named section's top lands at the top of the
    /// viewport. Returns false when no section carries that id.
    pub fn scroll_to_section(&mut self, id: &str) -> bool {
        match self.page.section_index(id) {
            Some(index) => {
                let top = self.layouts.get(index).map(|l| l.top).unwrap_or(0);
                self.scroll.scroll_to(top);
                true
            }
            None => false,
        }
    }

    pub fn layouts(&self) -> &[SectionLayout] {
        &self.layouts
    }

    pub fn fades(&self) -> &[FadeState] {
        &self.fades
    }

    pub fn total_height(&self) -> u16 {
        self.total_height
    }

    pub fn viewport(&self) -> u16 {
        self.viewport
    }
}

/// Total rows a section occupies at the given page width
pub fn section_height(section: &Section, width: u16) -> u16 {
    HEAD_ROWS + body_rows(section, width) + TAIL_ROWS
}

/// Rows of the section body between the heading block and the tail gap
fn body_rows(section: &Section, width: u16) -> u16 {
    let text_width = text_width(width);
    match section {
        // Typed tagline on a single line
        Section::Hero { .. } => 1,
        Section::Text { paragraphs, .. } => {
            let mut rows = 0u16;
            for (i, paragraph) in paragraphs.iter().enumerate() {
                if i > 0 {
                    rows = rows.saturating_add(1);
                }
                rows = rows.saturating_add(wrap_text(paragraph, text_width).len() as u16);
            }
            rows.max(1)
        }
        // Tab bar, blank row, then the tallest pane
        Section::Tabs { panes, .. } => 2 + pane_rows(panes, text_width),
        Section::Gallery { slides, .. } => gallery_art_rows(slides) + 6,
        Section::Contact { blurb, .. } => {
            let blurb_rows = wrap_text(blurb, text_width).len() as u16;
            blurb_rows + 1 + CONTACT_FORM_ROWS
        }
    }
}

/// Usable text width inside a section after horizontal padding
pub fn text_width(width: u16) -> u16 {
    width.saturating_sub(PAD_X * 2).max(10)
}

/// Rows of the tallest tab pane so switching tabs never reflows the page
pub fn pane_rows(panes: &[crate::content::TabPane], text_width: u16) -> u16 {
    panes
        .iter()
        .map(|pane| {
            pane.lines
                .iter()
                .map(|line| wrap_text(line, text_width).len() as u16)
                .sum::<u16>()
        })
        .max()
        .unwrap_or(1)
        .max(1)
}

/// Rows of the tallest slide's ASCII art so the gallery frame is stable
pub fn gallery_art_rows(slides: &[crate::content::Slide]) -> u16 {
    slides
        .iter()
        .map(|slide| slide.art.len() as u16)
        .max()
        .unwrap_or(1)
        .max(1)
}

/// Greedy word wrap; words longer than the width are hard-broken
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > width {
            // Flush whatever is pending, then hard-break the long word
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                lines.push(chunk.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::FadePhase;
    use pretty_assertions::assert_eq;

    fn test_page() -> Page {
        Page::from_toml(
            r####"
            title = "Test"

            [[nav]]
            label = "Home"
            target = "home"

            [[sections]]
            kind = "hero"
            id = "home"
            heading = "Test"
            tagline = "Hello there."

            [[sections]]
            kind = "text"
            id = "about"
            heading = "About"
            paragraphs = ["First paragraph with several words in it.", "Second."]

            [[sections]]
            kind = "gallery"
            id = "gallery"
            heading = "Gallery"

            [[sections.slides]]
            title = "One"
            art = ["###", "###"]
            caption = "First slide"
            "####,
        )
        .unwrap()
    }

    fn test_view() -> PageView {
        PageView::new(
            test_page(),
            Duration::from_millis(400),
            Duration::from_millis(300),
            2,
        )
    }

    #[test]
    fn test_wrap_text_basic() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two".to_string(), "three".to_string(), "four".to_string()]
        );
        assert_eq!(wrap_text("short", 40), vec!["short".to_string()]);
        assert_eq!(wrap_text("", 40), vec![String::new()]);
    }

    #[test]
    fn test_wrap_text_hard_breaks_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(
            lines,
            vec!["abcd".to_string(), "efgh".to_string(), "ij".to_string()]
        );
        // No produced line ever exceeds the width
        for line in wrap_text("mix of normal and aaaaaaaaaaaaaaaa words", 6) {
            assert!(line.chars().count() <= 6, "line too wide: {:?}", line);
        }
    }

    #[test]
    fn test_layouts_are_contiguous() {
        let mut view = test_view();
        view.resize(80, 24);

        let layouts = view.layouts();
        assert_eq!(layouts.len(), 3);
        assert_eq!(layouts[0].top, 0);
        for pair in layouts.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(layouts.last().unwrap().bottom(), view.total_height());
    }

    #[test]
    fn test_narrow_width_grows_text_sections() {
        let page = test_page();
        let wide = section_height(&page.sections[1], 120);
        let narrow = section_height(&page.sections[1], 20);
        assert!(narrow > wide);
    }

    #[test]
    fn test_scroll_to_section() {
        let mut view = test_view();
        view.resize(80, 10);

        assert!(view.scroll_to_section("gallery"));
        for _ in 0..200 {
            view.tick(Duration::from_millis(16));
        }
        let gallery_top = view.layouts()[2].top;
        let expected = gallery_top.min(view.total_height() - 10);
        assert_eq!(view.scroll.row(), expected);

        assert!(!view.scroll_to_section("missing"));
    }

    #[test]
    fn test_reveal_follows_scroll() {
        let mut view = test_view();
        // Small viewport so the gallery starts out below the boundary
        view.resize(30, 6);

        assert_eq!(view.fades()[0].phase(), FadePhase::FadingIn);
        assert_eq!(view.fades()[2].phase(), FadePhase::Hidden);

        view.scroll_to_section("gallery");
        // Let the animation run to completion
        for _ in 0..100 {
            view.tick(Duration::from_millis(20));
        }
        assert_ne!(view.fades()[2].phase(), FadePhase::Hidden);
    }

    #[test]
    fn test_tick_settles() {
        let mut view = test_view();
        view.resize(30, 6);
        view.scroll_to_section("gallery");

        let mut still_moving = true;
        for _ in 0..500 {
            still_moving = view.tick(Duration::from_millis(20));
            if !still_moving {
                break;
            }
        }
        assert!(!still_moving, "animations never settled");
    }
}
