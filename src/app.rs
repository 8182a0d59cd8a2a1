//! Application state and input handling.
//!
//! `App` owns the page view plus every widget state and routes frontend
//! events to them. Rendering happens elsewhere: the TUI frontend calls
//! `ui::draw` with this struct, and the click targets the renderer left
//! behind are what mouse handling resolves against on the next click.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::content::Page;
use crate::frontend::FrontendEvent;
use crate::page::PageView;
use crate::theme::{AppTheme, ThemeMode, ThemePresets};
use crate::ui::{ContactForm, FormAction, NAV_ROWS, STATUS_ROWS};
use crate::widgets::{CarouselState, MusicToggleState, TabsState, TypewriterState};

#[cfg(feature = "sound")]
use crate::sound::{self, MusicPlayer};

/// Anything the mouse can press on a rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    NavLink(usize),
    ThemeToggle,
    MusicToggle,
    CarouselPrev,
    CarouselNext,
    TabButton(usize),
    FormField(usize),
    FormSubmit,
}

/// Where key presses go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys drive scrolling and the widget shortcuts
    Browse,
    /// Keys go to the contact form
    Form,
}

pub struct App {
    pub view: PageView,
    pub typewriter: TypewriterState,
    pub carousel: CarouselState,
    pub tabs: TabsState,
    pub music: MusicToggleState,
    pub form: ContactForm,
    pub theme_mode: ThemeMode,
    pub theme: AppTheme,
    pub input_mode: InputMode,
    /// Rebuilt by the renderer each frame, in screen coordinates
    pub click_targets: Vec<(Rect, ClickTarget)>,
    #[cfg(feature = "sound")]
    player: Option<MusicPlayer>,
    pub running: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new(config: Config, page: Page) -> Result<Self> {
        let theme_mode = match ThemeMode::from_name(&config.general.theme) {
            Some(mode) => mode,
            None => {
                warn!(
                    "Unknown theme '{}' in config, using dark",
                    config.general.theme
                );
                ThemeMode::Dark
            }
        };
        let theme = ThemePresets::for_mode(theme_mode);

        let interval = Duration::from_millis(config.typing.interval_ms);
        let typewriter = match page.tagline() {
            Some(tagline) => TypewriterState::new(tagline, interval),
            None => {
                warn!("Page has no hero tagline; typing effect disabled");
                TypewriterState::new("", interval)
            }
        };

        let carousel = CarouselState::new(page.slides().len());

        #[cfg(feature = "sound")]
        let (player, music) = Self::init_music(&config);
        #[cfg(not(feature = "sound"))]
        let music = MusicToggleState::new(false, false);

        let view = PageView::new(
            page,
            Duration::from_millis(config.scroll.animation_ms),
            Duration::from_millis(config.fade.ramp_ms),
            config.fade.margin_rows,
        );

        Ok(Self {
            view,
            typewriter,
            carousel,
            tabs: TabsState::new(),
            music,
            form: ContactForm::new(),
            theme_mode,
            theme,
            input_mode: InputMode::Browse,
            click_targets: Vec::new(),
            #[cfg(feature = "sound")]
            player,
            running: true,
            needs_render: true,
        })
    }

    /// Resolve a track and open the audio device; any failure leaves
    /// the toggle disabled and the app running silently
    #[cfg(feature = "sound")]
    fn init_music(config: &Config) -> (Option<MusicPlayer>, MusicToggleState) {
        if !config.music.enabled {
            info!("Music disabled by configuration");
            return (None, MusicToggleState::new(false, false));
        }

        let dir = match sound::ensure_music_directory() {
            Ok(dir) => dir,
            Err(e) => {
                warn!("Music directory unavailable: {:#}", e);
                return (None, MusicToggleState::new(false, false));
            }
        };

        let track = match sound::find_track(&dir, &config.music.track) {
            Some(track) => track,
            None => {
                info!(
                    "No track named '{}' in {:?}; music toggle disabled",
                    config.music.track, dir
                );
                return (None, MusicToggleState::new(false, false));
            }
        };

        match MusicPlayer::new(&track, config.music.volume, config.music.start_playing) {
            Ok(player) => {
                info!("Background music: {:?}", track);
                (
                    Some(player),
                    MusicToggleState::new(true, config.music.start_playing),
                )
            }
            Err(e) => {
                warn!("Music playback unavailable: {:#}", e);
                (None, MusicToggleState::new(false, false))
            }
        }
    }

    /// Route one frontend event
    pub fn handle_event(&mut self, event: FrontendEvent) {
        match event {
            FrontendEvent::Key { code, modifiers } => self.handle_key(code, modifiers),
            FrontendEvent::Mouse { kind, x, y, .. } => self.handle_mouse(kind, x, y),
            FrontendEvent::Resize { width, height } => self.resize(width, height),
            FrontendEvent::Paste { text } => {
                if self.input_mode == InputMode::Form {
                    self.form.insert_paste(&text);
                    self.needs_render = true;
                }
            }
        }
    }

    /// Recompute the page layout for a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        let viewport = height.saturating_sub(NAV_ROWS + STATUS_ROWS);
        self.view.resize(width, viewport);
        self.needs_render = true;
    }

    /// Advance animations; marks the frame dirty while anything moves
    pub fn tick(&mut self, dt: Duration) {
        let mut moving = self.view.tick(dt);
        if self.typewriter.tick(dt) {
            moving = true;
        }
        if moving {
            self.needs_render = true;
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }
        match self.input_mode {
            InputMode::Browse => self.handle_browse_key(code),
            InputMode::Form => self.handle_form_key(code, modifiers),
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        let viewport = self.view.viewport() as i32;
        match code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('j') | KeyCode::Down => self.view.scroll.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.view.scroll.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.view.scroll.scroll_by(viewport),
            KeyCode::PageUp => self.view.scroll.scroll_by(-viewport),
            KeyCode::Home | KeyCode::Char('g') => self.view.scroll.scroll_to(0),
            KeyCode::End | KeyCode::Char('G') => {
                let bottom = self.view.total_height();
                self.view.scroll.scroll_to(bottom);
            }
            KeyCode::Char(c @ '1'..='9') => self.activate_nav((c as u8 - b'1') as usize),
            KeyCode::Char('h') | KeyCode::Left => self.carousel.prev(),
            KeyCode::Char('l') | KeyCode::Right => self.carousel.next(),
            KeyCode::Char(']') => self.cycle_tab(true),
            KeyCode::Char('[') => self.cycle_tab(false),
            KeyCode::Char('c') => self.open_contact_form(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('m') => self.toggle_music(),
            _ => return,
        }
        self.needs_render = true;
    }

    fn handle_form_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match self.form.input(code, modifiers) {
            Some(FormAction::Close) => self.input_mode = InputMode::Browse,
            Some(FormAction::Submitted(outcome)) => {
                info!("Contact form submission: {}", outcome.message());
            }
            None => {}
        }
        self.needs_render = true;
    }

    fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(x, y);
                let target = self
                    .click_targets
                    .iter()
                    .find(|(rect, _)| rect.contains(position))
                    .map(|(_, target)| *target);
                match target {
                    Some(target) => {
                        self.activate_target(target);
                        self.needs_render = true;
                    }
                    None => {
                        // Clicking empty space leaves the form
                        if self.input_mode == InputMode::Form {
                            self.input_mode = InputMode::Browse;
                            self.needs_render = true;
                        }
                    }
                }
            }
            MouseEventKind::ScrollDown => {
                self.view.scroll.scroll_by(3);
                self.needs_render = true;
            }
            MouseEventKind::ScrollUp => {
                self.view.scroll.scroll_by(-3);
                self.needs_render = true;
            }
            _ => {}
        }
    }

    fn activate_target(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::NavLink(index) => self.activate_nav(index),
            ClickTarget::ThemeToggle => self.toggle_theme(),
            ClickTarget::MusicToggle => self.toggle_music(),
            ClickTarget::CarouselPrev => self.carousel.prev(),
            ClickTarget::CarouselNext => self.carousel.next(),
            ClickTarget::TabButton(index) => self.activate_tab(index),
            ClickTarget::FormField(index) => {
                self.form.set_focus(index);
                self.input_mode = InputMode::Form;
            }
            ClickTarget::FormSubmit => {
                let outcome = self.form.submit();
                self.input_mode = InputMode::Form;
                info!("Contact form submission: {}", outcome.message());
            }
        }
    }

    /// Smooth-scroll to the nav link's section; a dangling target is a
    /// logged no-op
    fn activate_nav(&mut self, index: usize) {
        let (label, target) = match self.view.page.nav.get(index) {
            Some(link) => (link.label.clone(), link.target.clone()),
            None => return,
        };
        if self.view.scroll_to_section(&target) {
            debug!("Nav: scrolling to '{}'", target);
        } else {
            warn!("Nav link '{}' points to missing section '{}'", label, target);
        }
    }

    /// Activate a tab button; an unmatched pane target highlights the
    /// button but shows no pane
    fn activate_tab(&mut self, index: usize) {
        let (buttons, panes) = self.view.page.tabs();
        let (label, target) = match buttons.get(index) {
            Some(button) => (button.label.clone(), button.target.clone()),
            None => return,
        };
        let pane_keys: Vec<String> = panes.iter().map(|p| p.key.clone()).collect();
        if !self.tabs.activate(index, &target, &pane_keys) {
            warn!("Tab '{}' targets missing pane '{}'", label, target);
        }
    }

    fn cycle_tab(&mut self, forward: bool) {
        let count = self.view.page.tabs().0.len();
        let next = if forward {
            self.tabs.next_index(count)
        } else {
            self.tabs.prev_index(count)
        };
        if let Some(index) = next {
            self.activate_tab(index);
        }
    }

    /// Scroll to the contact section and give the form key focus
    fn open_contact_form(&mut self) {
        let contact = self.view.page.contact_id().map(|id| id.to_string());
        match contact {
            Some(id) => {
                self.view.scroll_to_section(&id);
                self.input_mode = InputMode::Form;
            }
            None => warn!("Page has no contact section"),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = ThemePresets::for_mode(self.theme_mode);
        debug!("Theme switched to {}", self.theme_mode.name());
    }

    /// Flip the music toggle and pause or resume the player to match
    pub fn toggle_music(&mut self) {
        match self.music.toggle() {
            Some(playing) => {
                #[cfg(feature = "sound")]
                if let Some(player) = &self.player {
                    if playing {
                        player.resume();
                    } else {
                        player.pause();
                    }
                }
                debug!("Music {}", if playing { "resumed" } else { "paused" });
            }
            None => debug!("Music toggle pressed but playback is unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut config = Config::default();
        config.music.enabled = false;
        let page = Page::load(None).unwrap();
        let mut app = App::new(config, page).unwrap();
        app.resize(80, 30);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(FrontendEvent::key(code, KeyModifiers::NONE));
    }

    /// Run the animations long past convergence
    fn settle(app: &mut App) {
        for _ in 0..200 {
            app.tick(Duration::from_millis(16));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = test_app();
        app.handle_event(FrontendEvent::key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_nav_key_scrolls_to_section() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('4'));
        settle(&mut app);

        let index = app.view.page.section_index("gallery").unwrap();
        let expected = app.view.layouts()[index]
            .top
            .min(app.view.total_height() - app.view.viewport());
        assert_eq!(app.view.scroll.row(), expected);
    }

    #[test]
    fn test_nav_key_out_of_range_is_noop() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('9'));
        settle(&mut app);
        assert_eq!(app.view.scroll.row(), 0);
    }

    #[test]
    fn test_tab_cycle_activates_first_button() {
        let mut app = test_app();
        assert!(!app.tabs.is_button_active(0));

        press(&mut app, KeyCode::Char(']'));
        assert!(app.tabs.is_button_active(0));
        assert!(app.tabs.active_pane().is_some());

        press(&mut app, KeyCode::Char(']'));
        assert!(app.tabs.is_button_active(1));
        assert!(!app.tabs.is_button_active(0));

        press(&mut app, KeyCode::Char('['));
        assert!(app.tabs.is_button_active(0));
    }

    #[test]
    fn test_carousel_keys_wrap() {
        let mut app = test_app();
        let count = app.carousel.count();
        assert!(count >= 2);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.carousel.current(), count - 1);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.carousel.current(), 0);
    }

    #[test]
    fn test_theme_toggle_key() {
        let mut app = test_app();
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(
            app.theme.page_background,
            ThemePresets::light().page_background
        );
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_music_toggle_without_audio_is_noop() {
        let mut app = test_app();
        assert!(!app.music.is_available());
        press(&mut app, KeyCode::Char('m'));
        assert!(!app.music.is_playing());
    }

    #[test]
    fn test_contact_shortcut_enters_and_esc_leaves_form_mode() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.input_mode, InputMode::Form);
        settle(&mut app);
        assert!(app.view.scroll.row() > 0);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Browse);
    }

    #[test]
    fn test_browse_keys_do_not_reach_the_form() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running, "q inside the form must not quit");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_click_resolves_against_rendered_targets() {
        let mut app = test_app();
        // Simulate what a rendered frame leaves behind
        app.click_targets
            .push((Rect::new(10, 5, 6, 1), ClickTarget::CarouselNext));

        app.handle_event(FrontendEvent::mouse(
            MouseEventKind::Down(MouseButton::Left),
            12,
            5,
            KeyModifiers::NONE,
        ));
        assert_eq!(app.carousel.current(), 1);

        // A miss changes nothing
        app.handle_event(FrontendEvent::mouse(
            MouseEventKind::Down(MouseButton::Left),
            0,
            0,
            KeyModifiers::NONE,
        ));
        assert_eq!(app.carousel.current(), 1);
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut app = test_app();
        app.handle_event(FrontendEvent::mouse(
            MouseEventKind::ScrollDown,
            0,
            0,
            KeyModifiers::NONE,
        ));
        settle(&mut app);
        assert_eq!(app.view.scroll.row(), 3);
        app.handle_event(FrontendEvent::mouse(
            MouseEventKind::ScrollUp,
            0,
            0,
            KeyModifiers::NONE,
        ));
        settle(&mut app);
        assert_eq!(app.view.scroll.row(), 0);
    }

    #[test]
    fn test_resize_sets_viewport_between_the_bars() {
        let mut app = test_app();
        app.needs_render = false;
        app.handle_event(FrontendEvent::resize(100, 40));
        assert_eq!(app.view.viewport(), 38);
        assert!(app.needs_render);
    }

    #[test]
    fn test_typewriter_advances_with_ticks() {
        let mut app = test_app();
        assert_eq!(app.typewriter.visible_text(), "");
        app.tick(Duration::from_millis(500));
        assert!(!app.typewriter.visible_text().is_empty());
        assert!(app.needs_render);
    }
}
