//! Contact form: three text fields, a submit button, and a feedback line.
//!
//! The fields are tui-textarea widgets owned here; the submission checks
//! live in `widgets::form`. Submission is decorative: an accepted
//! submission clears the fields and shows the thank-you line, nothing is
//! sent anywhere.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use tui_textarea::TextArea;

use super::HitMap;
use crate::app::ClickTarget;
use crate::page::{text_width, wrap_text, HEAD_ROWS, PAD_X};
use crate::theme::AppTheme;
use crate::widgets::form::evaluate_submission;
use crate::widgets::SubmitOutcome;

/// Label column width; fields start one column after
const LABEL_W: u16 = 9;
const SUBMIT_LABEL: &str = "[ Send Message ]";

/// What a key press did, when it did anything beyond editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Leave form mode
    Close,
    /// The form was submitted with this outcome
    Submitted(SubmitOutcome),
}

/// Form fields plus focus and the last submission's feedback
pub struct ContactForm {
    name: TextArea<'static>,
    email: TextArea<'static>,
    message: TextArea<'static>,
    /// 0..=2 are the fields, 3 is the submit button
    focused_field: usize,
    feedback: Option<SubmitOutcome>,
}

fn text_field(placeholder: &str) -> TextArea<'static> {
    let mut field = TextArea::default();
    field.set_placeholder_text(placeholder);
    field
}

fn fresh_fields() -> (TextArea<'static>, TextArea<'static>, TextArea<'static>) {
    (
        text_field("Your name"),
        text_field("you@example.com"),
        text_field("What's on your mind?"),
    )
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        let (name, email, message) = fresh_fields();
        Self {
            name,
            email,
            message,
            focused_field: 0,
            feedback: None,
        }
    }

    pub fn focused_field(&self) -> usize {
        self.focused_field
    }

    pub fn feedback(&self) -> Option<SubmitOutcome> {
        self.feedback
    }

    /// Focus a field (0..=2) or the submit button (3) directly, e.g.
    /// from a mouse click
    pub fn set_focus(&mut self, index: usize) {
        self.focused_field = index.min(3);
    }

    fn focused_textarea_mut(&mut self) -> Option<&mut TextArea<'static>> {
        match self.focused_field {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.message),
            _ => None,
        }
    }

    /// Handle a key press while the form has input focus
    pub fn input(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<FormAction> {
        match code {
            KeyCode::Esc => return Some(FormAction::Close),
            KeyCode::Tab => {
                self.focused_field = (self.focused_field + 1) % 4;
                return None;
            }
            KeyCode::BackTab => {
                self.focused_field = (self.focused_field + 3) % 4;
                return None;
            }
            KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(FormAction::Submitted(self.submit()));
            }
            KeyCode::Char('a') if modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.focused_textarea_mut() {
                    field.select_all();
                }
                return None;
            }
            KeyCode::Enter => match self.focused_field {
                // Enter advances through the single-line fields
                0 | 1 => {
                    self.focused_field += 1;
                    return None;
                }
                // In the message it falls through and inserts a newline
                2 => {}
                _ => return Some(FormAction::Submitted(self.submit())),
            },
            _ => {}
        }

        if let Some(field) = self.focused_textarea_mut() {
            field.input(KeyEvent::new(code, modifiers));
        }
        None
    }

    /// Insert pasted text into the focused field; the single-line
    /// fields flatten newlines
    pub fn insert_paste(&mut self, text: &str) {
        match self.focused_field {
            0 | 1 => {
                let flat = text.replace(['\r', '\n'], " ");
                if let Some(field) = self.focused_textarea_mut() {
                    field.insert_str(&flat);
                }
            }
            2 => {
                self.message.insert_str(text);
            }
            _ => {}
        }
    }

    /// Run the submission checks and set the feedback line; an accepted
    /// submission clears the fields
    pub fn submit(&mut self) -> SubmitOutcome {
        let name = self.name.lines()[0].to_string();
        let email = self.email.lines()[0].to_string();
        let message = self.message.lines().join("\n");

        let outcome = evaluate_submission(&name, &email, &message);
        if outcome.is_accepted() {
            let (name, email, message) = fresh_fields();
            self.name = name;
            self.email = email;
            self.message = message;
            self.focused_field = 0;
        }
        self.feedback = Some(outcome);
        outcome
    }

    /// Re-apply theme and focus styling to the textareas before a frame
    ///
    /// tui-textarea keeps style as state, so this runs every frame
    /// instead of chasing every theme toggle and focus change.
    pub fn sync_styles(&mut self, theme: &AppTheme, form_active: bool) {
        let field_style = Style::default()
            .fg(theme.form_field_text)
            .bg(theme.form_field_background);
        let cursor_on = Style::default()
            .fg(theme.page_background)
            .bg(theme.form_cursor);
        let placeholder_style = Style::default()
            .fg(theme.toggle_disabled)
            .bg(theme.form_field_background);

        let focused = self.focused_field;
        let fields = [&mut self.name, &mut self.email, &mut self.message];
        for (index, field) in fields.into_iter().enumerate() {
            field.set_style(field_style);
            field.set_cursor_line_style(Style::default());
            field.set_placeholder_style(placeholder_style);
            if form_active && focused == index {
                field.set_cursor_style(cursor_on);
            } else {
                // Hide the cursor by drawing it like ordinary text
                field.set_cursor_style(field_style);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    heading: &str,
    blurb: &str,
    form: &ContactForm,
    form_active: bool,
    theme: &AppTheme,
    rect: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    super::render_heading(heading, theme, rect, buf);

    let width = text_width(rect.width);
    let x = rect.x + PAD_X;
    let field_x = x + LABEL_W + 1;
    let field_w = width.saturating_sub(LABEL_W + 1).max(8);
    let mut y = rect.y + HEAD_ROWS;

    let blurb_style = Style::default().fg(theme.text_primary);
    for line in wrap_text(blurb, width) {
        if y >= rect.bottom() {
            return;
        }
        buf.set_string(x, y, &line, blurb_style);
        y += 1;
    }
    y += 1;

    let label_style = |index: usize| {
        if form_active && form.focused_field() == index {
            Style::default()
                .fg(theme.form_label_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.form_label)
        }
    };

    // Name
    buf.set_string(x, y, "Name:", label_style(0));
    let name_rect = Rect::new(field_x, y, field_w, 1);
    Widget::render(&form.name, name_rect, buf);
    hits.push(name_rect, ClickTarget::FormField(0));
    y += 2;

    // Email
    buf.set_string(x, y, "Email:", label_style(1));
    let email_rect = Rect::new(field_x, y, field_w, 1);
    Widget::render(&form.email, email_rect, buf);
    hits.push(email_rect, ClickTarget::FormField(1));
    y += 2;

    // Message
    buf.set_string(x, y, "Message:", label_style(2));
    let message_rect = Rect::new(field_x, y, field_w, 3);
    Widget::render(&form.message, message_rect, buf);
    hits.push(message_rect, ClickTarget::FormField(2));
    y += 4;

    // Submit button
    let submit_style = if form_active && form.focused_field() == 3 {
        Style::default()
            .fg(theme.form_button_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.form_button)
    };
    buf.set_string(field_x, y, SUBMIT_LABEL, submit_style);
    hits.push(
        Rect::new(field_x, y, SUBMIT_LABEL.len() as u16, 1),
        ClickTarget::FormSubmit,
    );
    y += 2;

    // Feedback line from the last submission
    if let Some(outcome) = form.feedback() {
        let style = if outcome.is_accepted() {
            Style::default().fg(theme.form_success)
        } else {
            Style::default().fg(theme.form_error)
        };
        buf.set_string(x, y, outcome.message(), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut ContactForm, text: &str) {
        for ch in text.chars() {
            form.input(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_tab_cycles_through_fields_and_button() {
        let mut form = ContactForm::new();
        assert_eq!(form.focused_field(), 0);

        for expected in [1, 2, 3, 0] {
            form.input(KeyCode::Tab, KeyModifiers::NONE);
            assert_eq!(form.focused_field(), expected);
        }

        form.input(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(form.focused_field(), 3);
    }

    #[test]
    fn test_enter_advances_single_line_fields() {
        let mut form = ContactForm::new();
        type_str(&mut form, "Bababoi");
        assert!(form.input(KeyCode::Enter, KeyModifiers::NONE).is_none());
        assert_eq!(form.focused_field(), 1);
    }

    #[test]
    fn test_enter_in_message_inserts_newline() {
        let mut form = ContactForm::new();
        form.set_focus(2);
        type_str(&mut form, "line one");
        form.input(KeyCode::Enter, KeyModifiers::NONE);
        type_str(&mut form, "line two");
        assert_eq!(form.message.lines().len(), 2);
    }

    #[test]
    fn test_empty_submission_reports_missing_fields() {
        let mut form = ContactForm::new();
        form.set_focus(3);
        let action = form.input(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            action,
            Some(FormAction::Submitted(SubmitOutcome::MissingFields))
        );
        assert_eq!(form.feedback(), Some(SubmitOutcome::MissingFields));
    }

    #[test]
    fn test_accepted_submission_clears_fields() {
        let mut form = ContactForm::new();
        type_str(&mut form, "Bababoi");
        form.input(KeyCode::Enter, KeyModifiers::NONE);
        type_str(&mut form, "bababoi@example.com");
        form.input(KeyCode::Enter, KeyModifiers::NONE);
        type_str(&mut form, "Love the launcher ding.");

        let action = form.input(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(
            action,
            Some(FormAction::Submitted(SubmitOutcome::Accepted))
        );
        assert_eq!(form.name.lines()[0], "");
        assert_eq!(form.email.lines()[0], "");
        assert_eq!(form.message.lines().join(""), "");
        assert_eq!(form.focused_field(), 0);
    }

    #[test]
    fn test_rejected_submission_keeps_fields() {
        let mut form = ContactForm::new();
        type_str(&mut form, "Bababoi");
        form.input(KeyCode::Enter, KeyModifiers::NONE);
        type_str(&mut form, "not-an-email");
        form.input(KeyCode::Enter, KeyModifiers::NONE);
        type_str(&mut form, "hello");

        let outcome = form.submit();
        assert_eq!(outcome, SubmitOutcome::InvalidEmail);
        assert_eq!(form.name.lines()[0], "Bababoi");
        assert_eq!(form.email.lines()[0], "not-an-email");
    }

    #[test]
    fn test_escape_closes_the_form() {
        let mut form = ContactForm::new();
        assert_eq!(
            form.input(KeyCode::Esc, KeyModifiers::NONE),
            Some(FormAction::Close)
        );
    }

    #[test]
    fn test_paste_flattens_newlines_in_single_line_fields() {
        let mut form = ContactForm::new();
        form.insert_paste("two\nlines");
        assert_eq!(form.name.lines().len(), 1);
        assert_eq!(form.name.lines()[0], "two lines");

        form.set_focus(2);
        form.insert_paste("two\nlines");
        assert_eq!(form.message.lines().len(), 2);
    }
}
