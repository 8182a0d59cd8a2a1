//! Contact form validation (rendering-agnostic)
//!
//! Pure submission checks; the text fields themselves live in the contact
//! form renderer. Checks run in order and the first failure wins, so an
//! empty email reports the missing-field message, not the invalid-email
//! one.

use regex::Regex;
use std::sync::OnceLock;

/// Feedback shown when any field is empty after trimming
pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields.";
/// Feedback shown when the email fails the shape check
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email.";
/// Feedback shown on acceptance
pub const MSG_ACCEPTED: &str = "Thanks for your message! We will get back to you soon.";

/// Result of evaluating a contact form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All checks passed; the caller clears the fields. Nothing is sent
    /// anywhere; acceptance is purely client-side.
    Accepted,
    /// At least one field was empty after trimming
    MissingFields,
    /// All fields present but the email failed the shape check
    InvalidEmail,
}

impl SubmitOutcome {
    /// User-facing feedback line for this outcome
    pub fn message(self) -> &'static str {
        match self {
            SubmitOutcome::Accepted => MSG_ACCEPTED,
            SubmitOutcome::MissingFields => MSG_MISSING_FIELDS,
            SubmitOutcome::InvalidEmail => MSG_INVALID_EMAIL,
        }
    }

    pub fn is_accepted(self) -> bool {
        self == SubmitOutcome::Accepted
    }
}

/// Evaluate a submission: trim all three fields, reject on any empty
/// field, then on a malformed email, otherwise accept
pub fn evaluate_submission(name: &str, email: &str, message: &str) -> SubmitOutcome {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return SubmitOutcome::MissingFields;
    }
    if !is_valid_email(email) {
        return SubmitOutcome::InvalidEmail;
    }
    SubmitOutcome::Accepted
}

/// Email shape check: non-space chars, `@`, non-space chars, `.`,
/// non-space chars. Deliberately loose; it guards against typos, not RFC
/// violations.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("pattern is valid"));
    re.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("user.name@sub.domain.org"));

        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b .com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_missing_fields_rejected_first() {
        assert_eq!(
            evaluate_submission("", "a@b.com", "hi"),
            SubmitOutcome::MissingFields
        );
        assert_eq!(
            evaluate_submission("A", "", "hi"),
            SubmitOutcome::MissingFields
        );
        assert_eq!(
            evaluate_submission("A", "a@b.com", ""),
            SubmitOutcome::MissingFields
        );

        // Whitespace-only counts as empty
        assert_eq!(
            evaluate_submission("   ", "not-an-email", "hi"),
            SubmitOutcome::MissingFields
        );
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert_eq!(
            evaluate_submission("A", "foo@bar", "hi"),
            SubmitOutcome::InvalidEmail
        );
    }

    #[test]
    fn test_valid_submission_accepted() {
        let outcome = evaluate_submission("A", "a@b.com", "hi");
        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert!(outcome.is_accepted());
    }

    #[test]
    fn test_fields_trimmed_before_checks() {
        assert_eq!(
            evaluate_submission("  A  ", "  a@b.com  ", "  hi  "),
            SubmitOutcome::Accepted
        );
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            SubmitOutcome::MissingFields.message(),
            "Please fill in all fields."
        );
        assert_eq!(
            SubmitOutcome::InvalidEmail.message(),
            "Please enter a valid email."
        );
        assert_eq!(
            SubmitOutcome::Accepted.message(),
            "Thanks for your message! We will get back to you soon."
        );
    }
}
