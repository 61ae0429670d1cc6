//! Contact form validation and the success banner timer.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("email pattern is valid")
});

/// Default delay before the success message is hidden again.
pub const DEFAULT_SUCCESS_TIMEOUT_MS: u32 = 5000;

/// Raw values read from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission, trimming every field.
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: trim_field(name).to_string(),
            email: trim_field(email).to_string(),
            message: trim_field(message).to_string(),
        }
    }

    /// Validate every field independently.
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            name: self.name.is_empty(),
            email: !is_valid_email(&self.email),
            message: self.message.is_empty(),
        }
    }
}

/// Strip surrounding whitespace, including the byte-order mark U+FEFF that
/// `str::trim` keeps.
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Check that `email` is non-empty and looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_RE.is_match(email)
}

/// Per-field error visibility. `true` means the field's error is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
    pub message: bool,
}

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        !(self.name || self.email || self.message)
    }

    /// Error element ids paired with their visibility.
    pub fn by_element(&self) -> [(&'static str, bool); 3] {
        [
            ("name-error", self.name),
            ("email-error", self.email),
            ("message-error", self.message),
        ]
    }
}

/// What the form should do after a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed; nothing is reset.
    Rejected(FieldErrors),
    /// All fields passed. Show the banner, reset the form, and schedule a
    /// hide for this generation.
    Accepted { hide_generation: u64 },
}

/// Tracks the success banner across submissions.
///
/// Each accepted submission starts a new generation. A hide timer only takes
/// effect if no later submission has been accepted since it was scheduled.
#[derive(Debug, Default)]
pub struct ContactForm {
    generation: u64,
    success_visible: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a submit.
    pub fn submit(&mut self, submission: &ContactSubmission) -> SubmitOutcome {
        let errors = submission.validate();
        if !errors.is_valid() {
            log::debug!("Contact form rejected: {:?}", errors);
            return SubmitOutcome::Rejected(errors);
        }
        self.generation += 1;
        self.success_visible = true;
        SubmitOutcome::Accepted {
            hide_generation: self.generation,
        }
    }

    /// Called when a hide timer fires. Returns whether the banner should be
    /// hidden now.
    pub fn hide_success(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.success_visible {
            return false;
        }
        self.success_visible = false;
        true
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("foo bar@baz.com"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn test_errors_are_independent() {
        let mut form = ContactForm::new();
        let outcome = form.submit(&ContactSubmission::new("", "foo@bar", "hello"));

        let SubmitOutcome::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert!(errors.name);
        assert!(errors.email);
        assert!(!errors.message);
        assert!(!form.success_visible());
    }

    #[test]
    fn test_valid_submission() {
        let mut form = ContactForm::new();
        let outcome = form.submit(&ContactSubmission::new("A", "a@b.co", "hi"));

        assert_eq!(outcome, SubmitOutcome::Accepted { hide_generation: 1 });
        assert!(form.success_visible());
        assert!(form.hide_success(1));
        assert!(!form.success_visible());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let submission = ContactSubmission::new("   ", " a@b.co ", "\n");
        assert_eq!(submission.email, "a@b.co");
        let errors = submission.validate();
        assert!(errors.name && !errors.email && errors.message);
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        let submission = ContactSubmission::new("\u{FEFF}", "a@b.co", "hi");
        assert!(submission.validate().name);

        let submission =
            ContactSubmission::new("\u{FEFF} Ada \u{FEFF}", " a@b.co\u{FEFF}", "hi");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "a@b.co");
        assert!(submission.validate().is_valid());

        assert!(!is_valid_email("a\u{FEFF}b@c.io"));
    }

    #[test]
    fn test_resubmit_restarts_hide_timer() {
        let mut form = ContactForm::new();
        let ok = ContactSubmission::new("A", "a@b.co", "hi");

        form.submit(&ok);
        form.submit(&ok);

        // First timer fires after the second submission: banner stays.
        assert!(!form.hide_success(1));
        assert!(form.success_visible());
        assert!(form.hide_success(2));
    }

    #[test]
    fn test_rejection_keeps_banner_generation() {
        let mut form = ContactForm::new();
        form.submit(&ContactSubmission::new("A", "a@b.co", "hi"));
        form.submit(&ContactSubmission::new("", "", ""));
        assert!(form.hide_success(1));
    }

    #[test]
    fn test_error_element_ids() {
        let errors = FieldErrors {
            name: true,
            email: false,
            message: true,
        };
        assert_eq!(
            errors.by_element(),
            [("name-error", true), ("email-error", false), ("message-error", true)]
        );
    }
}
