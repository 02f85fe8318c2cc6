use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const THANK_YOU_MESSAGE: &str = "Thanks! We'll reach out shortly.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadFormError {
    #[error("Enter a valid email address")]
    InvalidEmail,
}

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_SHAPE.is_match(input)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LeadFormStatus {
    #[default]
    Idle,
    Error(LeadFormError),
    Submitted,
}

/// Email capture at the bottom of the page. Nothing is sent anywhere, a
/// valid address just flips the form into its acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadForm {
    pub email: String,
    pub status: LeadFormStatus,
}

impl LeadForm {
    /// Editing leaves any error on screen until the next submit.
    pub fn edit(&mut self, email: String) {
        self.email = email;
    }

    pub fn submit(&mut self) -> Result<(), LeadFormError> {
        if self.is_submitted() {
            return Ok(());
        }
        if !is_valid_email(&self.email) {
            self.status = LeadFormStatus::Error(LeadFormError::InvalidEmail);
            return Err(LeadFormError::InvalidEmail);
        }
        self.status = LeadFormStatus::Submitted;
        Ok(())
    }

    pub fn error(&self) -> Option<&LeadFormError> {
        match &self.status {
            LeadFormStatus::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.status == LeadFormStatus::Submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form_with(email: &str) -> LeadForm {
        let mut form = LeadForm::default();
        form.edit(email.to_string());
        form
    }

    #[test]
    fn accepts_basic_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ops.team@axiom-robots.example.com"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["not-an-email", "a@b", "@b.co", " ", "", "a b@c.de", "a@@b.co"] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn invalid_submit_sets_error_and_stays_unsubmitted() {
        let mut form = form_with("not-an-email");
        assert_eq!(form.submit(), Err(LeadFormError::InvalidEmail));
        assert_eq!(form.status, LeadFormStatus::Error(LeadFormError::InvalidEmail));
        assert_eq!(
            form.error().map(ToString::to_string).as_deref(),
            Some("Enter a valid email address")
        );
        assert!(!form.is_submitted());
    }

    #[test]
    fn editing_does_not_clear_error() {
        let mut form = form_with("a@b");
        let _ = form.submit();
        form.edit("a@b.co".to_string());
        assert!(form.error().is_some());
    }

    #[test]
    fn valid_submit_after_failure_clears_error() {
        let mut form = form_with("@b.co");
        assert!(form.submit().is_err());

        form.edit("a@b.co".to_string());
        assert_eq!(form.submit(), Ok(()));
        assert!(form.is_submitted());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn submitted_is_terminal() {
        let mut form = form_with("a@b.co");
        form.submit().unwrap();
        form.edit("garbage".to_string());
        assert_eq!(form.submit(), Ok(()));
        assert!(form.is_submitted());
    }
}
