use serde::{Deserialize, Serialize};

use crate::{MotionError, Result};

/// Character budget of the message body.
pub const MESSAGE_LIMIT: usize = 200;

/// Draft of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Rejects a draft the form would refuse to submit: every field is
    /// required, the email must look deliverable, and the message must fit
    /// the character budget.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MotionError::msg("full name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(MotionError::msg("email is required"));
        }
        let (local, domain) = self
            .email
            .split_once('@')
            .ok_or_else(|| MotionError::msg("email must contain `@`"))?;
        if local.is_empty() || domain.is_empty() {
            return Err(MotionError::msg("email is malformed"));
        }
        if self.message.trim().is_empty() {
            return Err(MotionError::msg("message is required"));
        }
        if self.message.chars().count() > MESSAGE_LIMIT {
            return Err(MotionError::msg(format!(
                "message exceeds {MESSAGE_LIMIT} characters"
            )));
        }
        Ok(())
    }
}

/// Submission seam. The real implementation posts to the mail service; the
/// core only cares about success or failure.
pub trait MessageSender {
    fn send(&mut self, message: &ContactMessage) -> Result<()>;
}

/// Non-blocking notice surfaced after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed(String),
}

/// Holds the draft, the live character budget, and the last submission
/// notice. Submission failures are absorbed into the notice; they never
/// escalate past the form.
#[derive(Debug, Default)]
pub struct ContactForm {
    draft: ContactMessage,
    notice: Option<Notice>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    /// Updates the message body, truncated to the character budget the way
    /// the input field enforces it.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.draft.message = message.into().chars().take(MESSAGE_LIMIT).collect();
    }

    pub fn draft(&self) -> &ContactMessage {
        &self.draft
    }

    /// Live "N / 200" counter value.
    pub fn used_chars(&self) -> usize {
        self.draft.message.chars().count()
    }

    pub fn remaining_chars(&self) -> usize {
        MESSAGE_LIMIT.saturating_sub(self.used_chars())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Validates the draft and hands it to the sender. A sender failure
    /// becomes a [`Notice::Failed`] and keeps the draft for another try; a
    /// success resets the form. Only an invalid draft is an `Err`.
    pub fn submit(&mut self, sender: &mut dyn MessageSender) -> Result<Notice> {
        self.draft.validate()?;

        let notice = match sender.send(&self.draft) {
            Ok(()) => {
                self.draft = ContactMessage::default();
                Notice::Sent
            }
            Err(err) => Notice::Failed(err.to_string()),
        };
        self.notice = Some(notice.clone());
        Ok(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingSender {
        sent: Vec<ContactMessage>,
        fail_with: Option<String>,
    }

    impl RecordingSender {
        fn working() -> Self {
            Self {
                sent: Vec::new(),
                fail_with: None,
            }
        }

        fn broken(reason: &str) -> Self {
            Self {
                sent: Vec::new(),
                fail_with: Some(reason.to_string()),
            }
        }
    }

    impl MessageSender for RecordingSender {
        fn send(&mut self, message: &ContactMessage) -> Result<()> {
            if let Some(reason) = &self.fail_with {
                return Err(MotionError::msg(reason.clone()));
            }
            self.sent.push(message.clone());
            Ok(())
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_name("John Doe");
        form.set_email("example@gmail.com");
        form.set_message("Hi, I'd like to get in touch about a project.");
        form
    }

    #[test]
    fn invalid_drafts_never_reach_the_sender() {
        let mut sender = RecordingSender::working();

        let mut form = ContactForm::new();
        assert!(form.submit(&mut sender).is_err());

        form.set_name("John Doe");
        form.set_email("not-an-address");
        form.set_message("hello");
        assert!(form.submit(&mut sender).is_err());

        assert!(sender.sent.is_empty());
        assert!(form.notice().is_none());
    }

    #[test]
    fn successful_submission_resets_the_draft() {
        let mut sender = RecordingSender::working();
        let mut form = filled_form();

        let notice = form.submit(&mut sender).unwrap();
        assert_eq!(notice, Notice::Sent);
        assert_eq!(sender.sent.len(), 1);
        assert_eq!(form.draft(), &ContactMessage::default());
    }

    #[test]
    fn sender_failure_is_a_soft_notice_and_keeps_the_draft() {
        let mut sender = RecordingSender::broken("service unreachable");
        let mut form = filled_form();
        let draft_before = form.draft().clone();

        let notice = form.submit(&mut sender).unwrap();
        assert_eq!(notice, Notice::Failed("service unreachable".to_string()));
        assert_eq!(form.draft(), &draft_before);
        assert_eq!(form.notice(), Some(&notice));
    }

    #[test]
    fn message_body_is_capped_at_the_budget() {
        let mut form = filled_form();
        form.set_message("x".repeat(500));

        assert_eq!(form.used_chars(), MESSAGE_LIMIT);
        assert_eq!(form.remaining_chars(), 0);

        let mut sender = RecordingSender::working();
        assert_eq!(form.submit(&mut sender).unwrap(), Notice::Sent);
    }

    #[test]
    fn counter_tracks_the_draft() {
        let mut form = ContactForm::new();
        assert_eq!(form.remaining_chars(), MESSAGE_LIMIT);

        form.set_message("hello");
        assert_eq!(form.used_chars(), 5);
        assert_eq!(form.remaining_chars(), MESSAGE_LIMIT - 5);
    }
}
