use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use crate::domain::ports::secondary::{EmailError as Error, EmailService};
use crate::domain::{CapturedEmail, Email, EmailQuery};

/// An email service which delivers nothing, and records every email it is
/// asked to send instead.
///
/// Clones share the same recorded emails: one clone is injected in the
/// application's mailer while the other is queried by the steps.
#[derive(Debug, Clone, Default)]
pub struct FakeMailer {
    emails: Arc<Mutex<Vec<CapturedEmail>>>,
}

impl FakeMailer {
    pub fn new() -> Self {
        FakeMailer::default()
    }

    // Scenarios run one at a time, a panic while holding the lock leaves
    // the list in a consistent state.
    fn emails_mut(&self) -> MutexGuard<'_, Vec<CapturedEmail>> {
        self.emails.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self, email: CapturedEmail) {
        debug!(
            to = email.to(),
            from = email.from(),
            subject = email.subject(),
            "recording email"
        );
        self.emails_mut().push(email);
    }

    /// The most recently recorded email matching the query.
    pub fn find_one(&self, query: &EmailQuery) -> Option<CapturedEmail> {
        let found = self
            .emails_mut()
            .iter()
            .rev()
            .find(|email| query.matches(email))
            .cloned();
        debug!(%query, found = found.is_some(), "looking up email");
        found
    }

    /// Every recorded email matching the query, oldest first.
    pub fn find_all(&self, query: &EmailQuery) -> Vec<CapturedEmail> {
        self.emails_mut()
            .iter()
            .filter(|email| query.matches(email))
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        let mut emails = self.emails_mut();
        debug!(count = emails.len(), "clearing recorded emails");
        emails.clear();
    }

    /// A snapshot of every recorded email, oldest first.
    pub fn emails(&self) -> Vec<CapturedEmail> {
        self.emails_mut().clone()
    }

    pub fn len(&self) -> usize {
        self.emails_mut().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EmailService for FakeMailer {
    async fn send_email(&self, email: Email) -> Result<(), Error> {
        let Email {
            to,
            from,
            subject,
            html_content,
            text_content,
        } = email;

        self.record(CapturedEmail::new(
            to,
            from.unwrap_or_default(),
            subject,
            html_content,
            text_content,
        ));

        Ok(())
    }
}
