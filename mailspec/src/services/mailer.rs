use common::err_context::ErrorContextExt;
use common::settings::MailerSettings;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::domain::ports::secondary::{EmailError as Error, EmailService};
use crate::domain::Email;

/// The application's entry point for sending email.
///
/// Delivery is delegated to the injected [`EmailService`], which is how
/// tests substitute a [`FakeMailer`](super::FakeMailer) for the real thing.
#[derive(Clone)]
pub struct Mailer {
    service: Arc<dyn EmailService + Send + Sync>,
    settings: MailerSettings,
}

impl Mailer {
    pub fn new(service: Arc<dyn EmailService + Send + Sync>, settings: MailerSettings) -> Self {
        Mailer { service, settings }
    }

    /// The same mailer, delivering every email to its actual recipient.
    pub fn without_redirect(&self) -> Self {
        Mailer {
            service: Arc::clone(&self.service),
            settings: self.settings.without_redirect(),
        }
    }

    /// The same mailer, delivering every email to `address`.
    pub fn redirect_to(&self, address: impl Into<String>) -> Self {
        Mailer {
            service: Arc::clone(&self.service),
            settings: MailerSettings {
                sender_email: self.settings.sender_email.clone(),
                send_all_emails_to: Some(address.into()),
            },
        }
    }

    pub async fn send(&self, mut email: Email) -> Result<(), Error> {
        if email.from.as_deref().map_or(true, str::is_empty) {
            email.from = Some(self.settings.sender_email.clone());
        }

        if let Some(redirect) = self
            .settings
            .send_all_emails_to
            .as_deref()
            .filter(|address| !address.is_empty())
        {
            info!(to = %email.to, redirect, "redirecting email");
            email.to = redirect.to_string();
        }

        let subject = email.subject.clone();
        self.service
            .send_email(email)
            .await
            .context(format!("sending email titled \"{subject}\""))?;
        Ok(())
    }
}

impl fmt::Debug for Mailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailer")
            .field("settings", &self.settings)
            .finish()
    }
}
