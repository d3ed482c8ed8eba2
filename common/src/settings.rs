use serde::{Deserialize, Serialize};

/// Settings of the application side mailer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerSettings {
    /// Sender used when an outbound email does not name one.
    pub sender_email: String,
    /// When set, every outbound email is delivered to this address instead
    /// of its recipient.
    #[serde(default)]
    pub send_all_emails_to: Option<String>,
}

impl MailerSettings {
    /// The same settings, with the redirect override disabled.
    pub fn without_redirect(&self) -> MailerSettings {
        MailerSettings {
            sender_email: self.sender_email.clone(),
            send_all_emails_to: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingSettings {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub mailer: MailerSettings,
    pub tracing: TracingSettings,
    pub mode: String,
}
