use serde::{Deserialize, Serialize};

/// An outbound email, as built by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub to: String,
    /// Filled with the configured sender by the mailer when missing.
    pub from: Option<String>,
    pub subject: String,
    pub html_content: String,
    pub text_content: String,
}

impl Email {
    pub fn new(to: impl Into<String>, subject: impl Into<String>) -> Self {
        Email {
            to: to.into(),
            from: None,
            subject: subject.into(),
            html_content: String::new(),
            text_content: String::new(),
        }
    }

    pub fn sender(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn html(mut self, content: impl Into<String>) -> Self {
        self.html_content = content.into();
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text_content = content.into();
        self
    }
}
