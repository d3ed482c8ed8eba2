use serde::Serialize;

/// One outbound email, as it was handed to the fake mailer.
///
/// Captured emails are never modified once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapturedEmail {
    to: String,
    from: String,
    subject: String,
    content: String,
    plain_content: String,
}

impl CapturedEmail {
    pub fn new(
        to: impl Into<String>,
        from: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
        plain_content: impl Into<String>,
    ) -> Self {
        CapturedEmail {
            to: to.into(),
            from: from.into(),
            subject: subject.into(),
            content: content.into(),
            plain_content: plain_content.into(),
        }
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The HTML body, possibly empty.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn plain_content(&self) -> &str {
        &self.plain_content
    }

    /// The body assertions run against: the HTML content, or the plain
    /// text fallback when there is no HTML content.
    pub fn body(&self) -> &str {
        if self.content.is_empty() {
            &self.plain_content
        } else {
            &self.content
        }
    }
}
