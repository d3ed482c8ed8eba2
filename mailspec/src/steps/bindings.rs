use std::fmt;
use tracing::{debug, info};

use super::Error;
use crate::domain::ports::secondary::LinkExtractor;
use crate::domain::{CapturedEmail, Direction, EmailQuery};
use crate::services::{strip_tags, AnchorExtractor, FakeMailer};

/// Navigation requested by a step, to be performed by the session driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoTo {
    pub href: String,
}

impl fmt::Display for GoTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I go to \"{}\"", self.href)
    }
}

/// The email steps of one scenario.
///
/// Steps which find an email remember it, so that following steps can refer
/// to "the email" without repeating the criteria.
pub struct EmailSteps {
    mailer: FakeMailer,
    links: Box<dyn LinkExtractor + Send + Sync>,
    last_matched: Option<CapturedEmail>,
}

impl EmailSteps {
    pub fn new(mailer: FakeMailer) -> Self {
        EmailSteps::with_link_extractor(mailer, Box::new(AnchorExtractor))
    }

    pub fn with_link_extractor(
        mailer: FakeMailer,
        links: Box<dyn LinkExtractor + Send + Sync>,
    ) -> Self {
        EmailSteps {
            mailer,
            links,
            last_matched: None,
        }
    }

    pub fn mailer(&self) -> &FakeMailer {
        &self.mailer
    }

    pub fn last_matched(&self) -> Option<&CapturedEmail> {
        self.last_matched.as_ref()
    }

    /// there should (not |)be an email (to|from) "..."
    pub fn there_should_be_an_email(
        &mut self,
        negate: bool,
        direction: Direction,
        address: &str,
    ) -> Result<(), Error> {
        let query = direction.query(address);
        let found = self.mailer.find_one(&query);
        // Any captured email helps to spot a typo in the address.
        let existing = self.mailer.find_all(&EmailQuery::default());
        self.expect(negate, &query, found, &existing)
    }

    /// there should (not |)be an email (to|from) "..." titled "..."
    pub fn there_should_be_an_email_titled(
        &mut self,
        negate: bool,
        direction: Direction,
        address: &str,
        subject: &str,
    ) -> Result<(), Error> {
        let query = direction.query(address).subject(subject);
        let found = self.mailer.find_one(&query);
        let existing = self.mailer.find_all(&query.any_subject());
        self.expect(negate, &query, found, &existing)
    }

    fn expect(
        &mut self,
        negate: bool,
        query: &EmailQuery,
        found: Option<CapturedEmail>,
        existing: &[CapturedEmail],
    ) -> Result<(), Error> {
        match (negate, found) {
            (true, None) => {
                self.last_matched = None;
                Ok(())
            }
            (true, Some(email)) => Err(Error::assertion(format!(
                "Found unexpected email {query}, titled \"{}\".",
                email.subject()
            ))),
            (false, Some(email)) => {
                debug!(%query, subject = email.subject(), "matched email");
                self.last_matched = Some(email);
                Ok(())
            }
            (false, None) => {
                let mut context = format!("Could not find email {query}.");
                if !existing.is_empty() {
                    context.push_str(" Existing emails: ");
                    context.push_str(&titles(existing));
                }
                Err(Error::assertion(context))
            }
        }
    }

    fn matched(&self) -> Result<&CapturedEmail, Error> {
        self.last_matched.as_ref().ok_or_else(Error::no_matched_email)
    }

    /// the email should (not |)contain "..."
    pub fn the_email_should_contain(&self, negate: bool, text: &str) -> Result<(), Error> {
        let email = self.matched()?;
        contains(negate, email, email.body(), text)
    }

    /// the email should (not |)contain the following data:
    ///
    /// Each row is checked on its own against the body, markup removed.
    pub fn the_email_should_contain_rows<I>(&self, negate: bool, rows: I) -> Result<(), Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let email = self.matched()?;
        let text = strip_tags(email.body());
        rows.into_iter()
            .enumerate()
            .try_for_each(|(index, row)| {
                contains(negate, email, &text, row.as_ref()).map_err(|err| match err {
                    Error::Assertion { context } => Error::Assertion {
                        context: format!("Row {}: {context}", index + 1),
                    },
                    other => other,
                })
            })
    }

    /// I click on the "..." link in the email (to|from) "..."( titled "...")
    pub fn click_link_in_email(
        &self,
        selector: &str,
        direction: Direction,
        address: &str,
        subject: Option<&str>,
    ) -> Result<GoTo, Error> {
        let mut query = direction.query(address);
        if let Some(subject) = subject {
            query = query.subject(subject);
        }
        let email = self
            .mailer
            .find_one(&query)
            .ok_or_else(|| Error::assertion(format!("Could not find email {query}.")))?;
        self.follow(&email, selector)
    }

    /// I click on the "..." link in the email
    pub fn click_link_in_last_email(&self, selector: &str) -> Result<GoTo, Error> {
        let email = self.matched()?;
        self.follow(email, selector)
    }

    fn follow(&self, email: &CapturedEmail, selector: &str) -> Result<GoTo, Error> {
        let anchor = self
            .links
            .select_link(email.content(), selector)
            .ok_or_else(|| {
                Error::assertion(format!(
                    "Could not find a \"{selector}\" link in the email titled \"{}\".",
                    email.subject()
                ))
            })?;
        let href = anchor.href.filter(|href| !href.is_empty()).ok_or_else(|| {
            Error::assertion(format!(
                "The \"{selector}\" link in the email titled \"{}\" has no href.",
                email.subject()
            ))
        })?;
        debug!(selector, %href, "following link");
        Ok(GoTo { href })
    }

    /// I clear all emails
    pub fn clear_all_emails(&mut self) {
        info!("clearing all emails");
        self.last_matched = None;
        self.mailer.clear();
    }
}

impl fmt::Debug for EmailSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailSteps")
            .field("mailer", &self.mailer)
            .field("last_matched", &self.last_matched)
            .finish()
    }
}

fn contains(negate: bool, email: &CapturedEmail, body: &str, text: &str) -> Result<(), Error> {
    match (negate, body.contains(text)) {
        (false, true) | (true, false) => Ok(()),
        (false, false) => Err(Error::assertion(format!(
            "The email titled \"{}\" does not contain \"{text}\".",
            email.subject()
        ))),
        (true, true) => Err(Error::assertion(format!(
            "The email titled \"{}\" contains \"{text}\".",
            email.subject()
        ))),
    }
}

fn titles(emails: &[CapturedEmail]) -> String {
    emails
        .iter()
        .map(|email| format!("\"{}\"", email.subject()))
        .collect::<Vec<_>>()
        .join(",")
}
