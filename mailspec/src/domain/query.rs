use std::fmt;
use std::str::FromStr;

use super::CapturedEmail;

/// Which address of an email a step refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    To,
    From,
}

impl Direction {
    /// A query with only the address for this direction set.
    pub fn query(self, address: impl Into<String>) -> EmailQuery {
        match self {
            Direction::To => EmailQuery::default().to(address),
            Direction::From => EmailQuery::default().from(address),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to" => Ok(Direction::To),
            "from" => Ok(Direction::From),
            _ => Err(format!("'{s}' is not a direction, expected 'to' or 'from'")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::To => f.write_str("to"),
            Direction::From => f.write_str("from"),
        }
    }
}

/// Criteria used to look up captured emails.
///
/// Missing or empty criteria match anything. The others must be exactly
/// equal to the corresponding field of the email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailQuery {
    pub to: Option<String>,
    pub from: Option<String>,
    pub subject: Option<String>,
}

impl EmailQuery {
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// The same query, without the subject criterion.
    pub fn any_subject(&self) -> Self {
        EmailQuery {
            subject: None,
            ..self.clone()
        }
    }

    pub fn matches(&self, email: &CapturedEmail) -> bool {
        criterion(&self.to, email.to())
            && criterion(&self.from, email.from())
            && criterion(&self.subject, email.subject())
    }
}

fn criterion(expected: &Option<String>, actual: &str) -> bool {
    match expected.as_deref() {
        None | Some("") => true,
        Some(expected) => expected == actual,
    }
}

impl fmt::Display for EmailQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(to) = self.to.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("to \"{to}\""));
        }
        if let Some(from) = self.from.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("from \"{from}\""));
        }
        if let Some(subject) = self.subject.as_deref().filter(|s| !s.is_empty()) {
            parts.push(format!("titled \"{subject}\""));
        }
        if parts.is_empty() {
            f.write_str("any email")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    fn welcome() -> CapturedEmail {
        CapturedEmail::new("a@test.com", "shop@test.com", "Welcome", "<p>Hi</p>", "Hi")
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_that(&EmailQuery::default().matches(&welcome())).is_true();
    }

    #[test]
    fn empty_criteria_are_wildcards() {
        let query = EmailQuery::default().to("").subject("");
        assert_that(&query.matches(&welcome())).is_true();
    }

    #[test]
    fn all_given_criteria_must_match() {
        let query = EmailQuery::default().to("a@test.com").subject("Goodbye");
        assert_that(&query.matches(&welcome())).is_false();
        let query = EmailQuery::default().to("a@test.com").subject("Welcome");
        assert_that(&query.matches(&welcome())).is_true();
    }

    #[test]
    fn matching_is_case_sensitive() {
        let query = EmailQuery::default().to("A@test.com");
        assert_that(&query.matches(&welcome())).is_false();
    }

    #[test]
    fn direction_builds_a_single_address_query() {
        assert_that(&Direction::From.query("shop@test.com"))
            .is_equal_to(EmailQuery::default().from("shop@test.com"));
        assert_that(&"to".parse::<Direction>()).is_ok().is_equal_to(Direction::To);
        assert_that(&"cc".parse::<Direction>()).is_err();
    }

    #[test]
    fn queries_are_described_by_their_criteria() {
        let query = Direction::To.query("a@test.com").subject("Welcome");
        assert_that(&query.to_string()).is_equal_to(r#"to "a@test.com" titled "Welcome""#.to_string());
        assert_that(&query.any_subject().to_string()).is_equal_to(r#"to "a@test.com""#.to_string());
    }
}
