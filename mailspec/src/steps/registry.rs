use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use super::{EmailSteps, Error, GoTo, Negation};
use crate::domain::Direction;

/// What the runner should do after a successful step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Passed,
    /// Hand the navigation over to the session driver.
    Navigate(GoTo),
}

type Handler =
    fn(&mut EmailSteps, &Captures<'_>, Option<&[Vec<String>]>) -> Result<StepOutcome, Error>;

struct Definition {
    pattern: Regex,
    handler: Handler,
}

/// Maps step texts to the email steps.
pub struct StepRegistry {
    definitions: Vec<Definition>,
}

static REGISTRY: Lazy<StepRegistry> = Lazy::new(StepRegistry::new);

impl StepRegistry {
    pub fn new() -> Self {
        StepRegistry {
            definitions: vec![
                define(
                    r#"^there should (not |)be an email (to|from) "([^"]*)"$"#,
                    there_should_be_an_email,
                ),
                define(
                    r#"^there should (not |)be an email (to|from) "([^"]*)" titled "([^"]*)"$"#,
                    there_should_be_an_email_titled,
                ),
                define(
                    r#"^the email should (not |)contain "([^"]*)"$"#,
                    the_email_should_contain,
                ),
                define(
                    r#"^the email should (not |)contain the following data:$"#,
                    the_email_should_contain_rows,
                ),
                define(
                    r#"^I click on the "([^"]*)" link in the email (to|from) "([^"]*)"$"#,
                    click_link_in_email,
                ),
                define(
                    r#"^I click on the "([^"]*)" link in the email (to|from) "([^"]*)" titled "([^"]*)"$"#,
                    click_link_in_email,
                ),
                define(
                    r#"^I click on the "([^"]*)" link in the email$"#,
                    click_link_in_last_email,
                ),
                define(r#"^I clear all emails$"#, clear_all_emails),
            ],
        }
    }

    /// The registry shared by every scenario.
    pub fn global() -> &'static StepRegistry {
        &REGISTRY
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.pattern.as_str())
    }

    /// Runs the step whose pattern matches `text`.
    ///
    /// `table` holds the rows of the step's data table, if it has one.
    pub fn run(
        &self,
        steps: &mut EmailSteps,
        text: &str,
        table: Option<&[Vec<String>]>,
    ) -> Result<StepOutcome, Error> {
        let text = text.trim();
        let (definition, captures) = self
            .definitions
            .iter()
            .find_map(|d| d.pattern.captures(text).map(|c| (d, c)))
            .ok_or_else(|| Error::Undefined {
                context: format!("no email step matches \"{text}\""),
            })?;
        debug!(pattern = definition.pattern.as_str(), "running email step");
        (definition.handler)(steps, &captures, table)
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        StepRegistry::new()
    }
}

fn define(pattern: &str, handler: Handler) -> Definition {
    Definition {
        pattern: Regex::new(pattern).expect("step pattern"),
        handler,
    }
}

fn arg<'t>(captures: &Captures<'t>, index: usize) -> &'t str {
    captures.get(index).map_or("", |m| m.as_str())
}

fn negation(captures: &Captures<'_>, index: usize) -> Result<bool, Error> {
    arg(captures, index)
        .parse::<Negation>()
        .map(Negation::is_negated)
        .map_err(|context| Error::Undefined { context })
}

fn direction(captures: &Captures<'_>, index: usize) -> Result<Direction, Error> {
    arg(captures, index)
        .parse()
        .map_err(|context| Error::Undefined { context })
}

fn there_should_be_an_email(
    steps: &mut EmailSteps,
    captures: &Captures<'_>,
    _table: Option<&[Vec<String>]>,
) -> Result<StepOutcome, Error> {
    steps.there_should_be_an_email(
        negation(captures, 1)?,
        direction(captures, 2)?,
        arg(captures, 3),
    )?;
    Ok(StepOutcome::Passed)
}

fn there_should_be_an_email_titled(
    steps: &mut EmailSteps,
    captures: &Captures<'_>,
    _table: Option<&[Vec<String>]>,
) -> Result<StepOutcome, Error> {
    steps.there_should_be_an_email_titled(
        negation(captures, 1)?,
        direction(captures, 2)?,
        arg(captures, 3),
        arg(captures, 4),
    )?;
    Ok(StepOutcome::Passed)
}

fn the_email_should_contain(
    steps: &mut EmailSteps,
    captures: &Captures<'_>,
    _table: Option<&[Vec<String>]>,
) -> Result<StepOutcome, Error> {
    steps.the_email_should_contain(negation(captures, 1)?, arg(captures, 2))?;
    Ok(StepOutcome::Passed)
}

fn the_email_should_contain_rows(
    steps: &mut EmailSteps,
    captures: &Captures<'_>,
    table: Option<&[Vec<String>]>,
) -> Result<StepOutcome, Error> {
    let table = table.ok_or_else(|| Error::Table {
        context: "the email should contain the following data: needs a table".to_string(),
    })?;
    // Only the first column is significant.
    let rows = table
        .iter()
        .map(|row| row.first().map_or("", String::as_str));
    steps.the_email_should_contain_rows(negation(captures, 1)?, rows)?;
    Ok(StepOutcome::Passed)
}

fn click_link_in_email(
    steps: &mut EmailSteps,
    captures: &Captures<'_>,
    _table: Option<&[Vec<String>]>,
) -> Result<StepOutcome, Error> {
    let subject = captures.get(4).map(|m| m.as_str());
    steps
        .click_link_in_email(
            arg(captures, 1),
            direction(captures, 2)?,
            arg(captures, 3),
            subject,
        )
        .map(StepOutcome::Navigate)
}

fn click_link_in_last_email(
    steps: &mut EmailSteps,
    captures: &Captures<'_>,
    _table: Option<&[Vec<String>]>,
) -> Result<StepOutcome, Error> {
    steps
        .click_link_in_last_email(arg(captures, 1))
        .map(StepOutcome::Navigate)
}

fn clear_all_emails(
    steps: &mut EmailSteps,
    _captures: &Captures<'_>,
    _table: Option<&[Vec<String>]>,
) -> Result<StepOutcome, Error> {
    steps.clear_all_emails();
    Ok(StepOutcome::Passed)
}

impl EmailSteps {
    /// Runs the email step matching `text` with the shared registry.
    pub fn run(
        &mut self,
        text: &str,
        table: Option<&[Vec<String>]>,
    ) -> Result<StepOutcome, Error> {
        StepRegistry::global().run(self, text, table)
    }
}
