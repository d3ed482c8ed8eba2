use cucumber::gherkin::Step;
use cucumber::{then, when};

use super::check;
use crate::state;
use mailspec::domain::Direction;
use mailspec::steps::Negation;

#[then(regex = r#"^there should (not |)be an email (to|from) "([^"]*)"$"#)]
fn there_should_be_an_email(
    world: &mut state::TestWorld,
    negate: Negation,
    direction: Direction,
    address: String,
) {
    check(
        world
            .scenario
            .steps
            .there_should_be_an_email(negate.is_negated(), direction, &address),
    );
}

#[then(regex = r#"^there should (not |)be an email (to|from) "([^"]*)" titled "([^"]*)"$"#)]
fn there_should_be_an_email_titled(
    world: &mut state::TestWorld,
    negate: Negation,
    direction: Direction,
    address: String,
    subject: String,
) {
    check(world.scenario.steps.there_should_be_an_email_titled(
        negate.is_negated(),
        direction,
        &address,
        &subject,
    ));
}

#[then(regex = r#"^the email should (not |)contain "([^"]*)"$"#)]
fn the_email_should_contain(world: &mut state::TestWorld, negate: Negation, text: String) {
    check(
        world
            .scenario
            .steps
            .the_email_should_contain(negate.is_negated(), &text),
    );
}

#[then(regex = r#"^the email should (not |)contain the following data:$"#)]
fn the_email_should_contain_rows(world: &mut state::TestWorld, step: &Step, negate: Negation) {
    let table = step.table.as_ref().expect("a data table");
    let rows = table
        .rows
        .iter()
        .map(|row| row.first().map_or("", String::as_str));
    check(
        world
            .scenario
            .steps
            .the_email_should_contain_rows(negate.is_negated(), rows),
    );
}

#[when(regex = r#"^I click on the "([^"]*)" link in the email (to|from) "([^"]*)"$"#)]
fn click_link_in_email(
    world: &mut state::TestWorld,
    selector: String,
    direction: Direction,
    address: String,
) {
    let goto = check(
        world
            .scenario
            .steps
            .click_link_in_email(&selector, direction, &address, None),
    );
    world.visits.push(goto);
}

#[when(regex = r#"^I click on the "([^"]*)" link in the email (to|from) "([^"]*)" titled "([^"]*)"$"#)]
fn click_link_in_email_titled(
    world: &mut state::TestWorld,
    selector: String,
    direction: Direction,
    address: String,
    subject: String,
) {
    let goto = check(world.scenario.steps.click_link_in_email(
        &selector,
        direction,
        &address,
        Some(&subject),
    ));
    world.visits.push(goto);
}

#[when(regex = r#"^I click on the "([^"]*)" link in the email$"#)]
fn click_link_in_last_email(world: &mut state::TestWorld, selector: String) {
    let goto = check(world.scenario.steps.click_link_in_last_email(&selector));
    world.visits.push(goto);
}

#[when(regex = r#"^I clear all emails$"#)]
fn clear_all_emails(world: &mut state::TestWorld) {
    world.scenario.steps.clear_all_emails();
}
