use cucumber::gherkin::Step;
use cucumber::then;
use speculoos::prelude::*;

use crate::state;
use mailspec::steps::StepOutcome;

#[then(regex = r#"^I should be sent to "([^"]*)"$"#)]
fn sent_to(world: &mut state::TestWorld, href: String) {
    let visit = world.visits.last().expect("a link was followed");
    assert_that(&visit.href).is_equal_to(href);
}

#[then(regex = r#"^I should not have been sent anywhere$"#)]
fn sent_nowhere(world: &mut state::TestWorld) {
    assert_that(&world.visits).is_empty();
}

// The steps below run email steps by their text, through the registry, and
// check how they fail.

fn table(step: &Step) -> Option<Vec<Vec<String>>> {
    step.table.as_ref().map(|table| table.rows.clone())
}

#[then(regex = r#"^the step '(.*)' should pass$"#)]
fn step_passes(world: &mut state::TestWorld, step: &Step, text: String) {
    let rows = table(step);
    let outcome = world.scenario.steps.run(&text, rows.as_deref());
    if let Ok(StepOutcome::Navigate(goto)) = &outcome {
        world.visits.push(goto.clone());
    }
    assert_that(&outcome).is_ok();
}

#[then(regex = r#"^the step '(.*)' should fail with "(.*)"$"#)]
fn step_fails(world: &mut state::TestWorld, step: &Step, text: String, message: String) {
    let rows = table(step);
    let outcome = world.scenario.steps.run(&text, rows.as_deref());
    let err = match outcome {
        Ok(outcome) => panic!("step '{text}' should fail, but it ended with {outcome:?}"),
        Err(err) => err,
    };
    assert_that(&err.to_string()).contains(message.as_str());
}
