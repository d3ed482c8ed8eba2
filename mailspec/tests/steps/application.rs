use cucumber::gherkin::Step;
use cucumber::given;

use crate::state;
use mailspec::domain::Email;

// Doc strings carry the body of the email.
fn body(step: &Step) -> String {
    step.docstring
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

#[given(regex = r#"^the application sends an email to "([^"]*)" titled "([^"]*)"$"#)]
async fn send_html_email(world: &mut state::TestWorld, step: &Step, to: String, subject: String) {
    let email = Email::new(to, subject).html(body(step));
    world
        .scenario
        .mailer
        .send(email)
        .await
        .expect("send html email");
}

#[given(regex = r#"^the application sends a plain text email to "([^"]*)" titled "([^"]*)"$"#)]
async fn send_text_email(world: &mut state::TestWorld, step: &Step, to: String, subject: String) {
    let email = Email::new(to, subject).text(body(step));
    world
        .scenario
        .mailer
        .send(email)
        .await
        .expect("send plain text email");
}

#[given(regex = r#"^"([^"]*)" sends an email to "([^"]*)" titled "([^"]*)"$"#)]
async fn send_email_from(
    world: &mut state::TestWorld,
    step: &Step,
    from: String,
    to: String,
    subject: String,
) {
    let email = Email::new(to, subject).sender(from).html(body(step));
    world
        .scenario
        .mailer
        .send(email)
        .await
        .expect("send email");
}

#[given(regex = r#"^all emails are redirected to "([^"]*)"$"#)]
fn redirect_all_emails(world: &mut state::TestWorld, address: String) {
    world.scenario.mailer = world.scenario.mailer.redirect_to(address);
}
