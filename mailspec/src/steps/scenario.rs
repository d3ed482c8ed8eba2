use common::settings::MailerSettings;
use std::sync::Arc;
use tracing::info;

use super::EmailSteps;
use crate::services::{FakeMailer, Mailer};

/// The mail related state of one scenario: the application's mailer, bound
/// to a fake mailer, and the steps inspecting what it captured.
#[derive(Debug)]
pub struct Scenario {
    pub mailer: Mailer,
    pub steps: EmailSteps,
}

impl Scenario {
    /// Sets up a scenario.
    ///
    /// A fresh fake mailer is created and injected in a new application
    /// mailer, with the redirect override disabled so that the steps see the
    /// actual recipients. Nothing captured by a previous scenario is visible.
    pub fn before(settings: &MailerSettings) -> Self {
        let fake = FakeMailer::new();
        let mailer = Mailer::new(Arc::new(fake.clone()), settings.without_redirect());
        info!(sender = %settings.sender_email, "installed fake mailer");
        Scenario {
            mailer,
            steps: EmailSteps::new(fake),
        }
    }
}
