use cucumber::cli;
use cucumber::World as _;
use futures::FutureExt;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::format::{DefaultFields, Format},
    layer::SubscriberExt as _,
    Layer,
};

use mailspec::steps::Scenario;

mod steps;

#[derive(cli::Args)] // re-export of `clap::Args`
struct CustomOpts {
    /// Use tracing for debug output
    #[arg(long)]
    trace: Option<bool>,
}

#[tokio::main]
async fn main() {
    let opts = cli::Opts::<_, _, _, CustomOpts>::parsed();
    let trace = opts.custom.trace.unwrap_or_default();

    let cucumber = state::TestWorld::cucumber()
        .fail_on_skipped()
        .with_cli(opts)
        .max_concurrent_scenarios(1)
        .before(move |_feature, _rule, _scenario, world| {
            async move {
                // Reinstall the fake mailer, nothing may leak from a previous scenario.
                world.scenario = Scenario::before(&world.settings.mailer);
                world.visits.clear();
            }
            .boxed_local()
        });

    if trace {
        cucumber
            .configure_and_init_tracing(
                DefaultFields::new(),
                Format::default().with_ansi(false).without_time(),
                |layer| tracing_subscriber::registry().with(LevelFilter::DEBUG.and_then(layer)),
            )
            .run_and_exit("tests/features")
            .await;
    } else {
        cucumber.run_and_exit("tests/features").await;
    }
}
