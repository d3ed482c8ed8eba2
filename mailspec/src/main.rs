use clap::Parser;
use std::fmt;

use common::err_context::{ErrorContext, ErrorContextExt};
use common::settings::Settings;
use common::telemetry;
use mailspec::opts::{Command, Error as OptsError, Opts};
use mailspec::steps::StepRegistry;

#[derive(Debug)]
pub enum Error {
    Options {
        context: String,
        source: OptsError,
    },
    Output {
        context: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Options { context, source } => {
                write!(fmt, "Options Error: {context} | {source}")
            }
            Error::Output { context, source } => {
                write!(fmt, "Output Error: {context} | {source}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorContext<OptsError>> for Error {
    fn from(err: ErrorContext<OptsError>) -> Self {
        Error::Options {
            context: err.0,
            source: err.1,
        }
    }
}

impl From<ErrorContext<serde_json::Error>> for Error {
    fn from(err: ErrorContext<serde_json::Error>) -> Self {
        Error::Output {
            context: err.0,
            source: err.1,
        }
    }
}

fn main() -> Result<(), Error> {
    let opts = Opts::parse();

    let cmd = opts.cmd.clone();

    let settings: Settings = opts.try_into().context("Compiling Mailspec Settings")?;

    let subscriber = telemetry::get_subscriber(
        "mailspec".to_string(),
        settings.tracing.level.clone(),
        std::io::stderr,
    );
    telemetry::init_subscriber(subscriber);

    match cmd {
        Command::Config => {
            let json =
                serde_json::to_string_pretty(&settings).context("Serializing settings")?;
            println!("{json}");
        }
        Command::Steps => {
            for pattern in StepRegistry::global().patterns() {
                println!("{pattern}");
            }
        }
    }
    Ok(())
}
