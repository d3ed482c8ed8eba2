use common::config;
use common::settings::Settings;
use std::path::PathBuf;

use super::Error;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, clap::Parser)]
#[clap(
    name = "mailspec",
    about = "Email steps for acceptance test scenarios",
    version = VERSION,
    )]
pub struct Opts {
    /// Defines the config directory
    #[arg(value_parser = clap::value_parser!(PathBuf), short = 'c', long = "config-dir")]
    pub config_dir: PathBuf,

    /// Defines the run mode in {testing, dev, ...}
    ///
    /// If no run mode is provided, only the defaults are used.
    #[arg(short = 'm', long = "run-mode")]
    pub run_mode: Option<String>,

    /// Override settings values using key=value
    #[arg(short = 's', long = "setting")]
    pub settings: Vec<String>,

    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum Command {
    /// Prints the merged configuration
    Config,
    /// Lists the email step patterns
    Steps,
}

impl TryInto<Settings> for Opts {
    type Error = Error;

    fn try_into(self) -> Result<Settings, Self::Error> {
        config::merge_configuration(
            self.config_dir.as_ref(),
            &["mailer", "tracing"],
            self.run_mode.as_deref(),
            "MAILSPEC",
            self.settings.clone(),
        )
        .map_err(|err| Error::Merging {
            context: "Mailspec Settings: Could not merge configuration".to_string(),
            source: err,
        })?
        .try_deserialize()
        .map_err(|err| Error::Deserializing {
            context: "Mailspec Settings: Could not deserialize configuration".to_string(),
            source: err,
        })
    }
}
