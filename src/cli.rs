use std::path::PathBuf;

mod collection;
mod rotation;
mod routes;
mod terminal;

use clap::ArgAction;
use linked_records::Config;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(self.config.as_deref())?;
        self.command.run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the interactive session
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[instrument]
fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No config file given, using defaults");
        return Ok(Config::default());
    };
    let config = Config::load(path)?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Find collection points accepting a material
    ///
    /// Matches are held in a singly-linked list.
    Collection(collection::Command),

    /// Search transport routes by type or region
    ///
    /// Matches are held in a doubly-linked list and can be shown in either
    /// order.
    Routes(routes::Command),

    /// Browse vehicles in rotation on a weekday
    ///
    /// Matches are held in a circular list and can be browsed one at a time.
    Rotation(rotation::Command),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Collection(command) => command.run(config)?,
            Self::Routes(command) => command.run(config)?,
            Self::Rotation(command) => command.run(config)?,
        }
        Ok(())
    }
}
