mod interactive;
mod lookup;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use wayfind_session::{Field, Session};

#[derive(Debug, Parser)]
#[command(name = "wayfind-cli")]
#[command(about = "Route planner for the Bengaluru service area")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show up to five place suggestions for some text
    Suggest {
        /// Which form field the text is typed into
        #[arg(long, value_enum, default_value_t = FieldArg::Origin)]
        field: FieldArg,
        /// Place name or address
        text: String,
    },
    /// Resolve both ends and fetch the route between them
    Route {
        /// Where the trip starts
        #[arg(long)]
        origin: String,
        /// Where the trip ends
        #[arg(long)]
        destination: String,
    },
    /// Drive a search session line by line from stdin
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FieldArg {
    Origin,
    Destination,
}

impl From<FieldArg> for Field {
    fn from(value: FieldArg) -> Self {
        match value {
            FieldArg::Origin => Field::Origin,
            FieldArg::Destination => Field::Destination,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // also reads `.env`
    let config = wayfind_core::load_app_config()?;

    // stdout carries JSON; logs go to stderr
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let session = Session::from_config(&config)?;
    tracing::debug!(env = %config.env, geocoder = %config.geocoder_url, router = %config.router_url, "session ready");

    match cli.command {
        Some(Commands::Suggest { field, text }) => {
            lookup::run_suggest(&session, field.into(), &text).await?;
        }
        Some(Commands::Route {
            origin,
            destination,
        }) => lookup::run_route(&session, &origin, &destination).await?,
        Some(Commands::Session) | None => interactive::run_session(&session).await?,
    }

    Ok(())
}

/// Pretty-printed JSON on stdout.
fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
