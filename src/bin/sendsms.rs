use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use dialoguer::Input;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sendsms::{GatewayConfig, GatewayResponse, MessageBuilder, SendsmsClient};

#[derive(Parser, Debug)]
#[command(
    name = "sendsms",
    version,
    about = "Send an SMS message through the SendSMS gateway"
)]
struct Cli {
    /// Destination phone number; prompted for when absent.
    to: Option<String>,
    /// Message body; prompted for when absent.
    message: Option<String>,
    /// Sender label or number; prompted for when absent, may be left empty.
    from: Option<String>,
    /// TOML configuration file. Falls back to SENDSMS_* environment
    /// variables when not given.
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Log filter, e.g. "info" or "sendsms=debug".
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let config = load_config(args.config_path.as_deref())?;
    init_tracing(args.log_level.as_deref(), config.debug)?;
    debug!(url = %config.url, "configuration loaded");

    let to = match args.to {
        Some(value) => value,
        None => prompt("Please enter a destination phone number", false)?,
    };
    let message = match args.message {
        Some(value) => value,
        None => prompt("Please enter a message", false)?,
    };
    let from = match args.from {
        Some(value) => value,
        None => prompt(
            "Please enter a FROM phone number (optional, can be left empty)",
            true,
        )?,
    };

    let client = SendsmsClient::from_config(&config).context("build client")?;

    let mut builder = MessageBuilder::new().to(to).message(message);
    if !from.trim().is_empty() {
        builder = builder.from(from);
    }

    match builder.send(&client).await? {
        GatewayResponse::Success { payload } => {
            let pretty =
                serde_json::to_string_pretty(&payload).context("render gateway payload")?;
            println!("{pretty}");
            println!("Message sent.");
            Ok(())
        }
        GatewayResponse::Failed { error_message } => Err(anyhow!(error_message)),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<GatewayConfig> {
    match path {
        Some(path) => GatewayConfig::from_file(path)
            .with_context(|| format!("load config from {}", path.display())),
        None => GatewayConfig::from_env().context("load config from environment"),
    }
}

fn init_tracing(log_level: Option<&str>, debug: bool) -> Result<()> {
    let default_filter = if debug { "sendsms=debug" } else { "info" };
    let filter = EnvFilter::try_new(log_level.unwrap_or(default_filter))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn prompt(message: &str, allow_empty: bool) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(message)
        .allow_empty(allow_empty)
        .interact_text()
        .context("read input")?;
    Ok(value)
}
