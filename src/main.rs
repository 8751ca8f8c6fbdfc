use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dashboard_client::config::ConfigError;
use dashboard_client::router::scroll::ScrollPosition;
use dashboard_client::{AuthError, ClientConfig, DashboardClient};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing password; pass --password or set DASHBOARD_PASSWORD")]
    MissingPassword,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "dashboard", about = "Detection dashboard session client")]
struct Cli {
    #[arg(long, env = "DASHBOARD_API_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "DASHBOARD_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a session and persist it.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "DASHBOARD_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the stored session.
    Logout,
    /// Report whether a session is stored. No network access.
    Status,
    /// Print the current user's profile.
    Whoami,
    /// Print the detection feed.
    Detections,
    /// Run the navigation guard for a location and print where it lands.
    Navigate {
        location: String,
        /// Saved vertical scroll offset, as restored by back/forward.
        #[arg(long)]
        saved_top: Option<f64>,
    },
}

#[derive(Serialize)]
struct StatusReport {
    authenticated: bool,
    account_id: Option<i64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::new(cli.base_url.as_deref(), cli.session_file)?;
    tracing::debug!(base_url = %config.base_url, session_file = %config.session_file.display(), "config loaded");
    let client = DashboardClient::from_config(&config);

    match cli.command {
        Command::Login { email, password } => {
            let password = password.ok_or(CliError::MissingPassword)?;
            let session = client.auth.login(&email, &password).await?;
            println!("logged in (account {})", session.account_id);
        }
        Command::Logout => {
            client.auth.logout();
            println!("logged out");
        }
        Command::Status => {
            let report = StatusReport {
                authenticated: client.auth.is_authenticated(),
                account_id: client.auth.account_id(),
            };
            print_json(&report)?;
        }
        Command::Whoami => {
            let profile = client.fetch.current_profile().await?;
            print_json(&profile)?;
        }
        Command::Detections => {
            let feed = client.fetch.detections().await?;
            print_json(&feed)?;
        }
        Command::Navigate { location, saved_top } => {
            let saved = saved_top.map(|top| ScrollPosition { left: 0.0, top });
            let navigation = client.router.navigate(&location, saved);
            print_json(&navigation)?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
