//! `hydromap-cli`: terminal access to the hydromap monitoring API.
//!
//! Shares the `api` client and `session` rules with the browser app. The
//! session lives in a JSON file instead of `localStorage`, so a `login`
//! carries over to later invocations until `logout` or a `401`.

mod store;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

use std::path::PathBuf;

use api::{ApiClient, ApiConfig, ApiError};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use session::{Session, SessionEvent, StoreError};
use tracing_subscriber::EnvFilter;

use crate::store::FileStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("missing password; pass --password or set HYDROMAP_PASSWORD")]
    MissingPassword,
    #[error("not signed in; run `hydromap-cli login` first")]
    NotSignedIn,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "hydromap-cli", about = "Hydromap monitoring API CLI")]
struct Cli {
    #[arg(long, env = "HYDROMAP_API_URL", default_value = api::config::DEFAULT_API_URL)]
    base_url: String,

    #[arg(long, env = "HYDROMAP_SESSION_FILE", default_value = ".hydromap-session.json")]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the issued token.
    Login(LoginArgs),
    /// Forget the stored token and user.
    Logout,
    /// Show whether a token is stored, without contacting the server.
    Status,
    /// Fetch the signed-in user's profile.
    Whoami,
    Points(PointsCommand),
    Measurements(MeasurementsCommand),
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    username: String,
    #[arg(long, env = "HYDROMAP_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Args, Debug)]
struct PointsCommand {
    #[command(subcommand)]
    command: PointsSubcommand,
}

#[derive(Subcommand, Debug)]
enum PointsSubcommand {
    List,
    Show { code: String },
}

#[derive(Args, Debug)]
struct MeasurementsCommand {
    #[command(subcommand)]
    command: MeasurementsSubcommand,
}

#[derive(Subcommand, Debug)]
enum MeasurementsSubcommand {
    List { code: String },
    Stats { code: String },
    Latest,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    authenticated: bool,
    user: Option<session::UserProfile>,
    session_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = Session::new(FileStore::open(&cli.session_file)?);
    session.events().subscribe(|event| {
        if event == SessionEvent::Expired {
            eprintln!("session expired; run `hydromap-cli login` again");
        }
    });

    let mut config = ApiConfig::from_env()?;
    config.base_url = ApiConfig::new(&cli.base_url)?.base_url;
    let client = ApiClient::new(config, session.clone())?;

    match cli.command {
        Command::Login(args) => run_login(&client, args).await,
        Command::Logout => {
            client.logout();
            println!("signed out");
            Ok(())
        }
        Command::Status => print_json(&StatusReport {
            authenticated: session.is_authenticated(),
            user: session.user(),
            session_file: cli.session_file,
        }),
        Command::Whoami => {
            require_token(&session)?;
            print_json(&client.current_user().await?)
        }
        Command::Points(points) => run_points(&client, points).await,
        Command::Measurements(measurements) => run_measurements(&client, measurements).await,
    }
}

async fn run_login(client: &ApiClient, args: LoginArgs) -> Result<(), CliError> {
    let password = resolve_password(args.password)?;
    let payload = client.login(&args.username, &password).await?;
    if !client.session().is_authenticated() {
        tracing::warn!("server response carried no access token");
    }
    print_json(&redact_token(payload))
}

async fn run_points(client: &ApiClient, points: PointsCommand) -> Result<(), CliError> {
    require_token(client.session())?;
    match points.command {
        PointsSubcommand::List => print_json(&client.points().await?),
        PointsSubcommand::Show { code } => print_json(&client.point_detail(&code).await?),
    }
}

async fn run_measurements(client: &ApiClient, measurements: MeasurementsCommand) -> Result<(), CliError> {
    require_token(client.session())?;
    match measurements.command {
        MeasurementsSubcommand::List { code } => print_json(&client.measurements(&code).await?),
        MeasurementsSubcommand::Stats { code } => print_json(&client.measurement_stats(&code).await?),
        MeasurementsSubcommand::Latest => print_json(&client.latest_measurements().await?),
    }
}

fn resolve_password(password: Option<String>) -> Result<String, CliError> {
    password.filter(|p| !p.is_empty()).ok_or(CliError::MissingPassword)
}

fn require_token(session: &Session) -> Result<(), CliError> {
    if session.is_authenticated() { Ok(()) } else { Err(CliError::NotSignedIn) }
}

/// The token is already in the session file; keep it out of stdout.
fn redact_token(mut payload: serde_json::Value) -> serde_json::Value {
    if let Some(token) = payload.get_mut("access_token") {
        if token.is_string() {
            *token = serde_json::Value::String("<stored>".to_owned());
        }
    }
    payload
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
