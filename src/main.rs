//! Auth backend CLI — account operations and backend diagnostics.

use clap::{Parser, Subcommand};
use serde_json::Value;

use authkit::auth::{AuthClient, AuthError};
use authkit::config::BackendConfig;
use authkit::diag;
use authkit::session::{Session, SessionError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing backend base URL; pass --base-url or set AUTHKIT_BASE_URL")]
    MissingBaseUrl,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("invalid JSON output: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "authkit", about = "Auth backend client and diagnostics CLI")]
struct Cli {
    #[arg(long, env = "AUTHKIT_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account, then log in with the same credentials
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and store the issued bearer token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored bearer token
    Logout,
    /// Show whether a session token is stored
    Status,
    /// Print the raw stored token (exit 1 when logged out)
    Token,
    /// Probe the backend endpoints and print the report
    Diag,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cli.base_url.map(BackendConfig::new);

    match cli.command {
        Command::Register { email, password } => {
            let client = auth_client(config)?;
            let outcome = client.register(&email, &password).await?;
            println!("registered and logged in as {}", outcome.user.email);
            Ok(())
        }
        Command::Login { email, password } => {
            let client = auth_client(config)?;
            let outcome = client.login(&email, &password).await?;
            println!("logged in as {}", outcome.user.email);
            Ok(())
        }
        Command::Logout => {
            Session::from_config_dir()?.clear()?;
            println!("logged out");
            Ok(())
        }
        Command::Status => {
            if Session::from_config_dir()?.is_authenticated() {
                println!("authenticated");
            } else {
                println!("anonymous");
            }
            Ok(())
        }
        Command::Token => match Session::from_config_dir()?.token()? {
            Some(token) => {
                println!("{token}");
                Ok(())
            }
            None => std::process::exit(1),
        },
        Command::Diag => {
            // Missing config renders an error report instead of failing.
            let report = diag::run(config.as_ref()).await;
            print_json(&serde_json::to_value(&report)?)?;
            Ok(())
        }
    }
}

fn auth_client(config: Option<BackendConfig>) -> Result<AuthClient, CliError> {
    let config = config.ok_or(CliError::MissingBaseUrl)?;
    Ok(AuthClient::new(&config, Session::from_config_dir()?))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
