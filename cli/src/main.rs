mod api;
mod render;
mod store;


use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use session::{RegisterRequest, RequestError, Session, UpdateProfileRequest};

use api::ReqwestApi;
use store::FileTokenStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Request(#[from] RequestError),
    #[error("not signed in; run `codepush login` first")]
    NotSignedIn,
    #[error("cannot locate home directory; pass --token-file or set CODEPUSH_TOKEN_FILE")]
    MissingHome,
    #[error("nothing to update; pass at least one non-blank field")]
    NothingToUpdate,
}

#[derive(Parser, Debug)]
#[command(name = "codepush", about = "CodePush account CLI")]
struct Cli {
    #[arg(long, env = "CODEPUSH_API_URL", default_value = "http://localhost:8080")]
    base_url: String,

    #[arg(long, env = "CODEPUSH_TOKEN_FILE", help = "Session token file [default: ~/.codepush/token]")]
    token_file: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and persist the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "CODEPUSH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account.
    Register(RegisterArgs),
    /// Forget the persisted session token.
    Logout,
    /// Show the account dashboard for the persisted session.
    Dashboard,
    /// Change profile fields of the signed-in account.
    UpdateProfile(UpdateProfileArgs),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "CODEPUSH_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    company_name: Option<String>,
    #[arg(long)]
    phone_number: Option<String>,
}

#[derive(Args, Debug)]
struct UpdateProfileArgs {
    #[arg(long)]
    username: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    company_name: Option<String>,
    #[arg(long)]
    phone_number: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

impl From<RegisterArgs> for RegisterRequest {
    fn from(args: RegisterArgs) -> Self {
        Self {
            username: args.username.trim().to_owned(),
            email: args.email.trim().to_owned(),
            password: args.password,
            company_name: non_blank(args.company_name),
            phone_number: non_blank(args.phone_number),
        }
    }
}

impl From<UpdateProfileArgs> for UpdateProfileRequest {
    fn from(args: UpdateProfileArgs) -> Self {
        Self {
            username: non_blank(args.username),
            email: non_blank(args.email),
            company_name: non_blank(args.company_name),
            phone_number: non_blank(args.phone_number),
        }
    }
}

fn default_token_path() -> Result<PathBuf, CliError> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(".codepush").join("token"))
        .ok_or(CliError::MissingHome)
}

fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let token_path = match cli.token_file {
        Some(path) => path,
        None => default_token_path()?,
    };
    tracing::debug!(path = %token_path.display(), base_url = %cli.base_url, "cli context");

    let tokens = FileTokenStore::new(token_path);
    let mut session = Session::new(ReqwestApi::new(&cli.base_url, tokens.clone()), tokens);

    match cli.command {
        Command::Login { email, password } => {
            session.login(email.trim(), &password).await?;
            print_dashboard(&session);
            Ok(())
        }
        Command::Register(args) => {
            let request = RegisterRequest::from(args);
            session.register(&request).await?;
            println!("Account created for {}. Run `codepush login` to sign in.", request.email);
            Ok(())
        }
        Command::Logout => {
            session.logout();
            println!("Logged out.");
            Ok(())
        }
        Command::Dashboard => {
            if !session.restore().await.is_authenticated() {
                return Err(CliError::NotSignedIn);
            }
            print_dashboard(&session);
            Ok(())
        }
        Command::UpdateProfile(args) => {
            let request = UpdateProfileRequest::from(args);
            if request.is_empty() {
                return Err(CliError::NothingToUpdate);
            }
            if !session.restore().await.is_authenticated() {
                return Err(CliError::NotSignedIn);
            }
            session.update_profile(&request).await?;
            print_dashboard(&session);
            Ok(())
        }
    }
}

fn print_dashboard(session: &Session<ReqwestApi, FileTokenStore>) {
    if let Some(user) = session.state().user() {
        print!("{}", render::render_dashboard(user));
    }
}
