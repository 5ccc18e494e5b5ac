use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use learnx_core::AdminError;
use learnx_core::listing::{AccountFilter, ROWS_PER_PAGE_OPTIONS, RoleFilter, StatusFilter};
use learnx_core::role_request::RoleDecision;
use learnx_infrastructure::LearnxPaths;
use std::path::PathBuf;

mod app;
mod commands;
mod logging;
mod render;

use app::App;

#[derive(Parser)]
#[command(name = "learnx-admin")]
#[command(version, about = "LearnX Admin - manage accounts, role requests and your profile", long_about = None)]
struct Cli {
    /// Directory holding config.toml, the session and logs
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with an administrator account
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long, env = "LEARNX_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    SignOut,
    /// Show the signed-in user
    Whoami,
    /// List user accounts
    Accounts {
        /// Case-insensitive match on name or email
        #[arg(long, default_value = "")]
        search: String,
        /// all, admin, teacher or student
        #[arg(long, default_value = "all")]
        role: RoleFilter,
        /// all, active, inactive or pending
        #[arg(long, default_value = "all")]
        status: StatusFilter,
        /// One-based page number
        #[arg(long, default_value_t = 1, value_parser = parse_page)]
        page: usize,
        /// Rows per page: 5, 10 or 25
        #[arg(long, value_parser = parse_rows)]
        rows: Option<usize>,
    },
    /// Review role-change requests
    Requests {
        #[command(subcommand)]
        action: RequestsAction,
    },
    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Show the dashboard navigation
    Nav {
        /// Route or entry key to mark as active
        #[arg(long, value_name = "ROUTE")]
        current: Option<String>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum RequestsAction {
    /// List requests
    List {
        /// One-based page number
        #[arg(long, default_value_t = 1, value_parser = parse_page)]
        page: usize,
        /// Rows per page: 5, 10 or 25
        #[arg(long, value_parser = parse_rows)]
        rows: Option<usize>,
    },
    /// Approve a pending request
    Accept { id: i64 },
    /// Reject a pending request
    Reject { id: i64 },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the cached profile
    Show,
    /// Change name and/or email
    Update {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
}

fn parse_page(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(format!("'{}' is not a page number (pages start at 1)", value)),
    }
}

fn parse_rows(value: &str) -> std::result::Result<usize, String> {
    let rows: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if ROWS_PER_PAGE_OPTIONS.contains(&rows) {
        Ok(rows)
    } else {
        Err(format!("rows per page must be one of {:?}", ROWS_PER_PAGE_OPTIONS))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LearnxPaths::new(cli.config_dir.as_deref())?;
    let app = App::new(&paths);
    let level = app
        .config_service
        .get_config()
        .map(|config| config.log_level)
        .unwrap_or_default();
    let _log_guard = logging::init(&paths, &level);
    tracing::debug!("Using config directory {}", paths.config_dir().display());

    let result = run(&app, cli.command).await;
    if let Err(err) = &result {
        if let Some(admin_err) = err.downcast_ref::<AdminError>() {
            if admin_err.is_unauthorized() {
                eprintln!(
                    "{}",
                    "Your session is missing or expired. Run `learnx-admin sign-in` again."
                        .yellow()
                );
            }
        }
    }
    result
}

async fn run(app: &App, command: Commands) -> Result<()> {
    match command {
        Commands::SignIn { email, password } => commands::auth::sign_in(app, email, password).await,
        Commands::SignOut => commands::auth::sign_out(app).await,
        Commands::Whoami => commands::auth::whoami(app).await,
        Commands::Accounts {
            search,
            role,
            status,
            page,
            rows,
        } => {
            let args = commands::accounts::AccountsArgs {
                filter: AccountFilter::new(search, role, status),
                page,
                rows,
            };
            commands::accounts::list(app, args).await
        }
        Commands::Requests { action } => match action {
            RequestsAction::List { page, rows } => commands::requests::list(app, page, rows).await,
            RequestsAction::Accept { id } => {
                commands::requests::decide(app, id, RoleDecision::Approve).await
            }
            RequestsAction::Reject { id } => {
                commands::requests::decide(app, id, RoleDecision::Reject).await
            }
        },
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(app).await,
            ProfileAction::Update { full_name, email } => {
                commands::profile::update(app, full_name, email).await
            }
        },
        Commands::Nav { current } => commands::nav::show(app, current.as_deref()),
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config::init(app, force),
            ConfigAction::Show => commands::config::show(app),
        },
    }
}
