//! Viorra CLI - drive the storefront core from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Create the local account
//! viorra register -n "Ada" -e ada@example.com -p secret -c secret
//!
//! # Log in with it
//! viorra login -e ada@example.com -p secret
//!
//! # Browse the catalog
//! viorra products --search phone
//! viorra products --wish 121 --wish 130
//! viorra product 121
//!
//! # Show and clear the session
//! viorra profile
//! viorra logout
//! ```
//!
//! # Environment Variables
//!
//! See `viorra_storefront::config` for the full list. `RUST_LOG` controls
//! log verbosity (default: warnings only).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use viorra_core::ProductId;
use viorra_storefront::config::StorefrontConfig;
use viorra_storefront::error::AppError;
use viorra_storefront::notify::Notifier;
use viorra_storefront::services::auth::RegistrationForm;
use viorra_storefront::state::AppState;

mod commands;
mod output;

use output::TerminalNotifier;

#[derive(Parser)]
#[command(name = "viorra")]
#[command(author, version, about = "Viorra storefront from the terminal")]
struct Cli {
    /// Override the directory holding local session data
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the local account (replaces any existing one)
    Register {
        /// Display name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Email address
        #[arg(short, long, default_value = "")]
        email: String,

        /// Password
        #[arg(short, long, default_value = "")]
        password: String,

        /// Password confirmation
        #[arg(short = 'c', long, default_value = "")]
        confirm_password: String,

        /// Avatar image URL
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Log in with the local account
    Login {
        /// Email address
        #[arg(short, long, default_value = "")]
        email: String,

        /// Password
        #[arg(short, long, default_value = "")]
        password: String,
    },
    /// Clear the local account
    Logout,
    /// Show the stored account
    Profile,
    /// List products, optionally filtered by title
    Products {
        /// Case-insensitive title search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Toggle these product IDs on the wishlist and print it
        #[arg(short, long = "wish", value_name = "ID")]
        wish: Vec<ProductId>,
    },
    /// Show one product in detail
    Product {
        /// Product ID
        id: ProductId,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::debug!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        tracing::Level::TRACE => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let notifier = TerminalNotifier;

    let mut config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            notifier.show(AppError::from(e).into_toast());
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "viorra_storefront=warn,viorra=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            notifier.show(AppError::from(e).into_toast());
            return ExitCode::FAILURE;
        }
    };

    match run(&state, cli.command, &notifier).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            notifier.show(e.into_toast());
            ExitCode::FAILURE
        }
    }
}

async fn run(
    state: &AppState,
    command: Commands,
    notifier: &TerminalNotifier,
) -> Result<(), AppError> {
    match command {
        Commands::Register {
            name,
            email,
            password,
            confirm_password,
            avatar,
        } => {
            let form = RegistrationForm {
                name,
                email,
                password,
                confirm_password,
                avatar,
            };
            commands::auth::register(state, &form, notifier).await
        }
        Commands::Login { email, password } => {
            commands::auth::login(state, &email, &password, notifier).await
        }
        Commands::Logout => commands::auth::logout(state, notifier).await,
        Commands::Profile => {
            commands::auth::profile(state).await;
            Ok(())
        }
        Commands::Products { search, wish } => {
            commands::catalog::list(state, &search, &wish).await
        }
        Commands::Product { id } => commands::catalog::show(state, id).await,
    }
}
