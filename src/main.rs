use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod auth;
mod cli;
mod config;
mod error;
mod todo;
mod ui;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskpad=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Login { username }) => cli::commands::login(username).await,
        Some(Commands::Register { username, email }) => {
            cli::commands::register(username, email).await
        }
        Some(Commands::Logout) => cli::commands::logout().await,
        Some(Commands::Whoami) => cli::commands::whoami().await,
        Some(Commands::List { format }) => cli::commands::list(format).await,
        Some(Commands::Add { title, description }) => {
            cli::commands::add(&title, description).await
        }
        Some(Commands::Done { id }) => cli::commands::set_completed(id, true).await,
        Some(Commands::Undone { id }) => cli::commands::set_completed(id, false).await,
        Some(Commands::Rm { id, force }) => cli::commands::rm(id, force).await,
        Some(Commands::Init) => cli::commands::init().await,
        Some(Commands::Doctor) => cli::commands::doctor().await,
        None => cli::commands::interactive().await,
    }
}
