//! CLI interface for taskpad

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(version)]
#[command(about = "Manage your todos from the terminal", long_about = None)]
pub struct Cli {
    /// Without a subcommand, taskpad starts in interactive mode
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in to the todo service
    Login {
        /// Username (prompted for if omitted)
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Create a new account
    Register {
        /// Username (prompted for if omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Email address (prompted for if omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Log out and clear the stored session
    Logout,

    /// Show the currently logged-in user
    Whoami,

    /// List your todos
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Add a new todo
    Add {
        /// Todo title
        title: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Mark a todo as completed
    Done {
        /// ID of the todo
        id: i64,
    },

    /// Mark a todo as not completed
    Undone {
        /// ID of the todo
        id: i64,
    },

    /// Delete a todo
    Rm {
        /// ID of the todo
        id: i64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Initialize a new taskpad.toml configuration file
    Init,

    /// Check connectivity to the user and todo services
    Doctor,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
