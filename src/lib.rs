//! Taskpad - Manage your todos from the terminal
//!
//! This is the library interface for taskpad, a client for the DevOps Todo
//! service's user and todo APIs.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod todo;
pub mod ui;

pub use config::Config;
pub use error::Error;
pub use todo::TodoList;
