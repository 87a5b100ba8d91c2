//! CLI command implementations

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use std::fs;

use crate::api::{self, RegisterRequest, TodoClient, UpdateTodo, UserClient};
use crate::auth::{self, Session, SessionStore};
use crate::cli::{confirm, error, info, print_todo_table, spinner, success, warn, OutputFormat};
use crate::config::{self, Config};
use crate::error::Error;
use crate::todo::TodoList;
use crate::ui;

/// Log in and persist the session
pub async fn login(username: Option<String>) -> Result<()> {
    let config = config::load_config()?;
    let theme = ColorfulTheme::default();

    let username = match username {
        Some(username) => username,
        None => Input::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    let users = UserClient::new(&config.services.user_url, config.services.timeout_secs)?;
    let store = SessionStore::new(config.session.resolved_file());

    let pb = spinner("Logging in...");
    let result = auth::login(&users, &store, &username, &password).await;
    pb.finish_and_clear();

    match result {
        Ok(session) => {
            success(&format!("Logged in as {}", session.user.username));
            Ok(())
        }
        Err(e) => {
            error(&auth::login_error_message(&e));
            Err(e.into())
        }
    }
}

/// Create a new account
pub async fn register(username: Option<String>, email: Option<String>) -> Result<()> {
    let config = config::load_config()?;
    let theme = ColorfulTheme::default();

    let username = match username {
        Some(username) => username,
        None => Input::with_theme(&theme)
            .with_prompt("Username")
            .interact_text()?,
    };
    let email = match email {
        Some(email) => email,
        None => Input::with_theme(&theme)
            .with_prompt("Email")
            .interact_text()?,
    };
    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    let users = UserClient::new(&config.services.user_url, config.services.timeout_secs)?;
    let form = RegisterRequest {
        username,
        email,
        password,
    };

    let pb = spinner("Registering...");
    let result = users.register(&form).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            success("Registration successful! Please login.");
            info("Run 'taskpad login' to sign in");
            Ok(())
        }
        Err(e) => {
            error(&auth::register_error_message(&e));
            Err(e.into())
        }
    }
}

/// Clear the stored session
pub async fn logout() -> Result<()> {
    let config = config::load_config()?;
    let store = SessionStore::new(config.session.resolved_file());

    if store.restore().is_none() {
        info("Not logged in");
        return Ok(());
    }

    store.logout()?;
    success("Logged out");
    Ok(())
}

/// Show the current session's user
pub async fn whoami() -> Result<()> {
    let config = config::load_config()?;
    let store = SessionStore::new(config.session.resolved_file());

    match store.restore() {
        Some(session) => {
            println!(
                "Logged in as {} ({})",
                session.user.username, session.user.email
            );
            Ok(())
        }
        None => {
            info("Not logged in. Run 'taskpad login' first.");
            Ok(())
        }
    }
}

/// List todos in the requested format
pub async fn list(format: OutputFormat) -> Result<()> {
    let config = config::load_config()?;
    let (_session, client) = open_session(&config)?;

    let mut todos = TodoList::new();
    let pb = spinner("Fetching todos...");
    let result = todos.fetch(&client).await;
    pb.finish_and_clear();

    if let Err(e) = result {
        error(&format!("Failed to fetch todos: {}", e));
        return Err(e.into());
    }

    match format {
        OutputFormat::Table => {
            print_todo_table(todos.todos());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(todos.todos())?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(todos.todos())?;
            println!("{}", yaml);
        }
    }

    Ok(())
}

/// Create a new todo
pub async fn add(title: &str, description: Option<String>) -> Result<()> {
    let config = config::load_config()?;
    let (_session, client) = open_session(&config)?;

    let mut todos = TodoList::new();
    let pb = spinner("Creating todo...");
    let result = todos.create(&client, title, description).await;
    pb.finish_and_clear();

    match result {
        Ok(todo) => {
            success(&format!("Added todo #{}: {}", todo.id, todo.title));
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to create todo: {}", e));
            Err(e.into())
        }
    }
}

/// Set a todo's completed flag
pub async fn set_completed(id: i64, completed: bool) -> Result<()> {
    let config = config::load_config()?;
    let (_session, client) = open_session(&config)?;

    let pb = spinner("Updating todo...");
    let result = client.update(id, &UpdateTodo::completed(completed)).await;
    pb.finish_and_clear();

    match result {
        Ok(todo) => {
            // Report the server's state, not the requested one.
            let state = if todo.completed { "done" } else { "open" };
            success(&format!("Todo #{} '{}' is now {}", todo.id, todo.title, state));
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to update todo: {}", e));
            Err(e.into())
        }
    }
}

/// Delete a todo
pub async fn rm(id: i64, force: bool) -> Result<()> {
    let config = config::load_config()?;
    let (_session, client) = open_session(&config)?;

    if !force && !confirm(&format!("Are you sure you want to delete todo #{}?", id)) {
        info("Cancelled");
        return Ok(());
    }

    let pb = spinner("Deleting todo...");
    let result = client.delete(id).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => {
            success(&format!("Deleted todo #{}", id));
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to delete todo: {}", e));
            Err(e.into())
        }
    }
}

/// Initialize a new taskpad.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("taskpad.toml");

    if config_path.exists() {
        warn("taskpad.toml already exists");
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success("Created taskpad.toml");
    info("Edit the configuration file to point taskpad at your services");

    Ok(())
}

/// Check connectivity to both services
pub async fn doctor() -> Result<()> {
    let config = config::load_config()?;

    info("Checking service connectivity...");
    let mut all_ok = true;

    let services = [
        ("user service", &config.services.user_url),
        ("todo service", &config.services.todo_url),
    ];
    for (name, url) in services {
        match api::check_health(url).await {
            Ok(health) if health.status == "healthy" => {
                success(&format!("{} at {} is healthy", name, url));
            }
            Ok(health) => {
                warn(&format!("{} at {} reports status '{}'", name, url, health.status));
                all_ok = false;
            }
            Err(e) => {
                error(&format!("{} at {} is unreachable: {}", name, url, e));
                all_ok = false;
            }
        }
    }

    if all_ok {
        success("All services are reachable");
    } else {
        warn("Some checks failed. Verify the URLs in taskpad.toml and that the services are running.");
    }

    Ok(())
}

/// Start the interactive two-screen mode
pub async fn interactive() -> Result<()> {
    let config = config::load_config()?;
    ui::run(&config).await
}

/// Restore the persisted session and build a todo client for it
fn open_session(config: &Config) -> Result<(Session, TodoClient)> {
    let store = SessionStore::new(config.session.resolved_file());
    let session = store.restore().ok_or(Error::NotLoggedIn)?;
    let client = TodoClient::new(
        &config.services.todo_url,
        &session.token,
        config.services.timeout_secs,
    )?;
    Ok((session, client))
}
