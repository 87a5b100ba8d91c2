//! Todo screen

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, FuzzySelect, Input, Select};

use crate::api::TodoClient;
use crate::auth::{Session, SessionStore};
use crate::cli::{error, info, print_todo_table, spinner, success, todo_label, warn};
use crate::config::Config;
use crate::error::Error;
use crate::todo::TodoList;

/// How the user left the todo screen.
pub(super) enum Outcome {
    Logout,
    Quit,
}

/// Run the todo screen until the user logs out or quits.
pub(super) async fn run(
    config: &Config,
    store: &SessionStore,
    session: &Session,
) -> Result<Outcome> {
    let theme = ColorfulTheme::default();
    let client = TodoClient::new(
        &config.services.todo_url,
        &session.token,
        config.services.timeout_secs,
    )?;
    let mut list = TodoList::new();

    println!();
    info(&format!("Welcome, {}!", session.user.username));

    refresh(&client, &mut list).await;

    loop {
        println!();
        print_todo_table(list.todos());
        println!();

        let choice = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&[
                "Add a todo",
                "Toggle a todo",
                "Delete a todo",
                "Refresh",
                "Logout",
                "Quit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => add_todo(&theme, &client, &mut list).await?,
            1 => toggle_todo(&theme, &client, &mut list).await?,
            2 => delete_todo(&theme, &client, &mut list).await?,
            3 => refresh(&client, &mut list).await,
            4 => {
                store.logout()?;
                success("Logged out");
                return Ok(Outcome::Logout);
            }
            _ => return Ok(Outcome::Quit),
        }
    }
}

async fn refresh(client: &TodoClient, list: &mut TodoList) {
    let pb = spinner("Fetching todos...");
    let result = list.fetch(client).await;
    pb.finish_and_clear();

    if let Err(e) = result {
        error(&format!("Failed to fetch todos: {}", e));
    }
}

async fn add_todo(theme: &ColorfulTheme, client: &TodoClient, list: &mut TodoList) -> Result<()> {
    let title: String = Input::with_theme(theme)
        .with_prompt("Todo title")
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(theme)
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()?;

    let description = if description.trim().is_empty() {
        None
    } else {
        Some(description)
    };

    let pb = spinner("Creating todo...");
    let result = list.create(client, &title, description).await;
    pb.finish_and_clear();

    match result {
        Ok(todo) => success(&format!("Added todo #{}: {}", todo.id, todo.title)),
        Err(Error::EmptyTitle) => warn("Todo title cannot be empty"),
        Err(e) => error(&format!("Failed to create todo: {}", e)),
    }
    Ok(())
}

async fn toggle_todo(
    theme: &ColorfulTheme,
    client: &TodoClient,
    list: &mut TodoList,
) -> Result<()> {
    let Some((id, completed)) = pick_todo(theme, list, "Which todo?")? else {
        return Ok(());
    };

    let pb = spinner("Updating todo...");
    let result = list.toggle(client, id, !completed).await;
    pb.finish_and_clear();

    match result {
        Ok(todo) => {
            let state = if todo.completed { "done" } else { "open" };
            success(&format!("Todo #{} '{}' is now {}", todo.id, todo.title, state));
        }
        Err(e) => error(&format!("Failed to update todo: {}", e)),
    }
    Ok(())
}

async fn delete_todo(
    theme: &ColorfulTheme,
    client: &TodoClient,
    list: &mut TodoList,
) -> Result<()> {
    let Some((id, _)) = pick_todo(theme, list, "Delete which todo?")? else {
        return Ok(());
    };

    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Are you sure you want to delete todo #{}?", id))
        .default(false)
        .interact()?;
    if !confirmed {
        info("Cancelled");
        return Ok(());
    }

    let pb = spinner("Deleting todo...");
    let result = list.remove(client, id).await;
    pb.finish_and_clear();

    match result {
        Ok(()) => success(&format!("Deleted todo #{}", id)),
        Err(e) => error(&format!("Failed to delete todo: {}", e)),
    }
    Ok(())
}

/// Pick a todo from the current list. Returns its id and completed flag.
fn pick_todo(
    theme: &ColorfulTheme,
    list: &TodoList,
    prompt: &str,
) -> Result<Option<(i64, bool)>> {
    if list.is_empty() {
        warn("No todos yet");
        return Ok(None);
    }

    let labels: Vec<String> = list.todos().iter().map(todo_label).collect();
    let index = FuzzySelect::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    let todo = &list.todos()[index];
    Ok(Some((todo.id, todo.completed)))
}
