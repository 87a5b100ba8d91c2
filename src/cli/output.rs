//! CLI output formatting utilities

use std::time::Duration;

use chrono::NaiveDateTime;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::Todo;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Spinner shown while a network request is in flight
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}").expect("invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Format a server timestamp for display, falling back to the raw string
/// when it doesn't parse.
pub fn format_created_at(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Print a table of todos
pub fn print_todo_table(todos: &[Todo]) {
    if todos.is_empty() {
        info("No todos yet. Create your first todo with 'taskpad add <title>'");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
            Cell::new("Title").fg(Color::Cyan),
            Cell::new("Description").fg(Color::Cyan),
            Cell::new("Created").fg(Color::Cyan),
        ]);

    for todo in todos {
        let (status, status_color) = if todo.completed {
            ("done", Color::Green)
        } else {
            ("open", Color::Yellow)
        };

        table.add_row(vec![
            Cell::new(todo.id),
            Cell::new(status).fg(status_color),
            Cell::new(&todo.title),
            Cell::new(todo.description.as_deref().unwrap_or("-")),
            Cell::new(format_created_at(&todo.created_at)),
        ]);
    }

    println!("{table}");
}

/// One-line label for a todo, used by interactive selection lists
pub fn todo_label(todo: &Todo) -> String {
    let marker = if todo.completed { "[x]" } else { "[ ]" };
    format!("{} {} (#{})", marker, todo.title, todo.id)
}

/// Confirm an action with the user
pub fn confirm(message: &str) -> bool {
    use std::io::{self, Write};

    print!("{} [y/N] ", message);
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(completed: bool) -> Todo {
        Todo {
            id: 42,
            title: "Write report".to_string(),
            description: None,
            completed,
            user_id: 1,
            created_at: "2025-01-15 10:30:00.123456".to_string(),
        }
    }

    #[test]
    fn created_at_parses_service_format() {
        assert_eq!(
            format_created_at("2025-01-15 10:30:00.123456"),
            "2025-01-15 10:30"
        );
    }

    #[test]
    fn created_at_falls_back_to_raw() {
        assert_eq!(format_created_at("whenever"), "whenever");
    }

    #[test]
    fn todo_label_marks_completion() {
        assert_eq!(todo_label(&todo(true)), "[x] Write report (#42)");
        assert_eq!(todo_label(&todo(false)), "[ ] Write report (#42)");
    }
}
