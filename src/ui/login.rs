//! Login/register screen

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

use crate::api::{RegisterRequest, UserClient};
use crate::auth::{self, AuthForm, Session, SessionStore};
use crate::cli::{error, spinner, success};
use crate::config::Config;

/// Run the login/register screen until a session exists or the user quits.
///
/// Returns `Some(session)` on a successful login, `None` when the user
/// chooses to quit.
pub(super) async fn run(config: &Config, store: &SessionStore) -> Result<Option<Session>> {
    let term = Term::stdout();
    let theme = ColorfulTheme::default();

    let _ = term.clear_screen();
    println!();
    println!("{}", "Taskpad".bold().cyan());
    println!("{}", "Manage your todos from the terminal".dimmed());
    println!();

    let users = UserClient::new(&config.services.user_url, config.services.timeout_secs)?;
    let mut form = AuthForm::default();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&["Login", "Register", "Quit"])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                form.username = Input::with_theme(&theme)
                    .with_prompt("Username")
                    .with_initial_text(form.username.clone())
                    .interact_text()?;
                form.password = Password::with_theme(&theme)
                    .with_prompt("Password")
                    .interact()?;

                let pb = spinner("Logging in...");
                let result = auth::login(&users, store, &form.username, &form.password).await;
                pb.finish_and_clear();

                match result {
                    Ok(session) => {
                        success(&format!("Logged in as {}", session.user.username));
                        return Ok(Some(session));
                    }
                    Err(e) => error(&auth::login_error_message(&e)),
                }
                form.password.clear();
            }
            1 => {
                form.username = Input::with_theme(&theme)
                    .with_prompt("Username")
                    .with_initial_text(form.username.clone())
                    .interact_text()?;
                form.email = Input::with_theme(&theme)
                    .with_prompt("Email")
                    .with_initial_text(form.email.clone())
                    .interact_text()?;
                form.password = Password::with_theme(&theme)
                    .with_prompt("Password")
                    .interact()?;

                let request = RegisterRequest {
                    username: form.username.clone(),
                    email: form.email.clone(),
                    password: form.password.clone(),
                };

                let pb = spinner("Registering...");
                let result = users.register(&request).await;
                pb.finish_and_clear();

                match result {
                    Ok(()) => {
                        success("Registration successful! Please login.");
                        form.clear();
                    }
                    Err(e) => error(&auth::register_error_message(&e)),
                }
            }
            _ => return Ok(None),
        }
    }
}
