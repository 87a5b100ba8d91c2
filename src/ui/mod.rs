//! Interactive terminal UI
//!
//! Two screens make up the whole application: the login/register screen and
//! the todo screen. `run` is the app shell: it restores a persisted session,
//! decides which screen to show, and carries the session between them.

mod login;
mod todos;

use anyhow::Result;

use crate::auth::SessionStore;
use crate::config::Config;

/// Run the interactive mode until the user quits.
pub async fn run(config: &Config) -> Result<()> {
    let store = SessionStore::new(config.session.resolved_file());
    let mut session = store.restore();

    loop {
        match session.take() {
            None => match login::run(config, &store).await? {
                Some(fresh) => session = Some(fresh),
                // User chose to quit from the login screen.
                None => return Ok(()),
            },
            Some(current) => match todos::run(config, &store, &current).await? {
                todos::Outcome::Logout => session = None,
                todos::Outcome::Quit => return Ok(()),
            },
        }
    }
}
