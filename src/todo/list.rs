//! Client-held todo list, kept in sync with the todo service
//!
//! The list never merges: it holds whatever the last successful fetch or
//! mutation returned. Every mutation goes to the server first and only
//! touches local state with the server's response.

use crate::api::{CreateTodo, Todo, TodoClient, UpdateTodo};
use crate::error::{Error, Result};

/// The authenticated user's todos as last seen from the server.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Replace the list wholesale with the server's current state.
    pub async fn fetch(&mut self, client: &TodoClient) -> Result<()> {
        self.todos = client.list().await?;
        Ok(())
    }

    /// Create a todo and prepend the server-returned item.
    ///
    /// An empty or whitespace-only title is rejected before any network
    /// call is made.
    pub async fn create(
        &mut self,
        client: &TodoClient,
        title: &str,
        description: Option<String>,
    ) -> Result<Todo> {
        if title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        let input = CreateTodo {
            title: title.to_string(),
            description: description.filter(|d| !d.trim().is_empty()),
        };
        let created = client.create(&input).await?;
        self.todos.insert(0, created.clone());
        Ok(created)
    }

    /// Set a todo's completed flag and replace the local item with the
    /// server's returned state.
    pub async fn toggle(&mut self, client: &TodoClient, id: i64, completed: bool) -> Result<Todo> {
        let updated = client.update(id, &UpdateTodo::completed(completed)).await?;
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Delete a todo on the server, then drop it from the local list.
    pub async fn remove(&mut self, client: &TodoClient, id: i64) -> Result<()> {
        client.delete(id).await?;
        self.todos.retain(|t| t.id != id);
        Ok(())
    }
}
