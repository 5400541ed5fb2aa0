use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// A stored to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Client-supplied fields of a record, without identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(u64),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// In-memory ordered todo list.
///
/// Records keep insertion order. Identifiers come from a counter that only
/// grows, so an id is never handed out twice even after the record is gone.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// All records in insertion order
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: u64) -> StoreResult<&Todo> {
        self.todos
            .iter()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new record under the next identifier
    pub fn create(&mut self, draft: TodoDraft) -> Todo {
        let todo = Todo {
            id: self.next_id,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());

        debug!(id = todo.id, total = self.todos.len(), "Todo appended");
        todo
    }

    /// Replace every field but the identifier, keeping the record's position
    pub fn update(&mut self, id: u64, draft: TodoDraft) -> StoreResult<Todo> {
        let slot = self
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;

        *slot = Todo {
            id,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
        };

        Ok(slot.clone())
    }

    /// Remove a record, returning it
    pub fn delete(&mut self, id: u64) -> StoreResult<Todo> {
        let index = self
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;

        Ok(self.todos.remove(index))
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
