pub mod memory;

pub use memory::{StoreError, Todo, TodoDraft, TodoStore};
