#![allow(dead_code)]
use std::sync::Arc;

use crate::storage::{FlushStorage, NewTodo, Todo, TodoStorage};
use sled::Config;

use super::SledStorage;

pub struct TestStorageBuilder {
    texts: Vec<String>,
    todos: Vec<Todo>,
    todo_storage: Arc<dyn TodoStorage>,
    flush_storage: Arc<dyn FlushStorage>,
}

impl TestStorageBuilder {
    pub fn new() -> Self {
        let config = Config::new().temporary(true);
        let db = config.open().unwrap();
        let sled_storage = Arc::new(SledStorage::from_db(&db).unwrap());
        Self {
            texts: Vec::new(),
            todos: Vec::new(),
            todo_storage: sled_storage.clone() as Arc<dyn TodoStorage>,
            flush_storage: sled_storage.clone() as Arc<dyn FlushStorage>,
        }
    }

    pub fn with_todos(mut self, count: usize) -> Self {
        self.texts = (0..count).map(|i| format!("todo {}", i)).collect();
        self
    }

    /// Saves the seeded todos; the stored records are available via `todos()`.
    pub async fn build_todo(&mut self) -> Arc<dyn TodoStorage> {
        for text in &self.texts {
            let todo = self
                .todo_storage
                .save(NewTodo { text: text.clone() })
                .await
                .unwrap();
            self.todos.push(todo);
        }

        self.todo_storage.clone()
    }

    pub async fn build_flush(&self) -> Arc<dyn FlushStorage> {
        self.flush_storage.clone()
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.todos.clone()
    }
}

impl Default for TestStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
