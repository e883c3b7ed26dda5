use crate::storage::TodoId;
use crate::trace_err;
use crate::utils::measure_metrics::measure_and_record_storage;

use super::error::SledStorageError;
use super::internal::{
    span_wrappers::{
        deserialize_in_span, deserialize_in_transaction_with_span,
        get_value_in_transaction_with_span, get_value_with_span,
        insert_value_in_transaction_with_span, insert_value_with_span, remove_value_with_span,
        scan_values_with_span, serialize_in_span, serialize_in_transaction_with_span,
    },
    KeyPrefix, PrefixKind,
};
use super::todo_key;
use super::{BincodeConfig, SledStorage};
use super::{NewTodo, StorageError, Todo, TodoPatch, TodoStorage, TodoVersion};
use async_trait::async_trait;
use sled::{transaction::ConflictableTransactionResult, Tree};
use tracing::{info, info_span, instrument, warn, Span};

#[async_trait]
impl TodoStorage for SledStorage {
    #[instrument(name = "SledStorage::find_all_todos", skip_all)]
    async fn find_all(&self) -> Result<Vec<Todo>, StorageError> {
        // cloning tree should be cheap: struct Tree{inner: Arc<TreeInner>}
        let (todo_tree, bincode_config) = info_span!("Cloning trees and config")
            .in_scope(|| (self.todo_tree.clone(), self.bincode_config));

        let span = Span::current();
        tokio::task::spawn_blocking(move || {
            span.in_scope(|| find_all_todos(&todo_tree, &bincode_config))
        })
        .await?
    }

    #[instrument(name = "SledStorage::save_todo", skip_all)]
    async fn save(&self, new: NewTodo) -> Result<Todo, StorageError> {
        let todo_id = TodoId::new();
        info!(todo_id = %todo_id, "save todo");

        measure_and_record_storage("SledStorage::save_todo", || {
            let key = todo_key(&todo_id);
            let todo = Todo::new(todo_id, new);

            let encoded: Vec<u8> = trace_err!(
                serialize_in_span(&self.bincode_config, &TodoVersion::from(todo.clone())),
                "failed to bin encode todo"
            )?;

            trace_err!(
                insert_value_with_span(&key, &encoded, &self.todo_tree),
                "failed to write todo into storage"
            )?;

            Ok::<Todo, SledStorageError>(todo)
        })
        .map_err(Into::into)
    }

    #[instrument(name = "SledStorage::find_todo_by_id", skip_all)]
    async fn find_by_id(&self, todo_id: TodoId) -> Result<Option<Todo>, StorageError> {
        info!(todo_id = %todo_id, "find todo");

        measure_and_record_storage("SledStorage::find_todo_by_id", || {
            let key = todo_key(&todo_id);

            let value = trace_err!(
                get_value_with_span(&key, &self.todo_tree),
                "failed to read todo from storage"
            )?;

            value
                .map(|bytes| {
                    trace_err!(
                        deserialize_in_span::<TodoVersion>(&self.bincode_config, &bytes),
                        "failed to bin decode todo"
                    )
                    .map(Todo::from)
                })
                .transpose()
        })
        .map_err(Into::into)
    }

    #[instrument(name = "SledStorage::update_todo", skip_all)]
    async fn find_by_id_and_update(
        &self,
        todo_id: TodoId,
        patch: TodoPatch,
    ) -> Result<Option<Todo>, StorageError> {
        let (todo_tree, bincode_config) = info_span!("Cloning trees and config")
            .in_scope(|| (self.todo_tree.clone(), self.bincode_config));

        let span = Span::current();
        tokio::task::spawn_blocking(move || {
            span.in_scope(|| update_todo(todo_id, patch, &todo_tree, &bincode_config))
        })
        .await?
    }

    #[instrument(name = "SledStorage::remove_todo", skip_all)]
    async fn find_by_id_and_remove(&self, todo_id: TodoId) -> Result<Option<Todo>, StorageError> {
        info!(todo_id = %todo_id, "remove todo");

        measure_and_record_storage("SledStorage::remove_todo", || {
            let key = todo_key(&todo_id);

            let removed = trace_err!(
                remove_value_with_span(&key, &self.todo_tree),
                "failed to remove todo from storage"
            )?;

            removed
                .map(|bytes| {
                    trace_err!(
                        deserialize_in_span::<TodoVersion>(&self.bincode_config, &bytes),
                        "failed to bin decode removed todo"
                    )
                    .map(Todo::from)
                })
                .transpose()
        })
        .map_err(Into::into)
    }
}

#[instrument(name = "find_all_todos", skip_all)]
fn find_all_todos(
    todo_tree: &Tree,
    bincode_config: &BincodeConfig,
) -> Result<Vec<Todo>, StorageError> {
    let result: Result<_, SledStorageError> =
        measure_and_record_storage("SledStorage::find_all_todos", || {
            let values = trace_err!(
                scan_values_with_span(&KeyPrefix::from_kind(PrefixKind::Todo), todo_tree),
                "failed to scan todo-s"
            )?;

            values
                .iter()
                .map(|bytes| {
                    trace_err!(
                        deserialize_in_span::<TodoVersion>(bincode_config, bytes),
                        "failed to bin decode todo"
                    )
                    .map(Todo::from)
                })
                .collect::<Result<Vec<_>, _>>()
        });

    let todos = result?;
    info!(count = todos.len(), "found todos");

    Ok(todos)
}

#[instrument(name = "update_todo", skip_all)]
fn update_todo(
    todo_id: TodoId,
    patch: TodoPatch,
    todo_tree: &Tree,
    bincode_config: &BincodeConfig,
) -> Result<Option<Todo>, StorageError> {
    info!(todo_id = %todo_id, "update todo");

    let updated = measure_and_record_storage("SledStorage::update_todo_in_transaction", || {
        todo_tree.transaction(
            |tx| -> ConflictableTransactionResult<Option<Todo>, SledStorageError> {
                let key = todo_key(&todo_id);
                let value = trace_err!(
                    get_value_in_transaction_with_span(&key, tx),
                    "failed to read todo from storage"
                )?;

                let Some(value) = value else {
                    warn!(todo_id = %todo_id, "todo to update not found");
                    return Ok(None);
                };

                let mut todo: Todo = trace_err!(
                    deserialize_in_transaction_with_span::<TodoVersion>(bincode_config, &value),
                    "failed to bin decode todo"
                )?
                .into();

                todo.apply(&patch);

                let encoded = trace_err!(
                    serialize_in_transaction_with_span(
                        bincode_config,
                        &TodoVersion::from(todo.clone())
                    ),
                    "failed to bin encode todo"
                )?;

                trace_err!(
                    insert_value_in_transaction_with_span(&key, &encoded, tx),
                    "failed to write todo into storage"
                )?;

                Ok(Some(todo))
            },
        )
    })
    .map_err(SledStorageError::from)?;

    Ok(updated)
}

#[cfg(test)]
mod tests;
