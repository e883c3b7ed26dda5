use std::{future::Future, sync::Arc, time::Duration};

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::{
    handlers::{error::AppError, UpdateTodo},
    storage::{NewTodo, StorageError, Todo, TodoId, TodoPatch, TodoStorage},
    utils::measure_metrics::measure_and_record_service,
};

pub struct ServiceTodoRef {
    storage: Arc<dyn TodoStorage>,
    timeout: Duration,
}

impl ServiceTodoRef {
    pub(crate) fn new(storage: Arc<dyn TodoStorage>, timeout: Duration) -> Self {
        Self { storage, timeout }
    }

    async fn bounded<T>(
        &self,
        call: impl Future<Output = Result<T, StorageError>>,
    ) -> Result<T, AppError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result.map_err(Into::into),
            Err(_) => {
                warn!(timeout = ?self.timeout, "storage call timed out");
                Err(AppError::StorageTimeout)
            }
        }
    }

    #[instrument(name = "Service::todo::get_all", skip_all)]
    pub(crate) async fn get_all(&self) -> Result<Vec<Todo>, AppError> {
        measure_and_record_service("get_all_todos", || async {
            self.bounded(self.storage.find_all()).await
        })
        .await
    }

    #[instrument(name = "Service::todo::add", skip_all)]
    pub(crate) async fn add(&self, text: Option<&str>) -> Result<Todo, AppError> {
        let text = text
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or(AppError::InvalidInput("text must be a non-empty string"))?;

        measure_and_record_service("add_todo", || async {
            self.bounded(self.storage.save(NewTodo {
                text: text.to_owned(),
            }))
            .await
        })
        .await
    }

    #[instrument(name = "Service::todo::get", skip_all)]
    pub(crate) async fn get(&self, todo_id: TodoId) -> Result<Todo, AppError> {
        measure_and_record_service("get_todo", || async {
            self.bounded(self.storage.find_by_id(todo_id))
                .await?
                .ok_or(AppError::NotFound)
        })
        .await
    }

    #[instrument(
        name = "Service::todo::update",
        skip_all,
        fields(text_is_some = patch.text.is_some(),
        completed_is_some = patch.completed.is_some()))
    ]
    pub(crate) async fn update(&self, id: TodoId, patch: &UpdateTodo) -> Result<Todo, AppError> {
        let patch = TodoPatch::from_request(patch, Utc::now().timestamp_millis());
        info!(todo_id = %id, completed = patch.completed, "update todo");

        measure_and_record_service("update_todo", || async {
            self.bounded(self.storage.find_by_id_and_update(id, patch))
                .await?
                .ok_or(AppError::NotFound)
        })
        .await
    }

    #[instrument(name = "Service::todo::delete", skip_all)]
    pub(crate) async fn delete(&self, todo_id: TodoId) -> Result<Todo, AppError> {
        info!(todo_id = %todo_id, "delete todo");

        measure_and_record_service("delete_todo", || async {
            self.bounded(self.storage.find_by_id_and_remove(todo_id))
                .await?
                .ok_or(AppError::NotFound)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_util::TestStorageBuilder;
    use async_trait::async_trait;
    use serde_json::json;

    const TIMEOUT: Duration = Duration::from_millis(200);

    struct SlowStorage;

    #[async_trait]
    impl TodoStorage for SlowStorage {
        async fn find_all(&self) -> Result<Vec<Todo>, StorageError> {
            tokio::time::sleep(TIMEOUT * 10).await;
            Ok(Vec::new())
        }
        async fn save(&self, _todo: NewTodo) -> Result<Todo, StorageError> {
            unimplemented!()
        }
        async fn find_by_id(&self, _id: TodoId) -> Result<Option<Todo>, StorageError> {
            unimplemented!()
        }
        async fn find_by_id_and_update(
            &self,
            _id: TodoId,
            _patch: TodoPatch,
        ) -> Result<Option<Todo>, StorageError> {
            unimplemented!()
        }
        async fn find_by_id_and_remove(&self, _id: TodoId) -> Result<Option<Todo>, StorageError> {
            unimplemented!()
        }
    }

    async fn service() -> ServiceTodoRef {
        let storage = TestStorageBuilder::new().build_todo().await;
        ServiceTodoRef::new(storage, TIMEOUT)
    }

    fn update(body: serde_json::Value) -> UpdateTodo {
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn test_add_trims_text() {
        let service = service().await;

        let todo = service.add(Some("  Buy milk ")).await.unwrap();

        assert_eq!(todo.text, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.completed_at, None);
    }

    #[tokio::test]
    async fn test_add_rejects_missing_text() {
        let service = service().await;

        for text in [None, Some(""), Some("   ")] {
            let result = service.add(text).await;
            assert!(matches!(result, Err(AppError::InvalidInput(_))));
        }

        assert!(service.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_stamps_and_clears_completion() {
        let service = service().await;
        let todo = service.add(Some("Buy milk")).await.unwrap();

        let before = Utc::now().timestamp_millis();
        let completed = service
            .update(todo.id, &update(json!({ "completed": true })))
            .await
            .unwrap();
        assert!(completed.completed);
        assert!(completed.completed_at.unwrap() >= before);
        assert_eq!(completed.text, "Buy milk");

        let completed_again = service
            .update(todo.id, &update(json!({ "completed": true })))
            .await
            .unwrap();
        assert!(completed_again.completed_at >= completed.completed_at);

        let reopened = service
            .update(todo.id, &update(json!({ "completed": "yes", "text": "" })))
            .await
            .unwrap();
        assert!(!reopened.completed);
        assert_eq!(reopened.completed_at, None);
        assert_eq!(reopened.text, "");
    }

    #[tokio::test]
    async fn test_missing_todo_is_not_found() {
        let service = service().await;
        let id = TodoId::new();

        assert!(matches!(service.get(id).await, Err(AppError::NotFound)));
        assert!(matches!(
            service.update(id, &update(json!({}))).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(service.delete(id).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_todo() {
        let service = service().await;
        let todo = service.add(Some("Buy milk")).await.unwrap();

        assert_eq!(service.delete(todo.id).await.unwrap(), todo);
        assert!(matches!(service.get(todo.id).await, Err(AppError::NotFound)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_storage_times_out() {
        let service = ServiceTodoRef::new(Arc::new(SlowStorage), TIMEOUT);

        let result = service.get_all().await;

        assert!(matches!(result, Err(AppError::StorageTimeout)));
    }
}
