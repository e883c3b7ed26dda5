pub(crate) mod todo;

use std::sync::Arc;
use std::time::Duration;

use crate::{
    handlers::error::AppError,
    storage::{FlushStorage, TodoStorage},
    utils::measure_metrics::measure_and_record_service,
};
use todo::ServiceTodoRef;
use tracing::instrument;

/// Handle shared by every request: storage capabilities plus the bound
/// applied to each storage call. Cloned into handlers through axum state.
#[derive(Clone)]
pub struct Service {
    todo_storage: Arc<dyn TodoStorage>,
    flush_storage: Arc<dyn FlushStorage>,
    storage_timeout: Duration,
}

impl Service {
    #[instrument(name = "Service::new", skip_all)]
    pub fn new(
        todo_storage: Arc<dyn TodoStorage>,
        flush_storage: Arc<dyn FlushStorage>,
        storage_timeout: Duration,
    ) -> Self {
        Self {
            todo_storage,
            flush_storage,
            storage_timeout,
        }
    }

    pub fn todo(&self) -> ServiceTodoRef {
        ServiceTodoRef::new(self.todo_storage.clone(), self.storage_timeout)
    }

    pub async fn flush_storage(&self) -> Result<(), AppError> {
        measure_and_record_service("flush_storage", || async {
            self.flush_storage.flush().await.map_err(Into::into)
        })
        .await
    }
}
