mod error;
mod ids;
mod sled;
mod todo;

#[cfg(any(test, feature = "integration_tests"))]
pub use self::sled::test_util;
pub(crate) use self::sled::{error::SledStartupError, SledStorage};

use async_trait::async_trait;
pub(crate) use error::StorageError;
#[cfg(test)]
pub(crate) use error::SledStorageError;
pub use ids::TodoId;
pub(crate) use todo::TodoVersion;
pub use todo::{NewTodo, Todo, TodoPatch};

/// Document-store capability the service depends on. Absence is `Ok(None)`,
/// never an error.
#[async_trait]
pub trait TodoStorage: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Todo>, StorageError>;
    async fn save(&self, todo: NewTodo) -> Result<Todo, StorageError>;
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, StorageError>;
    async fn find_by_id_and_update(
        &self,
        id: TodoId,
        patch: TodoPatch,
    ) -> Result<Option<Todo>, StorageError>;
    async fn find_by_id_and_remove(&self, id: TodoId) -> Result<Option<Todo>, StorageError>;
}

#[async_trait]
pub trait FlushStorage: Send + Sync {
    async fn flush(&self) -> Result<(), StorageError>;
}
