use super::*;

use crate::storage::sled::test_util::TestStorageBuilder;
use crate::storage::FlushStorage;

const NOW: i64 = 1_700_000_000_000;

fn complete(now: i64) -> TodoPatch {
    TodoPatch {
        text: None,
        completed: true,
        completed_at: Some(now),
    }
}

#[tokio::test]
async fn test_save_and_find() {
    let storage = TestStorageBuilder::new().build_todo().await;

    let text = "aaa".to_string();
    let todo = storage.save(NewTodo { text: text.clone() }).await.unwrap();

    assert_eq!(todo.text, text);
    assert!(!todo.completed);
    assert_eq!(todo.completed_at, None);

    let found = storage.find_by_id(todo.id).await.unwrap();
    assert_eq!(found, Some(todo));

    let result = storage.find_by_id(TodoId::new()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_save_assigns_distinct_ids() {
    let storage = TestStorageBuilder::new().build_todo().await;

    let first = storage.save(NewTodo { text: "a".into() }).await.unwrap();
    let second = storage.save(NewTodo { text: "a".into() }).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_find_all_in_creation_order() {
    let todos_count = 15;
    let mut builder = TestStorageBuilder::new().with_todos(todos_count);
    let storage = builder.build_todo().await;

    let todos = storage.find_all().await.unwrap();

    assert_eq!(todos.len(), todos_count);
    assert_eq!(todos, builder.todos());
}

#[tokio::test]
async fn test_find_all_empty() {
    let storage = TestStorageBuilder::new().build_todo().await;

    assert!(storage.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update() {
    let mut builder = TestStorageBuilder::new().with_todos(1);
    let storage = builder.build_todo().await;
    let id = builder.todos()[0].id;

    let updated = storage
        .find_by_id_and_update(
            id,
            TodoPatch {
                text: Some("bbb".to_string()),
                ..complete(NOW)
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.text, "bbb");
    assert!(updated.completed);
    assert_eq!(updated.completed_at, Some(NOW));

    let stored = storage.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_without_text_keeps_text() {
    let mut builder = TestStorageBuilder::new().with_todos(1);
    let storage = builder.build_todo().await;
    let todo = builder.todos()[0].clone();

    storage
        .find_by_id_and_update(todo.id, complete(NOW))
        .await
        .unwrap();

    let reopened = storage
        .find_by_id_and_update(
            todo.id,
            TodoPatch {
                text: None,
                completed: false,
                completed_at: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(reopened.text, todo.text);
    assert!(!reopened.completed);
    assert_eq!(reopened.completed_at, None);
}

#[tokio::test]
async fn test_update_nonexistent() {
    let storage = TestStorageBuilder::new().build_todo().await;

    let result = storage
        .find_by_id_and_update(TodoId::new(), complete(NOW))
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(storage.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remove() {
    let mut builder = TestStorageBuilder::new().with_todos(2);
    let storage = builder.build_todo().await;
    let todos = builder.todos();

    let removed = storage.find_by_id_and_remove(todos[0].id).await.unwrap();
    assert_eq!(removed, Some(todos[0].clone()));

    assert!(storage.find_by_id(todos[0].id).await.unwrap().is_none());
    assert_eq!(storage.find_all().await.unwrap(), vec![todos[1].clone()]);

    let result = storage.find_by_id_and_remove(todos[0].id).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_flush() {
    let mut builder = TestStorageBuilder::new().with_todos(3);
    builder.build_todo().await;
    let flush = builder.build_flush().await;

    assert!(flush.flush().await.is_ok());
}
