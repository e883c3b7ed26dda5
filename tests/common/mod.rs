#![allow(dead_code, unused_imports)]

mod client;
mod server;

use axum::Router;
pub use client::TestAppClient;
use todo_service::{build_app, Service, Settings, TestStorageBuilder};

pub use server::{spawn_test_app, TestAppHandle};

pub async fn create_test_app() -> Router {
    let mut builder = TestStorageBuilder::new();
    let todo_storage = builder.build_todo().await;
    let flush_storage = builder.build_flush().await;

    let settings = Settings::from_file("test").unwrap();

    let service = Service::new(todo_storage, flush_storage, settings.storage_timeout());

    build_app(service)
}
