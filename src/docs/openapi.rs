use utoipa::OpenApi;

use crate::storage::Todo;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health,
        crate::handlers::todo::get_all,
        crate::handlers::todo::get,
        crate::handlers::todo::add,
        crate::handlers::todo::update,
        crate::handlers::todo::delete,
    ),
    components(
        schemas(Todo),
    ),
    tags(
        (name = "todos", description = "Endpoints to create and manage todo items"),
        (name = "health", description = "Liveness probe")
    ),
    info(
        title = "Todo API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_todo_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/todos"));
        assert!(doc.paths.paths.contains_key("/todos/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
