use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::storage::Todo;

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateTodo {
    pub text: Option<String>,
}

/// Raw partial update. Unknown fields are ignored; `completed` is kept as a
/// raw value because only a literal `true` completes a todo.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateTodo {
    pub text: Option<String>,
    #[schema(value_type = Option<bool>)]
    pub completed: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TodoResponse {
    pub todo: Todo,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TodosResponse {
    pub todos: Vec<Todo>,
}
