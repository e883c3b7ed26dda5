use axum::{
    extract::{FromRequest, Request},
    Json,
};
use tracing::{error, instrument};

use super::error::AppError;

/// `Json` whose rejections (bad syntax, wrong field types, missing content
/// type) surface as `AppError` so they share the 400 path.
#[derive(Debug)]
pub(crate) struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    #[instrument(name = "extract_json_body", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            error!(error = %e, "failed to extract json body");
            AppError::from(e)
        })?;

        Ok(Self(value))
    }
}
