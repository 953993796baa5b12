//! Fallback route functions.

//---------------------------------------------------------------------------------------------------- Import
use axum::http::{StatusCode, Uri};

//---------------------------------------------------------------------------------------------------- Routes
/// Fallback route function.
///
/// This is used as the fallback endpoint in [`crate::RouterBuilder`].
pub(crate) async fn fallback(uri: Uri) -> StatusCode {
    tracing::debug!(%uri, "unknown route");
    StatusCode::NOT_FOUND
}
