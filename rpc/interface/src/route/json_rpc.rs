//! JSON-RPC 2.0 endpoint route functions.

//---------------------------------------------------------------------------------------------------- Import
use axum::{extract::State, Json};
use bytes::Bytes;
use serde_json::Value;
use tower::ServiceExt;

use walletkit_json_rpc::{Id, Request, Response, Version};
use walletkit_rpc_types::{WalletKitRequest, WalletKitResponse};

use crate::rpc_handler::RpcHandler;

//---------------------------------------------------------------------------------------------------- Routes
/// The `/json_rpc` route function used in [`crate::RouterBuilder`].
///
/// The body is taken as raw [`Bytes`] instead of
/// [`Json`] so that malformed requests are answered
/// with a JSON-RPC error instead of an HTTP rejection.
pub(crate) async fn json_rpc<H: RpcHandler>(
    State(handler): State<H>,
    body: Bytes,
) -> Json<Response<WalletKitResponse>> {
    let value = match serde_json::from_slice::<Value>(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("parse error: {e}");
            return Json(Response::parse_error(Id::Null));
        }
    };

    let request = match serde_json::from_value::<Request<WalletKitRequest>>(value.clone()) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("rejected request: {e}");
            return Json(reject(&value));
        }
    };

    // TODO: <https://www.jsonrpc.org/specification#notification>
    // Notifications (requests without an `id`) are answered like
    // any other request with an `Id::Null` response, this should
    // respond with an empty body instead.
    if request.is_notification() {
        tracing::debug!("notification answered with a null id");
    }
    let id = request.id.unwrap_or(Id::Null);
    let method = request.body.method();

    tracing::debug!(%method, ?id, "request");

    // Send request.
    let response = match handler.oneshot(request.body).await {
        Ok(response) => Response::ok(id, response),
        Err(e) => {
            tracing::warn!(%method, "handler error: {e}");
            Response::err(id, e.into())
        }
    };

    Json(response)
}

/// The error response for a JSON `value` that is not a [`WalletKitRequest`].
///
/// - not a 2.0 request object with a string `method` and a valid `id`:
///   invalid request, with an `Id::Null` since the id cannot be trusted
/// - a `method` this service does not have: method not found
/// - a known `method` with `params` that do not fit: invalid params
fn reject(value: &Value) -> Response<WalletKitResponse> {
    let Some(object) = value.as_object() else {
        return Response::invalid_request(Id::Null);
    };

    if object.get("jsonrpc").and_then(Value::as_str) != Some(Version::TWO) {
        return Response::invalid_request(Id::Null);
    }

    let Some(method) = object.get("method").and_then(Value::as_str) else {
        return Response::invalid_request(Id::Null);
    };

    let id = match object.get("id").cloned().map(serde_json::from_value::<Id>) {
        None => Id::Null,
        Some(Ok(id)) => id,
        Some(Err(_)) => return Response::invalid_request(Id::Null),
    };

    if WalletKitRequest::METHODS.contains(&method) {
        Response::invalid_params(id)
    } else {
        Response::method_not_found(id)
    }
}
