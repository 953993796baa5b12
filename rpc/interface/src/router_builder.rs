//! Free functions.

//---------------------------------------------------------------------------------------------------- Use
use axum::{routing::method_routing::post, Router};

use crate::{
    route::{fallback, json_rpc},
    rpc_handler::RpcHandler,
};

//---------------------------------------------------------------------------------------------------- RouterBuilder
/// Builder for creating the RPC router.
///
/// This builder allows you to selectively enable endpoints for the router,
/// and a [`fallback`](RouterBuilder::fallback) route.
///
/// The [`default`](RouterBuilder::default) is to enable [`all`](RouterBuilder::all) routes.
///
/// # Example
/// ```rust
/// use walletkit_rpc_interface::{RouterBuilder, RpcHandlerDummy};
///
/// // Create a router with _only_ `/json_rpc` enabled.
/// let only_json_rpc = RouterBuilder::<RpcHandlerDummy>::new()
///     .json_rpc()
///     .build();
///
/// // Create a router with all endpoints enabled.
/// let all = RouterBuilder::<RpcHandlerDummy>::new()
///     .all()
///     .build();
/// ```
#[derive(Clone)]
pub struct RouterBuilder<H: RpcHandler> {
    router: Router<H>,
}

impl<H: RpcHandler> RouterBuilder<H> {
    /// Create a new [`Self`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// Build [`Self`] into a [`Router`].
    ///
    /// All endpoints enabled in [`RouterBuilder`]
    /// will be enabled in this [`Router`].
    pub fn build(self) -> Router<H> {
        self.router
    }

    /// Enable all endpoints, including [`Self::fallback`].
    #[must_use]
    pub fn all(self) -> Self {
        self.json_rpc().fallback()
    }

    /// Enable the catch-all fallback route.
    ///
    /// Any unknown or disabled route will route here, e.g.:
    /// - `get_info`
    /// - `v2/wallet/utxos`
    /// - `asdf`
    #[must_use]
    pub fn fallback(self) -> Self {
        Self {
            router: self.router.fallback(fallback::fallback),
        }
    }

    /// Enable the `/json_rpc` endpoint.
    #[must_use]
    pub fn json_rpc(self) -> Self {
        Self {
            router: self.router.route("/json_rpc", post(json_rpc::json_rpc::<H>)),
        }
    }
}

impl<H: RpcHandler> Default for RouterBuilder<H> {
    /// Uses [`Self::all`].
    fn default() -> Self {
        Self::new().all()
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(all(test, feature = "dummy"))]
mod test {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::RpcHandlerDummy;

    use super::*;

    #[tokio::test]
    async fn no_fallback() {
        let router: axum::Router = RouterBuilder::<RpcHandlerDummy>::new()
            .json_rpc()
            .build()
            .with_state(RpcHandlerDummy::default());

        // `/json_rpc` only accepts `POST`.
        let request = Request::get("/json_rpc").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn default_has_fallback() {
        let router: axum::Router = RouterBuilder::<RpcHandlerDummy>::default()
            .build()
            .with_state(RpcHandlerDummy::default());

        let request = Request::post("/v2/wallet/utxos").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
