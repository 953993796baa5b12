//! Wallet RPC test harness.
//!
//! [`HarnessRpc`] issues one RPC call per function and turns
//! any failure into a test failure (a panic), see `wallet_kit.rs`
//! for the WalletKit functions.

//---------------------------------------------------------------------------------------------------- Use
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use walletkit_rpc_types::RpcCall;

use crate::{
    config::HarnessConfig,
    rpc::{ClientError, HttpRpcClient, WalletKitClient},
};

mod error;
mod wallet_kit;

pub use error::HarnessError;

//---------------------------------------------------------------------------------------------------- Constants
/// The default timeout of a single RPC call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

//---------------------------------------------------------------------------------------------------- HarnessRpc
/// The RPC harness of one wallet node.
///
/// Every call is bounded by [`HarnessRpc::timeout`] and
/// abandoned once the run context is cancelled.
#[derive(Debug, Clone)]
pub struct HarnessRpc<C> {
    /// The node name, used in failure messages.
    name: String,
    client: C,
    /// Shared by every call of this harness.
    run_ctx: CancellationToken,
    timeout: Duration,
}

impl<C: WalletKitClient> HarnessRpc<C> {
    /// Create a harness for the node `name`, with the [`DEFAULT_TIMEOUT`].
    pub fn new(name: impl Into<String>, client: C, run_ctx: CancellationToken) -> Self {
        Self {
            name: name.into(),
            client,
            run_ctx,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying client.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// The run context.
    pub const fn run_ctx(&self) -> &CancellationToken {
        &self.run_ctx
    }

    /// The per-call timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Cancel the run context.
    ///
    /// Calls in-flight and all later calls fail with [`HarnessError::Cancelled`].
    pub fn stop(&self) {
        self.run_ctx.cancel();
    }

    /// Send `request` under the timeout and the run context.
    ///
    /// This does not assert anything, the WalletKit
    /// functions of [`HarnessRpc`] are built on top of it.
    ///
    /// # Errors
    /// - [`HarnessError::Cancelled`] if the run context is (or gets) cancelled
    /// - [`HarnessError::Timeout`] if the call takes longer than [`HarnessRpc::timeout`]
    /// - [`HarnessError::Client`] if the client failed
    pub async fn call<R: RpcCall>(&self, request: R) -> Result<R::Response, HarnessError> {
        tracing::debug!(node = %self.name, method = R::METHOD, "calling");

        tokio::select! {
            biased;

            () = self.run_ctx.cancelled() => Err(HarnessError::Cancelled),

            result = tokio::time::timeout(self.timeout, self.client.call(request)) => match result {
                Ok(response) => response.map_err(HarnessError::from),
                Err(_) => Err(HarnessError::Timeout(self.timeout)),
            },
        }
    }

    /// Unwrap `result`, failing the test if it is an error.
    ///
    /// # Panics
    /// This panics with `"{name}: failed to call {operation}: {error}"` on [`Err`].
    #[track_caller]
    pub fn no_error<T>(&self, result: Result<T, HarnessError>, operation: &str) -> T {
        match result {
            Ok(t) => t,
            Err(e) => {
                tracing::error!(node = %self.name, operation, "call failed: {e}");
                panic!("{}: failed to call {operation}: {e}", self.name);
            }
        }
    }

    /// [`HarnessRpc::call`] and [`HarnessRpc::no_error`] combined.
    async fn call_no_error<R: RpcCall>(&self, request: R) -> R::Response {
        let result = self.call(request).await;
        self.no_error(result, R::METHOD)
    }
}

impl HarnessRpc<HttpRpcClient> {
    /// Create a harness over HTTP from a [`HarnessConfig`].
    ///
    /// # Errors
    /// This errors if the HTTP client could not be built.
    pub fn from_config(
        config: &HarnessConfig,
        run_ctx: CancellationToken,
    ) -> Result<Self, ClientError> {
        let client = HttpRpcClient::new(Some(config.rpc_url.clone()))?;

        Ok(Self::new(config.name.clone(), client, run_ctx).with_timeout(config.timeout()))
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
pub(crate) mod tests {
    use std::future::pending;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use walletkit_json_rpc::error::ErrorObject;
    use walletkit_rpc_types::wallet::{EstimateFeeRequest, EstimateFeeResponse};

    use super::*;

    /// How a [`MockClient`] answers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum Mode {
        /// With `Default::default()`.
        Ok,
        /// With a server error.
        Fail,
        /// Never.
        Hang,
    }

    /// A [`WalletKitClient`] that does not touch the network.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct MockClient(pub(crate) Mode);

    #[async_trait]
    impl WalletKitClient for MockClient {
        async fn call<R: RpcCall>(&self, _: R) -> Result<R::Response, ClientError> {
            match self.0 {
                Mode::Ok => Ok(R::Response::default()),
                Mode::Fail => Err(ClientError::Rpc(
                    ErrorObject::server_error(-32003).with_message("wallet unavailable"),
                )),
                Mode::Hang => pending().await,
            }
        }
    }

    pub(crate) fn harness(mode: Mode) -> HarnessRpc<MockClient> {
        HarnessRpc::new("alice", MockClient(mode), CancellationToken::new())
            .with_timeout(Duration::from_millis(50))
    }

    #[test]
    fn defaults() {
        let h = HarnessRpc::new("bob", MockClient(Mode::Ok), CancellationToken::new());
        assert_eq!(h.name(), "bob");
        assert_eq!(h.timeout(), DEFAULT_TIMEOUT);
        assert!(!h.run_ctx().is_cancelled());
    }

    #[test]
    fn from_config() {
        let config = HarnessConfig::default();
        let h = HarnessRpc::from_config(&config, CancellationToken::new()).unwrap();
        assert_eq!(h.name(), "alice");
        assert_eq!(h.client().address(), config.rpc_url);
        assert_eq!(h.timeout(), Duration::from_secs(30));
    }

    #[tokio::test]
    async fn ok() {
        let resp = harness(Mode::Ok)
            .call(EstimateFeeRequest { conf_target: 6 })
            .await
            .unwrap();
        assert_eq!(resp, EstimateFeeResponse::default());
    }

    #[tokio::test]
    async fn client_error() {
        let err = harness(Mode::Fail)
            .call(EstimateFeeRequest { conf_target: 6 })
            .await
            .unwrap_err();

        let object = err.client_error().and_then(ClientError::rpc_error).unwrap();
        assert_eq!(object.message, "wallet unavailable");
    }

    #[tokio::test]
    async fn timeout() {
        let err = harness(Mode::Hang)
            .call(EstimateFeeRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HarnessError::Timeout(d) if d == Duration::from_millis(50)));
    }

    /// A cancelled run context wins over a client that would succeed.
    #[tokio::test]
    async fn cancelled_before() {
        let h = harness(Mode::Ok);
        h.stop();

        let err = h.call(EstimateFeeRequest::default()).await.unwrap_err();
        assert!(matches!(err, HarnessError::Cancelled));
    }

    /// Cancelling aborts in-flight calls.
    #[tokio::test]
    async fn cancelled_in_flight() {
        let h = harness(Mode::Hang).with_timeout(Duration::from_secs(60));
        let run_ctx = h.run_ctx().clone();

        let task = tokio::spawn(async move { h.call(EstimateFeeRequest::default()).await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        run_ctx.cancel();

        let err = task.await.unwrap().unwrap_err();
        assert!(matches!(err, HarnessError::Cancelled));
    }

    #[test]
    #[should_panic(expected = "alice: failed to call estimate_fee: timed out after 50ms")]
    fn no_error_panics() {
        let h = harness(Mode::Ok);
        h.no_error::<()>(Err(HarnessError::Timeout(Duration::from_millis(50))), "estimate_fee");
    }
}
