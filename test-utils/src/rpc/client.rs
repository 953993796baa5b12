//! HTTP RPC client.

//---------------------------------------------------------------------------------------------------- Use
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, ClientBuilder,
};
use serde::Serialize;

use walletkit_json_rpc::{Id, Request, Response};
use walletkit_rpc_types::RpcCall;

use crate::rpc::{constants::LOCALHOST_RPC_URL, error::ClientError};

//---------------------------------------------------------------------------------------------------- WalletKitClient
/// A client of a wallet's WalletKit RPC service.
///
/// [`HarnessRpc`](crate::harness::HarnessRpc) is generic over
/// this, so tests can swap the HTTP client for something else.
#[async_trait]
pub trait WalletKitClient: Send + Sync {
    /// Send `request`, and return its response.
    ///
    /// # Errors
    /// This errors if the request could not be delivered,
    /// or if the wallet answered with an error.
    async fn call<R: RpcCall>(&self, request: R) -> Result<R::Response, ClientError>;
}

//---------------------------------------------------------------------------------------------------- HttpRpcClient
/// The `method` + `params` part of a JSON-RPC request.
#[derive(Serialize)]
struct MethodCall<'a, P> {
    /// The method name.
    method: &'static str,
    /// The request.
    params: &'a P,
}

/// An HTTP JSON-RPC 2.0 client for a wallet's WalletKit service.
///
/// Requests are sent with increasing numeric ids, starting at `0`.
/// Clones share the same id counter.
#[derive(Debug, Clone)]
pub struct HttpRpcClient {
    client: Client,
    address: String,
    json_rpc_url: String,
    next_id: Arc<AtomicU64>,
}

impl HttpRpcClient {
    /// Create an [`HttpRpcClient`].
    ///
    /// `address` should be an HTTP URL pointing to a wallet RPC server.
    ///
    /// If `None` is provided the default is used: [`LOCALHOST_RPC_URL`].
    ///
    /// # Errors
    /// This errors if the underlying HTTP client could not be built.
    pub fn new(address: Option<String>) -> Result<Self, ClientError> {
        let address = address.unwrap_or_else(|| LOCALHOST_RPC_URL.to_string());
        let json_rpc_url = format!("{}/json_rpc", address.trim_end_matches('/'));

        let headers = {
            let mut h = HeaderMap::new();
            h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            h
        };

        let client = ClientBuilder::new().default_headers(headers).build()?;

        Ok(Self {
            client,
            address,
            json_rpc_url,
            next_id: Arc::new(AtomicU64::new(0)),
        })
    }

    /// The address used for this [`HttpRpcClient`].
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The full URL requests are sent to.
    pub fn json_rpc_url(&self) -> &str {
        &self.json_rpc_url
    }
}

#[async_trait]
impl WalletKitClient for HttpRpcClient {
    async fn call<R: RpcCall>(&self, request: R) -> Result<R::Response, ClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let request = Request::new(
            Id::Num(id),
            MethodCall {
                method: R::METHOD,
                params: &request,
            },
        );

        tracing::trace!(id, method = R::METHOD, url = %self.json_rpc_url, "sending request");

        let response = self
            .client
            .post(&self.json_rpc_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<Response<R::Response>>()
            .await?;

        tracing::trace!(id, method = R::METHOD, "received response");

        // Errors for requests the wallet could not parse
        // carry an `Id::Null`, results always echo our id.
        let id_matches = match (&response.id, &response.payload) {
            (Id::Num(n), _) => *n == id,
            (Id::Null, Err(_)) => true,
            _ => false,
        };

        if !id_matches {
            return Err(ClientError::IdMismatch {
                expected: id,
                found: response.id,
            });
        }

        response.payload.map_err(ClientError::from)
    }
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Assert the default address is localhost.
    #[test]
    fn localhost() {
        let client = HttpRpcClient::new(None).unwrap();
        assert_eq!(client.address(), LOCALHOST_RPC_URL);
        assert_eq!(client.json_rpc_url(), "http://127.0.0.1:10009/json_rpc");
    }

    #[test]
    fn trailing_slash() {
        let client = HttpRpcClient::new(Some("http://10.0.0.1:8080/".into())).unwrap();
        assert_eq!(client.json_rpc_url(), "http://10.0.0.1:8080/json_rpc");
    }

    /// Clones share the id counter.
    #[test]
    fn shared_ids() {
        let a = HttpRpcClient::new(None).unwrap();
        let b = a.clone();

        assert_eq!(a.next_id.fetch_add(1, Ordering::Relaxed), 0);
        assert_eq!(b.next_id.fetch_add(1, Ordering::Relaxed), 1);
    }

    #[test]
    fn method_call_shape() {
        use walletkit_rpc_types::wallet::ListSweepsRequest;

        let params = ListSweepsRequest { verbose: true };
        let request = Request::new(
            Id::Num(5),
            MethodCall {
                method: ListSweepsRequest::METHOD,
                params: &params,
            },
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 5,
                "method": "list_sweeps",
                "params": { "verbose": true }
            })
        );
    }
}
