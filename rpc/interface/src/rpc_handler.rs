//! RPC handler trait.

//---------------------------------------------------------------------------------------------------- Use
use walletkit_rpc_types::{WalletKitRequest, WalletKitResponse};

use crate::RpcService;

//---------------------------------------------------------------------------------------------------- RpcHandler
/// An RPC handler.
///
/// This trait represents a type that can turn `Request`s into `Response`s.
///
/// Implementors of this trait must be a [`tower::Service`]
/// from [`WalletKitRequest`] to [`WalletKitResponse`],
/// with [`RpcError`](crate::RpcError) as the error type.
///
/// See this crate's `RpcHandlerDummy` for an implementation example of this trait.
///
/// # Responses
/// Your [`RpcHandler`] should reply to a `Request` with the matching
/// `Response`, e.g. [`WalletKitRequest::ListSweeps`] must be replied with
/// [`WalletKitResponse::ListSweeps`]. The `/json_rpc` route serializes
/// whatever is returned as the `result` without checking.
pub trait RpcHandler: RpcService<WalletKitRequest, WalletKitResponse> {}
