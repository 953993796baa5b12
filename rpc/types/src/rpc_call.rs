//! RPC call metadata.

//---------------------------------------------------------------------------------------------------- Import
use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

//---------------------------------------------------------------------------------------------------- Struct definitions
/// An RPC request type.
///
/// This binds a request to the method name it is
/// sent with and to the type it is answered with.
///
/// ```rust
/// use walletkit_rpc_types::{
///     RpcCall,
///     signer::{KeyDescriptor, KeyLocator},
///     wallet::{ListSweepsRequest, ListSweepsResponse},
/// };
///
/// assert_eq!(ListSweepsRequest::METHOD, "list_sweeps");
/// assert_eq!(KeyLocator::METHOD, "derive_key");
///
/// fn response_of<R: RpcCall>(_: &R) -> R::Response {
///     R::Response::default()
/// }
///
/// let _: ListSweepsResponse = response_of(&ListSweepsRequest { verbose: true });
/// let _: KeyDescriptor = response_of(&KeyLocator::default());
/// ```
pub trait RpcCall: Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The method name, as found in
    /// the `method` field of a JSON-RPC request.
    const METHOD: &'static str;

    /// The type this request is answered with.
    type Response: Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static;
}

/// Object-safe version of [`RpcCall`].
pub trait RpcCallValue {
    /// Returns [`RpcCall::METHOD`].
    fn method(&self) -> &'static str;
}

impl<T: RpcCall> RpcCallValue for T {
    #[inline]
    fn method(&self) -> &'static str {
        Self::METHOD
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use super::*;
    use crate::wallet::{LabelTransactionRequest, PendingSweepsRequest};

    #[test]
    fn method_value() {
        let req: &dyn RpcCallValue = &PendingSweepsRequest {};
        assert_eq!(req.method(), "pending_sweeps");
        assert_eq!(
            LabelTransactionRequest::default().method(),
            LabelTransactionRequest::METHOD
        );
    }
}
