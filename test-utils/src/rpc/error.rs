//! Client errors.

//---------------------------------------------------------------------------------------------------- Use
use walletkit_json_rpc::{error::ErrorObject, Id};

//---------------------------------------------------------------------------------------------------- ClientError
/// Errors returned by a [`WalletKitClient`](super::WalletKitClient).
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent, or the response could not be read.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The wallet answered with a JSON-RPC error.
    #[error("rpc error: {0}")]
    Rpc(#[from] ErrorObject),

    /// The wallet answered a different request.
    #[error("response id mismatch: expected {expected}, found {found}")]
    IdMismatch {
        /// The id the request was sent with.
        expected: u64,
        /// The id of the response.
        found: Id,
    },
}

impl ClientError {
    /// The JSON-RPC error object, if the wallet answered with one.
    pub const fn rpc_error(&self) -> Option<&ErrorObject> {
        match self {
            Self::Rpc(e) => Some(e),
            Self::Http(_) | Self::IdMismatch { .. } => None,
        }
    }
}
