//! RPC errors.

//---------------------------------------------------------------------------------------------------- Import
use walletkit_json_rpc::error::ErrorObject;

//---------------------------------------------------------------------------------------------------- RpcError
/// Possible errors during RPC operation.
///
/// These are any errors that can happen _during_ a handler function.
/// I.e. if this error surfaces, it happened _after_ the request was
/// deserialized.
///
/// This is the `Error` type required to be used in an [`RpcHandler`](crate::RpcHandler).
///
/// Over the wire, it is turned into a JSON-RPC server error
/// with [`RpcError::code`] and the error's [`Display`](std::fmt::Display)
/// as the message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RpcError {
    /// A transaction label was empty.
    #[error("cannot label transaction with empty label")]
    ZeroLabel,

    /// The wallet does not know of the transaction.
    #[error("transaction not found")]
    TransactionNotFound,

    /// The wallet is not ready to serve requests.
    #[error("wallet unavailable")]
    Unavailable,

    /// The request was understood, but rejected.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl RpcError {
    /// The JSON-RPC server error code of this error.
    ///
    /// These are within the `-32000..=-32099`
    /// range reserved for server errors.
    pub const fn code(&self) -> i32 {
        match self {
            Self::ZeroLabel => -32001,
            Self::TransactionNotFound => -32002,
            Self::Unavailable => -32003,
            Self::InvalidRequest(_) => -32004,
        }
    }
}

impl From<RpcError> for ErrorObject {
    fn from(error: RpcError) -> Self {
        Self::server_error(error.code()).with_message(error.to_string())
    }
}
