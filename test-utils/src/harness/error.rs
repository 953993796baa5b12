//! Harness errors.

//---------------------------------------------------------------------------------------------------- Use
use std::time::Duration;

use crate::rpc::ClientError;

//---------------------------------------------------------------------------------------------------- HarnessError
/// Why a [`HarnessRpc`](super::HarnessRpc) call failed.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The call did not finish within the timeout.
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// The run context was cancelled before the call finished.
    #[error("run context cancelled")]
    Cancelled,

    /// The client returned an error.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl HarnessError {
    /// The [`ClientError`], if the client returned one.
    pub const fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(e) => Some(e),
            Self::Timeout(_) | Self::Cancelled => None,
        }
    }
}
