//! Error object.

//---------------------------------------------------------------------------------------------------- Use
use std::{borrow::Cow, error::Error, fmt::Display};

use serde::{Deserialize, Serialize};
use serde_json::value::Value;

use crate::error::ErrorCode;

//---------------------------------------------------------------------------------------------------- ErrorObject
/// [The error object](https://www.jsonrpc.org/specification#error_object)
/// of a failed [`Response`](crate::Response).
///
/// Formats as `$CODE: $MESSAGE`, which is what ends up in harness failures:
/// ```rust
/// use walletkit_json_rpc::error::ErrorObject;
///
/// assert_eq!(ErrorObject::parse_error().to_string(), "-32700: Parse error");
/// assert_eq!(ErrorObject::server_error(-32002).to_string(), "-32002: Server error");
///
/// let e = ErrorObject::server_error(-32001).with_message("cannot label transaction with empty label");
/// assert_eq!(e.to_string(), "-32001: cannot label transaction with empty label");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// The error code.
    pub code: ErrorCode,

    /// What went wrong. For server errors this is the wallet's own message.
    pub message: Cow<'static, str>,

    /// Extra data, only serialized when [`Some`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ErrorObject {
    /// An error with the code's default message.
    pub const fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: Cow::Borrowed(code.msg()),
            data: None,
        }
    }

    /// [`ErrorCode::ParseError`].
    pub const fn parse_error() -> Self {
        Self::from_code(ErrorCode::ParseError)
    }

    /// [`ErrorCode::InvalidRequest`].
    pub const fn invalid_request() -> Self {
        Self::from_code(ErrorCode::InvalidRequest)
    }

    /// [`ErrorCode::MethodNotFound`].
    pub const fn method_not_found() -> Self {
        Self::from_code(ErrorCode::MethodNotFound)
    }

    /// [`ErrorCode::InvalidParams`].
    pub const fn invalid_params() -> Self {
        Self::from_code(ErrorCode::InvalidParams)
    }

    /// [`ErrorCode::ServerError`] with `code`.
    pub const fn server_error(code: i32) -> Self {
        Self::from_code(ErrorCode::ServerError(code))
    }

    /// Replace the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }
}

//---------------------------------------------------------------------------------------------------- Trait impl
impl From<ErrorCode> for ErrorObject {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code)
    }
}

impl Display for ErrorObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl Error for ErrorObject {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.code)
    }
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn data_omitted_when_none() {
        let mut e = ErrorObject::server_error(-32003).with_message("wallet unavailable");
        assert_eq!(
            serde_json::to_string(&e).unwrap(),
            r#"{"code":-32003,"message":"wallet unavailable"}"#
        );

        e.data = Some(Value::Null);
        assert_eq!(
            serde_json::to_string(&e).unwrap(),
            r#"{"code":-32003,"message":"wallet unavailable","data":null}"#
        );
    }

    /// Peers may leave `data` out entirely.
    #[test]
    fn deserialize_without_data() {
        let e: ErrorObject =
            serde_json::from_str(r#"{"code":-32600,"message":"Invalid Request"}"#).unwrap();
        assert_eq!(e, ErrorObject::invalid_request());
    }
}
