//! JSON-RPC 2.0 response object.

//---------------------------------------------------------------------------------------------------- Use
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

use crate::{error::ErrorObject, id::Id, version::Version};

//---------------------------------------------------------------------------------------------------- Response
/// [The response object](https://www.jsonrpc.org/specification#response_object).
///
/// The generic `T` is the `result` payload on success.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(
    try_from = "RawResponse<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Response<T> {
    /// JSON-RPC protocol version; always `2.0`.
    pub jsonrpc: Version,

    /// This field is always present in serialized JSON.
    ///
    /// It must be the same as the [`Request`](crate::Request)'s ID, or
    /// [`Id::Null`] if the request's ID could not be detected.
    pub id: Id,

    /// The response payload.
    ///
    /// [`Ok`] serializes as `result`, [`Err`] serializes as `error`.
    pub payload: Result<T, ErrorObject>,
}

impl<T> Response<T> {
    /// Creates a successful response.
    ///
    /// ```rust
    /// use walletkit_json_rpc::{Id, Response};
    ///
    /// let ok = Response::ok(Id::Num(123), "OK");
    /// let json = serde_json::to_string(&ok).unwrap();
    /// assert_eq!(json, r#"{"jsonrpc":"2.0","id":123,"result":"OK"}"#);
    /// ```
    #[inline]
    pub const fn ok(id: Id, result: T) -> Self {
        Self {
            jsonrpc: Version,
            id,
            payload: Ok(result),
        }
    }

    /// Creates an error response.
    ///
    /// ```rust
    /// use walletkit_json_rpc::{Id, Response, error::ErrorObject};
    ///
    /// let err = ErrorObject::server_error(2).with_message("no such transaction");
    ///
    /// let resp = Response::<()>::err(Id::Num(1), err);
    /// let json = serde_json::to_string(&resp).unwrap();
    /// assert_eq!(json, r#"{"jsonrpc":"2.0","id":1,"error":{"code":2,"message":"no such transaction"}}"#);
    /// ```
    #[inline]
    pub const fn err(id: Id, error: ErrorObject) -> Self {
        Self {
            jsonrpc: Version,
            id,
            payload: Err(error),
        }
    }

    /// Creates an error response using [`ErrorObject::parse_error`].
    #[inline]
    pub const fn parse_error(id: Id) -> Self {
        Self::err(id, ErrorObject::parse_error())
    }

    /// Creates an error response using [`ErrorObject::invalid_request`].
    #[inline]
    pub const fn invalid_request(id: Id) -> Self {
        Self::err(id, ErrorObject::invalid_request())
    }

    /// Creates an error response using [`ErrorObject::method_not_found`].
    #[inline]
    pub const fn method_not_found(id: Id) -> Self {
        Self::err(id, ErrorObject::method_not_found())
    }

    /// Creates an error response using [`ErrorObject::invalid_params`].
    #[inline]
    pub const fn invalid_params(id: Id) -> Self {
        Self::err(id, ErrorObject::invalid_params())
    }
}

//---------------------------------------------------------------------------------------------------- Trait impl
impl<T: Serialize> std::fmt::Display for Response<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => write!(f, "{json}"),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

//---------------------------------------------------------------------------------------------------- Serde impl
impl<T: Serialize> Serialize for Response<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Response", 3)?;

        s.serialize_field("jsonrpc", &self.jsonrpc)?;
        // Required, even when `null`.
        s.serialize_field("id", &self.id)?;

        match &self.payload {
            Ok(r) => s.serialize_field("result", r)?,
            Err(e) => s.serialize_field("error", e)?,
        }

        s.end()
    }
}

/// The wire shape of a [`Response`], before checking
/// that exactly one of `result` and `error` is set.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawResponse<T> {
    jsonrpc: Version,
    id: Id,
    result: Option<T>,
    error: Option<ErrorObject>,
}

impl<T> TryFrom<RawResponse<T>> for Response<T> {
    type Error = &'static str;

    fn try_from(raw: RawResponse<T>) -> Result<Self, Self::Error> {
        let payload = match (raw.result, raw.error) {
            (Some(result), None) => Ok(result),
            (None, Some(error)) => Err(error),
            (Some(_), Some(_)) => return Err("both result and error found"),
            (None, None) => return Err("missing field `result` or `error`"),
        };

        Ok(Self {
            jsonrpc: raw.jsonrpc,
            id: raw.id,
            payload,
        })
    }
}

//---------------------------------------------------------------------------------------------------- TESTS
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn serde() {
        let result = String::from("result_ok");
        let id = Id::Num(123);

        let resp = Response::ok(id.clone(), result.clone());

        let ser: String = serde_json::to_string(&resp).unwrap();
        let de: Response<String> = serde_json::from_str(&ser).unwrap();

        assert_eq!(de.payload.unwrap(), result);
        assert_eq!(de.id, id);
    }

    #[test]
    fn error_payload() {
        let json = r#"{"jsonrpc":"2.0","id":5,"error":{"code":-32601,"message":"Method not found"}}"#;
        let de: Response<String> = serde_json::from_str(json).unwrap();
        assert_eq!(de.id, Id::Num(5));
        assert_eq!(de.payload.unwrap_err().code, ErrorCode::MethodNotFound);
    }

    #[test]
    fn null_id() {
        let json = r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32700,"message":"Parse error"}}"#;
        let de: Response<()> = serde_json::from_str(json).unwrap();
        assert!(de.id.is_null());
    }

    #[test]
    fn result_and_error() {
        let json = r#"{"jsonrpc":"2.0","id":0,"result":"a","error":{"code":0,"message":"b"}}"#;
        assert!(serde_json::from_str::<Response<String>>(json).is_err());
    }

    #[test]
    fn missing_fields() {
        for json in [
            r#"{"jsonrpc":"2.0","id":0}"#,
            r#"{"jsonrpc":"2.0","result":"a"}"#,
            r#"{"id":0,"result":"a"}"#,
        ] {
            assert!(serde_json::from_str::<Response<String>>(json).is_err(), "{json}");
        }
    }
}
