//! JSON-RPC 2.0 request object.

//---------------------------------------------------------------------------------------------------- Use
use serde::{Deserialize, Serialize};

use crate::{id::Id, version::Version};

//---------------------------------------------------------------------------------------------------- Request
/// [The request object](https://www.jsonrpc.org/specification#request_object).
///
/// The generic `B` is the request body. It is flattened into the
/// object, so it must (de)serialize as a map holding `method` and
/// (optionally) `params`.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use walletkit_json_rpc::{Id, Request};
///
/// #[derive(Serialize, Deserialize)]
/// struct Body {
///     method: String,
///     params: u8,
/// }
///
/// let body = Body { method: "estimate_fee".into(), params: 6 };
/// let req = Request::new(Id::Num(1), body);
/// let json = serde_json::to_string(&req).unwrap();
/// assert_eq!(json, r#"{"jsonrpc":"2.0","id":1,"method":"estimate_fee","params":6}"#);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Request<B> {
    /// JSON-RPC protocol version; always `2.0`.
    pub jsonrpc: Version,

    /// An identifier established by the client.
    ///
    /// If this is [`None`], the request is a notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    /// The `method` and `params`.
    #[serde(flatten)]
    pub body: B,
}

impl<B> Request<B> {
    /// Create a new [`Self`] with an [`Id`].
    #[inline]
    pub const fn new(id: Id, body: B) -> Self {
        Self {
            jsonrpc: Version,
            id: Some(id),
            body,
        }
    }

    /// Returns whether this request is a notification.
    #[inline]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

//---------------------------------------------------------------------------------------------------- Trait impl
impl<B: Serialize> std::fmt::Display for Request<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => write!(f, "{json}"),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
