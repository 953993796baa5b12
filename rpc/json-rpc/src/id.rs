//! Request/response identifier.

//---------------------------------------------------------------------------------------------------- Use
use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

//---------------------------------------------------------------------------------------------------- Id
/// [Request/Response object ID](https://www.jsonrpc.org/specification#request_object).
///
/// The harness client always sends [`Id::Num`], the server
/// echoes back whatever it received and answers requests
/// it could not read with [`Id::Null`].
///
/// ```rust
/// use walletkit_json_rpc::Id;
///
/// assert_eq!(serde_json::to_string(&Id::Null).unwrap(), "null");
/// assert_eq!(serde_json::to_string(&Id::Num(7)).unwrap(), "7");
/// assert_eq!(serde_json::from_str::<Id>(r#""a""#).unwrap(), Id::from("a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// `null`
    Null,
    /// A number.
    Num(u64),
    /// A string.
    Str(Cow<'static, str>),
}

impl Id {
    /// Returns `true` if this is [`Id::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<u64> for Id {
    fn from(n: u64) -> Self {
        Self::Num(n)
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Self::Str(Cow::Owned(s))
    }
}

impl From<&'static str> for Id {
    fn from(s: &'static str) -> Self {
        Self::Str(Cow::Borrowed(s))
    }
}
