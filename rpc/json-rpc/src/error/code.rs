//! Error codes.

//---------------------------------------------------------------------------------------------------- Use
use serde::{Deserialize, Deserializer, Serialize, Serializer};

//---------------------------------------------------------------------------------------------------- ErrorCode
/// [Error object code](https://www.jsonrpc.org/specification#error_object).
///
/// The five codes JSON-RPC reserves get their own variant,
/// every other code is a [`ErrorCode::ServerError`]. Wallet
/// handlers only ever answer with the latter.
///
/// (De)serialized as the bare `i32`:
/// ```rust
/// use walletkit_json_rpc::error::ErrorCode;
///
/// let code: ErrorCode = serde_json::from_str("-32601").unwrap();
/// assert_eq!(code, ErrorCode::MethodNotFound);
/// assert_eq!(code.to_string(), "-32601: Method not found");
///
/// let code: ErrorCode = serde_json::from_str("-32001").unwrap();
/// assert_eq!(code, ErrorCode::ServerError(-32001));
/// assert_eq!(serde_json::to_string(&code).unwrap(), "-32001");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCode {
    /// The server could not parse the JSON.
    ParseError,
    /// The JSON was not a request object, or named no known method.
    InvalidRequest,
    /// No such method.
    MethodNotFound,
    /// The method exists but its params did not fit.
    InvalidParams,
    /// The server broke.
    InternalError,
    /// Any code outside the reserved ones.
    ServerError(i32),
}

impl ErrorCode {
    /// Map a raw code to its variant.
    pub const fn from_code(code: i32) -> Self {
        match code {
            -32700 => Self::ParseError,
            -32600 => Self::InvalidRequest,
            -32601 => Self::MethodNotFound,
            -32602 => Self::InvalidParams,
            -32603 => Self::InternalError,
            _ => Self::ServerError(code),
        }
    }

    /// The raw code.
    pub const fn code(&self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::ServerError(code) => *code,
        }
    }

    /// The message JSON-RPC attaches to this code.
    pub const fn msg(&self) -> &'static str {
        match self {
            Self::ParseError => "Parse error",
            Self::InvalidRequest => "Invalid Request",
            Self::MethodNotFound => "Method not found",
            Self::InvalidParams => "Invalid params",
            Self::InternalError => "Internal error",
            Self::ServerError(_) => "Server error",
        }
    }
}

//---------------------------------------------------------------------------------------------------- Trait impl
impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.msg())
    }
}

impl std::error::Error for ErrorCode {}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::from_code)
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}
