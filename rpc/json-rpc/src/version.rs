//! JSON-RPC 2.0 version marker.

//---------------------------------------------------------------------------------------------------- Use
use std::{borrow::Cow, fmt};

use serde::{
    de::{Error, Unexpected},
    Deserialize, Deserializer, Serialize, Serializer,
};

//---------------------------------------------------------------------------------------------------- Version
/// The `"jsonrpc": "2.0"` member of every message.
///
/// Only the JSON string `"2.0"` deserializes into this,
/// the float `2.0` and other versions are rejected.
///
/// ```rust
/// use walletkit_json_rpc::Version;
///
/// assert_eq!(serde_json::to_string(&Version).unwrap(), r#""2.0""#);
/// assert!(serde_json::from_str::<Version>(r#""2.0""#).is_ok());
/// assert!(serde_json::from_str::<Version>("2.0").is_err());
/// assert!(serde_json::from_str::<Version>(r#""1.0""#).is_err());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version;

impl Version {
    /// `2.0`, unquoted.
    pub const TWO: &'static str = "2.0";
}

//---------------------------------------------------------------------------------------------------- Trait impl
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::TWO)
    }
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::TWO)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(Self::TWO)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = Cow::<'de, str>::deserialize(d)?;

        if s == Self::TWO {
            Ok(Self)
        } else {
            Err(Error::invalid_value(Unexpected::Str(&s), &"the string \"2.0\""))
        }
    }
}
