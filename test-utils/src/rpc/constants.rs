//! RPC-related Constants.

//---------------------------------------------------------------------------------------------------- Constants
/// The default URL used for wallet RPC connections.
pub const LOCALHOST_RPC_URL: &str = "http://127.0.0.1:10009";
