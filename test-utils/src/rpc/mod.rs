//! WalletKit RPC client.
//!
//! This module is a client for a wallet's WalletKit RPC service,
//! speaking JSON-RPC 2.0 over HTTP with the types of `walletkit_rpc_types`.
//!
//! # Usage
//! ```rust,ignore
//! #[tokio::main]
//! async fn main() {
//!     // Create RPC client.
//!     let rpc = HttpRpcClient::new(None).unwrap();
//!
//!     // Derive a key.
//!     let key = rpc.call(KeyLocator { key_family: 6, key_index: 0 }).await.unwrap();
//!     println!("{}", hex::encode(key.raw_key_bytes));
//! }
//! ```

mod client;
pub use client::{HttpRpcClient, WalletKitClient};

mod constants;
pub use constants::LOCALHOST_RPC_URL;

mod error;
pub use error::ClientError;
