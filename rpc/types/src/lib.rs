#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod macros;
mod method;
mod rpc_call;

pub mod misc;
pub mod signer;
pub mod wallet;

pub use method::{WalletKitRequest, WalletKitResponse};
pub use rpc_call::{RpcCall, RpcCallValue};
