#![doc = include_str!("../README.md")]

pub mod error;

mod id;
pub use id::Id;

mod version;
pub use version::Version;

mod request;
pub use request::Request;

mod response;
pub use response::Response;
