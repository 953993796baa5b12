//! [Error codes and objects](https://www.jsonrpc.org/specification#error_object).

mod code;
mod object;

pub use code::ErrorCode;
pub use object::ErrorObject;
