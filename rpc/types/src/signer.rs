//! Key types shared with the signer service.
//!
//! [`KeyLocator`] and [`KeyReq`] are used directly as the
//! requests of the `derive_key` and `derive_next_key` methods,
//! both answered by a [`KeyDescriptor`].

//---------------------------------------------------------------------------------------------------- Import
use crate::{macros::define_struct, RpcCall};

//---------------------------------------------------------------------------------------------------- Struct definitions
define_struct! {
    /// Identifies a key by its family and index within that family.
    #[derive(Copy)]
    KeyLocator {
        /// The family of key being identified.
        key_family: i32,
        /// The precise index of the key being identified.
        key_index: i32,
    }

    /// A public key, optionally with its locator.
    KeyDescriptor {
        /// The raw bytes of the public key.
        #[serde(with = "hex::serde")]
        raw_key_bytes: Vec<u8>,
        /// The key locator that identifies which private key to use.
        key_loc: Option<KeyLocator>,
    }

    /// Requests the next unused key of a family.
    KeyReq {
        /// Master key fingerprint, used with PSBT fields.
        key_finger_print: i32,
        /// The target key family.
        key_family: i32,
    }
}

impl RpcCall for KeyLocator {
    const METHOD: &'static str = "derive_key";
    type Response = KeyDescriptor;
}

impl RpcCall for KeyReq {
    const METHOD: &'static str = "derive_next_key";
    type Response = KeyDescriptor;
}
