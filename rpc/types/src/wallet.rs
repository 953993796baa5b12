//! WalletKit request and response types.
//!
//! The `derive_key` and `derive_next_key` methods take
//! their requests from [`crate::signer`] instead.

//---------------------------------------------------------------------------------------------------- Import
use crate::{
    macros::define_request_and_response,
    misc::{
        AccountWithAddresses, AddressType, ChangeAddressType, FeePreference, OutPoint,
        PendingSweep, PsbtTemplate, Sweeps, TxOut, Utxo, UtxoLease,
    },
};

//---------------------------------------------------------------------------------------------------- Struct definitions
// This generates 2 structs:
//
// - `ListUnspentRequest`
// - `ListUnspentResponse`
//
// with some interconnected documentation, and
// `impl RpcCall for ListUnspentRequest`.
define_request_and_response! {
    // The method name on the wire.
    "list_unspent",

    // The base type name.
    ListUnspent,

    // The request type.
    //
    // If there are any additional attributes (`/// docs` or `#[derive]`s)
    // for the struct, they go here, e.g.:
    // #[derive(Copy)]
    Request {
        // Within the `{}` is an infinite matching pattern of:
        // ```
        // $ATTRIBUTES
        // $FIELD_NAME: $FIELD_TYPE,
        // ```
        // The struct generated and all fields are `pub`.
        min_confs: i32,
        max_confs: i32,
        account: String,
        unconfirmed_only: bool,
    },

    // The response type.
    Response {
        utxos: Vec<Utxo>,
    }
}

define_request_and_response! {
    "send_outputs",
    SendOutputs,
    Request {
        /// The fee rate, in sat/kw.
        sat_per_kw: i64,
        outputs: Vec<TxOut>,
        label: String,
        min_confs: i32,
        spend_unconfirmed: bool,
    },
    Response {
        /// The serialized signed transaction.
        #[serde(with = "hex::serde")]
        raw_tx: Vec<u8>,
    }
}

define_request_and_response! {
    "fund_psbt",
    FundPsbt,
    Request {
        template: PsbtTemplate,
        fees: FeePreference,
        /// The account to fund from, the default account if empty.
        account: String,
        min_confs: i32,
        spend_unconfirmed: bool,
        change_type: ChangeAddressType,
    },
    Response {
        #[serde(with = "hex::serde")]
        funded_psbt: Vec<u8>,
        /// `-1` if no change output was added.
        change_output_index: i32,
        /// The outputs locked for this PSBT.
        locked_utxos: Vec<UtxoLease>,
    }
}

define_request_and_response! {
    "finalize_psbt",
    FinalizePsbt,
    Request {
        #[serde(with = "hex::serde")]
        funded_psbt: Vec<u8>,
        account: String,
    },
    Response {
        #[serde(with = "hex::serde")]
        signed_psbt: Vec<u8>,
        #[serde(with = "hex::serde")]
        raw_final_tx: Vec<u8>,
    }
}

define_request_and_response! {
    "label_transaction",
    LabelTransaction,
    Request {
        #[serde(with = "hex::serde")]
        txid: Vec<u8>,
        /// Must not be empty.
        label: String,
        /// Replace an existing label.
        overwrite: bool,
    },
    Response {}
}

define_request_and_response! {
    "list_addresses",
    ListAddresses,
    Request {
        /// Only list this account, all accounts if empty.
        account_name: String,
        show_custom_accounts: bool,
    },
    Response {
        account_with_addresses: Vec<AccountWithAddresses>,
    }
}

define_request_and_response! {
    "list_sweeps",
    ListSweeps,
    #[derive(Copy)]
    Request {
        /// Return full transactions instead of only their ids.
        verbose: bool,
    },
    Response {
        sweeps: Sweeps,
    }
}

define_request_and_response! {
    "pending_sweeps",
    PendingSweeps,
    #[derive(Copy)]
    Request {},
    Response {
        pending_sweeps: Vec<PendingSweep>,
    }
}

define_request_and_response! {
    "next_addr",
    NextAddr,
    Request {
        account: String,
        address_type: AddressType,
        /// Derive a change address instead.
        change: bool,
    },
    Response {
        addr: String,
    }
}

define_request_and_response! {
    "publish_transaction",
    PublishTransaction,
    Request {
        #[serde(with = "hex::serde")]
        tx_hex: Vec<u8>,
        label: String,
    },
    Response {
        /// Empty if the transaction was published.
        publish_error: String,
    }
}

define_request_and_response! {
    "estimate_fee",
    EstimateFee,
    #[derive(Copy)]
    Request {
        conf_target: i32,
    },
    Response {
        sat_per_kw: i64,
    }
}

define_request_and_response! {
    "bump_fee",
    BumpFee,
    Request {
        outpoint: Option<OutPoint>,
        target_conf: u32,
        sat_per_vbyte: u64,
        force: bool,
    },
    Response {}
}

define_request_and_response! {
    "lease_output",
    LeaseOutput,
    Request {
        /// The 32 byte lock id.
        #[serde(with = "hex::serde")]
        id: Vec<u8>,
        outpoint: Option<OutPoint>,
        expiration_seconds: u64,
    },
    Response {
        /// Unix timestamp the lease expires at.
        expiration: u64,
    }
}

define_request_and_response! {
    "release_output",
    ReleaseOutput,
    Request {
        #[serde(with = "hex::serde")]
        id: Vec<u8>,
        outpoint: Option<OutPoint>,
    },
    Response {}
}

define_request_and_response! {
    "list_leases",
    ListLeases,
    #[derive(Copy)]
    Request {},
    Response {
        locked_utxos: Vec<UtxoLease>,
    }
}
