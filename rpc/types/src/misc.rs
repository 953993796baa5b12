//! Miscellaneous types.
//!
//! These are data types that appear in request/response types.
//!
//! For example, [`crate::wallet::ListUnspentResponse`] contains
//! the [`crate::misc::Utxo`] struct defined here.

//---------------------------------------------------------------------------------------------------- Import
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::macros::define_struct;

//---------------------------------------------------------------------------------------------------- Enums
/// The address types a wallet can hand out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressType {
    #[default]
    Unknown,
    WitnessPubkeyHash,
    NestedWitnessPubkeyHash,
    HybridNestedWitnessPubkeyHash,
    TaprootPubkey,
}

/// The address type used for change outputs of a funded PSBT.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChangeAddressType {
    /// Use the wallet's default change address type.
    #[default]
    #[serde(rename = "CHANGE_ADDRESS_TYPE_UNSPECIFIED")]
    Unspecified,
    /// Always use a taproot (P2TR) change address.
    #[serde(rename = "CHANGE_ADDRESS_TYPE_P2TR")]
    P2tr,
}

/// How an output being swept is spent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WitnessType {
    #[default]
    UnknownWitness,
    CommitmentTimeLock,
    CommitmentNoDelay,
    CommitmentRevoke,
    HtlcOfferedRevoke,
    HtlcAcceptedRevoke,
    HtlcOfferedTimeoutSecondLevel,
    HtlcAcceptedSuccessSecondLevel,
    HtlcOfferedRemoteTimeout,
    HtlcAcceptedRemoteSuccess,
    HtlcSecondLevelRevoke,
    WitnessKeyHash,
    NestedWitnessKeyHash,
    CommitmentAnchor,
    TaprootPubKeySpend,
}

/// The inputs and outputs of a PSBT to fund.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PsbtTemplate {
    /// A serialized PSBT, possibly with inputs and outputs already set.
    #[serde(with = "hex::serde")]
    Psbt(Vec<u8>),
    /// Inputs and outputs to build the PSBT from.
    Raw(TxTemplate),
}

impl Default for PsbtTemplate {
    fn default() -> Self {
        Self::Raw(TxTemplate::default())
    }
}

/// The fee rate of a PSBT to fund.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeePreference {
    /// Number of blocks the transaction should confirm within.
    TargetConf(u32),
    /// An explicit fee rate in sat/vbyte.
    SatPerVbyte(u64),
}

impl Default for FeePreference {
    fn default() -> Self {
        Self::TargetConf(6)
    }
}

/// The sweeps of a wallet, in either form of
/// [`crate::wallet::ListSweepsRequest::verbose`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sweeps {
    /// Full transaction details, for verbose requests.
    TransactionDetails(TransactionDetails),
    /// Only the transaction ids.
    TransactionIds(TransactionIds),
}

impl Default for Sweeps {
    fn default() -> Self {
        Self::TransactionIds(TransactionIds::default())
    }
}

//---------------------------------------------------------------------------------------------------- Structs
define_struct! {
    /// A transaction output reference.
    OutPoint {
        /// Raw bytes of the transaction id.
        #[serde(with = "hex::serde")]
        txid_bytes: Vec<u8>,
        /// Reversed, hex-encoded transaction id.
        txid_str: String,
        /// The index of the output in the transaction.
        output_index: u32,
    }

    /// A transaction output.
    TxOut {
        /// The value of the output, in satoshis.
        value: i64,
        /// The script of the output.
        #[serde(with = "hex::serde")]
        pk_script: Vec<u8>,
    }

    /// An unspent output of the wallet.
    Utxo {
        address_type: AddressType,
        address: String,
        amount_sat: i64,
        #[serde(with = "hex::serde")]
        pk_script: Vec<u8>,
        outpoint: Option<OutPoint>,
        confirmations: i64,
    }

    /// Inputs and outputs of a PSBT.
    TxTemplate {
        /// The inputs to spend. If empty, the wallet selects coins.
        inputs: Vec<OutPoint>,
        /// Address to amount, in satoshis.
        outputs: BTreeMap<String, u64>,
    }

    /// An output locked by the wallet.
    UtxoLease {
        /// The 32 byte lock id.
        #[serde(with = "hex::serde")]
        id: Vec<u8>,
        outpoint: Option<OutPoint>,
        /// Unix timestamp the lease expires at.
        expiration: u64,
        #[serde(with = "hex::serde")]
        pk_script: Vec<u8>,
        value: u64,
    }

    /// An address and what the wallet knows of it.
    AddressProperty {
        address: String,
        /// `true` for change addresses.
        is_internal: bool,
        /// The balance of the address, in satoshis.
        balance: i64,
    }

    /// The addresses of one wallet account.
    AccountWithAddresses {
        name: String,
        address_type: AddressType,
        derivation_path: String,
        addresses: Vec<AddressProperty>,
    }

    /// A wallet transaction.
    Transaction {
        tx_hash: String,
        /// Net amount, in satoshis.
        amount: i64,
        num_confirmations: i32,
        block_hash: String,
        block_height: i32,
        time_stamp: i64,
        total_fees: i64,
        dest_addresses: Vec<String>,
        raw_tx_hex: String,
        label: String,
    }

    /// A list of full transactions.
    TransactionDetails {
        transactions: Vec<Transaction>,
    }

    /// A list of transaction ids.
    TransactionIds {
        transaction_ids: Vec<String>,
    }

    /// An output the wallet is currently attempting to sweep.
    PendingSweep {
        outpoint: Option<OutPoint>,
        witness_type: WitnessType,
        amount_sat: u32,
        /// The fee rate of the last broadcast sweep transaction.
        sat_per_vbyte: u64,
        broadcast_attempts: u32,
        next_broadcast_height: u32,
        requested_conf_target: u32,
        requested_sat_per_vbyte: u32,
        /// Whether the sweep is attempted even if it is uneconomical.
        force: bool,
    }
}
