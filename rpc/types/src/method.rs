//! [`WalletKitRequest`] and [`WalletKitResponse`].

//---------------------------------------------------------------------------------------------------- Import
use serde::{Deserialize, Serialize};

use crate::{
    signer::{KeyDescriptor, KeyLocator, KeyReq},
    wallet::{
        BumpFeeRequest, BumpFeeResponse, EstimateFeeRequest, EstimateFeeResponse,
        FinalizePsbtRequest, FinalizePsbtResponse, FundPsbtRequest, FundPsbtResponse,
        LabelTransactionRequest, LabelTransactionResponse, LeaseOutputRequest,
        LeaseOutputResponse, ListAddressesRequest, ListAddressesResponse, ListLeasesRequest,
        ListLeasesResponse, ListSweepsRequest, ListSweepsResponse, ListUnspentRequest,
        ListUnspentResponse, NextAddrRequest, NextAddrResponse, PendingSweepsRequest,
        PendingSweepsResponse, PublishTransactionRequest, PublishTransactionResponse,
        ReleaseOutputRequest, ReleaseOutputResponse, SendOutputsRequest, SendOutputsResponse,
    },
    RpcCall,
};

//---------------------------------------------------------------------------------------------------- Macro
/// Defines [`WalletKitRequest`] and [`WalletKitResponse`],
/// one variant per method, with `From` conversions.
///
/// Variant names must be the `PascalCase` form of
/// the request's [`RpcCall::METHOD`], since `serde`
/// derives the `method` tag from them.
macro_rules! define_methods {
    (
        $(
            $variant:ident($request:ty) => $response:ty,
        )*
    ) => {
        /// All WalletKit requests.
        ///
        /// This (de)serializes as the `method` and `params`
        /// fields of a JSON-RPC 2.0 request.
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case", tag = "method", content = "params")]
        pub enum WalletKitRequest {
            $(
                #[allow(missing_docs)]
                $variant($request),
            )*
        }

        impl WalletKitRequest {
            /// Every method name, in declaration order.
            pub const METHODS: &'static [&'static str] = &[
                $(
                    <$request as RpcCall>::METHOD,
                )*
            ];

            /// The method name of this request.
            pub const fn method(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant(_) => <$request as RpcCall>::METHOD,
                    )*
                }
            }
        }

        /// All WalletKit responses.
        ///
        /// This serializes as the bare inner response, i.e.
        /// the `result` field of a JSON-RPC 2.0 response.
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(untagged)]
        pub enum WalletKitResponse {
            $(
                #[allow(missing_docs)]
                $variant($response),
            )*
        }

        $(
            impl From<$request> for WalletKitRequest {
                fn from(value: $request) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

define_methods! {
    ListUnspent(ListUnspentRequest) => ListUnspentResponse,
    DeriveKey(KeyLocator) => KeyDescriptor,
    DeriveNextKey(KeyReq) => KeyDescriptor,
    SendOutputs(SendOutputsRequest) => SendOutputsResponse,
    FundPsbt(FundPsbtRequest) => FundPsbtResponse,
    FinalizePsbt(FinalizePsbtRequest) => FinalizePsbtResponse,
    LabelTransaction(LabelTransactionRequest) => LabelTransactionResponse,
    ListAddresses(ListAddressesRequest) => ListAddressesResponse,
    ListSweeps(ListSweepsRequest) => ListSweepsResponse,
    PendingSweeps(PendingSweepsRequest) => PendingSweepsResponse,
    NextAddr(NextAddrRequest) => NextAddrResponse,
    PublishTransaction(PublishTransactionRequest) => PublishTransactionResponse,
    EstimateFee(EstimateFeeRequest) => EstimateFeeResponse,
    BumpFee(BumpFeeRequest) => BumpFeeResponse,
    LeaseOutput(LeaseOutputRequest) => LeaseOutputResponse,
    ReleaseOutput(ReleaseOutputRequest) => ReleaseOutputResponse,
    ListLeases(ListLeasesRequest) => ListLeasesResponse,
}
