//! WalletKit functions of [`HarnessRpc`].
//!
//! Unless noted otherwise, every function here sends one request,
//! fails the test if it errors, and returns the response.

//---------------------------------------------------------------------------------------------------- Use
use walletkit_rpc_types::{
    signer::{KeyDescriptor, KeyLocator, KeyReq},
    wallet::{
        BumpFeeRequest, BumpFeeResponse, EstimateFeeRequest, EstimateFeeResponse,
        FinalizePsbtRequest, FinalizePsbtResponse, FundPsbtRequest, FundPsbtResponse,
        LabelTransactionRequest, LeaseOutputRequest, LeaseOutputResponse, ListAddressesRequest,
        ListAddressesResponse, ListLeasesRequest, ListLeasesResponse, ListSweepsRequest,
        ListSweepsResponse, ListUnspentRequest, ListUnspentResponse, NextAddrRequest,
        NextAddrResponse, PendingSweepsRequest, PendingSweepsResponse, PublishTransactionRequest,
        PublishTransactionResponse, ReleaseOutputRequest, ReleaseOutputResponse,
        SendOutputsRequest, SendOutputsResponse,
    },
};

use crate::{
    harness::{HarnessError, HarnessRpc},
    rpc::WalletKitClient,
};

//---------------------------------------------------------------------------------------------------- HarnessRpc
impl<C: WalletKitClient> HarnessRpc<C> {
    /// List the unspent outputs of the wallet.
    pub async fn list_unspent(&self, req: ListUnspentRequest) -> ListUnspentResponse {
        self.call_no_error(req).await
    }

    /// Derive the public key of `key_locator`.
    pub async fn derive_key(&self, key_locator: KeyLocator) -> KeyDescriptor {
        self.call_no_error(key_locator).await
    }

    /// Send coins to the given outputs.
    pub async fn send_outputs(&self, req: SendOutputsRequest) -> SendOutputsResponse {
        self.call_no_error(req).await
    }

    /// Fund a PSBT with the wallet's coins.
    pub async fn fund_psbt(&self, req: FundPsbtRequest) -> FundPsbtResponse {
        self.call_no_error(req).await
    }

    /// Sign and finalize a funded PSBT.
    pub async fn finalize_psbt(&self, req: FinalizePsbtRequest) -> FinalizePsbtResponse {
        self.call_no_error(req).await
    }

    /// Label a transaction, expecting the wallet to refuse.
    ///
    /// # Panics
    /// This panics with `"{name}: expected error returned"`
    /// if the call succeeded.
    pub async fn label_transaction_assert_err(&self, req: LabelTransactionRequest) -> HarnessError {
        match self.call(req).await {
            Ok(_) => {
                tracing::error!(node = %self.name(), "label_transaction unexpectedly succeeded");
                panic!("{}: expected error returned", self.name());
            }
            Err(e) => e,
        }
    }

    /// Label a transaction.
    pub async fn label_transaction(&self, req: LabelTransactionRequest) {
        self.call_no_error(req).await;
    }

    /// Derive the next unused key of a family.
    pub async fn derive_next_key(&self, req: KeyReq) -> KeyDescriptor {
        self.call_no_error(req).await
    }

    /// List the wallet's accounts and their addresses.
    pub async fn list_addresses(&self, req: ListAddressesRequest) -> ListAddressesResponse {
        self.call_no_error(req).await
    }

    /// List the wallet's sweep transactions.
    ///
    /// With `verbose`, full transactions are returned instead of their ids.
    pub async fn list_sweeps(&self, verbose: bool) -> ListSweepsResponse {
        self.call_no_error(ListSweepsRequest { verbose }).await
    }

    /// List the outputs the wallet is currently sweeping.
    pub async fn pending_sweeps(&self) -> PendingSweepsResponse {
        self.call_no_error(PendingSweepsRequest {}).await
    }

    /// Derive the next address.
    pub async fn next_addr(&self, req: NextAddrRequest) -> NextAddrResponse {
        self.call_no_error(req).await
    }

    /// Publish a transaction.
    ///
    /// This only fails the test if the call itself fails, a rejected
    /// transaction is reported in [`PublishTransactionResponse::publish_error`].
    pub async fn publish_transaction(
        &self,
        req: PublishTransactionRequest,
    ) -> PublishTransactionResponse {
        self.call_no_error(req).await
    }

    /// Estimate the fee rate for a confirmation target.
    pub async fn estimate_fee(&self, conf_target: i32) -> EstimateFeeResponse {
        self.call_no_error(EstimateFeeRequest { conf_target }).await
    }

    /// Bump the fee of an output being swept.
    pub async fn bump_fee(&self, req: BumpFeeRequest) -> BumpFeeResponse {
        self.call_no_error(req).await
    }

    /// Lock an output.
    pub async fn lease_output(&self, req: LeaseOutputRequest) -> LeaseOutputResponse {
        self.call_no_error(req).await
    }

    /// Unlock an output.
    pub async fn release_output(&self, req: ReleaseOutputRequest) -> ReleaseOutputResponse {
        self.call_no_error(req).await
    }

    /// List the locked outputs.
    pub async fn list_leases(&self) -> ListLeasesResponse {
        self.call_no_error(ListLeasesRequest {}).await
    }
}
