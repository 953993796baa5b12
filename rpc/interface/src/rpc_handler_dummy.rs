//! Dummy implementation of [`RpcHandler`].

//---------------------------------------------------------------------------------------------------- Use
use std::task::Poll;

use futures::{future::BoxFuture, FutureExt};
use tower::Service;

use walletkit_rpc_types::{WalletKitRequest, WalletKitResponse};

use crate::{rpc_error::RpcError, rpc_handler::RpcHandler};

//---------------------------------------------------------------------------------------------------- RpcHandlerDummy
/// An [`RpcHandler`] that always returns [`Default::default`].
///
/// This `struct` implements [`RpcHandler`], and always responds
/// with the response `struct` set to [`Default::default`], except:
/// - `label_transaction` with an empty label fails with [`RpcError::ZeroLabel`]
/// - every method fails with [`RpcError::Unavailable`] if
///   [`RpcHandlerDummy::unavailable`] is `true`
///
/// See the [`crate`] documentation for example usage.
///
/// This is mostly used for testing purposes and can
/// be disabled by disable the `dummy` feature flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RpcHandlerDummy {
    /// Should this wallet refuse every request?
    pub unavailable: bool,
}

impl RpcHandler for RpcHandlerDummy {}

impl Service<WalletKitRequest> for RpcHandlerDummy {
    type Response = WalletKitResponse;
    type Error = RpcError;
    type Future = BoxFuture<'static, Result<WalletKitResponse, RpcError>>;

    fn poll_ready(&mut self, _: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: WalletKitRequest) -> Self::Future {
        use WalletKitRequest as Req;
        use WalletKitResponse as Resp;

        if self.unavailable {
            return futures::future::ready(Err(RpcError::Unavailable)).boxed();
        }

        #[allow(clippy::default_trait_access)]
        let resp = match req {
            Req::LabelTransaction(r) if r.label.is_empty() => Err(RpcError::ZeroLabel),
            Req::ListUnspent(_) => Ok(Resp::ListUnspent(Default::default())),
            Req::DeriveKey(_) => Ok(Resp::DeriveKey(Default::default())),
            Req::DeriveNextKey(_) => Ok(Resp::DeriveNextKey(Default::default())),
            Req::SendOutputs(_) => Ok(Resp::SendOutputs(Default::default())),
            Req::FundPsbt(_) => Ok(Resp::FundPsbt(Default::default())),
            Req::FinalizePsbt(_) => Ok(Resp::FinalizePsbt(Default::default())),
            Req::LabelTransaction(_) => Ok(Resp::LabelTransaction(Default::default())),
            Req::ListAddresses(_) => Ok(Resp::ListAddresses(Default::default())),
            Req::ListSweeps(_) => Ok(Resp::ListSweeps(Default::default())),
            Req::PendingSweeps(_) => Ok(Resp::PendingSweeps(Default::default())),
            Req::NextAddr(_) => Ok(Resp::NextAddr(Default::default())),
            Req::PublishTransaction(_) => Ok(Resp::PublishTransaction(Default::default())),
            Req::EstimateFee(_) => Ok(Resp::EstimateFee(Default::default())),
            Req::BumpFee(_) => Ok(Resp::BumpFee(Default::default())),
            Req::LeaseOutput(_) => Ok(Resp::LeaseOutput(Default::default())),
            Req::ReleaseOutput(_) => Ok(Resp::ReleaseOutput(Default::default())),
            Req::ListLeases(_) => Ok(Resp::ListLeases(Default::default())),
        };

        futures::future::ready(resp).boxed()
    }
}
