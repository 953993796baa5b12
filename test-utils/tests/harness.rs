//! End-to-end tests of the harness against a
//! dummy wallet served over HTTP.

use std::time::Duration;

use axum::{routing::post, Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use walletkit_json_rpc::error::ErrorCode;
use walletkit_rpc_interface::{RouterBuilder, RpcHandlerDummy};
use walletkit_rpc_types::{
    misc::{
        FeePreference, OutPoint, PsbtTemplate, Sweeps, Transaction, TransactionDetails,
        TransactionIds, UtxoLease,
    },
    signer::{KeyDescriptor, KeyLocator, KeyReq},
    wallet::{
        BumpFeeRequest, FinalizePsbtRequest, FundPsbtRequest, FundPsbtResponse,
        LabelTransactionRequest, LeaseOutputRequest, ListAddressesRequest, ListUnspentRequest,
        NextAddrRequest, PublishTransactionRequest, ReleaseOutputRequest, SendOutputsRequest,
    },
};
use walletkit_test_utils::{
    config::HarnessConfig,
    harness::{HarnessError, HarnessRpc},
    logging::init_logging,
    rpc::{ClientError, HttpRpcClient},
};

/// Serve `router` on an ephemeral port, returning its URL.
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

async fn harness(handler: RpcHandlerDummy) -> HarnessRpc<HttpRpcClient> {
    harness_at(serve(RouterBuilder::new().all().build().with_state(handler)).await)
}

fn harness_at(rpc_url: String) -> HarnessRpc<HttpRpcClient> {
    let config = HarnessConfig {
        rpc_url,
        timeout: 5,
        ..HarnessConfig::default()
    };

    init_logging(&config.tracing);

    HarnessRpc::from_config(&config, CancellationToken::new()).unwrap()
}

fn label(label: &str) -> LabelTransactionRequest {
    LabelTransactionRequest {
        txid: vec![0xab; 32],
        label: label.to_string(),
        overwrite: false,
    }
}

#[tokio::test]
async fn every_method() {
    let alice = harness(RpcHandlerDummy::default()).await;

    assert!(alice
        .list_unspent(ListUnspentRequest {
            min_confs: 1,
            max_confs: 9999,
            ..Default::default()
        })
        .await
        .utxos
        .is_empty());

    let key = alice
        .derive_key(KeyLocator {
            key_family: 6,
            key_index: 1,
        })
        .await;
    assert_eq!(key, KeyDescriptor::default());

    let key = alice
        .derive_next_key(KeyReq {
            key_finger_print: 0,
            key_family: 6,
        })
        .await;
    assert_eq!(key, KeyDescriptor::default());

    assert!(alice
        .send_outputs(SendOutputsRequest {
            sat_per_kw: 2500,
            ..Default::default()
        })
        .await
        .raw_tx
        .is_empty());

    let funded = alice
        .fund_psbt(FundPsbtRequest {
            template: PsbtTemplate::Psbt(vec![0x70, 0x73, 0x62, 0x74, 0xff]),
            fees: FeePreference::SatPerVbyte(5),
            ..Default::default()
        })
        .await;
    assert!(funded.locked_utxos.is_empty());

    alice
        .finalize_psbt(FinalizePsbtRequest {
            funded_psbt: funded.funded_psbt,
            account: String::new(),
        })
        .await;

    alice.label_transaction(label("opening")).await;

    alice.list_addresses(ListAddressesRequest::default()).await;

    assert_eq!(
        alice.list_sweeps(false).await.sweeps,
        Sweeps::TransactionIds(TransactionIds::default())
    );
    assert!(alice.pending_sweeps().await.pending_sweeps.is_empty());

    alice.next_addr(NextAddrRequest::default()).await;
    assert!(alice
        .publish_transaction(PublishTransactionRequest {
            tx_hex: vec![0x02, 0x00],
            label: "publish".into(),
        })
        .await
        .publish_error
        .is_empty());
    assert_eq!(alice.estimate_fee(6).await.sat_per_kw, 0);

    let outpoint = Some(OutPoint {
        txid_bytes: vec![0xab; 32],
        txid_str: String::new(),
        output_index: 1,
    });
    alice
        .bump_fee(BumpFeeRequest {
            outpoint: outpoint.clone(),
            target_conf: 2,
            ..Default::default()
        })
        .await;
    alice
        .lease_output(LeaseOutputRequest {
            id: vec![1; 32],
            outpoint: outpoint.clone(),
            expiration_seconds: 60,
        })
        .await;
    alice
        .release_output(ReleaseOutputRequest {
            id: vec![1; 32],
            outpoint,
        })
        .await;
    assert!(alice.list_leases().await.locked_utxos.is_empty());
}

#[tokio::test]
async fn label_transaction_assert_err() {
    let alice = harness(RpcHandlerDummy::default()).await;

    let err = alice.label_transaction_assert_err(label("")).await;

    let HarnessError::Client(ClientError::Rpc(object)) = err else {
        panic!("expected an rpc error");
    };
    assert_eq!(object.code, ErrorCode::ServerError(-32001));
    assert_eq!(object.message, "cannot label transaction with empty label");
}

#[tokio::test]
#[should_panic(expected = "alice: expected error returned")]
async fn label_transaction_assert_err_on_success() {
    let alice = harness(RpcHandlerDummy::default()).await;
    alice.label_transaction_assert_err(label("opening")).await;
}

#[tokio::test]
#[should_panic(expected = "alice: failed to call label_transaction")]
async fn label_transaction_empty() {
    let alice = harness(RpcHandlerDummy::default()).await;
    alice.label_transaction(label("")).await;
}

#[tokio::test]
#[should_panic(expected = "alice: failed to call list_unspent: rpc error: -32003: wallet unavailable")]
async fn unavailable_wallet() {
    let alice = harness(RpcHandlerDummy { unavailable: true }).await;
    alice.list_unspent(ListUnspentRequest::default()).await;
}

#[tokio::test]
#[should_panic(expected = "alice: failed to call pending_sweeps: run context cancelled")]
async fn stopped() {
    let alice = harness(RpcHandlerDummy::default()).await;
    alice.stop();
    alice.pending_sweeps().await;
}

/// A wallet with state: answers `derive_key`, `fund_psbt`
/// and `list_sweeps` with fixed, non-empty results.
async fn funded_wallet(Json(body): Json<Value>) -> Json<Value> {
    let result = match body["method"].as_str() {
        Some("derive_key") => json!({
            "raw_key_bytes": "02abcd",
            "key_loc": body["params"],
        }),
        Some("fund_psbt") => json!({
            "funded_psbt": "70736274ff01",
            "change_output_index": 1,
            "locked_utxos": [{
                "id": "11".repeat(32),
                "outpoint": {
                    "txid_bytes": "ab".repeat(32),
                    "txid_str": "ab".repeat(32),
                    "output_index": 2,
                },
                "expiration": 1_700_000_600,
                "pk_script": "0014deadbeef",
                "value": 50_000,
            }],
        }),
        Some("list_sweeps") => json!({
            "sweeps": {
                "transaction_details": {
                    "transactions": [{ "tx_hash": "cafe", "amount": -1000, "label": "sweep" }],
                },
            },
        }),
        _ => {
            return Json(json!({
                "jsonrpc": "2.0",
                "id": body["id"],
                "error": { "code": -32601, "message": "Method not found" },
            }))
        }
    };

    Json(json!({ "jsonrpc": "2.0", "id": body["id"], "result": result }))
}

/// Harness functions hand back what the wallet sent, decoded.
#[tokio::test]
async fn returns_decoded_response() {
    let url = serve(Router::new().route("/json_rpc", post(funded_wallet))).await;
    let alice = harness_at(url);

    let key_loc = KeyLocator {
        key_family: 6,
        key_index: 1,
    };
    assert_eq!(
        alice.derive_key(key_loc).await,
        KeyDescriptor {
            raw_key_bytes: vec![0x02, 0xab, 0xcd],
            key_loc: Some(key_loc),
        }
    );

    assert_eq!(
        alice.fund_psbt(FundPsbtRequest::default()).await,
        FundPsbtResponse {
            funded_psbt: vec![0x70, 0x73, 0x62, 0x74, 0xff, 0x01],
            change_output_index: 1,
            locked_utxos: vec![UtxoLease {
                id: vec![0x11; 32],
                outpoint: Some(OutPoint {
                    txid_bytes: vec![0xab; 32],
                    txid_str: "ab".repeat(32),
                    output_index: 2,
                }),
                expiration: 1_700_000_600,
                pk_script: vec![0x00, 0x14, 0xde, 0xad, 0xbe, 0xef],
                value: 50_000,
            }],
        }
    );

    assert_eq!(
        alice.list_sweeps(true).await.sweeps,
        Sweeps::TransactionDetails(TransactionDetails {
            transactions: vec![Transaction {
                tx_hash: "cafe".into(),
                amount: -1000,
                label: "sweep".into(),
                ..Default::default()
            }],
        })
    );
}

#[tokio::test]
#[should_panic(expected = "alice: failed to call pending_sweeps: rpc error: -32601: Method not found")]
async fn method_not_found() {
    let url = serve(Router::new().route("/json_rpc", post(funded_wallet))).await;
    harness_at(url).pending_sweeps().await;
}

/// Nothing listens on the port: a transport error, not a hang.
#[tokio::test]
async fn unreachable_wallet() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpRpcClient::new(Some(format!("http://{addr}"))).unwrap();
    let alice = HarnessRpc::new("alice", client, CancellationToken::new())
        .with_timeout(Duration::from_secs(5));

    let err = alice.call(KeyLocator::default()).await.unwrap_err();
    assert!(matches!(err, HarnessError::Client(ClientError::Http(_))));
}
