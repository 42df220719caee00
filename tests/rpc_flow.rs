use std::time::Duration;

use alloy::primitives::{address, Address};
use anyhow::Result;
use chainprobe::app::probe::{run_probe, ProbeReport, ProbeTarget};
use chainprobe::libs::error::{ProbeError, ProbeStep};
use chainprobe::libs::rpc::client::RpcClient;
use chainprobe::libs::writing::Colors;
use httpmock::{Method, Mock, MockServer};
use serde_json::{json, Value};
use url::Url;

const TOKEN: Address = address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270");

// abi.encode("Test")
const NAME_TEST: &str = "0x\
0000000000000000000000000000000000000000000000000000000000000020\
0000000000000000000000000000000000000000000000000000000000000004\
5465737400000000000000000000000000000000000000000000000000000000";

/// Answer every request for `method` with `body`.
async fn answer<'a>(server: &'a MockServer, method: &str, body: Value) -> Mock<'a> {
    let needle = format!("\"method\":\"{method}\"");
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/").body_contains(needle);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(body);
        })
        .await
}

async fn result<'a>(server: &'a MockServer, method: &str, result: Value) -> Mock<'a> {
    answer(server, method, json!({"jsonrpc": "2.0", "id": 1, "result": result})).await
}

async fn rpc_error<'a>(server: &'a MockServer, method: &str, message: &str) -> Mock<'a> {
    answer(
        server,
        method,
        json!({"jsonrpc": "2.0", "id": 1, "error": {"code": -32000, "message": message}}),
    )
    .await
}

fn target(server: &MockServer, chain_id: Option<u64>) -> ProbeTarget {
    ProbeTarget {
        network: Some("mock".into()),
        url: Url::parse(&server.base_url()).unwrap(),
        chain_id,
        contract: TOKEN,
    }
}

/// Run against `server`, returning the outcome and everything written to
/// the result sink.
async fn run(server: &MockServer, chain_id: Option<u64>) -> (Result<ProbeReport, ProbeError>, String) {
    let t = target(server, chain_id);
    let client = RpcClient::new(t.url.clone(), Duration::from_secs(5)).unwrap();
    let mut out = Colors::new(Vec::new());
    let outcome = run_probe(&client, &t, &mut out).await;
    (outcome, String::from_utf8(out.into_inner()).unwrap())
}

#[tokio::test]
async fn reads_block_and_name() -> Result<()> {
    let server = MockServer::start_async().await;
    let chain = result(&server, "eth_chainId", json!("0x89")).await;
    let block = result(&server, "eth_blockNumber", json!("0x4b7")).await;
    let call = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .body_contains("\"method\":\"eth_call\"")
                .body_contains("\"data\":\"0x06fdde03\"")
                .body_contains("\"latest\"");
            then.status(200)
                .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": NAME_TEST}));
        })
        .await;

    let (outcome, stdout) = run(&server, Some(137)).await;
    let report = outcome?;
    assert_eq!(report.chain_id, Some(137));
    assert_eq!(report.block_number, 1207);
    assert_eq!(report.name, "Test");
    assert_eq!(report.raw, NAME_TEST);
    chain.assert_hits_async(1).await;
    block.assert_hits_async(1).await;
    call.assert_hits_async(1).await;

    assert!(stdout.contains("Current block number: 1207"), "{stdout}");
    assert!(stdout.contains(NAME_TEST), "{stdout}");
    Ok(())
}

#[tokio::test]
async fn skips_chain_check_without_expected_id() -> Result<()> {
    let server = MockServer::start_async().await;
    let chain = result(&server, "eth_chainId", json!("0x89")).await;
    result(&server, "eth_blockNumber", json!("0x1")).await;
    result(&server, "eth_call", json!(NAME_TEST)).await;

    let (outcome, _) = run(&server, None).await;
    assert_eq!(outcome?.chain_id, None);
    chain.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn empty_result_without_code_means_no_bytecode() -> Result<()> {
    let server = MockServer::start_async().await;
    result(&server, "eth_blockNumber", json!("0x1")).await;
    result(&server, "eth_call", json!("0x")).await;
    let code = result(&server, "eth_getCode", json!("0x")).await;

    let (outcome, _) = run(&server, None).await;
    assert!(matches!(outcome, Err(ProbeError::NoBytecode { address }) if address == TOKEN));
    code.assert_hits_async(1).await;
    Ok(())
}

#[tokio::test]
async fn empty_result_with_code_is_reported_as_empty() -> Result<()> {
    let server = MockServer::start_async().await;
    result(&server, "eth_blockNumber", json!("0x1")).await;
    result(&server, "eth_call", Value::Null).await;
    result(&server, "eth_getCode", json!("0x6080604052")).await;

    let (outcome, _) = run(&server, None).await;
    assert!(matches!(outcome, Err(ProbeError::EmptyResult { ref raw }) if raw == "null"));
    Ok(())
}

#[tokio::test]
async fn get_code_failure_after_empty_result() -> Result<()> {
    let server = MockServer::start_async().await;
    result(&server, "eth_blockNumber", json!("0x1")).await;
    result(&server, "eth_call", json!("0x")).await;
    rpc_error(&server, "eth_getCode", "header not found").await;

    let (outcome, _) = run(&server, None).await;
    match outcome {
        Err(ProbeError::Rpc { step, error }) => {
            assert_eq!(step, ProbeStep::GetCode);
            assert!(format!("{error:#}").contains("header not found"));
        }
        other => panic!("unexpected {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn block_number_failure_stops_before_call() -> Result<()> {
    let server = MockServer::start_async().await;
    rpc_error(&server, "eth_blockNumber", "upstream unavailable").await;
    let call = result(&server, "eth_call", json!(NAME_TEST)).await;

    let (outcome, stdout) = run(&server, None).await;
    match outcome {
        Err(ProbeError::Rpc { step, error }) => {
            assert_eq!(step, ProbeStep::BlockNumber);
            assert!(format!("{error:#}").contains("upstream unavailable"));
        }
        other => panic!("unexpected {other:?}"),
    }
    call.assert_hits_async(0).await;
    assert!(stdout.is_empty());
    Ok(())
}

#[tokio::test]
async fn call_revert_is_an_rpc_failure() -> Result<()> {
    let server = MockServer::start_async().await;
    result(&server, "eth_blockNumber", json!("0x1")).await;
    rpc_error(&server, "eth_call", "execution reverted").await;

    let (outcome, _) = run(&server, None).await;
    assert!(matches!(
        outcome,
        Err(ProbeError::Rpc {
            step: ProbeStep::Call,
            ..
        })
    ));
    Ok(())
}

#[tokio::test]
async fn reply_without_result_member_is_an_rpc_failure() -> Result<()> {
    let server = MockServer::start_async().await;
    result(&server, "eth_blockNumber", json!("0x1")).await;
    answer(&server, "eth_call", json!({"jsonrpc": "2.0", "id": 1})).await;

    let (outcome, _) = run(&server, None).await;
    match outcome {
        Err(ProbeError::Rpc { step, error }) => {
            assert_eq!(step, ProbeStep::Call);
            assert!(format!("{error:#}").contains("neither result nor error"));
        }
        other => panic!("unexpected {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn wrong_chain_aborts() -> Result<()> {
    let server = MockServer::start_async().await;
    result(&server, "eth_chainId", json!("0x1")).await;
    let block = result(&server, "eth_blockNumber", json!("0x1")).await;

    let (outcome, _) = run(&server, Some(137)).await;
    assert!(matches!(
        outcome,
        Err(ProbeError::ChainMismatch {
            expected: 137,
            actual: 1
        })
    ));
    block.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn garbage_return_data_is_a_decode_error() -> Result<()> {
    let server = MockServer::start_async().await;
    result(&server, "eth_blockNumber", json!("0x1")).await;
    result(
        &server,
        "eth_call",
        json!("0x0000000000000000000000000000000000000000000000000000000000000020"),
    )
    .await;

    let (outcome, _) = run(&server, None).await;
    assert!(matches!(outcome, Err(ProbeError::Decode { .. })));
    Ok(())
}

#[tokio::test]
async fn html_gateway_gets_a_hint() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/");
            then.status(200)
                .header("content-type", "text/html")
                .body("<html>gateway</html>");
        })
        .await;

    let t = target(&server, None);
    let client = RpcClient::new(t.url, Duration::from_secs(5))?;
    let err = client.block_number().await.unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("looks like HTML"), "{msg}");
    Ok(())
}
