//! The [`RpcClient`] type wraps a single JSON-RPC endpoint and exposes
//! the handful of read-only calls the probe needs, implemented over
//! plain JSON-RPC using `reqwest`. Alloy supplies the types only.

use {
    super::spells::parse_quantity,
    alloy::primitives::Address,
    anyhow::{Context, Result},
    contracts::CallDescriptor,
    reqwest::Client as HttpClient,
    serde_json::Value,
    std::time::Duration,
    url::Url,
};

#[derive(Clone, Debug)]
pub struct RpcClient {
    rpc_url: Url,
    http: HttpClient,
}

impl RpcClient {
    pub fn new(rpc_url: Url, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { rpc_url, http })
    }

    /// `eth_chainId` as a native integer.
    pub async fn chain_id(&self) -> Result<u64> {
        let res = self.rpc("eth_chainId", serde_json::json!([])).await?;
        let hex = res.as_str().context("chainId not string")?;
        parse_quantity(hex).context("bad chainId hex")
    }

    /// `eth_blockNumber`: height of the latest block.
    pub async fn block_number(&self) -> Result<u64> {
        let res = self.rpc("eth_blockNumber", serde_json::json!([])).await?;
        let hex = res.as_str().context("blockNumber not string")?;
        parse_quantity(hex).context("bad blockNumber hex")
    }

    /// `eth_call` against `block`. A `null` result comes back as `None`
    /// so callers can tell it apart from `"0x"`.
    pub async fn call(&self, call: &CallDescriptor, block: &str) -> Result<Option<String>> {
        let res = self
            .rpc("eth_call", serde_json::json!([call, block]))
            .await?;
        match res {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            other => anyhow::bail!("eth_call returned non-string result: {other}"),
        }
    }

    /// `eth_getCode`: deployed bytecode at `address`, `"0x"` when none.
    pub async fn get_code(&self, address: Address, block: &str) -> Result<String> {
        let res = self
            .rpc("eth_getCode", serde_json::json!([address, block]))
            .await?;
        Ok(res.as_str().context("code not string")?.to_string())
    }

    async fn rpc(&self, method: &str, params: Value) -> Result<Value> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let res = self
            .http
            .post(self.rpc_url.as_str())
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        let bytes = res.bytes().await?;
        // Try to decode JSON; if it fails, surface useful diagnostics
        let v: Value = match serde_json::from_slice(&bytes) {
            Ok(json) => json,
            Err(e) => {
                let mut sample = String::from_utf8_lossy(&bytes).to_string();
                if sample.len() > 512 {
                    let mut cut = 512;
                    while !sample.is_char_boundary(cut) {
                        cut -= 1;
                    }
                    sample.truncate(cut);
                }
                let hint = if sample.trim_start().starts_with('<') {
                    "Response looks like HTML; the RPC URL may be a gateway page or blocked. Ensure it is a valid HTTPS JSON-RPC endpoint."
                } else if sample.trim().is_empty() {
                    "Empty body from RPC. Endpoint may be down or require authentication."
                } else {
                    "Non-JSON response from RPC."
                };
                return Err(anyhow::anyhow!(
                    "RPC decode error ({status}): {e}. {hint}\nEndpoint: {}\nSample: {}",
                    super::spells::redact_url(&self.rpc_url),
                    sample
                ));
            }
        };
        if let Some(err) = v.get("error") {
            anyhow::bail!("rpc error: {}", err);
        }
        // an explicit `"result": null` is a value; a missing member is not
        v.get("result")
            .cloned()
            .with_context(|| format!("rpc response to {method} has neither result nor error"))
    }
}
