//! Small helpers around raw JSON-RPC values: hex quantities, call data
//! and endpoint display.

use {
    alloy::primitives::Bytes,
    anyhow::{anyhow, Result},
    url::Url,
};

/// Parse a JSON-RPC quantity such as `"0x0"`, `"0x1b4"` or `"0X10"`.
pub fn parse_quantity<S: AsRef<str>>(raw_hex: S) -> Result<u64> {
    let s = raw_hex.as_ref().trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| anyhow!("quantity `{s}` is missing the 0x prefix"))?;
    if digits.is_empty() {
        return Err(anyhow!("quantity `{s}` has no digits"));
    }
    u64::from_str_radix(digits, 16).map_err(|e| anyhow!("failed to decode quantity `{s}`: {e}"))
}

/// True when an `eth_call` gave nothing to decode: null, `""` or bare `0x`.
pub fn is_empty_data(raw: Option<&str>) -> bool {
    match raw {
        None => true,
        Some(s) => s.len() <= 2,
    }
}

/// Hex call data to bytes; odd-length input is left padded.
pub fn decode_data<S: AsRef<str>>(raw_hex: S) -> Result<Bytes> {
    let mut s = raw_hex.as_ref().trim();
    if let Some(stripped) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        s = stripped;
    }

    let owned;
    if s.len() % 2 == 1 {
        owned = format!("0{s}");
        s = &owned;
    }

    let bytes = hex::decode(s).map_err(|e| anyhow!("failed to decode data hex `{}`: {}", s, e))?;
    Ok(bytes.into())
}

/// Scheme, host and port only. Provider URLs often embed an API token
/// in the path or query.
pub fn redact_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or("?");
    let mut out = match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    };
    let path = url.path();
    if url.query().is_some() || (!path.is_empty() && path != "/") {
        out.push_str("/…");
    }
    out
}
