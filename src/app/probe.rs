use {
    crate::libs::error::{ProbeError, ProbeStep},
    crate::libs::rpc::{
        client::RpcClient,
        spells::{decode_data, is_empty_data, redact_url},
    },
    crate::libs::writing::{cc, Colors},
    crate::{error, log},
    alloy::primitives::Address,
    std::io::Write,
    url::Url,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Network label for logs; `None` when dialing a bare URL.
    pub network: Option<String>,
    pub url: Url,
    pub chain_id: Option<u64>,
    pub contract: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub chain_id: Option<u64>,
    pub block_number: u64,
    pub raw: String,
    pub name: String,
}

/// Sequential smoke test: chain check, latest block, then `name()` via a
/// raw `eth_call`. Stops at the first failing step. Values go to `out` as
/// they arrive; progress goes to the stderr log.
pub async fn run_probe<W: Write>(
    client: &RpcClient,
    target: &ProbeTarget,
    out: &mut Colors<W>,
) -> Result<ProbeReport, ProbeError> {
    let chain_id = match target.chain_id {
        Some(expected) => {
            let actual = client
                .chain_id()
                .await
                .map_err(ProbeError::rpc(ProbeStep::ChainId))?;
            if actual != expected {
                return Err(ProbeError::ChainMismatch { expected, actual });
            }
            Some(actual)
        }
        None => None,
    };

    log!(cc::CYAN, "Attempting to fetch the latest block number...");
    let block_number = client
        .block_number()
        .await
        .map_err(ProbeError::rpc(ProbeStep::BlockNumber))?;
    out.cprint(&format!("Current block number: {block_number}"), cc::GREEN);

    let call = contracts::name_call(target.contract);
    log!(
        cc::CYAN,
        "Attempting to read contract name with a direct eth_call... Calldata: {}",
        call.data_hex()
    );
    let result = client
        .call(&call, "latest")
        .await
        .map_err(ProbeError::rpc(ProbeStep::Call))?;
    let raw = result.clone().unwrap_or_else(|| "null".to_string());
    out.cprint(&format!("Raw result from eth_call: {raw}"), cc::LIGHT_GRAY);

    if is_empty_data(result.as_deref()) {
        let code = client
            .get_code(target.contract, "latest")
            .await
            .map_err(ProbeError::rpc(ProbeStep::GetCode))?;
        if is_empty_data(Some(&code)) {
            return Err(ProbeError::NoBytecode {
                address: target.contract,
            });
        }
        return Err(ProbeError::EmptyResult { raw });
    }

    let bytes = decode_data(&raw).map_err(ProbeError::rpc(ProbeStep::Call))?;
    let name = contracts::decode_name(&bytes).map_err(|source| ProbeError::Decode {
        raw: raw.clone(),
        source,
    })?;

    Ok(ProbeReport {
        chain_id,
        block_number,
        raw,
        name,
    })
}

/// Print the outcome the way an operator reads it: the value on `out`,
/// or a diagnosis on stderr.
pub fn report<W: Write>(
    target: &ProbeTarget,
    outcome: &Result<ProbeReport, ProbeError>,
    out: &mut Colors<W>,
) {
    match outcome {
        Ok(r) => {
            out.cprint(&format!("Contract name: {}", r.name), cc::LIGHT_GREEN);
            out.cprint("Probe completed successfully.", cc::LIGHT_GREEN);
        }
        Err(ProbeError::NoBytecode { address }) => {
            error!("Error: eth_call returned an empty result, cannot decode.");
            error!(
                "The address {} has no deployed bytecode. Verify the address and network.",
                address
            );
        }
        Err(e @ ProbeError::ChainMismatch { .. }) => {
            error!(
                "--- ERROR: {} at {} ({}) ---",
                e,
                redact_url(&target.url),
                target.network.as_deref().unwrap_or("direct URL")
            );
        }
        Err(ProbeError::Rpc { step, error }) => {
            error!("--- ERROR calling {} ---", step);
            error!("Message: {:#}", error);
        }
        Err(e) => error!("Error: {}", e),
    }
}
