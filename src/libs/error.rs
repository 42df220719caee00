use {alloy::primitives::Address, std::fmt, thiserror::Error};

/// Which JSON-RPC call a probe step issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStep {
    ChainId,
    BlockNumber,
    Call,
    GetCode,
}

impl fmt::Display for ProbeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProbeStep::ChainId => "eth_chainId",
            ProbeStep::BlockNumber => "eth_blockNumber",
            ProbeStep::Call => "eth_call",
            ProbeStep::GetCode => "eth_getCode",
        })
    }
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("{step} failed: {error:#}")]
    Rpc { step: ProbeStep, error: anyhow::Error },

    #[error("endpoint serves chain {actual}, expected {expected}")]
    ChainMismatch { expected: u64, actual: u64 },

    #[error("eth_call returned an empty or null result ({raw}), cannot decode")]
    EmptyResult { raw: String },

    #[error("the address {address} has no deployed bytecode; verify the address and network")]
    NoBytecode { address: Address },

    #[error("could not decode name() result {raw}: {source}")]
    Decode {
        raw: String,
        #[source]
        source: alloy::sol_types::Error,
    },
}

impl ProbeError {
    pub fn rpc(step: ProbeStep) -> impl FnOnce(anyhow::Error) -> Self {
        move |error| ProbeError::Rpc { step, error }
    }
}
