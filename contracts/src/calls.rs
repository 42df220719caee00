use alloy::primitives::{Address, Bytes};
use alloy::sol_types::SolCall;
use serde::Serialize;

use crate::abi::INamed;

/// Target and calldata for a single read-only `eth_call`.
/// Serializes to the JSON-RPC transaction object (`{"to", "data"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallDescriptor {
    pub to: Address,
    pub data: Bytes,
}

impl CallDescriptor {
    /// `0x`-prefixed calldata, for logging.
    pub fn data_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.data))
    }
}

/// Build the zero-argument `name()` call against `to`.
pub fn name_call(to: Address) -> CallDescriptor {
    CallDescriptor {
        to,
        data: INamed::nameCall {}.abi_encode().into(),
    }
}

/// Decode the single `string` returned by `name()`.
pub fn decode_name(ret: &[u8]) -> Result<String, alloy::sol_types::Error> {
    INamed::nameCall::abi_decode_returns(ret)
}
