#[macro_export]
macro_rules! env_lazy {
    ($( $vis:vis $name:ident : $ty:ty = ($key:literal, $default:expr); )* ) => {
        $(
            $vis static $name: ::std::sync::LazyLock<$ty> = ::std::sync::LazyLock::new(|| {
                $crate::libs::config::load_env();
                $crate::libs::config::Config::get_var_t::<$ty>($key, $default)
            });
        )*
    };
}

use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

env_lazy! {
    pub PROBE_TIMEOUT_SECS: u64 = ("PROBE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
}

/// Per-request HTTP timeout. Zero means the default.
pub fn request_timeout(secs: u64) -> Duration {
    match secs {
        0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        s => Duration::from_secs(s),
    }
}

pub const DEFAULT_NETWORK: &str = "hardhat";

pub const HARDHAT_CHAIN_ID: u64 = 31337;
pub const POLYGON_CHAIN_ID: u64 = 137;
pub const AMOY_CHAIN_ID: u64 = 80002;
pub const BASE_CHAIN_ID: u64 = 8453;
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;
pub const SEPOLIA_CHAIN_ID: u64 = 11155111;
pub const ETHEREUM_CHAIN_ID: u64 = 1;

pub const LOCALHOST_RPC: &str = "http://127.0.0.1:8545";
pub const QUICKNODE_MATIC_RPC: &str =
    "https://aged-tiniest-frost.matic.quiknode.pro/b50bb4625032afb94b57bf5efd6082700059e0da8/";
pub const POLYGON_PUBLIC_RPC: &str = "https://polygon-rpc.com";
pub const AMOY_PUBLIC_RPC: &str = "https://rpc-amoy.polygon.technology/";

pub const SOLIDITY_VERSION: &str = "0.8.26";
pub const OPTIMIZER_RUNS: u32 = 200;

/// (network, chain id, api url, browser url)
pub const CUSTOM_CHAINS: [(&str, u64, &str, &str); 4] = [
    ("base", BASE_CHAIN_ID, "https://api.basescan.org/api", "https://basescan.org"),
    ("baseSepolia", BASE_SEPOLIA_CHAIN_ID, "https://api-sepolia.basescan.org/api", "https://sepolia.basescan.org"),
    ("sepolia", SEPOLIA_CHAIN_ID, "https://api-sepolia.etherscan.io/api", "https://sepolia.etherscan.io"),
    ("amoy", AMOY_CHAIN_ID, "https://api-amoy.polygonscan.com/api", "https://amoy.polygonscan.com/"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_falls_back_to_default() {
        assert_eq!(request_timeout(0), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(request_timeout(5), Duration::from_secs(5));
    }
}
