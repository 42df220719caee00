use {
    alloy::{primitives::Address, signers::local::PrivateKeySigner},
    anyhow::{Context, Result},
    dotenv::dotenv,
    serde::{Deserialize, Serialize},
    std::{collections::HashMap, fmt::Debug, str::FromStr},
};

pub fn load_env() {
    dotenv().ok();
}

/// Key/value lookup the network table is resolved against.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;

    /// Set and non-empty; an empty string counts as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub private_key: Option<String>,
    pub quicknode_matic_url: Option<String>,
    pub polygon_rpc_url: Option<String>,
    pub amoy_rpc_url: Option<String>,
    pub base_rpc_url: Option<String>,
    pub base_sepolia_rpc_url: Option<String>,
    pub sepolia_rpc_url: Option<String>,
    pub ethereum_rpc_url: Option<String>,
    pub polygonscan_api_key: Option<String>,
    pub basescan_api_key: Option<String>,
    pub etherscan_api_key: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::from_env(&ProcessEnv)
    }

    pub fn from_env<E: EnvSource>(env: &E) -> Self {
        Self {
            private_key: env.non_empty("PRIVATE_KEY"),
            quicknode_matic_url: env.non_empty("QUICKNODE_MATIC_URL"),
            polygon_rpc_url: env.non_empty("POLYGON_RPC_URL"),
            amoy_rpc_url: env.non_empty("AMOY_RPC_URL"),
            base_rpc_url: env.non_empty("BASE_RPC_URL"),
            base_sepolia_rpc_url: env.non_empty("BASE_SEPOLIA_RPC_URL"),
            sepolia_rpc_url: env.non_empty("SEPOLIA_RPC_URL"),
            ethereum_rpc_url: env.non_empty("ETHEREUM_RPC_URL"),
            polygonscan_api_key: env.non_empty("POLYGONSCAN_API_KEY"),
            basescan_api_key: env.non_empty("BASESCAN_API_KEY"),
            etherscan_api_key: env.non_empty("ETHERSCAN_API_KEY"),
        }
    }

    /// Signer list handed to every remote network: the `PRIVATE_KEY`
    /// with a `0x` prefix, or nothing.
    pub fn accounts(&self) -> Vec<String> {
        self.private_key
            .as_deref()
            .map(normalize_private_key)
            .into_iter()
            .collect()
    }

    /// Address derived from `PRIVATE_KEY`, if one is configured.
    pub fn signer_address(&self) -> Option<Result<Address>> {
        self.private_key.as_deref().map(|pk| {
            let signer: PrivateKeySigner = normalize_private_key(pk)
                .parse()
                .context("PRIVATE_KEY did not contain a valid hex encoded secret")?;
            Ok(signer.address())
        })
    }

    /// Parse env var to T; fall back to typed default.
    pub fn get_var_t<T>(key: &str, default: T) -> T
    where
        T: FromStr,
        <T as FromStr>::Err: Debug,
    {
        std::env::var(key)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .unwrap_or(default)
    }
}

pub fn normalize_private_key(pk: &str) -> String {
    if pk.starts_with("0x") {
        pk.to_string()
    } else {
        format!("0x{pk}")
    }
}
