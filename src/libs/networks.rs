//! The network table: name → RPC endpoint, chain id, signer accounts and
//! explorer key. Resolved once from [`Config`] and never mutated.

use {
    crate::constants::*,
    crate::libs::config::Config,
    crate::libs::explorer::ExplorerConfig,
    anyhow::{bail, Context, Result},
    serde::Serialize,
    std::fmt,
    url::Url,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RpcEndpoint {
    /// Simulated chain owned by the toolchain; nothing to dial.
    InProcess,
    Url(String),
    /// Every source in the fallback chain was empty.
    Unconfigured,
}

impl RpcEndpoint {
    /// First non-empty candidate wins.
    fn first_of<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        candidates
            .into_iter()
            .flatten()
            .find(|u| !u.is_empty())
            .map(RpcEndpoint::Url)
            .unwrap_or(RpcEndpoint::Unconfigured)
    }
}

impl fmt::Display for RpcEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcEndpoint::InProcess => f.write_str("<in-process>"),
            RpcEndpoint::Url(u) => f.write_str(u),
            RpcEndpoint::Unconfigured => f.write_str("<unconfigured>"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkProfile {
    pub name: String,
    pub endpoint: RpcEndpoint,
    pub chain_id: Option<u64>,
    #[serde(skip_serializing)]
    pub accounts: Vec<String>,
    #[serde(skip_serializing)]
    pub explorer_api_key: Option<String>,
}

impl NetworkProfile {
    /// Parsed endpoint URL; fails for in-process or unconfigured profiles.
    pub fn rpc_url(&self) -> Result<Url> {
        match &self.endpoint {
            RpcEndpoint::Url(u) => {
                Url::parse(u).with_context(|| format!("network `{}` has a bad RPC URL", self.name))
            }
            RpcEndpoint::InProcess => bail!(
                "network `{}` is the in-process simulator and has no RPC URL",
                self.name
            ),
            RpcEndpoint::Unconfigured => bail!(
                "network `{}` has no RPC URL; set its *_RPC_URL variable in .env",
                self.name
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkTable {
    pub default_network: String,
    pub profiles: Vec<NetworkProfile>,
}

impl NetworkTable {
    pub fn resolve(config: &Config, explorer: &ExplorerConfig) -> Self {
        let accounts = config.accounts();
        let remote = |name: &str, endpoint: RpcEndpoint, chain_id: u64| NetworkProfile {
            name: name.to_string(),
            endpoint,
            chain_id: Some(chain_id),
            accounts: accounts.clone(),
            explorer_api_key: explorer.api_key_for(name),
        };

        let profiles = vec![
            NetworkProfile {
                name: "hardhat".into(),
                endpoint: RpcEndpoint::InProcess,
                chain_id: Some(HARDHAT_CHAIN_ID),
                accounts: Vec::new(),
                explorer_api_key: None,
            },
            NetworkProfile {
                name: "localhost".into(),
                endpoint: RpcEndpoint::Url(LOCALHOST_RPC.into()),
                chain_id: None,
                accounts: Vec::new(),
                explorer_api_key: None,
            },
            remote(
                "myQuickNode",
                RpcEndpoint::Url(QUICKNODE_MATIC_RPC.into()),
                POLYGON_CHAIN_ID,
            ),
            remote(
                "polygon",
                RpcEndpoint::first_of([
                    config.polygon_rpc_url.clone(),
                    config.quicknode_matic_url.clone(),
                    Some(POLYGON_PUBLIC_RPC.into()),
                ]),
                POLYGON_CHAIN_ID,
            ),
            remote(
                "amoy",
                RpcEndpoint::first_of([config.amoy_rpc_url.clone(), Some(AMOY_PUBLIC_RPC.into())]),
                AMOY_CHAIN_ID,
            ),
            remote(
                "base",
                RpcEndpoint::first_of([config.base_rpc_url.clone()]),
                BASE_CHAIN_ID,
            ),
            remote(
                "baseSepolia",
                RpcEndpoint::first_of([config.base_sepolia_rpc_url.clone()]),
                BASE_SEPOLIA_CHAIN_ID,
            ),
            remote(
                "sepolia",
                RpcEndpoint::first_of([config.sepolia_rpc_url.clone()]),
                SEPOLIA_CHAIN_ID,
            ),
            remote(
                "ethereum",
                RpcEndpoint::first_of([config.ethereum_rpc_url.clone()]),
                ETHEREUM_CHAIN_ID,
            ),
        ];

        Self {
            default_network: DEFAULT_NETWORK.to_string(),
            profiles,
        }
    }

    /// Exact name first, then a unique case-insensitive match.
    pub fn get(&self, name: &str) -> Option<&NetworkProfile> {
        if let Some(p) = self.profiles.iter().find(|p| p.name == name) {
            return Some(p);
        }
        let mut hits = self
            .profiles
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(name));
        match (hits.next(), hits.next()) {
            (Some(p), None) => Some(p),
            _ => None,
        }
    }

    pub fn require(&self, name: &str) -> Result<&NetworkProfile> {
        self.get(name).with_context(|| {
            format!(
                "unknown network `{name}` (known: {})",
                self.names().join(", ")
            )
        })
    }

    pub fn default_profile(&self) -> Option<&NetworkProfile> {
        self.get(&self.default_network)
    }

    pub fn names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }
}
