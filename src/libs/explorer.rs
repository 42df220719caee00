use {
    crate::constants::{CUSTOM_CHAINS, OPTIMIZER_RUNS, SOLIDITY_VERSION},
    crate::libs::config::Config,
    serde::Serialize,
    std::collections::BTreeMap,
};

/// Block explorer endpoints for chains the verifier does not know natively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomChain {
    pub network: String,
    pub chain_id: u64,
    pub api_url: String,
    pub browser_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExplorerConfig {
    /// Keyed by explorer network name, which is not always the profile name
    /// (`amoy` verifies as `polygonAmoy`).
    #[serde(skip_serializing)]
    pub api_keys: BTreeMap<String, Option<String>>,
    pub custom_chains: Vec<CustomChain>,
    pub sourcify_enabled: bool,
}

impl ExplorerConfig {
    pub fn resolve(config: &Config) -> Self {
        let mut api_keys = BTreeMap::new();
        api_keys.insert("polygon".into(), config.polygonscan_api_key.clone());
        api_keys.insert("polygonAmoy".into(), config.polygonscan_api_key.clone());
        api_keys.insert("base".into(), config.basescan_api_key.clone());
        api_keys.insert("sepolia".into(), config.etherscan_api_key.clone());

        let custom_chains = CUSTOM_CHAINS
            .iter()
            .map(|(network, chain_id, api_url, browser_url)| CustomChain {
                network: network.to_string(),
                chain_id: *chain_id,
                api_url: api_url.to_string(),
                browser_url: browser_url.to_string(),
            })
            .collect();

        Self {
            api_keys,
            custom_chains,
            sourcify_enabled: false,
        }
    }

    pub fn explorer_network(profile: &str) -> &str {
        match profile {
            "amoy" => "polygonAmoy",
            other => other,
        }
    }

    pub fn api_key_for(&self, profile: &str) -> Option<String> {
        self.api_keys
            .get(Self::explorer_network(profile))
            .cloned()
            .flatten()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerSettings {
    pub version: String,
    pub optimizer: OptimizerSettings,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: SOLIDITY_VERSION.to_string(),
            optimizer: OptimizerSettings {
                enabled: true,
                runs: OPTIMIZER_RUNS,
            },
        }
    }
}
