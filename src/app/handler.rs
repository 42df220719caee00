use {
    crate::app::listing::print_networks,
    crate::app::probe::{report, run_probe, ProbeTarget},
    crate::constants::{request_timeout, POLYGON_CHAIN_ID, PROBE_TIMEOUT_SECS},
    crate::libs::config::{load_env, Config},
    crate::libs::explorer::{CompilerSettings, ExplorerConfig},
    crate::libs::networks::NetworkTable,
    crate::libs::rpc::{client::RpcClient, spells::redact_url},
    crate::libs::writing::{cc, Colors},
    crate::{log, warn},
    alloy::primitives::Address,
    anyhow::{bail, Context, Result},
    clap::{Args, Parser, Subcommand},
    url::Url,
};

#[derive(Debug, Parser)]
#[command(
    name = "chainprobe",
    about = "Network table and JSON-RPC smoke test",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// Used when no subcommand is given.
    #[command(flatten)]
    pub probe: ProbeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the resolved network table and explorer settings.
    Networks,
    /// Fetch the latest block and read `name()` from a contract.
    Probe(ProbeArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ProbeArgs {
    /// Network profile to dial.
    #[arg(long, env = "PROBE_NETWORK")]
    pub network: Option<String>,
    /// Dial this RPC URL directly; takes precedence over --network.
    #[arg(long)]
    pub url: Option<String>,
    /// Expected chain id; overrides the profile's.
    #[arg(long)]
    pub chain_id: Option<u64>,
    /// Contract whose `name()` is read.
    #[arg(long, env = "PROBE_CONTRACT")]
    pub contract: Option<String>,
}

pub async fn init() -> Result<()> {
    load_env();
    let cli = Cli::parse();

    let config = Config::new();
    if config.private_key.is_none() {
        warn!("The PRIVATE_KEY environment variable is not defined in the .env file. Operations requiring a signer will fail.");
    }
    let explorer = ExplorerConfig::resolve(&config);
    let table = NetworkTable::resolve(&config, &explorer);

    match cli.command {
        Some(Command::Networks) => {
            print_networks(&config, &table, &explorer, &CompilerSettings::default());
            Ok(())
        }
        Some(Command::Probe(args)) => probe(&args, &config, &table).await,
        None => probe(&cli.probe, &config, &table).await,
    }
}

async fn probe(args: &ProbeArgs, config: &Config, table: &NetworkTable) -> Result<()> {
    let target = select_target(args, config, table)?;
    log!(
        cc::LIGHT_GRAY,
        "Using RPC URL: {} ({})",
        redact_url(&target.url),
        target.network.as_deref().unwrap_or("direct URL")
    );

    let client = RpcClient::new(target.url.clone(), request_timeout(*PROBE_TIMEOUT_SECS))?;
    let mut out = Colors::new(std::io::stdout());
    let outcome = run_probe(&client, &target, &mut out).await;
    report(&target, &outcome, &mut out);
    Ok(())
}

/// Decide what to dial: an explicit URL, a named profile, or the
/// QuickNode Polygon endpoint from `.env`.
pub fn select_target(args: &ProbeArgs, config: &Config, table: &NetworkTable) -> Result<ProbeTarget> {
    let contract = parse_contract(args.contract.as_deref())?;

    if let Some(raw) = &args.url {
        let url = Url::parse(raw).with_context(|| format!("bad --url `{raw}`"))?;
        return Ok(ProbeTarget {
            network: None,
            url,
            chain_id: args.chain_id,
            contract,
        });
    }

    if let Some(name) = &args.network {
        let profile = table.require(name)?;
        return Ok(ProbeTarget {
            network: Some(profile.name.clone()),
            url: profile.rpc_url()?,
            chain_id: args.chain_id.or(profile.chain_id),
            contract,
        });
    }

    let Some(raw) = &config.quicknode_matic_url else {
        bail!("QUICKNODE_MATIC_URL not defined in .env; pass --network or --url");
    };
    let url = Url::parse(raw).context("QUICKNODE_MATIC_URL is not a valid URL")?;
    Ok(ProbeTarget {
        network: Some("QUICKNODE_MATIC_URL".into()),
        url,
        chain_id: Some(args.chain_id.unwrap_or(POLYGON_CHAIN_ID)),
        contract,
    })
}

fn parse_contract(raw: Option<&str>) -> Result<Address> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        bail!("no contract address: pass --contract or set PROBE_CONTRACT");
    };
    raw.parse::<Address>()
        .with_context(|| format!("`{raw}` is not a 20-byte hex address"))
}
