use {
    crate::libs::config::Config,
    crate::libs::explorer::{CompilerSettings, ExplorerConfig},
    crate::libs::networks::{NetworkProfile, NetworkTable},
    crate::libs::writing::{cc, Colors},
};

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// One table row. Secrets never reach this line: accounts are counted and
/// explorer keys are reduced to yes/no.
pub fn profile_line(p: &NetworkProfile) -> String {
    let chain = p
        .chain_id
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<12} chain={:<9} accounts={} explorer_key={:<3} url={}",
        p.name,
        chain,
        p.accounts.len(),
        yes_no(p.explorer_api_key.is_some()),
        p.endpoint,
    )
}

pub fn print_networks(
    config: &Config,
    table: &NetworkTable,
    explorer: &ExplorerConfig,
    compiler: &CompilerSettings,
) {
    let out = std::io::stdout();
    let mut c = Colors::new(out.lock());

    let default = table.default_profile().map(|p| p.name.as_str());
    c.cprint("Networks", cc::BOLD);
    for p in &table.profiles {
        let color = if Some(p.name.as_str()) == default {
            cc::LIGHT_CYAN
        } else {
            cc::RESET
        };
        c.cprint(&profile_line(p), color);
    }
    c.cprint(
        &format!("default network: {}", default.unwrap_or(table.default_network.as_str())),
        cc::LIGHT_GRAY,
    );

    match config.signer_address() {
        Some(Ok(addr)) => c.cprint(&format!("signer: {addr}"), cc::LIGHT_GREEN),
        Some(Err(e)) => c.err_print(&format!("signer: invalid PRIVATE_KEY ({e})")),
        None => c.cprint("signer: none (PRIVATE_KEY not set)", cc::YELLOW),
    }

    c.cprint("Explorer chains", cc::BOLD);
    for chain in &explorer.custom_chains {
        c.cprint(
            &format!(
                "{:<12} chain={:<9} api={} browser={}",
                chain.network, chain.chain_id, chain.api_url, chain.browser_url
            ),
            cc::RESET,
        );
    }
    c.cprint(
        &format!("sourcify: {}", if explorer.sourcify_enabled { "enabled" } else { "disabled" }),
        cc::LIGHT_GRAY,
    );

    c.cprint(
        &format!(
            "solidity {} (optimizer: {}, runs={})",
            compiler.version,
            yes_no(compiler.optimizer.enabled),
            compiler.optimizer.runs
        ),
        cc::LIGHT_GRAY,
    );
}
