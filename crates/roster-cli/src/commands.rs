use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use roster_server::{RosterServer, ServerConfig, ROUTES};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(resolve_config(cli.config.as_deref(), &args.overrides)?),
        Command::Config(args) => cmd_config(resolve_config(cli.config.as_deref(), &args.overrides)?),
        Command::Routes => cmd_routes(),
    }
}

/// Defaults, then the config file if one was given, then command-line flags.
fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> anyhow::Result<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = overrides.bind {
        config.bind_addr = bind;
    }
    if let Some(policy) = overrides.id_policy {
        config.id_policy = policy;
    }
    if let Some(policy) = overrides.update_policy {
        config.update_policy = policy;
    }
    tracing::debug!(
        bind = %config.bind_addr,
        id_policy = %config.id_policy,
        update_policy = %config.update_policy,
        file = ?path,
        "resolved configuration"
    );
    Ok(config)
}

fn cmd_serve(config: ServerConfig) -> anyhow::Result<()> {
    println!(
        "{} Roster listening on {} (ids: {}, updates: {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.id_policy.to_string().cyan(),
        config.update_policy.to_string().cyan(),
    );
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime
        .block_on(RosterServer::new(config).serve())
        .context("server exited with an error")
}

fn cmd_config(config: ServerConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

fn cmd_routes() -> anyhow::Result<()> {
    for (method, path, op) in ROUTES {
        println!("  {:<7} {:<16} {}", method.yellow().bold(), path, op.dimmed());
    }
    println!("  {:<7} {:<16} {}", "*".yellow(), "/students/{id}", "405 for other methods".dimmed());
    println!("  {:<7} {:<16} {}", "*".yellow(), "*", "404".dimmed());
    Ok(())
}
