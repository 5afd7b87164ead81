use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use roster_store::{IdPolicy, UpdatePolicy};

#[derive(Parser)]
#[command(
    name = "roster",
    about = "Roster — in-memory student records over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with server settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
    /// List the routes the server answers
    Routes,
}

/// Settings that override the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct Overrides {
    /// Address to listen on, e.g. 127.0.0.1:8080
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// collection-size or monotonic
    #[arg(long)]
    pub id_policy: Option<IdPolicy>,
    /// move-to-end or in-place
    #[arg(long)]
    pub update_policy: Option<UpdatePolicy>,
}

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub overrides: Overrides,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub overrides: Overrides,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["roster", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert!(args.overrides.bind.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "roster", "serve",
            "--bind", "127.0.0.1:9000",
            "--id-policy", "monotonic",
            "--update-policy", "in-place",
        ]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.overrides.bind, Some("127.0.0.1:9000".parse().unwrap()));
            assert_eq!(args.overrides.id_policy, Some(IdPolicy::Monotonic));
            assert_eq!(args.overrides.update_policy, Some(UpdatePolicy::InPlace));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_rejects_unknown_policy() {
        assert!(Cli::try_parse_from(["roster", "serve", "--id-policy", "uuid"]).is_err());
    }

    #[test]
    fn parse_rejects_bad_bind() {
        assert!(Cli::try_parse_from(["roster", "serve", "--bind", "localhost"]).is_err());
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["roster", "config", "--config", "roster.toml", "-v"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("roster.toml")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Config(_)));
    }

    #[test]
    fn parse_routes() {
        let cli = Cli::try_parse_from(["roster", "routes"]).unwrap();
        assert!(matches!(cli.command, Command::Routes));
    }
}
