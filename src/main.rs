use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tinytrek::cli::Args;
use tinytrek::io::{OutputWriter, PacedWriter, TerminalIO};
use tinytrek::services::game::Game;
use tinytrek::GameConfig;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_writer(io::stderr)
        .init();
}

fn run<O: OutputWriter>(output: O, config: GameConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let mut game = Game::new(TerminalIO, output, config, seed);
    game.run().context("console session failed")
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    tracing::debug!(?config, seed = ?args.seed, cps = args.cps(), "starting");

    if args.no_pacing {
        run(TerminalIO, config, args.seed)
    } else {
        run(PacedWriter::new(io::stdout(), args.cps()), config, args.seed)
    }
}
