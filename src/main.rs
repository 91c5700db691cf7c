use anyhow::Result;
use clap::Parser;
use gridrush::cli::Cli;
use gridrush::config::Config;
use gridrush::core::board::Board;
use gridrush::core::engine::Engine;
use gridrush::{game, runner};

#[tokio::main]
async fn main() -> Result<()> {
    // stderr so log lines never fight the game for the terminal
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .merged_with(&cli);

    let mut engine = Engine::new(Board::CLASSIC);
    game::setup::install(&mut engine, config.seed);

    runner::run(engine, config.fps, config.debug_hitboxes).await
}
