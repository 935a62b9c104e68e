//! Pomobar - a pomodoro countdown for status bars
//!
//! This is the main entry point for the pomobar binary.

use tracing::info;

use pomobar::{
    config::{Cli, Config},
    services::Effects,
    state::Engine,
    tasks,
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the status line
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomobar={}", cli.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli)?;
    info!("Starting pomobar v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: file={}, session={}s, break={}s, interval={}s",
        config.session_file.display(),
        config.session_duration,
        config.break_duration,
        config.update_interval
    );

    let effects = Effects::system(&config);
    let engine = Engine::new(config, effects);

    let mut stdout = std::io::stdout().lock();
    tasks::run(engine, &mut stdout, shutdown_signal()).await?;

    info!("Pomobar stopped");
    Ok(())
}
