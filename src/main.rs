//! FlappySGD entry point
//!
//! Sets up logging, loads settings, opens the window and runs the game loop.

use anyhow::Context;

use flappy_sgd::renderer::SfmlFrontend;
use flappy_sgd::{Game, Settings};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err:#}");
        eprintln!("FlappySGD failed: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let settings = Settings::load().context("could not load settings")?;

    let seed = settings.resolve_seed();
    log::info!("FlappySGD starting with seed {}", seed);

    let mut game = Game::new(seed, settings.tuning.clone()).context("invalid gameplay tuning")?;
    let mut frontend = SfmlFrontend::new(&settings).context("could not initialize the window")?;
    let summary = game.run(&mut frontend);

    log::info!(
        "Run over: {} ticks ({:.1}s), {} gaps spawned, {} cleared, {}",
        summary.ticks,
        summary.elapsed_time,
        summary.gaps_spawned,
        summary.gaps_cleared,
        match summary.loss {
            Some(cause) => format!("lost to {:?}", cause),
            None => "quit while playing".to_string(),
        }
    );
    Ok(())
}
