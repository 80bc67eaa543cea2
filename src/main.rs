use clap::Parser;
use log::info;

use star_catcher::config::RawConfig;
use star_catcher::{game, EngineBuilder, EngineError};

fn main() -> Result<(), EngineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RawConfig::parse().clean();
    info!("Starting with {:?}", config);

    let engine = EngineBuilder::new()
        .with_tps(config.tps)
        .with_window(game::window_settings(config.scale))
        .build()
        .init(|systems| game::register(systems, config.seed));

    if config.headless {
        let report = engine.run_headless(config.ticks)?;
        println!(
            "{} ticks: {}",
            report.ticks,
            report.status().unwrap_or("no status")
        );
        return Ok(());
    }

    engine.run()
}
