use anyhow::Context;
use clap::Parser;

use blue_planet::app;
use blue_planet::cli::{Cli, Demo};
use blue_planet::config::AppConfig;
use blue_planet::math::{translation_report, vectors_report};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    cli.apply(&mut config);
    config.validate()?;

    let demo = cli.demo();
    match demo {
        Demo::Matrices => print!("{}", translation_report()),
        Demo::Vectors => print!("{}", vectors_report()),
        Demo::Window | Demo::Triangle | Demo::Quad | Demo::Planet => {
            let kind = demo
                .scene()
                .with_context(|| format!("no scene for {:?}", demo))?;
            println!("{:?} - Controls: WASD, hold right mouse to look, Escape to quit", demo);
            app::run(config, kind)?;
        }
    }

    Ok(())
}
