//! Runs the duel forever with two randomized simulated players.
//!
//! Each player thread presses its button at independent random intervals, so
//! rounds end in a mix of early losses, clean wins and dead heats. Pass a
//! TOML config path as the first argument to override the stock timings.
//!
//! ```text
//! cargo run --bin duel_demo
//! RUST_LOG=quickdraw_core=debug cargo run --bin duel_demo -- duel.toml
//! ```

use quickdraw_core::{ConfigError, DuelConfig};
use quickdraw_sim::SimButton;
use rand::Rng;
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DuelConfig::load(path)?,
        None => DuelConfig::default(),
    };
    config.validate()?;

    let mut duel = quickdraw_sim::build(config);
    spawn_player("player1", duel.button1.clone());
    spawn_player("player2", duel.button2.clone());

    tracing::info!(?config, "duel starting");
    duel.controller.run_forever()
}

/// Presses the button at random intervals between 1 and 8 seconds, forever.
fn spawn_player(name: &'static str, button: SimButton) {
    thread::Builder::new()
        .name(name.into())
        .spawn(move || loop {
            let wait_ms = rand::thread_rng().gen_range(1000..8000);
            thread::sleep(Duration::from_millis(wait_ms));
            tracing::debug!(player = name, "pressing");
            button.press();
        })
        .expect("failed to spawn player thread");
}
