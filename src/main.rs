//! Tic-tac-toe mini-app entry point.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe_miniapp::ai::Difficulty;
use tictactoe_miniapp::cli::{Cli, Command};
use tictactoe_miniapp::host::NativeWindow;
use tictactoe_miniapp::identity::{self, GuestIdentity, IdentityProvider, MiniAppIdentity};
use tictactoe_miniapp::settings::{GameMode, Settings};
use tictactoe_miniapp::{simulate, tui};

/// How long the startup profile fetch may take before the guest label is
/// used instead.
const PROFILE_TIMEOUT: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            difficulty,
            mode,
            profile_url,
            share_url,
            delay_ms,
        } => run_play(difficulty, mode, profile_url, share_url, delay_ms).await,
        Command::Simulate { x, o, games, json } => run_simulate(x, o, games, json),
    }
}

async fn run_play(
    difficulty: Difficulty,
    mode: GameMode,
    profile_url: Option<String>,
    share_url: Option<String>,
    delay_ms: u64,
) -> Result<()> {
    let profile_url = profile_url.or_else(|| std::env::var("MINIAPP_PROFILE_URL").ok());
    let share_url = share_url.or_else(|| std::env::var("MINIAPP_SHARE_URL").ok());
    let access_token = std::env::var("MINIAPP_ACCESS_TOKEN").ok();

    let provider: Box<dyn IdentityProvider> =
        match MiniAppIdentity::from_parts(profile_url, access_token) {
            Some(platform) => Box::new(platform),
            None => Box::new(GuestIdentity),
        };
    let profile = identity::resolve_profile(provider.as_ref(), PROFILE_TIMEOUT).await;

    let settings = Settings::new(mode, difficulty);
    tui::run(
        settings,
        profile,
        share_url,
        Arc::new(NativeWindow),
        Duration::from_millis(delay_ms),
    )
    .await
}

fn run_simulate(x: Difficulty, o: Difficulty, games: u32, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(%x, %o, games, "Running simulation");
    let tally = simulate::run(x, o, games, &mut rand::thread_rng());

    if json {
        println!("{}", serde_json::to_string(&tally)?);
    } else {
        println!("{x} (X) vs {o} (O) over {games} games: {tally}");
    }
    Ok(())
}
