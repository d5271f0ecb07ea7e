//! Terminal bingo runner (default binary).
//!
//! Prompt-driven: one question per draw on stdin, styled output on stdout.
//! Settings come from a JSON file plus `BINGO_*` env overrides.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use tui_bingo::core::Game;
use tui_bingo::input::{parse_difficulty, Prompter, Reply};
use tui_bingo::session::{self, SessionOptions};
use tui_bingo::settings::Settings;
use tui_bingo::term::TerminalRenderer;

/// Single-player terminal bingo against honest bots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Difficulty (easy, medium, hard); asked interactively when omitted
    #[arg(short, long, value_name = "MODE", value_parser = parse_mode)]
    mode: Option<tui_bingo::types::Difficulty>,

    /// Seed for cards and draw order (random when omitted)
    #[arg(short, long, value_name = "N")]
    seed: Option<u32>,

    /// Settings file (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Let the honest policy play your card
    #[arg(long, default_value_t = false)]
    autoplay: bool,

    /// Pause between autoplay turns
    #[arg(long = "delay-ms", default_value_t = 0, value_name = "MS")]
    delay_ms: u64,

    /// Enable verbose logging (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_mode(s: &str) -> Result<tui_bingo::types::Difficulty, String> {
    parse_difficulty(s).ok_or_else(|| format!("unknown mode '{}' (easy, medium, hard)", s))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    info!("tui-bingo v{}", env!("CARGO_PKG_VERSION"));
    debug!("{:?}", args);

    let settings = Settings::load(args.config.as_deref());
    debug!("settings: {:?}", settings);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut renderer = TerminalRenderer::from_env();

    let difficulty = match args.mode {
        Some(mode) => mode,
        None => match prompter.ask_difficulty().context("failed to read difficulty")? {
            Reply::Value(mode) => mode,
            _ => return Ok(()),
        },
    };

    let bots = settings.bots_for(difficulty);
    let mut game = Game::new(settings.game_config(), bots, args.seed)
        .context("failed to set up the game")?;
    info!(
        "{} mode: {} bots, seed {}",
        difficulty.as_str(),
        bots,
        game.seed()
    );

    let options = SessionOptions {
        autoplay: args.autoplay,
        delay: Duration::from_millis(args.delay_ms),
    };
    let summary = session::run(&mut game, &mut prompter, &mut renderer, &options)?;
    info!("finished: {:?} after {} turns", summary.outcome, summary.turns);
    Ok(())
}
