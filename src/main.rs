//! Terminal 2048 runner (default binary).
//!
//! Two front-ends drive the same engine:
//! - the default full-screen mode (crossterm + framebuffer renderer)
//! - `--plain`, a line-oriented mode reading one direction token per stdin line

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tui_2048::config::GameConfig;
use tui_2048::engine::Game;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::plain::run_plain;
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::{InputAction, SpawnPolicy};

#[derive(Parser, Debug)]
#[command(name = "tui-2048", version, about = "Slide and merge tiles on a square grid")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Grid side length (overrides config)
    #[arg(long)]
    size: Option<usize>,
    /// Tiles placed at the start of a game (overrides config)
    #[arg(long)]
    tiles: Option<usize>,
    /// RNG seed for a reproducible game (overrides config)
    #[arg(long)]
    seed: Option<u64>,
    /// When to spawn after a move: on-change or always (overrides config)
    #[arg(long, value_parser = parse_spawn_policy)]
    spawn: Option<SpawnPolicy>,
    /// Line mode: read j/l/i/k tokens from stdin and print the grid after each move
    #[arg(long)]
    plain: bool,
    /// Log filter, e.g. "debug" (defaults to RUST_LOG, then "warn")
    #[arg(long)]
    log: Option<String>,
}

fn parse_spawn_policy(s: &str) -> Result<SpawnPolicy, String> {
    SpawnPolicy::from_str(s).ok_or_else(|| format!("expected on-change or always, got {s}"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let config = load_config(&args)?;
    info!(
        size = config.size,
        initial_tiles = config.initial_tiles,
        seed = ?config.seed,
        spawn_policy = config.spawn_policy.as_str(),
        "starting"
    );

    let game = match config.seed {
        Some(seed) => Game::new(config.size, config.initial_tiles, seed),
        None => Game::from_entropy(config.size, config.initial_tiles),
    }
    .context("failed to create grid")?;
    let mut game = game.with_policy(config.spawn_policy);

    if args.plain {
        return run_plain(&mut game, io::stdin().lock(), io::stdout().lock());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run_tui(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_toml(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(tiles) = args.tiles {
        config.initial_tiles = tiles;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(policy) = args.spawn {
        config.spawn_policy = policy;
    }

    config.validate()?;
    Ok(config)
}

fn run_tui(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(InputAction::Move(direction)) => {
                        let report = game.apply_move(direction);
                        debug!(direction = direction.as_str(), ?report, "move");
                    }
                    Some(InputAction::Restart) => game.restart()?,
                    None => {}
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
