//! Terminal runner (default binary).
//!
//! Owns the terminal, polls keyboard input between fixed-timestep ticks and
//! redraws the board from a `GameSnapshot` every frame.
//!
//! Environment:
//! - `BLOCKTRIS_SEED`, `BLOCKTRIS_*_MS`, `BLOCKTRIS_MAX_SPEED_LEVEL`: see `GameConfig::from_env`
//! - `BLOCKTRIS_LOG_PATH`: write logs to this file (logging is off otherwise)
//! - `BLOCKTRIS_LOG`: log filter directives, default `info`

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use blocktris::core::{GameConfig, GameSnapshot, GameState};
use blocktris::input::{handle_key_event, is_press, should_quit};
use blocktris::term::{FrameBuffer, GameView, LineFlash, TerminalRenderer, Viewport};
use blocktris::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    info!(seed = config.seed, "starting blocktris");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file so they never tear the game screen.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("BLOCKTRIS_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;
    let filter = EnvFilter::try_from_env("BLOCKTRIS_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = GameState::with_config(config);
    let view = GameView::default();
    let mut flash = LineFlash::new();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&snap, viewport, &mut fb);
        if flash.is_active() {
            view.draw_line_flash(&flash, viewport, &mut fb);
        }
        term.draw_swap(&mut fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(action) => {
                            game.apply_action(action);
                        }
                        None if !game.is_playing() => {
                            game.apply_action(GameAction::Start);
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            flash.advance(TICK_MS);
            game.tick(TICK_MS);
        }

        // Locks come from both key presses and gravity.
        if let Some(event) = game.take_last_event() {
            flash.trigger(event);
        }
    }
}
