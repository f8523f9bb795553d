//! Terminal runner (default binary).
//!
//! One single-threaded loop owns the game: it renders, waits for input until
//! the next gravity deadline, and funnels both key actions and gravity ticks
//! through [`Runner::dispatch`].

use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use blockfall::audio::{cues_between, AudioSession};
use blockfall::core::{reduce, GameState, PieceSource, UniformSource};
use blockfall::input::{map_key, should_quit};
use blockfall::term::{Effects, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, Status, FLASH_MS};

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    #[arg(long, help = "Seed for the piece sequence (random when omitted)")]
    seed: Option<u64>,

    #[arg(long, help = "Disable the terminal bell")]
    mute: bool,

    #[arg(long, help = "Write logs to this file (no logging otherwise)")]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &cli);

    // Always try to restore terminal state.
    let restored = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result.and(restored)
}

/// The terminal belongs to the game, so logs only go to a file.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(level)
        .init();

    tracing::info!(%level, path = %path.display(), "logging initialized");
    Ok(())
}

fn run(term: &mut TerminalRenderer, cli: &Cli) -> Result<()> {
    let source = match cli.seed {
        Some(seed) => UniformSource::seeded(seed),
        None => UniformSource::from_entropy(),
    };
    tracing::info!(seed = ?cli.seed, mute = cli.mute, "starting");

    let mut runner = Runner::new(source, AudioSession::new(io::stdout(), cli.mute));
    let view = GameView::default();

    loop {
        let now = Instant::now();
        runner.expire_flash(now);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let effects = Effects {
            flash: runner.flash_until.is_some(),
        };
        term.draw(view.render(&runner.state, Viewport::new(w, h), effects))?;

        if event::poll(runner.timeout(now))? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        tracing::info!(score = runner.state.score(), "quit");
                        break;
                    }
                    if let Some(action) = map_key(key, runner.state.status()) {
                        runner.dispatch(action);
                    }
                }
                Event::Resize(w, h) => {
                    tracing::debug!(w, h, "resize");
                    term.invalidate();
                }
                _ => {}
            }
        }

        runner.gravity(Instant::now());
    }

    runner.audio.finish()?;
    Ok(())
}

/// Everything the loop mutates between frames.
struct Runner<S> {
    state: GameState,
    source: S,
    audio: AudioSession<Stdout>,
    /// Time of the last gravity step (or of the last non-playing frame).
    last_drop: Instant,
    flash_until: Option<Instant>,
}

impl<S: PieceSource> Runner<S> {
    fn new(source: S, audio: AudioSession<Stdout>) -> Self {
        Self {
            state: GameState::new(),
            source,
            audio,
            last_drop: Instant::now(),
            flash_until: None,
        }
    }

    fn fall_delay(&self) -> Duration {
        Duration::from_millis(self.state.fall_delay_ms() as u64)
    }

    /// How long to wait for input before the next gravity step or flash end.
    fn timeout(&self, now: Instant) -> Duration {
        let gravity = self
            .fall_delay()
            .saturating_sub(now.saturating_duration_since(self.last_drop));
        match self.flash_until {
            Some(until) => gravity.min(until.saturating_duration_since(now)),
            None => gravity,
        }
    }

    fn expire_flash(&mut self, now: Instant) {
        if self.flash_until.is_some_and(|until| now >= until) {
            self.flash_until = None;
        }
    }

    /// Single dispatch point for key actions and gravity.
    fn dispatch(&mut self, action: GameAction) {
        let next = reduce(&self.state, action, &mut self.source);

        if next.status() != self.state.status() {
            tracing::info!(
                action = action.as_str(),
                from = self.state.status().as_str(),
                to = next.status().as_str(),
                score = next.score(),
                lines = next.lines(),
                "status changed"
            );
        } else if action != GameAction::Tick {
            tracing::trace!(action = action.as_str(), "dispatch");
        }

        if next.last_lines_cleared() > 0 {
            tracing::debug!(
                cleared = next.last_lines_cleared(),
                score = next.score(),
                level = next.level(),
                "lines cleared"
            );
            self.flash_until = Some(Instant::now() + Duration::from_millis(FLASH_MS as u64));
        }

        self.audio.play_all(cues_between(&self.state, &next));
        self.state = next;
    }

    /// Dispatch a tick once the fall delay has passed. Gravity only runs while
    /// playing; other statuses keep pushing the deadline forward.
    fn gravity(&mut self, now: Instant) {
        if self.state.status() != Status::Playing {
            self.last_drop = now;
            return;
        }
        if now.saturating_duration_since(self.last_drop) >= self.fall_delay() {
            self.last_drop = now;
            self.dispatch(GameAction::Tick);
        }
    }
}
