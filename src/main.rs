mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use alien_invasion::compute::{apply_command, init_state, set_movement, tick, Flow};
use alien_invasion::config::GameConfig;
use alien_invasion::entities::{GameState, PauseMode};
use alien_invasion::highscore::HighScoreStore;
use alien_invasion::input::InputMapper;
use alien_invasion::settings::Settings;
use alien_invasion::starfield::Starfield;
use alien_invasion::viewport::Viewport;

#[derive(Parser, Debug)]
#[command(version, about = "Shoot down the descending alien fleet", long_about = None)]
struct Args {
    /// TOML file overriding the default settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// High score file (overrides the config)
    #[arg(long)]
    high_score: Option<PathBuf>,

    /// Where log output goes while the terminal is in raw mode
    #[arg(long, default_value = "alien_invasion.log")]
    log_file: PathBuf,
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The alternate screen owns stdout/stderr, so log lines go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Pointer ───────────────────────────────────────────────────────────────────

/// Mouse capture stands in for pointer visibility: on while the menu is shown,
/// off during a run.
fn sync_pointer<W: Write>(out: &mut W, state: &GameState, captured: &mut bool) -> Result<()> {
    if state.pointer_visible != *captured {
        if state.pointer_visible {
            out.execute(EnableMouseCapture)?;
        } else {
            out.execute(DisableMouseCapture)?;
        }
        *captured = state.pointer_visible;
    }
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit command.  Each frame: drain input, sample held movement
/// keys, advance the simulation, stall if a life was lost, redraw.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    config: &GameConfig,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let base = &state.settings.base;
    let starfield = Starfield::generate(
        config.star_count,
        base.screen_width,
        base.screen_height,
        config.star_seed,
    );
    let (columns, rows) = terminal::size()?;
    let mut viewport = Viewport::new(columns, rows, base.screen_width, base.screen_height);

    let mut input = InputMapper::new();
    let mut mouse_captured = false;
    let frame_len = config.frame_duration();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        sync_pointer(out, state, &mut mouse_captured)?;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Resize(columns, rows) = ev {
                viewport = viewport.resized(columns, rows);
                continue;
            }
            if let Some(command) = input.handle(&ev, frame, &viewport) {
                if apply_command(state, command) == Flow::Quit {
                    return Ok(());
                }
            }
        }

        set_movement(state, input.movement(frame));
        let report = tick(state);

        if report.life_lost && state.pause == PauseMode::Stall {
            thread::sleep(config.ship_hit_pause());
        }

        display::render(out, state, &viewport, &starfield)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    let mut config = match &args.config {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            GameConfig::load(path).context("could not load configuration")?
        }
        None => GameConfig::default(),
    };
    if let Some(path) = args.high_score {
        config.high_score_path = path;
    }

    let mut store =
        HighScoreStore::open(&config.high_score_path).context("could not load high score")?;
    let settings = Settings::new(config.settings.clone(), config.difficulty);
    let mut state = init_state(settings, store.stored(), config.pause_mode());
    log::info!("starting with high score {}", store.stored());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut state, &config, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    // Persist on every way out, including a failed loop.
    if let Err(err) = store.persist_if_improved(state.stats.high_score) {
        log::warn!("{err}");
        result?;
        return Err(err).context("could not save high score");
    }

    result
}
