//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`.
//! Settings come from `MEMORY_*` environment variables (see `GameConfig`).

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_memory::core::GameConfig;
use tui_memory::input::{handle_key_event, should_quit};
use tui_memory::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_memory::types::{STATIC_FRAME_INTERVAL_MS, TICK_MS};
use tui_memory::Session;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Route log output to `MEMORY_LOG_PATH`; the terminal itself is owned by the game.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut session = Session::new(config.new_game());
    log::info!(
        "session started (seed {}, revert delay {}ms)",
        session.game().seed(),
        session.game().revert_delay_ms()
    );

    let view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_FRAME_INTERVAL_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fingerprint = session.fingerprint() ^ (((w as u64) << 48) | ((h as u64) << 32));
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, fingerprint, session.animating()) {
            let snap = session.game().snapshot();
            let prompt = session.prompt();
            view.render_into_with_prompt(&snap, Some(&prompt), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit after {} attempts", session.game().attempts());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis() as u32);
        }
    }
}
