//! Terminal blockfall runner.
//!
//! The timing driver and input glue around the engine: polls events
//! between fixed-period gravity ticks, applies key and drag commands, and
//! stops the ticker once the engine reports game over.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use blockfall::core::Engine;
use blockfall::input::{handle_key_event, should_quit, SwipeTracker};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::DROP_INTERVAL_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = Engine::new(clock_seed());
    engine.start();

    let view = GameView::default();
    let mut swipes = SwipeTracker::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(DROP_INTERVAL_MS);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let mut fb = view.render(&engine, Viewport::new(w, h));
        term.draw(&mut fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        engine.apply(cmd);
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        swipes.begin(mouse.column, mouse.row);
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        if let Some(cmd) = swipes.finish(mouse.column, mouse.row) {
                            engine.apply(cmd);
                        }
                    }
                    _ => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity tick on the fixed period; the ticker stops once the
        // engine is terminal.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if !engine.game_over() {
                engine.tick();
            }
        }

        // The lock event fires once per lock; the game-over alert with it.
        if let Some(lock) = engine.take_last_event() {
            if lock.game_over {
                term.bell()?;
            }
        }
    }
}
