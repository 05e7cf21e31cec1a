//! Terminal sliding-puzzle runner (default binary).
//!
//! Drag a tile next to the blank with the left mouse button to slide it.
//! `r` reshuffles, `+`/`-` change the grid size, `q` quits.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;
use tracing::{info, warn};

use slide15::core::PuzzleSnapshot;
use slide15::engine::{EngineConfig, PuzzleEngine};
use slide15::input::{map_event, Command, InputEvent, PointerEvent, SizeControl};
use slide15::logging;
use slide15::term::{FrameBuffer, PuzzleView, TerminalRenderer, Viewport};

const POLL_MS: u64 = 50;

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &EngineConfig) -> Result<()> {
    let mut control = SizeControl::for_size(config.size);
    if !SizeControl::offers(config.size) {
        warn!(
            requested = config.size,
            using = control.side_length(),
            "SLIDE15_SIZE outside the size control range, clamped"
        );
    }
    let mut engine = PuzzleEngine::new(&config.clone().with_size(control.side_length()))?;
    info!(size = engine.size(), seed = config.seed, "session started");

    let view = PuzzleView::default();
    let mut snap = PuzzleSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let (sh, sw) = view.surface_size(viewport);
    engine.resize(sh, sw);

    loop {
        engine.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }

        let Some(input) = map_event(&event::read()?) else {
            continue;
        };

        match input {
            InputEvent::Command(Command::Quit) => return Ok(()),
            InputEvent::Command(Command::Reset) => engine.reset()?,
            InputEvent::Command(Command::Grow) => {
                if control.grow() {
                    engine.set_size_from_control(control.progress())?;
                }
            }
            InputEvent::Command(Command::Shrink) => {
                if control.shrink() {
                    engine.set_size_from_control(control.progress())?;
                }
            }
            InputEvent::Resize { width, height } => {
                viewport = Viewport::new(width, height);
                let (sh, sw) = view.surface_size(viewport);
                engine.resize(sh, sw);
                term.invalidate();
            }
            InputEvent::Pointer(PointerEvent::Down { column, row }) => {
                engine.pointer_down(view.to_surface(column, row));
            }
            InputEvent::Pointer(PointerEvent::Move { column, row }) => {
                engine.pointer_move(view.to_surface(column, row));
            }
            InputEvent::Pointer(PointerEvent::Up { .. }) => {
                let outcome = engine.pointer_up();
                if engine.is_solved() {
                    info!(?outcome, "solved");
                }
            }
        }
    }
}
