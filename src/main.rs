//! Terminal gridwalk runner.
//!
//! Wires the keyboard input adapter to a terminal surface, drives the game
//! loop, and renders the board. Movement commands reach the game only
//! through the input port boundary; this loop never inspects key codes for
//! movement itself.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::process;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use tui_gridwalk::core::{GameState, LEVELS};
use tui_gridwalk::input::{should_quit, InputPort, KeyboardInputAdapter};
use tui_gridwalk::term::{GameView, TerminalRenderer, TerminalSurface};
use tui_gridwalk::types::{Direction, POLL_MS};

/// Pause after solving a level before the next one loads.
const LEVEL_DONE_PAUSE_MS: u64 = 600;

struct Options {
    logging: bool,
    start_level: usize,
}

fn main() -> Result<()> {
    let opts = parse_args();
    if let Err(err) = init_logging(opts.logging) {
        eprintln!("warning: failed to initialize logging: {}", err);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, opts.start_level);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, start_level: usize) -> Result<()> {
    let surface = Rc::new(RefCell::new(TerminalSurface::new()));
    let pending: Rc<RefCell<VecDeque<Direction>>> = Rc::new(RefCell::new(VecDeque::new()));

    let mut adapter = KeyboardInputAdapter::new(Rc::clone(&surface));
    let queue = Rc::clone(&pending);
    adapter.setup_input_handling(Box::new(move |dir| queue.borrow_mut().push_back(dir)));

    let mut level = start_level;
    let mut game = GameState::from_layout(LEVELS[level])?;
    log::info!("starting at level {}", level + 1);

    loop {
        let view = GameView::new(level + 1, LEVELS.len());
        let rows = view.render(&game, surface.borrow().is_focused());
        term.draw(&rows)?;

        if event::poll(Duration::from_millis(POLL_MS))? {
            let ev = event::read()?;
            if let Some(key) = surface.borrow_mut().pump(&ev) {
                // Surface-level defaults, applied only to unconsumed keys.
                if should_quit(key) {
                    break;
                }
            }
        }

        let moves: Vec<Direction> = pending.borrow_mut().drain(..).collect();
        for dir in moves {
            game.apply_move(dir);
        }

        if game.completed() {
            let rows = view.render(&game, surface.borrow().is_focused());
            term.draw(&rows)?;
            std::thread::sleep(Duration::from_millis(LEVEL_DONE_PAUSE_MS));

            level += 1;
            if level >= LEVELS.len() {
                log::info!("all levels solved");
                break;
            }
            game = GameState::from_layout(LEVELS[level])?;
            pending.borrow_mut().clear();
            log::info!("advancing to level {}", level + 1);
        }
    }

    adapter.cleanup();
    Ok(())
}

fn parse_args() -> Options {
    let mut logging = false;
    let mut start_level = 0usize;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--logs" => logging = true,
            "--level" => {
                let value = args.next().unwrap_or_default();
                match value.parse::<usize>() {
                    Ok(n) if (1..=LEVELS.len()).contains(&n) => start_level = n - 1,
                    _ => {
                        eprintln!("--level expects a number from 1 to {}", LEVELS.len());
                        process::exit(1);
                    }
                }
            }
            _ => {
                eprintln!("usage: tui-gridwalk [--logs] [--level N]");
                process::exit(1);
            }
        }
    }

    Options {
        logging,
        start_level,
    }
}

fn init_logging(enabled: bool) -> Result<(), String> {
    if !enabled {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("gridwalk.log")
        .map_err(|e| e.to_string())?;

    WriteLogger::init(LevelFilter::Debug, Config::default(), file).map_err(|e| e.to_string())
}
