//! Pieces of the terminal loop that do not need a terminal.

use crate::error::{FireworksError, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;

pub const FIXED_DT: f32 = 1.0 / 60.0;
const MAX_CATCH_UP: usize = 3;

/// `q`, `Esc` and `Ctrl+C` end the show.
pub fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('q')
        || key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Raster size for a `cols` x `rows` terminal: one column per cell, two
/// pixels per row. An empty terminal has nothing to draw on.
pub fn surface_size_from(cols: u16, rows: u16) -> Result<(usize, usize)> {
    if cols == 0 || rows == 0 {
        return Err(FireworksError::NoSurface { cols, rows });
    }
    Ok((cols as usize, rows as usize * 2))
}

/// Result of a show once the terminal has been restored. Both restore
/// steps have already run; the loop's own error is reported first.
pub fn finish_show(outcome: Result<()>, leave: io::Result<()>, raw_mode: io::Result<()>) -> Result<()> {
    outcome
        .and(leave.map_err(FireworksError::from))
        .and(raw_mode.map_err(FireworksError::from))
}

/// Fixed-step accumulator. Slow renders catch up by at most three frames.
#[derive(Debug, Default)]
pub struct FrameClock {
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `frame_time` seconds and returns how many fixed frames to run.
    pub fn advance(&mut self, frame_time: f32) -> usize {
        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_DT && steps < MAX_CATCH_UP {
            self.accumulator -= FIXED_DT;
            steps += 1;
        }
        // A stall is dropped, not owed
        if steps == MAX_CATCH_UP {
            self.accumulator = self.accumulator.min(FIXED_DT * 0.5);
        }
        steps
    }
}
