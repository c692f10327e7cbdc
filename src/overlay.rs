//! Greeting text drawn over the sky until the first click.

/// Seconds after launch at which hidden text comes back.
pub const RESTORE_AFTER: f32 = 30.0;

const LINES: [&str; 2] = ["Fireworks", "Click anywhere to light up the sky"];

pub struct Overlay {
    visible: bool,
    clock: f32,
    restore_at: Option<f32>,
}

impl Overlay {
    /// Visible, with the one-shot restore armed from now.
    pub fn new() -> Self {
        Self {
            visible: true,
            clock: 0.0,
            restore_at: Some(RESTORE_AFTER),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn tick(&mut self, dt: f32) {
        self.clock += dt;
        if let Some(deadline) = self.restore_at {
            if self.clock >= deadline {
                self.visible = true;
                self.restore_at = None;
                tracing::debug!(elapsed = self.clock, "overlay restored");
            }
        }
    }

    /// Text rows placed around the middle of a `cols` x `rows` cell grid,
    /// as `(row, first_col, text)`. Lines wider than the grid are cut.
    pub fn layout(&self, cols: usize, rows: usize) -> Vec<(usize, usize, &'static str)> {
        if !self.visible || cols == 0 || rows == 0 {
            return Vec::new();
        }

        let top = (rows / 2).saturating_sub(1);
        LINES
            .iter()
            .copied()
            .enumerate()
            .filter_map(|(i, line)| {
                // Blank spacer row between the title and the hint
                let row = top + i * 2;
                if row >= rows {
                    return None;
                }
                let len = line.chars().count().min(cols);
                let text = &line[..line.char_indices().nth(len).map_or(line.len(), |(b, _)| b)];
                Some((row, (cols - len) / 2, text))
            })
            .collect()
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new()
    }
}
