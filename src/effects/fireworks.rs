use super::Effect;
use crate::canvas::Canvas;
use crate::color::{Rgb, WHITE};
use crate::config::Options;
use crate::error::Result;
use crate::overlay::Overlay;
use crate::scene::Scene;
use crate::sound::Sound;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use std::io::Write;

pub struct FireworksEffect {
    canvas: Canvas,
    scene: Scene,
    overlay: Overlay,
    sound: Sound,
    output_buf: Vec<u8>,
}

impl FireworksEffect {
    /// Logical position of the centre of terminal cell `(col, row)`.
    fn cell_to_logical(&self, col: u16, row: u16) -> (f32, f32) {
        let scale = self.canvas.scale();
        ((col as f32 + 0.5) * scale, (row as f32 * 2.0 + 1.0) * scale)
    }

    fn launch(&mut self, col: u16, row: u16) {
        let (x, y) = self.cell_to_logical(col, row);
        self.overlay.hide();
        self.sound.play();
        self.scene.spawn_burst(x, y);
    }
}

impl Effect for FireworksEffect {
    fn new(width: usize, height: usize, options: &Options) -> Result<Self> {
        let canvas = Canvas::new(width, height, options.scale, options.bg_color);
        let (w, h) = canvas.logical_size();
        let rng = match options.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        Ok(Self {
            scene: Scene::new(w, h, options.bg_color, rng),
            canvas,
            overlay: Overlay::new(),
            sound: Sound::open(options.sound)?,
            output_buf: Vec::with_capacity(width * height * 25),
        })
    }

    fn update(&mut self, dt: f32) {
        self.overlay.tick(dt);
        self.scene.animate(&mut self.canvas);
    }

    fn resize(&mut self, width: usize, height: usize) {
        self.canvas.resize(width, height);
        let (w, h) = self.canvas.logical_size();
        self.scene.resize(w, h);
    }

    fn handle_event(&mut self, event: &Event) {
        if let Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) = event
        {
            self.launch(*column, *row);
        }
    }

    fn render(&mut self, stdout: &mut impl Write) -> std::io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");
        self.sound.flush_into(&mut self.output_buf);

        let width = self.canvas.width();
        let height = self.canvas.height();
        let rows = height.div_ceil(2);

        let mut text_row: Vec<Option<char>> = vec![None; width];
        let text = self.overlay.layout(width, rows);

        let mut prev_top_color: Rgb = (255, 255, 255);
        let mut prev_bot_color: Rgb = (255, 255, 255);

        // Render using half-blocks
        for (cell_row, y) in (0..height).step_by(2).enumerate() {
            text_row.fill(None);
            for (row, col, line) in &text {
                if *row == cell_row {
                    for (i, ch) in line.chars().enumerate() {
                        text_row[col + i] = Some(ch);
                    }
                }
            }

            for x in 0..width {
                let top_color = self.canvas.pixel(x, y);
                let bot_color = if y + 1 < height {
                    self.canvas.pixel(x, y + 1)
                } else {
                    top_color
                };

                if let Some(ch) = text_row[x] {
                    write!(
                        self.output_buf,
                        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{}",
                        top_color.0, top_color.1, top_color.2, WHITE.0, WHITE.1, WHITE.2, ch
                    )?;
                    prev_top_color = top_color;
                    prev_bot_color = WHITE;
                    continue;
                }

                if top_color != prev_top_color {
                    write!(
                        self.output_buf,
                        "\x1b[48;2;{};{};{}m",
                        top_color.0, top_color.1, top_color.2
                    )?;
                    prev_top_color = top_color;
                }
                if bot_color != prev_bot_color {
                    write!(
                        self.output_buf,
                        "\x1b[38;2;{};{};{}m",
                        bot_color.0, bot_color.1, bot_color.2
                    )?;
                    prev_bot_color = bot_color;
                }

                self.output_buf.extend_from_slice("▄".as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_top_color = (255, 255, 255);
            prev_bot_color = (255, 255, 255);
            if y + 2 < height {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        stdout.write_all(&self.output_buf)?;
        stdout.flush()?;
        Ok(())
    }
}
