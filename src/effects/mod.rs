use crate::config::Options;
use crate::error::Result;
use crossterm::event::Event;
use std::io::Write;

pub mod fireworks;

pub trait Effect {
    /// `width`/`height` are in raster pixels (two per terminal row).
    fn new(width: usize, height: usize, options: &Options) -> Result<Self>
    where
        Self: Sized;
    /// Advances exactly one animation frame.
    fn update(&mut self, dt: f32);
    fn render(&mut self, stdout: &mut impl Write) -> std::io::Result<()>;
    fn resize(&mut self, width: usize, height: usize);
    fn handle_event(&mut self, _event: &Event) {}
}
