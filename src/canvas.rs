//! Raster drawing surface.
//!
//! The scene draws in logical pixels. The canvas stores one RGB triple per
//! raster pixel and maps logical coordinates onto the raster through a fixed
//! `scale` (logical pixels per raster pixel).

use crate::color::Rgb;

/// The drawing primitives entities need: a translucent rectangle fill and a
/// filled circle, each composited at a per-call opacity.
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32);
}

pub struct Canvas {
    width: usize,
    height: usize,
    scale: f32,
    background: Rgb,
    pixels: Vec<(f32, f32, f32)>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, scale: f32, background: Rgb) -> Self {
        let mut canvas = Self {
            width: 0,
            height: 0,
            scale,
            background,
            pixels: Vec::new(),
        };
        canvas.resize(width, height);
        canvas
    }

    /// Resizes the raster, discarding whatever was drawn.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        let bg = (
            self.background.0 as f32,
            self.background.1 as f32,
            self.background.2 as f32,
        );
        self.pixels.clear();
        self.pixels.resize(width * height, bg);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Size of the raster in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        (self.width as f32 * self.scale, self.height as f32 * self.scale)
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        let (r, g, b) = self.pixels[y * self.width + x];
        (r.round() as u8, g.round() as u8, b.round() as u8)
    }

    #[inline]
    fn blend(&mut self, idx: usize, color: Rgb, alpha: f32) {
        let dst = &mut self.pixels[idx];
        dst.0 = dst.0 * (1.0 - alpha) + color.0 as f32 * alpha;
        dst.1 = dst.1 * (1.0 - alpha) + color.1 as f32 * alpha;
        dst.2 = dst.2 * (1.0 - alpha) + color.2 as f32 * alpha;
    }

    /// Raster index range whose pixel centres fall in `[lo, hi]` (logical).
    fn span(&self, lo: f32, hi: f32, limit: usize) -> (usize, usize) {
        let start = (lo / self.scale - 0.5).ceil().max(0.0);
        let end = (hi / self.scale - 0.5).floor() + 1.0;
        let end = end.clamp(0.0, limit as f32);
        (start.min(limit as f32) as usize, end as usize)
    }
}

impl Surface for Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }
        let (x0, x1) = self.span(x, x + w, self.width);
        let (y0, y1) = self.span(y, y + h, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(py * self.width + px, color, alpha);
            }
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }

        let (x0, x1) = self.span(x - radius, x + radius, self.width);
        let (y0, y1) = self.span(y - radius, y + radius, self.height);
        let r2 = radius * radius;
        let mut covered = false;

        for py in y0..y1 {
            let cy = (py as f32 + 0.5) * self.scale - y;
            for px in x0..x1 {
                let cx = (px as f32 + 0.5) * self.scale - x;
                if cx * cx + cy * cy <= r2 {
                    self.blend(py * self.width + px, color, alpha);
                    covered = true;
                }
            }
        }

        // Sub-pixel circles snap to the pixel holding their centre
        if !covered && x >= 0.0 && y >= 0.0 {
            let px = (x / self.scale) as usize;
            let py = (y / self.scale) as usize;
            if px < self.width && py < self.height {
                self.blend(py * self.width + px, color, alpha);
            }
        }
    }
}
