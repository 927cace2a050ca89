use image::{Rgba, RgbaImage};

use crate::{colour::Colour, math::Vec2, surface::Surface};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Clone, Copy)]
enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
}

/// A software raster canvas
///
/// Pixels start out opaque white. Path commands are recorded as issued and
/// lowered to pixels when the path is committed: each pending segment is
/// rasterized with Bresenham's algorithm in the current stroke colour,
/// clipped to the canvas bounds. Coordinates are rounded to the nearest
/// pixel at rasterization time.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
    stroke_colour: Colour,
    path: Vec<PathCommand>,
}

impl Canvas {
    /// Create a blank canvas of the given pixel dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, BACKGROUND),
            stroke_colour: Colour::from_rgb24(0),
            path: Vec::new(),
        }
    }
    /// Width of the canvas, in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }
    /// Height of the canvas, in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
    /// The colour currently used for strokes
    pub fn stroke_colour(&self) -> Colour {
        self.stroke_colour
    }
    /// The colour of the pixel at `(x, y)`
    ///
    /// # Panics
    /// Panics when the position is outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Colour {
        let Rgba([r, g, b, _]) = *self.pixels.get_pixel(x, y);
        Colour::from_channels(r, g, b)
    }
    /// Access the backing image
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }
    /// The canvas contents as row-major `0RGB` packed pixels, the format
    /// framebuffer windows blit from
    pub fn packed_buffer(&self) -> Vec<u32> {
        self.pixels
            .pixels()
            .map(|&Rgba([r, g, b, _])| ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
            .collect()
    }

    fn plot(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let colour = self.stroke_colour;
        self.pixels.put_pixel(
            x as u32,
            y as u32,
            Rgba([colour.red(), colour.green(), colour.blue(), 255]),
        );
    }

    fn rasterize(&mut self, from: Vec2, to: Vec2) {
        let (mut x, mut y) = (from.x().round() as i64, from.y().round() as i64);
        let (x1, y1) = (to.x().round() as i64, to.y().round() as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl Surface for Canvas {
    fn set_stroke_colour(&mut self, colour: Colour) {
        self.stroke_colour = colour;
    }
    fn begin_path(&mut self) {
        self.path.clear();
    }
    fn move_to(&mut self, point: Vec2) {
        self.path.push(PathCommand::MoveTo(point));
    }
    fn line_to(&mut self, point: Vec2) {
        self.path.push(PathCommand::LineTo(point));
    }
    fn stroke(&mut self) {
        let mut pen: Option<Vec2> = None;
        for command in std::mem::take(&mut self.path) {
            match command {
                PathCommand::MoveTo(point) => pen = Some(point),
                PathCommand::LineTo(point) => {
                    // A segment with no starting point only places the pen
                    if let Some(from) = pen {
                        self.rasterize(from, point);
                    }
                    pen = Some(point);
                }
            }
        }
    }
}
