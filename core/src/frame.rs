use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// # Frame buffer
/// The 64x32 monochrome display. Pixels are indexed as `[y][x]`.
///
/// Apart from being cleared, the only way to change it is by XORing sprites
/// onto it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            pixels: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    /// Whether the pixel at (x, y) is lit; coordinates wrap around the edges.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.pixels[y % DISPLAY_HEIGHT][x % DISPLAY_WIDTH]
    }

    /// XORs an 8 pixel wide sprite onto the display with its top left corner at
    /// (x, y). Byte `r` of the sprite is row `r`; its most significant bit is
    /// the leftmost pixel. Pixels past an edge wrap around to the other side.
    ///
    /// Returns whether any lit pixel was turned off.
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (row, byte) in sprite.iter().enumerate() {
            let py = (y + row) % DISPLAY_HEIGHT;
            for column in 0..8 {
                let px = (x + column) % DISPLAY_WIDTH;
                let pixel = (byte >> (7 - column)) & 0x1 == 0x1;
                let cell = &mut self.pixels[py][px];
                collision |= pixel && *cell;
                *cell ^= pixel;
            }
        }
        collision
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool; DISPLAY_WIDTH]> {
        self.pixels.iter()
    }

    pub fn is_blank(&self) -> bool {
        self.rows().all(|row| row.iter().all(|pixel| !pixel))
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
