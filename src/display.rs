use crate::{CHIP8_DISPLAY_HEIGHT, CHIP8_DISPLAY_WIDTH};

pub type Frame = [[bool; CHIP8_DISPLAY_WIDTH]; CHIP8_DISPLAY_HEIGHT];

/// 64x32 monochrome bitmap.
///
/// `dirty` is raised by every mutation and only lowered by the consumer after
/// it has rendered the current frame.
pub struct Display {
    pixels: Frame,
    dirty: bool,
}

impl Display {
    pub fn new() -> Self {
        Self {
            pixels: [[false; CHIP8_DISPLAY_WIDTH]; CHIP8_DISPLAY_HEIGHT],
            dirty: false,
        }
    }

    pub fn clear(&mut self) {
        for row in self.pixels.iter_mut() {
            row.fill(false);
        }
        self.dirty = true;
    }

    /// XOR a sprite onto the screen, one byte per row with the MSB leftmost.
    ///
    /// The anchor wraps around the screen, but whatever falls past the right
    /// or bottom edge is clipped. Returns true if any pixel was turned off.
    pub fn draw(&mut self, x0: u8, y0: u8, sprite: &[u8]) -> bool {
        let x0 = x0 as usize % CHIP8_DISPLAY_WIDTH;
        let y0 = y0 as usize % CHIP8_DISPLAY_HEIGHT;
        let mut collision = false;

        for (row, &byte) in sprite.iter().enumerate() {
            let y = y0 + row;
            if y >= CHIP8_DISPLAY_HEIGHT {
                break;
            }
            for column in 0..8 {
                let x = x0 + column;
                if x >= CHIP8_DISPLAY_WIDTH {
                    break;
                }
                if byte & (0x80 >> column) != 0 {
                    let pixel = &mut self.pixels[y][x];
                    collision |= *pixel;
                    *pixel ^= true;
                }
            }
        }

        self.dirty = true;
        collision
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        if x < CHIP8_DISPLAY_WIDTH && y < CHIP8_DISPLAY_HEIGHT {
            self.pixels[y][x]
        } else {
            false
        }
    }

    pub fn frame(&self) -> &Frame {
        &self.pixels
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRIPES: [u8; 8] = [0xaa, 0x55, 0xaa, 0x55, 0xaa, 0x55, 0xaa, 0x55];

    fn lit(display: &Display) -> usize {
        display.frame().iter().flatten().filter(|&&p| p).count()
    }

    #[test]
    fn test_draw_stripes() {
        let mut display = Display::new();

        let collision = display.draw(0, 0, &STRIPES);

        assert!(!collision);
        assert!(display.is_dirty());
        for y in 0..32 {
            for x in 0..64 {
                assert_eq!(display.get_pixel(x, y), x < 8 && y < 8 && x % 2 == y % 2);
            }
        }
    }

    #[test]
    fn test_msb_is_leftmost() {
        let mut display = Display::new();

        display.draw(10, 3, &[0x80]);

        assert!(display.get_pixel(10, 3));
        assert_eq!(lit(&display), 1);
    }

    #[test]
    fn test_double_draw_restores_and_collides() {
        let mut display = Display::new();

        assert!(!display.draw(5, 7, &STRIPES));
        assert!(display.draw(5, 7, &STRIPES));

        assert_eq!(lit(&display), 0);
    }

    #[test]
    fn test_partial_overlap_collision() {
        let mut display = Display::new();
        display.draw(0, 0, &[0x01]);

        // only shares a pixel at x = 7
        assert!(display.draw(7, 0, &[0x80]));
        assert!(!display.draw(8, 0, &[0x80]));
        assert!(!display.get_pixel(7, 0));
        assert!(display.get_pixel(8, 0));
    }

    #[test]
    fn test_anchor_wraps() {
        let mut display = Display::new();

        display.draw(64 + 2, 32 + 1, &[0x80]);

        assert!(display.get_pixel(2, 1));
        assert_eq!(lit(&display), 1);
    }

    #[test]
    fn test_clipped_at_edges() {
        let mut display = Display::new();

        display.draw(0x39, 0x19, &[0xff; 8]);

        for y in 0..32 {
            for x in 0..64 {
                assert_eq!(display.get_pixel(x, y), y > 24 && x > 56);
            }
        }
        assert_eq!(lit(&display), 7 * 7);
    }

    #[test]
    fn test_clear() {
        let mut display = Display::new();
        display.draw(0, 0, &STRIPES);
        display.clear_dirty();

        display.clear();

        assert_eq!(lit(&display), 0);
        assert!(display.is_dirty());
    }

    #[test]
    fn test_dirty_only_cleared_by_consumer() {
        let mut display = Display::new();
        assert!(!display.is_dirty());

        display.draw(0, 0, &[]);
        assert!(display.is_dirty());
        display.draw(0, 0, &[]);
        assert!(display.is_dirty());

        display.clear_dirty();
        assert!(!display.is_dirty());
    }

    #[test]
    fn test_out_of_range_pixel_is_off() {
        let display = Display::new();
        assert!(!display.get_pixel(64, 0));
        assert!(!display.get_pixel(0, 32));
    }
}
