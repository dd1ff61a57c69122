use crate::error::{Chip8Error, Result};
use crate::{CHIP8_MAX_ROM_SIZE, CHIP8_MEMORY_SIZE, CHIP8_ROM_START};

pub const FONT_GLYPH_SIZE: u16 = 5;

const FONT_DATA: [u8; 0x10 * FONT_GLYPH_SIZE as usize] = [
    0xf0, 0x90, 0x90, 0x90, 0xf0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xf0, 0x10, 0xf0, 0x80, 0xf0, // 2
    0xf0, 0x10, 0xf0, 0x10, 0xf0, // 3
    0x90, 0x90, 0xf0, 0x10, 0x10, // 4
    0xf0, 0x80, 0xf0, 0x10, 0xf0, // 5
    0xf0, 0x80, 0xf0, 0x90, 0xf0, // 6
    0xf0, 0x10, 0x20, 0x40, 0x40, // 7
    0xf0, 0x90, 0xf0, 0x90, 0xf0, // 8
    0xf0, 0x90, 0xf0, 0x10, 0xf0, // 9
    0xf0, 0x90, 0xf0, 0x90, 0x90, // A
    0xe0, 0x90, 0xe0, 0x90, 0xe0, // B
    0xf0, 0x80, 0x80, 0x80, 0xf0, // C
    0xe0, 0x90, 0x90, 0x90, 0xe0, // D
    0xf0, 0x80, 0xf0, 0x80, 0xf0, // E
    0xf0, 0x80, 0xf0, 0x80, 0x80, // F
];

/// 4K of RAM. The font lives at 0x000, programs are loaded at 0x200.
pub struct Memory {
    bytes: [u8; CHIP8_MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut memory = Self { bytes: [0x00; CHIP8_MEMORY_SIZE] };
        memory.reset();
        memory
    }

    /// Zero everything, then put the font back in place.
    pub fn reset(&mut self) {
        self.bytes.fill(0x00);
        self.bytes[..FONT_DATA.len()].copy_from_slice(&FONT_DATA);
    }

    /// Copy a program into memory starting at 0x200. Nothing is written if it
    /// doesn't fit.
    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > CHIP8_MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge { size: rom.len(), max: CHIP8_MAX_ROM_SIZE });
        }
        let start = CHIP8_ROM_START as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        debug_assert!((addr as usize) < CHIP8_MEMORY_SIZE, "read outside memory: {addr:#06x}");
        self.bytes[addr as usize]
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        debug_assert!((addr as usize) < CHIP8_MEMORY_SIZE, "write outside memory: {addr:#06x}");
        self.bytes[addr as usize] = value;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

/// Address of the glyph for hex digit `digit`.
pub fn font_address(digit: u8) -> u16 {
    digit as u16 * FONT_GLYPH_SIZE
}
