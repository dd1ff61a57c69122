use crate::{CHIP8_REGISTER_COUNT, CHIP8_ROM_START};

pub const VF: usize = 0xf;

/// V0..VF, the index register and the program counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    v: [u8; CHIP8_REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
}

impl Registers {
    pub fn new() -> Self {
        Self {
            v: [0x00; CHIP8_REGISTER_COUNT],
            i: 0x0000,
            pc: CHIP8_ROM_START,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // x always comes from a 4 bit instruction field
    #[inline]
    pub fn get(&self, x: usize) -> u8 {
        self.v[x & 0xf]
    }

    #[inline]
    pub fn set(&mut self, x: usize, value: u8) {
        self.v[x & 0xf] = value;
    }

    #[inline]
    pub fn set_flag(&mut self, flag: bool) {
        self.v[VF] = flag as u8;
    }

    pub fn v(&self) -> &[u8; CHIP8_REGISTER_COUNT] {
        &self.v
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let registers = Registers::new();

        assert_eq!(registers.pc, 0x200);
        assert_eq!(registers.i, 0x000);
        assert_eq!(registers.v(), &[0; 16]);
    }

    #[test]
    fn test_vf_is_general_purpose() {
        let mut registers = Registers::new();
        registers.set(VF, 0x42);
        assert_eq!(registers.get(0xf), 0x42);

        registers.set_flag(true);
        assert_eq!(registers.get(VF), 1);
        registers.set_flag(false);
        assert_eq!(registers.get(VF), 0);
    }

    #[test]
    fn test_reset() {
        let mut registers = Registers::new();
        registers.set(3, 0x99);
        registers.i = 0x123;
        registers.pc = 0x456;

        registers.reset();

        assert_eq!(registers, Registers::new());
    }
}
