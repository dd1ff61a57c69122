use crate::error::{Chip8Error, Result};
use crate::CHIP8_STACK_DEPTH;

// On the original COSMAC VIP interpreter the stack was located in main
// memory, but programs can't rely on any specific location, so it is kept
// separately here.
pub struct CallStack {
    frames: [u16; CHIP8_STACK_DEPTH],
    depth: usize,
}

impl CallStack {
    pub fn new() -> Self {
        Self { frames: [0x0000; CHIP8_STACK_DEPTH], depth: 0 }
    }

    pub fn reset(&mut self) {
        self.depth = 0;
    }

    pub fn push(&mut self, addr: u16) -> Result<()> {
        if self.depth == CHIP8_STACK_DEPTH {
            return Err(Chip8Error::StackOverflow);
        }
        self.frames[self.depth] = addr;
        self.depth += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.depth == 0 {
            return Err(Chip8Error::StackUnderflow);
        }
        self.depth -= 1;
        Ok(self.frames[self.depth])
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo() {
        let mut stack = CallStack::new();
        stack.push(0x202).unwrap();
        stack.push(0x304).unwrap();

        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.pop(), Ok(0x304));
        assert_eq!(stack.pop(), Ok(0x202));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_overflow_on_17th_push() {
        let mut stack = CallStack::new();
        for n in 0..16 {
            assert_eq!(stack.push(0x200 + 2 * n), Ok(()));
        }

        assert_eq!(stack.push(0x300), Err(Chip8Error::StackOverflow));
        assert_eq!(stack.depth(), 16);
        assert_eq!(stack.pop(), Ok(0x21e));
    }

    #[test]
    fn test_underflow() {
        let mut stack = CallStack::new();

        assert_eq!(stack.pop(), Err(Chip8Error::StackUnderflow));

        stack.push(0x200).unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.pop(), Err(Chip8Error::StackUnderflow));
    }

    #[test]
    fn test_reset_empties() {
        let mut stack = CallStack::new();
        stack.push(0x200).unwrap();

        stack.reset();

        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.pop(), Err(Chip8Error::StackUnderflow));
    }
}
