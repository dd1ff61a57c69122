use thiserror::Error;

pub type Result<T> = std::result::Result<T, Chip8Error>;

/// Every variant is fatal to the run: the host loop stops and reports it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Chip8Error {
    #[error("rom is too large ({size} bytes), at most {max} bytes fit in program memory")]
    RomTooLarge { size: usize, max: usize },

    #[error("stack overflow: call with {} return addresses already on the stack", crate::CHIP8_STACK_DEPTH)]
    StackOverflow,

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("unknown instruction {0:#06x}")]
    UnknownInstruction(u16),
}
