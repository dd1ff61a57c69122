// CHIP-8 virtual machine core, based on:
// - RCA COSMAC VIP CDP18S711 Instruction Manual
// - https://github.com/mattmikolay/chip-8/wiki/CHIP%E2%80%908-Instruction-Set
// - http://devernay.free.fr/hacks/chip8/C8TECH10.HTM

pub mod chip8;
pub mod display;
pub mod error;
pub mod instruction;
pub mod memory;
pub mod registers;
pub mod stack;
pub mod timers;

pub use chip8::{Chip8, KeyState, Quirks, Step};
pub use display::Display;
pub use error::{Chip8Error, Result};
pub use instruction::Instruction;
pub use memory::Memory;
pub use registers::Registers;
pub use stack::CallStack;
pub use timers::{TickClock, Timers};

pub const CHIP8_MEMORY_SIZE: usize = 0x1000;
pub const CHIP8_ADDRESS_MASK: u16 = 0x0fff;
pub const CHIP8_ROM_START: u16 = 0x200;
pub const CHIP8_MAX_ROM_SIZE: usize = CHIP8_MEMORY_SIZE - CHIP8_ROM_START as usize;
pub const CHIP8_STACK_DEPTH: usize = 16;
pub const CHIP8_REGISTER_COUNT: usize = 16;
pub const CHIP8_DISPLAY_WIDTH: usize = 64;
pub const CHIP8_DISPLAY_HEIGHT: usize = 32;
pub const CHIP8_KEY_COUNT: usize = 0x10;
pub const CHIP8_TIMER_HZ: f64 = 60.0;
