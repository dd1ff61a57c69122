use log::{debug, trace, warn};

use crate::display::Display;
use crate::error::Result;
use crate::instruction::Instruction;
use crate::memory::{font_address, Memory};
use crate::registers::Registers;
use crate::stack::CallStack;
use crate::timers::Timers;
use crate::{CHIP8_ADDRESS_MASK, CHIP8_KEY_COUNT};

/// Pressed state of the 16 hex keys, owned by the front end.
pub type KeyState = [bool; CHIP8_KEY_COUNT];

/// Selects between the COSMAC VIP semantics and the later CHIP-48 ones for
/// shifts, fx55/fx65 and bnnn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quirks {
    /// 8xy6/8xye shift vy into vx, fx55/fx65 advance i, bnnn jumps to nnn + v0
    Legacy,
    /// 8xy6/8xye shift vx in place, fx55/fx65 leave i alone, bxnn jumps to xnn + vx
    #[default]
    Modern,
}

/// Outcome of a successful `Chip8::step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Advanced,
    /// Waiting on fx0a with no key held; the same instruction runs again next step.
    Blocked,
}

pub struct Chip8 {
    memory: Memory,
    registers: Registers,
    stack: CallStack,
    timers: Timers,
    display: Display,
    quirks: Quirks,
    get_random: fn() -> u8,
}

impl Chip8 {
    pub fn new(quirks: Quirks, get_random: fn() -> u8) -> Self {
        let mut chip8 = Self {
            memory: Memory::new(),
            registers: Registers::new(),
            stack: CallStack::new(),
            timers: Timers::new(),
            display: Display::new(),
            quirks,
            get_random,
        };
        chip8.reset();
        chip8
    }

    /// Same as `new`, drawing random bytes from the thread rng.
    pub fn with_quirks(quirks: Quirks) -> Self {
        Self::new(quirks, rand::random::<u8>)
    }

    pub fn from_rom(rom: &[u8], quirks: Quirks, get_random: fn() -> u8) -> Result<Self> {
        let mut chip8 = Self::new(quirks, get_random);
        chip8.load(rom)?;
        Ok(chip8)
    }

    /// Back to power-on state. The quirk setting and random source are kept.
    pub fn reset(&mut self) {
        self.memory.reset();
        self.registers.reset();
        self.stack.reset();
        self.timers.reset();
        self.display = Display::new();
        debug!("reset, quirks: {:?}", self.quirks);
    }

    pub fn load(&mut self, rom: &[u8]) -> Result<()> {
        self.memory.load(rom)?;
        debug!("loaded {} byte rom", rom.len());
        Ok(())
    }

    /// Fetch, decode and execute a single instruction.
    ///
    /// An `Err` halts the machine: the host loop should stop and report it.
    pub fn step(&mut self, keys: &KeyState) -> Result<Step> {
        let address = self.registers.pc;
        let ir = self.fetch();

        let outcome = Instruction::decode(ir).and_then(|instruction| self.execute(instruction, keys));
        match outcome {
            Ok(Step::Blocked) => {
                self.registers.pc = address;
                Ok(Step::Blocked)
            }
            Ok(step) => Ok(step),
            Err(err) => {
                warn!("halted at {address:#05x}: {err}");
                Err(err)
            }
        }
    }

    /// Count the delay and sound timers down, call at 60hz. Returns true when
    /// the sound timer just reached zero.
    pub fn tick(&mut self) -> bool {
        let tone_off = self.timers.tick();
        if tone_off {
            debug!("sound timer expired");
        }
        tone_off
    }

    fn fetch(&mut self) -> u16 {
        let pc = self.registers.pc;
        let ir_hb = self.memory.read_byte(pc & CHIP8_ADDRESS_MASK);
        let ir_lb = self.memory.read_byte(pc.wrapping_add(1) & CHIP8_ADDRESS_MASK);
        self.registers.pc = pc.wrapping_add(2);

        let ir = u16::from_be_bytes([ir_hb, ir_lb]);
        trace!("{pc:#05x}: {ir:04x}");
        ir
    }

    fn index_address(&self, offset: u16) -> u16 {
        self.registers.i.wrapping_add(offset) & CHIP8_ADDRESS_MASK
    }

    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.registers.pc = self.registers.pc.wrapping_add(2);
        }
    }

    fn execute(&mut self, instruction: Instruction, keys: &KeyState) -> Result<Step> {
        let legacy = self.quirks == Quirks::Legacy;
        let r = &mut self.registers;

        match instruction {
            Instruction::Cls => self.display.clear(),
            Instruction::Ret => r.pc = self.stack.pop()?,
            Instruction::Jp(nnn) => r.pc = nnn,
            Instruction::Call(nnn) => {
                self.stack.push(r.pc)?;
                r.pc = nnn;
            }
            Instruction::SeConst(x, kk) => {
                let taken = r.get(x) == kk;
                self.skip_if(taken);
            }
            Instruction::SneConst(x, kk) => {
                let taken = r.get(x) != kk;
                self.skip_if(taken);
            }
            Instruction::SeReg(x, y) => {
                let taken = r.get(x) == r.get(y);
                self.skip_if(taken);
            }
            Instruction::SneReg(x, y) => {
                let taken = r.get(x) != r.get(y);
                self.skip_if(taken);
            }
            Instruction::LdConst(x, kk) => r.set(x, kk),
            Instruction::AddConst(x, kk) => r.set(x, r.get(x).wrapping_add(kk)),
            Instruction::LdReg(x, y) => r.set(x, r.get(y)),
            Instruction::Or(x, y) => r.set(x, r.get(x) | r.get(y)),
            Instruction::And(x, y) => r.set(x, r.get(x) & r.get(y)),
            Instruction::Xor(x, y) => r.set(x, r.get(x) ^ r.get(y)),
            Instruction::AddReg(x, y) => {
                let (v, carry) = r.get(x).overflowing_add(r.get(y));
                r.set(x, v);
                r.set_flag(carry);
            }
            Instruction::Sub(x, y) => {
                let (v, borrow) = r.get(x).overflowing_sub(r.get(y));
                r.set(x, v);
                r.set_flag(!borrow);
            }
            Instruction::Subn(x, y) => {
                let (v, borrow) = r.get(y).overflowing_sub(r.get(x));
                r.set(x, v);
                r.set_flag(!borrow);
            }
            Instruction::Shr(x, y) => {
                let source = if legacy { r.get(y) } else { r.get(x) };
                r.set(x, source >> 1);
                r.set_flag(source & 0x01 != 0);
            }
            Instruction::Shl(x, y) => {
                let source = if legacy { r.get(y) } else { r.get(x) };
                r.set(x, source << 1);
                r.set_flag(source & 0x80 != 0);
            }
            Instruction::LdI(nnn) => r.i = nnn,
            Instruction::JpOffset(x, nnn) => {
                let offset = if legacy { r.get(0) } else { r.get(x) };
                r.pc = nnn.wrapping_add(offset as u16) & CHIP8_ADDRESS_MASK;
            }
            Instruction::Rnd(x, kk) => r.set(x, (self.get_random)() & kk),
            Instruction::Drw(x, y, n) => {
                let (x0, y0) = (r.get(x), r.get(y));
                let mut sprite = [0u8; 0x10];
                for row in 0..n as u16 {
                    sprite[row as usize] = self.memory.read_byte(self.index_address(row));
                }
                let collision = self.display.draw(x0, y0, &sprite[..n as usize]);
                self.registers.set_flag(collision);
            }
            Instruction::Skp(x) => {
                let taken = keys[(r.get(x) & 0xf) as usize];
                self.skip_if(taken);
            }
            Instruction::Sknp(x) => {
                let taken = !keys[(r.get(x) & 0xf) as usize];
                self.skip_if(taken);
            }
            Instruction::LdRegDt(x) => r.set(x, self.timers.delay),
            Instruction::LdKey(x) => match keys.iter().position(|&pressed| pressed) {
                Some(key) => r.set(x, key as u8),
                None => return Ok(Step::Blocked),
            },
            Instruction::LdDtReg(x) => self.timers.delay = r.get(x),
            Instruction::LdStReg(x) => self.timers.sound = r.get(x),
            Instruction::AddI(x) => r.i = r.i.wrapping_add(r.get(x) as u16),
            Instruction::LdSprite(x) => r.i = font_address(r.get(x)),
            Instruction::LdBcd(x) => {
                let value = r.get(x);
                for (offset, digit) in [value / 100, (value / 10) % 10, value % 10].into_iter().enumerate() {
                    let addr = self.index_address(offset as u16);
                    self.memory.write_byte(addr, digit);
                }
            }
            Instruction::StoreRegs(x) => {
                for reg in 0..=x {
                    let addr = self.index_address(reg as u16);
                    self.memory.write_byte(addr, self.registers.get(reg));
                }
                if legacy {
                    self.registers.i = self.registers.i.wrapping_add(x as u16 + 1);
                }
            }
            Instruction::LoadRegs(x) => {
                for reg in 0..=x {
                    let value = self.memory.read_byte(self.index_address(reg as u16));
                    self.registers.set(reg, value);
                }
                if legacy {
                    self.registers.i = self.registers.i.wrapping_add(x as u16 + 1);
                }
            }
        }
        Ok(Step::Advanced)
    }

    pub fn quirks(&self) -> Quirks {
        self.quirks
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn delay_timer(&self) -> u8 {
        self.timers.delay
    }

    pub fn sound_timer(&self) -> u8 {
        self.timers.sound
    }

    pub fn is_tone_on(&self) -> bool {
        self.timers.is_tone_on()
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Checks and clears the redraw flag
    pub fn take_redraw(&mut self) -> bool {
        let dirty = self.display.is_dirty();
        self.display.clear_dirty();
        dirty
    }
}
