use crate::error::{Chip8Error, Result};

/// A decoded instruction. Register operands are register indices, not values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00e0
    Cls,
    /// 00ee
    Ret,
    /// 1nnn
    Jp(u16),
    /// 2nnn
    Call(u16),
    /// 3xkk
    SeConst(usize, u8),
    /// 4xkk
    SneConst(usize, u8),
    /// 5xy0
    SeReg(usize, usize),
    /// 6xkk
    LdConst(usize, u8),
    /// 7xkk
    AddConst(usize, u8),
    /// 8xy0
    LdReg(usize, usize),
    /// 8xy1
    Or(usize, usize),
    /// 8xy2
    And(usize, usize),
    /// 8xy3
    Xor(usize, usize),
    /// 8xy4
    AddReg(usize, usize),
    /// 8xy5
    Sub(usize, usize),
    /// 8xy6
    Shr(usize, usize),
    /// 8xy7
    Subn(usize, usize),
    /// 8xye
    Shl(usize, usize),
    /// 9xy0
    SneReg(usize, usize),
    /// annn
    LdI(u16),
    /// bnnn (legacy) / bxnn (modern)
    JpOffset(usize, u16),
    /// cxkk
    Rnd(usize, u8),
    /// dxyn
    Drw(usize, usize, u8),
    /// ex9e
    Skp(usize),
    /// exa1
    Sknp(usize),
    /// fx07
    LdRegDt(usize),
    /// fx0a
    LdKey(usize),
    /// fx15
    LdDtReg(usize),
    /// fx18
    LdStReg(usize),
    /// fx1e
    AddI(usize),
    /// fx29
    LdSprite(usize),
    /// fx33
    LdBcd(usize),
    /// fx55
    StoreRegs(usize),
    /// fx65
    LoadRegs(usize),
}

impl Instruction {
    pub fn decode(ir: u16) -> Result<Self> {
        let op = (ir >> 12) as u8;
        let x = ((ir & 0x0f00) >> 8) as usize;
        let y = ((ir & 0x00f0) >> 4) as usize;
        let n = (ir & 0x000f) as u8;
        let kk = (ir & 0x00ff) as u8;
        let nnn = ir & 0x0fff;

        let instruction = match op {
            0x0 => match nnn {
                0x0e0 => Self::Cls,
                0x0ee => Self::Ret,
                _ => return Err(Chip8Error::UnknownInstruction(ir)),
            },
            0x1 => Self::Jp(nnn),
            0x2 => Self::Call(nnn),
            0x3 => Self::SeConst(x, kk),
            0x4 => Self::SneConst(x, kk),
            0x5 if n == 0x0 => Self::SeReg(x, y),
            0x6 => Self::LdConst(x, kk),
            0x7 => Self::AddConst(x, kk),
            0x8 => match n {
                0x0 => Self::LdReg(x, y),
                0x1 => Self::Or(x, y),
                0x2 => Self::And(x, y),
                0x3 => Self::Xor(x, y),
                0x4 => Self::AddReg(x, y),
                0x5 => Self::Sub(x, y),
                0x6 => Self::Shr(x, y),
                0x7 => Self::Subn(x, y),
                0xe => Self::Shl(x, y),
                _ => return Err(Chip8Error::UnknownInstruction(ir)),
            },
            0x9 if n == 0x0 => Self::SneReg(x, y),
            0xa => Self::LdI(nnn),
            0xb => Self::JpOffset(x, nnn),
            0xc => Self::Rnd(x, kk),
            0xd => Self::Drw(x, y, n),
            0xe => match kk {
                0x9e => Self::Skp(x),
                0xa1 => Self::Sknp(x),
                _ => return Err(Chip8Error::UnknownInstruction(ir)),
            },
            0xf => match kk {
                0x07 => Self::LdRegDt(x),
                0x0a => Self::LdKey(x),
                0x15 => Self::LdDtReg(x),
                0x18 => Self::LdStReg(x),
                0x1e => Self::AddI(x),
                0x29 => Self::LdSprite(x),
                0x33 => Self::LdBcd(x),
                0x55 => Self::StoreRegs(x),
                0x65 => Self::LoadRegs(x),
                _ => return Err(Chip8Error::UnknownInstruction(ir)),
            },
            // 5xyn and 9xyn with n != 0
            _ => return Err(Chip8Error::UnknownInstruction(ir)),
        };
        Ok(instruction)
    }
}
