use std::fmt;

use crate::error::{Error, Result};
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// Every operation in the instruction set, with its operands pulled out of the
/// opcode. Register operands are nibbles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Clear,
    /// 00EE
    Return,
    /// 1nnn
    Jump(u16),
    /// 2nnn
    Call(u16),
    /// 3xnn
    SkipEqual(u8, u8),
    /// 4xnn
    SkipNotEqual(u8, u8),
    /// 5xy0
    SkipRegEqual(u8, u8),
    /// 6xnn
    Load(u8, u8),
    /// 7xnn
    Add(u8, u8),
    /// 8xy0
    Move(u8, u8),
    /// 8xy1
    Or(u8, u8),
    /// 8xy2
    And(u8, u8),
    /// 8xy3
    Xor(u8, u8),
    /// 8xy4
    AddReg(u8, u8),
    /// 8xy5
    Sub(u8, u8),
    /// 8xy6
    ShiftRight(u8),
    /// 8xy7
    SubN(u8, u8),
    /// 8xyE
    ShiftLeft(u8),
    /// 9xy0
    SkipRegNotEqual(u8, u8),
    /// Annn
    LoadI(u16),
    /// Bnnn
    JumpOffset(u16),
    /// Cxnn
    Random(u8, u8),
    /// Dxyn
    Draw(u8, u8, u8),
    /// Ex9E
    SkipPressed(u8),
    /// ExA1
    SkipNotPressed(u8),
    /// Fx07
    LoadDelay(u8),
    /// Fx0A
    WaitKey(u8),
    /// Fx15
    SetDelay(u8),
    /// Fx18
    SetSound(u8),
    /// Fx1E
    AddI(u8),
    /// Fx29
    LoadSprite(u8),
    /// Fx33
    Bcd(u8),
    /// Fx55
    Store(u8),
    /// Fx65
    Read(u8),
}

use Instruction::*;

impl Instruction {
    /// Selects the Instruction for a given opcode.
    /// Anything that isn't part of the instruction set is an error.
    pub fn decode(op: u16) -> Result<Self> {
        let (x, y, n, nn, nnn) = (op.x(), op.y(), op.n(), op.nn(), op.nnn());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clear,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x1, ..) => Jump(nnn),
            (0x2, ..) => Call(nnn),
            (0x3, ..) => SkipEqual(x, nn),
            (0x4, ..) => SkipNotEqual(x, nn),
            (0x5, .., 0x0) => SkipRegEqual(x, y),
            (0x6, ..) => Load(x, nn),
            (0x7, ..) => Add(x, nn),
            (0x8, .., 0x0) => Move(x, y),
            (0x8, .., 0x1) => Or(x, y),
            (0x8, .., 0x2) => And(x, y),
            (0x8, .., 0x3) => Xor(x, y),
            (0x8, .., 0x4) => AddReg(x, y),
            (0x8, .., 0x5) => Sub(x, y),
            (0x8, .., 0x6) => ShiftRight(x),
            (0x8, .., 0x7) => SubN(x, y),
            (0x8, .., 0xE) => ShiftLeft(x),
            (0x9, .., 0x0) => SkipRegNotEqual(x, y),
            (0xA, ..) => LoadI(nnn),
            (0xB, ..) => JumpOffset(nnn),
            (0xC, ..) => Random(x, nn),
            (0xD, ..) => Draw(x, y, n),
            (0xE, .., 0x9, 0xE) => SkipPressed(x),
            (0xE, .., 0xA, 0x1) => SkipNotPressed(x),
            (0xF, .., 0x0, 0x7) => LoadDelay(x),
            (0xF, .., 0x0, 0xA) => WaitKey(x),
            (0xF, .., 0x1, 0x5) => SetDelay(x),
            (0xF, .., 0x1, 0x8) => SetSound(x),
            (0xF, .., 0x1, 0xE) => AddI(x),
            (0xF, .., 0x2, 0x9) => LoadSprite(x),
            (0xF, .., 0x3, 0x3) => Bcd(x),
            (0xF, .., 0x5, 0x5) => Store(x),
            (0xF, .., 0x6, 0x5) => Read(x),
            _ => return Err(Error::UnknownOpcode { opcode: op }),
        };
        Ok(instruction)
    }

    /// Applies the instruction to `state`. The program counter must already
    /// point past it.
    pub fn execute(self, state: &mut State, keypad: &mut Keypad) -> Result<()> {
        match self {
            Clear => clr(state),
            Return => rts(state)?,
            Jump(addr) => jump(state, addr),
            Call(addr) => call(state, addr)?,
            SkipEqual(x, nn) => ske(state, x, nn),
            SkipNotEqual(x, nn) => skne(state, x, nn),
            SkipRegEqual(x, y) => skre(state, x, y),
            Load(x, nn) => load(state, x, nn),
            Add(x, nn) => add(state, x, nn),
            Move(x, y) => mv(state, x, y),
            Or(x, y) => or(state, x, y),
            And(x, y) => and(state, x, y),
            Xor(x, y) => xor(state, x, y),
            AddReg(x, y) => addr(state, x, y),
            Sub(x, y) => sub(state, x, y),
            ShiftRight(x) => shr(state, x),
            SubN(x, y) => subn(state, x, y),
            ShiftLeft(x) => shl(state, x),
            SkipRegNotEqual(x, y) => skrne(state, x, y),
            LoadI(addr) => loadi(state, addr),
            JumpOffset(addr) => jumpi(state, addr),
            Random(x, nn) => rand(state, x, nn),
            Draw(x, y, n) => draw(state, x, y, n)?,
            SkipPressed(x) => skpr(state, keypad, x),
            SkipNotPressed(x) => skup(state, keypad, x),
            LoadDelay(x) => moved(state, x),
            WaitKey(x) => keyd(state, keypad, x),
            SetDelay(x) => lddt(state, x),
            SetSound(x) => ldst(state, x),
            AddI(x) => addi(state, x),
            LoadSprite(x) => ldspr(state, x),
            Bcd(x) => bcd(state, x)?,
            Store(x) => stor(state, x)?,
            Read(x) => read(state, x)?,
        }
        Ok(())
    }
}

/// Assembly style mnemonics, as they show up in traces.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Clear => write!(f, "CLS"),
            Return => write!(f, "RET"),
            Jump(addr) => write!(f, "JP {:#05X}", addr),
            Call(addr) => write!(f, "CALL {:#05X}", addr),
            SkipEqual(x, nn) => write!(f, "SE V{:X}, {:#04X}", x, nn),
            SkipNotEqual(x, nn) => write!(f, "SNE V{:X}, {:#04X}", x, nn),
            SkipRegEqual(x, y) => write!(f, "SE V{:X}, V{:X}", x, y),
            Load(x, nn) => write!(f, "LD V{:X}, {:#04X}", x, nn),
            Add(x, nn) => write!(f, "ADD V{:X}, {:#04X}", x, nn),
            Move(x, y) => write!(f, "LD V{:X}, V{:X}", x, y),
            Or(x, y) => write!(f, "OR V{:X}, V{:X}", x, y),
            And(x, y) => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor(x, y) => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddReg(x, y) => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub(x, y) => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight(x) => write!(f, "SHR V{:X}", x),
            SubN(x, y) => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft(x) => write!(f, "SHL V{:X}", x),
            SkipRegNotEqual(x, y) => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadI(addr) => write!(f, "LD I, {:#05X}", addr),
            JumpOffset(addr) => write!(f, "JP V0, {:#05X}", addr),
            Random(x, nn) => write!(f, "RND V{:X}, {:#04X}", x, nn),
            Draw(x, y, n) => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            SkipPressed(x) => write!(f, "SKP V{:X}", x),
            SkipNotPressed(x) => write!(f, "SKNP V{:X}", x),
            LoadDelay(x) => write!(f, "LD V{:X}, DT", x),
            WaitKey(x) => write!(f, "LD V{:X}, K", x),
            SetDelay(x) => write!(f, "LD DT, V{:X}", x),
            SetSound(x) => write!(f, "LD ST, V{:X}", x),
            AddI(x) => write!(f, "ADD I, V{:X}", x),
            LoadSprite(x) => write!(f, "LD F, V{:X}", x),
            Bcd(x) => write!(f, "LD B, V{:X}", x),
            Store(x) => write!(f, "LD [I], V{:X}", x),
            Read(x) => write!(f, "LD V{:X}, [I]", x),
        }
    }
}
