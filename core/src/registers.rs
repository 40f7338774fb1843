use crate::constants::{PROGRAM_START, REGISTER_COUNT};

/// # Registers
/// - (v) 16 8-bit registers V0..VF
///     - V0..VE are general purpose
///     - VF doubles as the carry, borrow and collision flag
/// - (i) a 16-bit address register
/// - (pc) a 16-bit program counter
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Registers {
    v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
        }
    }

    /// Vx; register indices are nibbles so only the low 4 bits are used.
    pub fn read(&self, x: u8) -> u8 {
        self.v[usize::from(x & 0xF)]
    }

    pub fn write(&mut self, x: u8, value: u8) {
        self.v[usize::from(x & 0xF)] = value;
    }

    /// VF
    pub fn flag(&self) -> u8 {
        self.v[0xF]
    }

    pub fn set_flag(&mut self, set: bool) {
        self.v[0xF] = u8::from(set);
    }

    /// V0..=Vx
    pub fn range(&self, x: u8) -> &[u8] {
        &self.v[..=usize::from(x & 0xF)]
    }

    pub fn range_mut(&mut self, x: u8) -> &mut [u8] {
        &mut self.v[..=usize::from(x & 0xF)]
    }

    /// Moves the program counter past one instruction.
    pub fn skip(&mut self) {
        self.pc = self.pc.wrapping_add(2);
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
    fn test_new_registers() {
        let registers = Registers::new();
        assert_eq!(registers.range(0xF), &[0; 16]);
        assert_eq!(registers.i, 0x0);
        assert_eq!(registers.pc, 0x200);
    }

    #[test]
    fn test_write_then_read() {
        let mut registers = Registers::new();
        for x in 0..16 {
            registers.write(x, x * 3);
        }
        for x in 0..16 {
            assert_eq!(registers.read(x), x * 3);
        }
    }

    #[test]
    fn test_flag_is_vf() {
        let mut registers = Registers::new();
        registers.set_flag(true);
        assert_eq!(registers.read(0xF), 0x1);
        registers.set_flag(false);
        assert_eq!(registers.flag(), 0x0);
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut registers = Registers::new();
        registers.range_mut(0x2).copy_from_slice(&[0x1, 0x2, 0x3]);
        assert_eq!(registers.range(0x2), &[0x1, 0x2, 0x3]);
        assert_eq!(registers.read(0x3), 0x0);
    }
}
