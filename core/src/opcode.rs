/// # Opcodes
///
/// Instructions are 16 bits, stored most significant byte first. Which
/// operation one names depends on:
/// - `(f, _, _, _)` the instruction family; applies to every opcode
/// - `(_, _, _, n)` the operation within families 5, 8 and 9
/// - `(_, _, n, n)` the operation within families 0, E and F
///
/// The remaining nibbles carry operands:
/// - `(_, x, _, _)` the register Vx, or the range V0..=Vx
/// - `(_, _, y, _)` the register Vy
/// - `(_, _, n, n)` an immediate byte
/// - `(_, n, n, n)` a 12-bit address
pub trait Opcode {
    /// All four nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// `[f___]`
    fn family(&self) -> u8;

    /// `[_x__]`
    fn x(&self) -> u8;

    /// `[__y_]`
    fn y(&self) -> u8;

    /// `[___n]`
    fn n(&self) -> u8;

    /// `[__nn]`
    fn nn(&self) -> u8;

    /// `[_nnn]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.family(), self.x(), self.y(), self.n())
    }

    fn family(&self) -> u8 {
        ((self & 0xF000) >> 12) as u8
    }

    fn x(&self) -> u8 {
        ((self & 0x0F00) >> 8) as u8
    }

    fn y(&self) -> u8 {
        ((self & 0x00F0) >> 4) as u8
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn nn(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}

/// Joins the two bytes of an instruction as they sit in memory.
pub fn from_bytes(high: u8, low: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_nibbles() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_family() {
        assert_eq!(0xD123u16.family(), 0xD);
        assert_eq!(0x0123u16.family(), 0x0);
    }

    #[test]
    fn test_operands() {
        let op: u16 = 0xABCD;
        assert_eq!(op.x(), 0xB);
        assert_eq!(op.y(), 0xC);
        assert_eq!(op.n(), 0xD);
        assert_eq!(op.nn(), 0xCD);
        assert_eq!(op.nnn(), 0xBCD);
    }

    #[test]
    fn test_from_bytes_is_big_endian() {
        assert_eq!(from_bytes(0xAA, 0xBB), 0xAABB);
        assert_eq!(from_bytes(0x00, 0xE0), 0x00E0);
    }
}
