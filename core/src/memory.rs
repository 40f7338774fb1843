use std::ops::Range;

use crate::constants::{MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, SPRITE_SHEET_START};
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes of flat, byte addressable memory.
///
/// - `0x000..0x200` is reserved for the interpreter; the sprite sheet lives at
///   its start and is read-only once loaded
/// - `0x200..=0xFFF` holds the program and whatever it decides to store
///
/// Every access is bounds checked; nothing wraps around the end of memory.
#[derive(Copy, Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let sheet = Self::sprite_sheet();
        bytes[sheet].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    fn sprite_sheet() -> Range<usize> {
        let start = SPRITE_SHEET_START as usize;
        start..start + SPRITE_SHEET.len()
    }

    /// Resolves `len` bytes starting at `address` to an index range.
    fn span(address: usize, len: usize) -> Result<Range<usize>> {
        let end = address + len;
        if end > MEMORY_SIZE {
            Err(Error::OutOfBounds {
                address: address.max(MEMORY_SIZE),
            })
        } else {
            Ok(address..end)
        }
    }

    fn writable(range: Range<usize>) -> Result<Range<usize>> {
        let sheet = Self::sprite_sheet();
        if range.start < sheet.end && sheet.start < range.end {
            Err(Error::ProtectedWrite {
                address: range.start.max(sheet.start),
            })
        } else {
            Ok(range)
        }
    }

    pub fn read_byte(&self, address: usize) -> Result<u8> {
        let range = Self::span(address, 1)?;
        Ok(self.bytes[range.start])
    }

    pub fn write_byte(&mut self, address: usize, value: u8) -> Result<()> {
        let range = Self::writable(Self::span(address, 1)?)?;
        self.bytes[range.start] = value;
        Ok(())
    }

    /// Borrow `len` consecutive bytes starting at `address`.
    pub fn read(&self, address: usize, len: usize) -> Result<&[u8]> {
        let range = Self::span(address, len)?;
        Ok(&self.bytes[range])
    }

    /// Copy `data` into memory starting at `address`.
    /// Either every byte is written or none are.
    pub fn write(&mut self, address: usize, data: &[u8]) -> Result<()> {
        let range = Self::writable(Self::span(address, data.len())?)?;
        self.bytes[range].copy_from_slice(data);
        Ok(())
    }

    /// Copy a ROM into the program region, clearing whatever was there before.
    pub fn load_program(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        for byte in self.bytes[start..].iter_mut() {
            *byte = 0;
        }
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loads_sprite_sheet() {
        let memory = Memory::new();
        assert_eq!(memory.read(0x000, 80).unwrap(), &SPRITE_SHEET[..]);
        assert!(memory.as_slice()[80..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_reads_back_writes() {
        let mut memory = Memory::new();
        memory.write_byte(0x300, 0xAB).unwrap();
        assert_eq!(memory.read_byte(0x300), Ok(0xAB));
    }

    #[test]
    fn test_last_address_is_addressable() {
        let mut memory = Memory::new();
        memory.write_byte(0xFFF, 0x1).unwrap();
        assert_eq!(memory.read_byte(0xFFF), Ok(0x1));
    }

    #[test]
    fn test_out_of_bounds_byte() {
        let mut memory = Memory::new();
        assert_eq!(
            memory.read_byte(0x1000),
            Err(Error::OutOfBounds { address: 0x1000 })
        );
        assert_eq!(
            memory.write_byte(0x1234, 0x1),
            Err(Error::OutOfBounds { address: 0x1234 })
        );
    }

    #[test]
    fn test_out_of_bounds_span_reports_first_bad_address() {
        let memory = Memory::new();
        assert_eq!(
            memory.read(0xFFE, 3),
            Err(Error::OutOfBounds { address: 0x1000 })
        );
        assert!(memory.read(0xFFE, 2).is_ok());
    }

    #[test]
    fn test_partial_writes_dont_happen() {
        let mut memory = Memory::new();
        assert!(memory.write(0xFFE, &[0x1, 0x2, 0x3]).is_err());
        assert_eq!(memory.read(0xFFE, 2).unwrap(), &[0x0, 0x0]);
    }

    #[test]
    fn test_sprite_sheet_is_read_only() {
        let mut memory = Memory::new();
        assert_eq!(
            memory.write_byte(0x004, 0x0),
            Err(Error::ProtectedWrite { address: 0x004 })
        );
        assert_eq!(
            memory.write(0x04E, &[0x0; 4]),
            Err(Error::ProtectedWrite { address: 0x04E })
        );
        assert_eq!(memory.read_byte(0x004), Ok(0xF0));
        // The rest of the reserved region is fair game
        assert!(memory.write_byte(0x050, 0x1).is_ok());
    }

    #[test]
    fn test_load_program() {
        let mut memory = Memory::new();
        memory.load_program(&[0x60, 0x05, 0x70, 0x03]).unwrap();
        assert_eq!(memory.read(0x200, 4).unwrap(), &[0x60, 0x05, 0x70, 0x03]);
    }

    #[test]
    fn test_load_program_replaces_previous_program() {
        let mut memory = Memory::new();
        memory.load_program(&[0xFF; 8]).unwrap();
        memory.load_program(&[0x12, 0x00]).unwrap();
        assert_eq!(memory.read(0x200, 4).unwrap(), &[0x12, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_load_program_fills_memory() {
        let mut memory = Memory::new();
        memory.load_program(&[0x1; MAX_ROM_SIZE]).unwrap();
        assert_eq!(memory.read_byte(0xFFF), Ok(0x1));
    }

    #[test]
    fn test_load_program_too_large() {
        let mut memory = Memory::new();
        assert_eq!(
            memory.load_program(&[0x0; MAX_ROM_SIZE + 1]),
            Err(Error::RomTooLarge {
                size: 3585,
                max: 3584
            })
        );
    }
}
