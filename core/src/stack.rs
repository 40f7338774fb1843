use crate::constants::STACK_DEPTH;
use crate::error::{Error, Result};

/// # Stack
/// Return addresses of the subroutines currently being executed.
/// Holds at most 16 of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    frames: [u16; STACK_DEPTH],
    sp: usize,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            frames: [0; STACK_DEPTH],
            sp: 0,
        }
    }

    pub fn push(&mut self, address: u16) -> Result<()> {
        if self.sp == STACK_DEPTH {
            return Err(Error::StackOverflow { depth: STACK_DEPTH });
        }
        self.frames[self.sp] = address;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Error::StackUnderflow);
        }
        self.sp -= 1;
        Ok(self.frames[self.sp])
    }

    pub fn depth(&self) -> usize {
        self.sp
    }

    pub fn is_empty(&self) -> bool {
        self.sp == 0
    }

    /// Return addresses from the outermost call inwards.
    pub fn frames(&self) -> &[u16] {
        &self.frames[..self.sp]
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
