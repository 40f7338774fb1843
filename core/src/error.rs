use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can make a cycle fail.
///
/// None of these are retryable; they point at a broken ROM (or a broken
/// interpreter) and the machine halts when one is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown opcode {opcode:#06X}")]
    UnknownOpcode { opcode: u16 },

    #[error("stack overflow: call depth exceeds {depth}")]
    StackOverflow { depth: usize },

    #[error("stack underflow: return with an empty call stack")]
    StackUnderflow,

    #[error("memory access out of bounds at {address:#06X}")]
    OutOfBounds { address: usize },

    #[error("ROM is {size} bytes but at most {max} fit in memory")]
    RomTooLarge { size: usize, max: usize },

    #[error("write to the read-only sprite sheet at {address:#06X}")]
    ProtectedWrite { address: usize },

    #[error("machine is halted and must be reset")]
    Halted,
}
