pub use chip8::Chip8;
pub use clock::{Clock, Ticks};
pub use error::{Error, Result};
pub use frame::FrameBuffer;
pub use instruction::Instruction;
pub use state::Mode;

mod chip8;
pub mod clock;
pub mod constants;
mod error;
pub mod frame;
mod instruction;
pub mod keypad;
pub mod memory;
mod opcode;
mod operations;
pub mod registers;
pub mod stack;
mod state;
pub mod timers;
