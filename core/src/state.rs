use crate::frame::FrameBuffer;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::stack::Stack;
use crate::timers::Timers;

/// What the interpreter does on its next cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Fetching and executing instructions
    Running,
    /// Parked on `Fx0A` until a key goes down; the key is written to `register`
    AwaitingKey { register: u8 },
    /// A cycle failed; nothing runs until the machine is reset
    Halted,
}

/// A snapshot of everything a program can observe or change.
///
/// Key state is deliberately absent: it belongs to the host and isn't part of
/// what gets rewound.
#[derive(Copy, Clone)]
pub struct State {
    pub registers: Registers,
    pub stack: Stack,
    pub memory: Memory,
    pub timers: Timers,
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub mode: Mode,
}

impl State {
    pub fn new() -> Self {
        State {
            registers: Registers::new(),
            stack: Stack::new(),
            memory: Memory::new(),
            timers: Timers::new(),
            frame_buffer: FrameBuffer::new(),
            draw_flag: false,
            mode: Mode::Running,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
