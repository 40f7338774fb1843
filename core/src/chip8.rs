use std::collections::VecDeque;

use log::{debug, info, trace, warn};

use crate::constants::{MAX_ROM_SIZE, MAX_SAVED_STATES};
use crate::error::{Error, Result};
use crate::frame::FrameBuffer;
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::opcode;
use crate::registers::Registers;
use crate::stack::Stack;
use crate::state::{Mode, State};
use crate::timers::Timers;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - `previous_states` for rewinding
///  - the `keypad`, written by the host and read by programs
///  - the loaded `rom` so the machine can be reset
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - stepping and rewinding the CPU
/// - ticking its timers
/// - inspecting its frame buffer for rendering by some display
///
/// Nothing here blocks or keeps time. The host calls `step` at the instruction
/// rate it wants and `tick_timers` at 60Hz; `clock::Clock` keeps the two apart.
pub struct Chip8 {
    state: State,
    previous_states: VecDeque<State>,
    keypad: Keypad,
    rom: Vec<u8>,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            previous_states: VecDeque::with_capacity(MAX_SAVED_STATES),
            keypad: Keypad::new(),
            rom: Vec::new(),
        }
    }

    /// Load a rom into memory at 0x200 and reset the machine to run it.
    /// A rom that doesn't fit leaves the machine untouched.
    ///
    /// # Arguments
    /// * `rom` the raw program, at most 3584 bytes
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(Error::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        self.rom = rom.to_vec();
        self.reset()?;
        info!("loaded {} byte ROM", rom.len());
        Ok(())
    }

    /// Puts the machine back the way it was right after the rom was loaded.
    /// This is the only way out of `Mode::Halted`.
    pub fn reset(&mut self) -> Result<()> {
        self.state = State::new();
        self.previous_states.clear();
        self.keypad = Keypad::new();
        self.state.memory.load_program(&self.rom)?;
        debug!("reset");
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn registers(&self) -> &Registers {
        &self.state.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    pub fn stack(&self) -> &Stack {
        &self.state.stack
    }

    pub fn timers(&self) -> &Timers {
        &self.state.timers
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The display as it currently is, whether or not it changed.
    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Whether the display changed since the last `take_frame`.
    pub fn needs_redraw(&self) -> bool {
        self.state.draw_flag
    }

    /// Returns the FrameBuffer if the display should be redrawn, and marks it
    /// as drawn.
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn is_sound_active(&self) -> bool {
        self.state.timers.is_sound_active()
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the key that was pressed, 0x0..=0xF
    pub fn key_press(&mut self, key: u8) {
        self.keypad.set_key_down(key);
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the key that was released, 0x0..=0xF
    pub fn key_release(&mut self, key: u8) {
        self.keypad.set_key_up(key);
    }

    /// Advances the CPU by a single cycle
    /// - fails straight away if the machine is halted
    /// - while awaiting a key, does nothing until one is pressed and then
    ///   stores it; the next cycle carries on with the following instruction
    /// - otherwise fetches, decodes and executes the next opcode
    ///
    /// A failed cycle halts the machine.
    pub fn step(&mut self) -> Result<()> {
        match self.state.mode {
            Mode::Halted => Err(Error::Halted),
            Mode::AwaitingKey { register } => {
                if let Some(key) = self.keypad.take_press() {
                    self.save_state();
                    self.state.registers.write(register, key);
                    self.state.mode = Mode::Running;
                    debug!("V{:X} = key {:X}", register, key);
                }
                Ok(())
            }
            Mode::Running => {
                self.save_state();
                self.cycle().map_err(|e| {
                    warn!("halting at pc {:04X}: {}", self.state.registers.pc, e);
                    self.state.mode = Mode::Halted;
                    e
                })
            }
        }
    }

    fn cycle(&mut self) -> Result<()> {
        let op = self.get_op()?;
        self.state.registers.pc += 0x2;
        let instruction = Instruction::decode(op)?;
        trace!(
            "{:04X} {:<16} v{:02X?} i{:04X} pc{:04X}",
            op,
            instruction.to_string(),
            self.state.registers.range(0xF),
            self.state.registers.i,
            self.state.registers.pc
        );
        instruction.execute(&mut self.state, &mut self.keypad)?;
        if let Mode::AwaitingKey { register } = self.state.mode {
            debug!("awaiting key for V{:X}", register);
        }
        Ok(())
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> Result<u16> {
        let bytes = self
            .state
            .memory
            .read(usize::from(self.state.registers.pc), 2)?;
        Ok(opcode::from_bytes(bytes[0], bytes[1]))
    }

    /// One 60Hz tick of the delay and sound timers.
    /// A halted machine is frozen, timers included.
    pub fn tick_timers(&mut self) {
        if self.state.mode != Mode::Halted {
            self.state.timers.tick();
        }
    }

    /// Reverses the CPU by a single cycle if possible
    /// - if there are previous_states, pops the last one and restores it
    /// - a halted machine can't be rewound, only reset
    ///
    /// Returns whether anything was rewound.
    pub fn rewind(&mut self) -> bool {
        if self.state.mode == Mode::Halted {
            return false;
        }
        match self.previous_states.pop_front() {
            Some(state) => {
                self.state = state;
                // Whatever is on screen now may differ from what was drawn last
                self.state.draw_flag = true;
                debug!("rewound to pc {:04X}", self.state.registers.pc);
                true
            }
            None => false,
        }
    }

    /// Puts the current state in previous_states
    /// - if there are already MAX_SAVED_STATES saved then the oldest is dropped
    fn save_state(&mut self) {
        if self.previous_states.len() == MAX_SAVED_STATES {
            self.previous_states.pop_back();
        }
        self.previous_states.push_front(self.state);
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
