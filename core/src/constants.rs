use std::time::Duration;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// 4KiB of addressable memory, 0x000..=0xFFF
pub const MEMORY_SIZE: usize = 0x1000;

/// ROMs are loaded here; everything below is reserved for the interpreter
pub const PROGRAM_START: u16 = 0x200;

/// The space between `PROGRAM_START` and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

pub const STACK_DEPTH: usize = 16;
pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// Where the sprite sheet lives in memory
pub const SPRITE_SHEET_START: u16 = 0x000;

/// Every glyph is 8 pixels wide and 5 rows tall
pub const SPRITE_HEIGHT: u16 = 5;

/// # Sprite sheet
/// Built-in glyphs for the hexadecimal digits 0..F, one byte per row.
///
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// Delay and sound timers count down at 60Hz regardless of the CPU speed
pub const TIMER_FREQUENCY: u32 = 60;

/// Instructions executed per second unless the host asks for something else
pub const DEFAULT_CLOCK_SPEED: u32 = 700;

/// Fastest instruction rate a `Clock` will run at
pub const MAX_CLOCK_SPEED: u32 = 1_000_000;

/// Upper bound on how far behind the clock is allowed to fall
pub const MAX_CLOCK_BACKLOG: Duration = Duration::from_millis(250);

/// How many cycles can be rewound
pub const MAX_SAVED_STATES: usize = 1000;
