use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use log::{error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use cosmac_core::{Chip8, Clock, Mode};
use cosmac_display::Display;

use crate::keymap::keymap;

/// How many times faster than normal the CPU runs while fast forwarding
const FAST_FORWARD: u32 = 4;

/// How long to idle between polls of the event queue
const IDLE: Duration = Duration::from_millis(1);

pub fn run(rom: &Path, speed: u32, scale: u32) -> Result<(), String> {
    let mut chip8: Chip8 = Chip8::new();

    // Load ROM
    let bytes =
        fs::read(rom).map_err(|e| format!("unable to read {}: {}", rom.display(), e))?;
    chip8.load_rom(&bytes).map_err(|e| e.to_string())?;
    info!("running {} at {}Hz", rom.display(), speed);

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init()?;
    let mut display: Display = Display::new(&sdl, scale)?;
    let mut events = sdl.event_pump()?;
    display.render(chip8.frame())?;

    let mut clock = Clock::new(speed);
    let mut last_poll: Instant = Instant::now();
    let mut beeping = false;

    // Whether the CPU should run faster than its clock speed
    let mut fast_forward: bool = false;
    // Whether the game's state should be cycled forwards or backwards
    let mut rewind: bool = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Escape, _) => break 'event,
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Backspace, _) => rewind = true,
                    (Keycode::F5, _) => chip8.reset().map_err(|e| e.to_string())?,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    (Keycode::Backspace, _) => rewind = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        let now = Instant::now();
        let ticks = clock.advance(now - last_poll);
        last_poll = now;
        if rewind {
            for _ in 0..ticks.cycles {
                chip8.rewind();
            }
        } else {
            let cycles = if fast_forward {
                ticks.cycles * FAST_FORWARD
            } else {
                ticks.cycles
            };
            if chip8.mode() != Mode::Halted {
                for _ in 0..cycles {
                    if let Err(e) = chip8.step() {
                        error!("{}; press F5 to reset", e);
                        break;
                    }
                }
            }
            for _ in 0..ticks.timers {
                chip8.tick_timers();
            }
        }

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.take_frame() {
            display.render(&frame)?;
        }
        if chip8.is_sound_active() != beeping {
            beeping = !beeping;
            display.set_beeping(beeping)?;
        }

        thread::sleep(IDLE);
    }

    Ok(())
}
