use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::error;

use cosmac_core::constants::{DEFAULT_CLOCK_SPEED, MAX_CLOCK_SPEED};

mod keymap;
mod run;

/// Runs a CHIP-8 program in a window.
///
/// Keys: the hex keypad is on 1234/QWER/ASDF/ZXCV. Hold Space to fast forward,
/// hold Backspace to rewind, F5 resets and Escape quits.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// ROM to run
    rom: PathBuf,

    /// Instructions executed per second
    #[arg(
        long,
        default_value_t = DEFAULT_CLOCK_SPEED,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_CLOCK_SPEED))
    )]
    speed: u32,

    /// Size of a display pixel on screen
    #[arg(long, default_value_t = 10)]
    scale: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run::run(&args.rom, args.speed, args.scale) {
        error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_speed() {
        let args = Args::try_parse_from(["cosmac", "pong.ch8"]).unwrap();
        assert_eq!(args.speed, DEFAULT_CLOCK_SPEED);
        assert_eq!(args.scale, 10);
    }

    #[test]
    fn test_speed_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["cosmac", "pong.ch8", "--speed", "0"]).is_err());
        assert!(Args::try_parse_from(["cosmac", "pong.ch8", "--speed", "2000000000"]).is_err());
        let args = Args::try_parse_from(["cosmac", "pong.ch8", "--speed", "1000000"]).unwrap();
        assert_eq!(args.speed, MAX_CLOCK_SPEED);
    }
}
