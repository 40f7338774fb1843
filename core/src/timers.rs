/// # Timers
/// Two 8-bit counters that count down towards 0 at 60Hz.
/// The sound timer beeps for as long as it's non-zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// One 60Hz tick. Counters stop at 0.
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn is_sound_active(&self) -> bool {
        self.sound > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_counts_down_to_zero() {
        let mut timers = Timers::new();
        timers.delay = 3;
        for expected in [2, 1, 0, 0].iter() {
            timers.tick();
            assert_eq!(timers.delay, *expected);
        }
    }

    #[test]
    fn test_timers_tick_independently() {
        let mut timers = Timers { delay: 1, sound: 3 };
        timers.tick();
        assert_eq!(timers, Timers { delay: 0, sound: 2 });
    }

    #[test]
    fn test_sound_is_active_while_nonzero() {
        let mut timers = Timers { delay: 0, sound: 2 };
        assert!(timers.is_sound_active());
        timers.tick();
        assert!(timers.is_sound_active());
        timers.tick();
        assert!(!timers.is_sound_active());
    }
}
