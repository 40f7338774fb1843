use std::time::Duration;

use crate::constants::{MAX_CLOCK_BACKLOG, MAX_CLOCK_SPEED, TIMER_FREQUENCY};

/// Work that came due during one `Clock::advance`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ticks {
    /// CPU cycles to execute
    pub cycles: u32,
    /// 60Hz timer ticks to apply
    pub timers: u32,
}

/// # Clock
/// Turns wall clock time into CPU cycles and timer ticks.
///
/// The CPU runs at whatever speed the host picks while the timers always run
/// at 60Hz, so the two are tracked as separate backlogs of time that haven't
/// been spent yet. Each backlog is capped at `MAX_CLOCK_BACKLOG` (or a single
/// period, if that is longer); time beyond that is dropped rather than caught
/// up on.
#[derive(Clone, Debug)]
pub struct Clock {
    cycle_period: Duration,
    timer_period: Duration,
    cycle_backlog: Duration,
    timer_backlog: Duration,
}

impl Clock {
    /// Speeds are clamped to 1..=`MAX_CLOCK_SPEED` instructions per second.
    pub fn new(instructions_per_second: u32) -> Self {
        let second = Duration::from_secs(1);
        Clock {
            cycle_period: second / instructions_per_second.max(1).min(MAX_CLOCK_SPEED),
            timer_period: second / TIMER_FREQUENCY,
            cycle_backlog: Duration::from_secs(0),
            timer_backlog: Duration::from_secs(0),
        }
    }

    pub fn cycle_period(&self) -> Duration {
        self.cycle_period
    }

    /// Accounts for `elapsed` time and returns what should run because of it.
    pub fn advance(&mut self, elapsed: Duration) -> Ticks {
        Ticks {
            cycles: Self::drain(&mut self.cycle_backlog, self.cycle_period, elapsed),
            timers: Self::drain(&mut self.timer_backlog, self.timer_period, elapsed),
        }
    }

    fn drain(backlog: &mut Duration, period: Duration, elapsed: Duration) -> u32 {
        *backlog = (*backlog + elapsed).min(MAX_CLOCK_BACKLOG.max(period));
        let mut ticks = 0;
        while *backlog >= period {
            *backlog -= period;
            ticks += 1;
        }
        ticks
    }
}
