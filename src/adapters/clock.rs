use crate::domain::ports::Clock;
use chrono::{Local, Timelike};

/// Wall-clock hour in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Always reports the same hour.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.0
    }
}
