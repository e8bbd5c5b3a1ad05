use crate::library::clock::interface::Clock;
use chrono::NaiveDateTime;

pub struct ClockFake {
    now: NaiveDateTime,
}

impl ClockFake {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for ClockFake {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
