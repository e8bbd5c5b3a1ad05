use crate::library::clock::interface::Clock;
use chrono::{Local, NaiveDateTime};

pub struct ClockSystem {}

impl ClockSystem {
    pub fn new() -> Self {
        Self {}
    }
}

impl Clock for ClockSystem {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
