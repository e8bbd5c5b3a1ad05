use crate::library::sleeper::interface::Sleeper;
use std::time::Duration;

pub struct SleeperThread {}

impl SleeperThread {
    pub fn new() -> Self {
        Self {}
    }
}

impl Sleeper for SleeperThread {
    fn sleep(&self, duration: Duration) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        std::thread::sleep(duration);
        Ok(())
    }
}
