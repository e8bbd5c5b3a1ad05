use crate::library::sleeper::interface::Sleeper;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Returns immediately and remembers every requested pause.
#[derive(Default)]
pub struct SleeperFake {
    slept: Mutex<Vec<Duration>>,
    fail: AtomicBool,
}

impl SleeperFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn slept(&self) -> Vec<Duration> {
        match self.slept.lock() {
            Ok(slept) => slept.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Sleeper for SleeperFake {
    fn sleep(&self, duration: Duration) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.slept
            .lock()
            .map_err(|e| e.to_string())?
            .push(duration);
        if self.fail.load(Ordering::SeqCst) {
            return Err("sleep interrupted".into());
        }
        Ok(())
    }
}
