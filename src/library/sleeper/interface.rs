use std::time::Duration;

/// Blocking pause used by the simulated actuation sequence.
pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
