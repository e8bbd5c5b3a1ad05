use chrono::NaiveDateTime;

pub trait Clock: Send + Sync {
    /// Wall-clock reading in the machine's local time.
    fn now(&self) -> NaiveDateTime;
}
