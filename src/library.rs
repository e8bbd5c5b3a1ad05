pub mod clock;
pub mod logger;
pub mod sleeper;
