/// Lid actuator of the waste bin.
pub trait DeviceBin: Send + Sync {
    fn open(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
