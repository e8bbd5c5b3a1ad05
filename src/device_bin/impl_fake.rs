use crate::device_bin::interface::DeviceBin;
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Simulated lid: flips a flag and logs. Timing lives in the session, not here.
pub struct DeviceBinFake {
    open: AtomicBool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceBinFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            open: AtomicBool::new(false),
            logger: logger.with_namespace("bin").with_namespace("fake"),
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

impl DeviceBin for DeviceBinFake {
    fn open(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Opening bin lid...")?;
        self.open.store(true, Ordering::SeqCst);
        self.logger.info("Bin lid opened")?;
        Ok(())
    }

    fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Closing bin lid...")?;
        self.open.store(false, Ordering::SeqCst);
        self.logger.info("Bin lid closed")?;
        Ok(())
    }
}
