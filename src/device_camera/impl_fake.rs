use crate::device_camera::interface::{DeviceCamera, Frame};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    captured: AtomicUsize,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            captured: AtomicUsize::new(0),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn capture_frame(&self) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Capturing frame...")?;

        let color: [u8; 3] = rand::random();
        let image = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(320, 240, Rgb(color)));

        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

        let count = self.captured.fetch_add(1, Ordering::SeqCst) + 1;

        self.logger.info("Frame captured")?;

        Ok(Frame {
            name: format!("camera_{}.png", count),
            bytes,
        })
    }
}
