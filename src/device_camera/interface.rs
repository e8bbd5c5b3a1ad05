/// Encoded still image as produced by a camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub bytes: Vec<u8>,
}

pub trait DeviceCamera: Send + Sync {
    fn capture_frame(&self) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>>;
}
