#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    /// One label per line, in the model's output order.
    pub labels_path: String,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub output_is_logits: bool,
}
