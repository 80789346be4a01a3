use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("canvas {width}x{height} does not fit in memory")]
    CanvasTooLarge { width: u32, height: u32 },

    #[error("failed to allocate {bytes} bytes for the canvas")]
    Allocation { bytes: usize },

    #[error("failed to encode png: {0}")]
    Encoding(#[from] image::ImageError),
}
