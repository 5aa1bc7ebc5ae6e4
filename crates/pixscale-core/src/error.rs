use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixscaleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Could not decode image: {0}")]
    DecodeFailure(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unsupported channel count: {0} (expected 1..=4)")]
    UnsupportedChannels(usize),

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid scale: {0}")]
    InvalidScale(String),

    #[error("Output size overflows: {width}x{height} scaled by {factor}")]
    OutputTooLarge { width: u32, height: u32, factor: u64 },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PixscaleError>;
