use thiserror::Error;

#[derive(Error, Debug)]
pub enum BannerError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode banner: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Replace mode requires an overlay icon")]
    MissingOverlay,

    #[error("Failed to back up banner: {0}")]
    BackupError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BannerError>;
