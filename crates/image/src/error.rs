use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Encode(String),
    Size { expected: usize, got: usize },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Encode(msg) => write!(f, "encode error: {msg}"),
            ImageError::Size { expected, got } => {
                write!(f, "buffer size mismatch: expected {expected} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        ImageError::Encode(err.to_string())
    }
}
