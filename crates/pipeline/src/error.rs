use std::fmt;

#[derive(Debug)]
pub enum PipelineError {
    Video(video::VideoError),
    Infer(inference::InferError),
    Image(image::ImageError),
    Io(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Video(err) => write!(f, "video error: {err}"),
            PipelineError::Infer(err) => write!(f, "inference error: {err}"),
            PipelineError::Image(err) => write!(f, "image error: {err}"),
            PipelineError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<video::VideoError> for PipelineError {
    fn from(err: video::VideoError) -> Self {
        PipelineError::Video(err)
    }
}

impl From<inference::InferError> for PipelineError {
    fn from(err: inference::InferError) -> Self {
        PipelineError::Infer(err)
    }
}

impl From<image::ImageError> for PipelineError {
    fn from(err: image::ImageError) -> Self {
        PipelineError::Image(err)
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Io(err.to_string())
    }
}
