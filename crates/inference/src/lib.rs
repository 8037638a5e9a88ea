//! Model execution and result interpretation for the camera classifier.

mod classifier;
pub use classifier::*;

mod error;
pub use error::*;

mod labels;
pub use labels::*;

mod model;
pub use model::*;

mod softmax;
pub use softmax::*;
