pub mod options;
pub mod pipeline;

pub use options::{GrayscalePolicy, PlateParams, SelectionOptions};
pub use pipeline::PlateDetector;
