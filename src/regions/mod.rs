//! Connected-component labeling and plate-shape region selection.

pub mod labeling;
pub mod selection;

pub use labeling::{label_components, Labeling};
pub use selection::{select_plate_region, RejectedRegion, Selection};
