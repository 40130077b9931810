pub mod gray;
pub mod io;
pub mod label;
pub mod traits;
pub mod u8;

pub use self::gray::GrayImage;
pub use self::label::LabelImage;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
