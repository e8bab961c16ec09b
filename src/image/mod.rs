pub mod io;
pub mod rgba;
pub mod traits;

pub use self::rgba::ImageRgba;
pub use self::traits::{ImageView, Rows};
