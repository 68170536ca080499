mod image;
pub use image::*;
