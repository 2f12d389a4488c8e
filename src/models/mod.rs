pub mod image;
pub mod provider;
pub mod style;

pub use image::*;
pub use provider::*;
pub use style::*;
