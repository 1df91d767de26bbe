pub mod common;
pub mod image;
pub mod request;
pub mod result;
pub mod validation;

pub use common::*;
pub use image::*;
pub use request::*;
pub use result::*;
pub use validation::*;
