pub mod image_client;
pub mod traits;

pub use image_client::{interpret_response, ImageClient};
pub use traits::ImageGenerator;
