pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod logger;
pub mod models;

pub use client::{ImageClient, ImageGenerator};
pub use config::ImageApiConfig;
pub use controller::{
    download_filename, GenerationController, GenerationView, RenderedImage, UiState,
};
pub use error::{GenerationError, Result};
pub use models::*;
