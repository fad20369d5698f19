use crate::models::{ImageModel, ImageSize};

/// What the result surface renders: the image itself and its download link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub url: String,
    pub download_filename: String,
}

/// Presentation collaborators the controller drives. Implementations own the
/// actual widgets (or terminal output); the controller never reaches past this.
pub trait GenerationView {
    fn prompt(&self) -> String;
    fn model(&self) -> ImageModel;
    fn size(&self) -> ImageSize;

    /// Disables the trigger and switches its label while `true`.
    fn set_loading(&mut self, loading: bool);
    fn set_error(&mut self, message: Option<&str>);
    fn set_result(&mut self, image: Option<&RenderedImage>);
}
