pub mod filename;
pub mod state;
pub mod view;

pub use filename::download_filename;
pub use state::UiState;
pub use view::{GenerationView, RenderedImage};

use crate::{
    client::ImageGenerator,
    error::{GenerationError, Result},
    logger,
    models::{GenerationRequest, GenerationResult},
};
use uuid::Uuid;

/// Drives one form: reads its fields, makes the call, and renders the outcome.
///
/// `submit` takes `&mut self`, so a controller can only ever have one cycle in
/// flight. The view's trigger is disabled for the same span.
pub struct GenerationController<G, V> {
    generator: G,
    view: V,
    credential: Option<String>,
    state: UiState,
}

impl<G: ImageGenerator, V: GenerationView> GenerationController<G, V> {
    pub fn new(generator: G, view: V, credential: Option<String>) -> Self {
        let credential = credential.filter(|key| !key.trim().is_empty());
        Self {
            generator,
            view,
            credential,
            state: UiState::Idle,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_parts(self) -> (G, V) {
        (self.generator, self.view)
    }

    /// Runs one submission cycle and returns the state it settled in.
    ///
    /// A submission rejected before dispatch (empty prompt, missing key) still
    /// moves to `Failed`, so the view is told to hide any previous result.
    pub async fn submit(&mut self) -> &UiState {
        let prompt = self.view.prompt();
        let (request, credential) = match self.prepare(&prompt) {
            Ok(prepared) => prepared,
            Err(err) => {
                log::debug!("Submission rejected before dispatch: {}", err);
                self.view.set_error(Some(&err.user_message()));
                self.view.set_result(None);
                self.state = UiState::Failed(err);
                return &self.state;
            }
        };

        let cycle_id = Uuid::new_v4();
        log::info!(
            "🎨 Generating image [req:{}] model={} size={}",
            cycle_id,
            request.model(),
            request.size()
        );

        self.enter_loading();
        let outcome = {
            let _timer = logger::timer(&format!("Image generation [req:{}]", cycle_id));
            self.generator.generate(&credential, &request).await
        };
        // Every path out of Loading goes through here.
        self.finish(outcome, request.prompt());

        &self.state
    }

    fn prepare(&self, prompt: &str) -> Result<(GenerationRequest, String)> {
        let request = GenerationRequest::new(prompt, self.view.model(), self.view.size())?;
        let credential = self
            .credential
            .clone()
            .ok_or_else(GenerationError::missing_credential)?;
        Ok((request, credential))
    }

    fn enter_loading(&mut self) {
        self.state = UiState::Loading;
        self.view.set_loading(true);
        self.view.set_error(None);
        self.view.set_result(None);
    }

    fn finish(&mut self, outcome: Result<GenerationResult>, prompt: &str) {
        match outcome {
            Ok(result) => {
                log::info!("✅ Image generated: {}", result.image_url);
                let rendered = RenderedImage {
                    url: result.image_url.clone(),
                    download_filename: download_filename(prompt),
                };
                self.view.set_result(Some(&rendered));
                self.state = UiState::Succeeded(result);
            }
            Err(err) => {
                log::warn!("Error generating image: {}", err);
                self.view.set_error(Some(&err.user_message()));
                self.view.set_result(None);
                self.state = UiState::Failed(err);
            }
        }
        self.view.set_loading(false);
    }
}
