use crate::{
    error::Result,
    models::{GenerationRequest, GenerationResult},
};
use async_trait::async_trait;

/// Performs one outbound generation call. Implementations never retry.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(
        &self,
        credential: &str,
        request: &GenerationRequest,
    ) -> Result<GenerationResult>;
}
