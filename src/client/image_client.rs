use crate::{
    client::ImageGenerator,
    config::ImageApiConfig,
    error::{GenerationError, Result},
    models::{ApiErrorEnvelope, GenerationRequest, GenerationResult, ImagesResponse},
};
use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    endpoint: String,
}

impl ImageClient {
    pub fn new(config: &ImageApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            GenerationError::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
        })
    }

    /// Downloads the generated image so it can be written under its suggested filename.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("Downloading generated image from {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        if !response.status().is_success() {
            return Err(GenerationError::Api {
                status,
                message: status_message(status),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(
        &self,
        credential: &str,
        request: &GenerationRequest,
    ) -> Result<GenerationResult> {
        log::info!(
            "Generating image with model: {} ({})",
            request.model(),
            request.size()
        );
        log::debug!("Image generation endpoint: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(credential)
            .json(&request.body())
            .send()
            .await
            .map_err(|e| {
                log::warn!("Image generation transport error: {}", e);
                GenerationError::from(e)
            })?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) if status.is_success() => {
                log::warn!("Failed to read image generation response: {}", e);
                return Err(e.into());
            }
            // The status code alone still produces a useful error.
            Err(e) => {
                log::warn!("Failed to read error body for status {}: {}", status, e);
                Vec::new()
            }
        };

        log::debug!(
            "Image generation responded with {} ({} bytes)",
            status,
            body.len()
        );

        interpret_response(status.as_u16(), &body)
    }
}

/// Classifies one HTTP exchange into a result or exactly one error kind.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<GenerationResult> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_slice::<ApiErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.error)
            .and_then(|error| error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| status_message(status));

        log::warn!("Image API returned {}: {}", status, message);
        return Err(GenerationError::Api { status, message });
    }

    let parsed: ImagesResponse = serde_json::from_slice(body).map_err(|e| {
        log::warn!("Image API success payload was not valid JSON: {}", e);
        GenerationError::MalformedResponse
    })?;

    match parsed.first_url() {
        Some(url) => Ok(GenerationResult {
            image_url: url.to_string(),
        }),
        None => {
            log::warn!("Image API success payload had no usable image URL");
            Err(GenerationError::MalformedResponse)
        }
    }
}

fn status_message(status: u16) -> String {
    format!("HTTP error! Status: {}", status)
}
