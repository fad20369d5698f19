use crate::error::{GenerationError, Result};
use crate::models::{ImageModel, ImageSize};
use serde::{Deserialize, Serialize};

pub const IMAGE_COUNT: u8 = 1;
pub const RESPONSE_FORMAT: &str = "url";

/// One submission. The prompt is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    model: ImageModel,
    size: ImageSize,
}

impl GenerationRequest {
    pub fn new(prompt: &str, model: ImageModel, size: ImageSize) -> Result<Self> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerationError::empty_prompt());
        }

        Ok(Self {
            prompt: prompt.to_string(),
            model,
            size,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn model(&self) -> ImageModel {
        self.model
    }

    pub fn size(&self) -> ImageSize {
        self.size
    }

    pub fn body(&self) -> ImagesRequestBody<'_> {
        ImagesRequestBody {
            model: self.model.as_str(),
            prompt: &self.prompt,
            n: IMAGE_COUNT,
            size: self.size.as_str(),
            response_format: RESPONSE_FORMAT,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImagesRequestBody<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub n: u8,
    pub size: &'a str,
    pub response_format: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub image_url: String,
}

// Fields the endpoint may omit are optional so a partial payload still parses.
#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    pub data: Option<Vec<ImageEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct ImageEntry {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

impl ImagesResponse {
    pub fn first_url(&self) -> Option<&str> {
        self.data
            .as_deref()?
            .first()?
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prompt_is_trimmed_and_required() {
        let request =
            GenerationRequest::new("  a red fox  ", ImageModel::DallE3, ImageSize::Square512)
                .unwrap();
        assert_eq!(request.prompt(), "a red fox");

        assert_eq!(
            GenerationRequest::new(" \t\n", ImageModel::DallE3, ImageSize::Square512),
            Err(GenerationError::empty_prompt())
        );
    }

    #[test]
    fn body_fixes_count_and_format() {
        let request =
            GenerationRequest::new("lighthouse", ImageModel::Flux, ImageSize::Landscape1792)
                .unwrap();
        let body = serde_json::to_value(request.body()).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "flux",
                "prompt": "lighthouse",
                "n": 1,
                "size": "1792x1024",
                "response_format": "url"
            })
        );
    }

    #[test]
    fn first_url_requires_a_usable_entry() {
        let parse = |v: serde_json::Value| serde_json::from_value::<ImagesResponse>(v).unwrap();

        assert_eq!(
            parse(json!({"data": [{"url": "https://x/y.png"}, {"url": "https://x/z.png"}]}))
                .first_url(),
            Some("https://x/y.png")
        );
        assert_eq!(parse(json!({"data": []})).first_url(), None);
        assert_eq!(parse(json!({})).first_url(), None);
        assert_eq!(parse(json!({"data": [{"b64_json": "AAAA"}]})).first_url(), None);
        assert_eq!(parse(json!({"data": [{"url": ""}]})).first_url(), None);
    }
}
