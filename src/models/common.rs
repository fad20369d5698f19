use serde::{Deserialize, Serialize};
use std::fmt;

/// Models offered by the form. Whatever the endpoint accepts beyond these is not reachable.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum ImageModel {
    #[default]
    #[serde(rename = "dall-e-3")]
    #[value(name = "dall-e-3")]
    DallE3,
    #[serde(rename = "dall-e-2")]
    #[value(name = "dall-e-2")]
    DallE2,
    #[serde(rename = "flux")]
    #[value(name = "flux")]
    Flux,
    #[serde(rename = "stable-diffusion-xl")]
    #[value(name = "stable-diffusion-xl")]
    StableDiffusionXl,
}

impl ImageModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageModel::DallE3 => "dall-e-3",
            ImageModel::DallE2 => "dall-e-2",
            ImageModel::Flux => "flux",
            ImageModel::StableDiffusionXl => "stable-diffusion-xl",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ImageModel::DallE3 => "DALL·E 3",
            ImageModel::DallE2 => "DALL·E 2",
            ImageModel::Flux => "Flux",
            ImageModel::StableDiffusionXl => "Stable Diffusion XL",
        }
    }

    pub fn all() -> &'static [ImageModel] {
        &[
            ImageModel::DallE3,
            ImageModel::DallE2,
            ImageModel::Flux,
            ImageModel::StableDiffusionXl,
        ]
    }
}

impl fmt::Display for ImageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum ImageSize {
    #[serde(rename = "256x256")]
    #[value(name = "256x256")]
    Square256,
    #[serde(rename = "512x512")]
    #[value(name = "512x512")]
    Square512,
    #[default]
    #[serde(rename = "1024x1024")]
    #[value(name = "1024x1024")]
    Square1024,
    #[serde(rename = "1792x1024")]
    #[value(name = "1792x1024")]
    Landscape1792,
    #[serde(rename = "1024x1792")]
    #[value(name = "1024x1792")]
    Portrait1792,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Square256 => "256x256",
            ImageSize::Square512 => "512x512",
            ImageSize::Square1024 => "1024x1024",
            ImageSize::Landscape1792 => "1792x1024",
            ImageSize::Portrait1792 => "1024x1792",
        }
    }

    pub fn all() -> &'static [ImageSize] {
        &[
            ImageSize::Square256,
            ImageSize::Square512,
            ImageSize::Square1024,
            ImageSize::Landscape1792,
            ImageSize::Portrait1792,
        ]
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
