use thiserror::Error;

pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter an image prompt.";
pub const MISSING_KEY_MESSAGE: &str =
    "API Key is missing or not configured. Please set SREE_API_KEY in your .env file.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    Transport(String),
    #[error("API Error: {message}")]
    Api { status: u16, message: String },
    #[error("API response did not contain a valid image URL.")]
    MalformedResponse,
}

impl GenerationError {
    pub fn empty_prompt() -> Self {
        GenerationError::Validation(EMPTY_PROMPT_MESSAGE.to_string())
    }

    pub fn missing_credential() -> Self {
        GenerationError::Configuration(MISSING_KEY_MESSAGE.to_string())
    }

    /// Whether the error was raised before any request left the process.
    pub fn is_pre_dispatch(&self) -> bool {
        matches!(
            self,
            GenerationError::Validation(_) | GenerationError::Configuration(_)
        )
    }

    /// The single line shown in the error surface.
    pub fn user_message(&self) -> String {
        if self.is_pre_dispatch() {
            self.to_string()
        } else {
            format!("Failed to generate image. {}", self)
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerationError::Transport(format!("Request timed out: {}", err))
        } else {
            GenerationError::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
