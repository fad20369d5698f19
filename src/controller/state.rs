use crate::{error::GenerationError, models::GenerationResult};

/// What the form is showing. Exactly one of these holds at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Succeeded(GenerationResult),
    Failed(GenerationError),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            UiState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&GenerationError> {
        match self {
            UiState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error().map(GenerationError::user_message)
    }
}
