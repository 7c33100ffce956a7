use thiserror::Error;

#[derive(Error, Debug)]
pub enum McError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("face '{face}' not found on this die")]
    FaceNotFound { face: String },
}

impl McError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

pub type McResult<T> = Result<T, McError>;
