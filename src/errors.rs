use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    #[error("Quiz not found: {0}")]
    QuizNotFound(String),

    #[error("Question not found: {0}")]
    QuestionNotFound(String),

    #[error("Quiz has no questions: {0}")]
    NoQuestions(String),

    #[error("Attempt limit of {limit} reached for this quiz")]
    AttemptLimitExceeded { limit: i32 },

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Another submission claimed the same attempt number first.
    /// Internal signal for the orchestrator's retry loop; never
    /// surfaced to callers directly.
    #[error("Attempt number conflict")]
    AttemptConflict,

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated(_) => "UNAUTHENTICATED",
            AppError::QuizNotFound(_) => "QUIZ_NOT_FOUND",
            AppError::QuestionNotFound(_) => "QUESTION_NOT_FOUND",
            AppError::NoQuestions(_) => "NO_QUESTIONS",
            AppError::AttemptLimitExceeded { .. } => "ATTEMPT_LIMIT_EXCEEDED",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::AttemptConflict => "PERSISTENCE_FAILURE",
            AppError::PersistenceFailure(_) => "PERSISTENCE_FAILURE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show to the caller. Downstream storage errors are
    /// logged server-side and replaced with a generic message here.
    fn public_message(&self) -> String {
        match self {
            AppError::PersistenceFailure(_) | AppError::AttemptConflict => {
                "The submission could not be saved. Please try again.".to_string()
            }
            AppError::InternalError(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::QuizNotFound(_) | AppError::QuestionNotFound(_) => StatusCode::NOT_FOUND,
            AppError::NoQuestions(_) => StatusCode::NOT_FOUND,
            AppError::AttemptLimitExceeded { .. } => StatusCode::FORBIDDEN,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AttemptConflict | AppError::PersistenceFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("{}: {}", self.error_code(), self);
        }

        HttpResponse::build(self.status_code()).json(ErrorEnvelope {
            success: false,
            error: ErrorBody {
                code: self.error_code().to_string(),
                message: self.public_message(),
            },
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::PersistenceFailure(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
