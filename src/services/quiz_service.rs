use std::sync::Arc;

use crate::{
    auth::{require_author, Claims},
    errors::{AppError, AppResult},
    models::dto::response::{
        AttemptListResponse, HintResponse, QuizReviewResponse, QuizSessionResponse,
    },
    repositories::{AttemptRepository, QuestionRepository, QuizRepository},
    services::sampler,
};

const NO_HINT_AVAILABLE: &str = "No hint available";

/// Read path of the engine: quiz fetch with session sampling and answer
/// stripping, attempt history, and hints.
pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
    attempts: Arc<dyn AttemptRepository>,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
        attempts: Arc<dyn AttemptRepository>,
    ) -> Self {
        Self {
            quizzes,
            questions,
            attempts,
        }
    }

    /// A quiz ready to take: a freshly sampled session question set with
    /// canonical answers and explanations stripped.
    pub async fn get_quiz_session(&self, quiz_id: &str) -> AppResult<QuizSessionResponse> {
        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::QuizNotFound(quiz_id.to_string()))?;

        let pool = self.questions.find_by_quiz(quiz_id).await?;
        let session =
            sampler::sample_session(pool, quiz.settings.question_count, &mut rand::thread_rng())?;

        Ok(QuizSessionResponse {
            questions: session.into_iter().map(Into::into).collect(),
            quiz,
        })
    }

    /// The full pool with answer keys, for content authors reviewing a quiz.
    pub async fn get_quiz_review(
        &self,
        claims: &Claims,
        quiz_id: &str,
    ) -> AppResult<QuizReviewResponse> {
        require_author(claims)?;

        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::QuizNotFound(quiz_id.to_string()))?;

        let questions = self.questions.find_by_quiz(quiz_id).await?;
        if questions.is_empty() {
            return Err(AppError::NoQuestions(quiz_id.to_string()));
        }

        Ok(QuizReviewResponse { quiz, questions })
    }

    /// The caller's own attempts on a quiz, oldest first.
    pub async fn list_attempts(
        &self,
        claims: &Claims,
        quiz_id: &str,
    ) -> AppResult<AttemptListResponse> {
        let attempts = self.attempts.find_for_learner(&claims.sub, quiz_id).await?;

        Ok(AttemptListResponse {
            total_attempts: attempts.len(),
            attempts,
        })
    }

    /// Hint for a question, falling back to its explanation text.
    pub async fn get_hint(&self, question_id: &str) -> AppResult<HintResponse> {
        let question = self
            .questions
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::QuestionNotFound(question_id.to_string()))?;

        let hint = question
            .hint
            .or(question.explanation)
            .unwrap_or_else(|| NO_HINT_AVAILABLE.to_string());

        Ok(HintResponse {
            question_id: question.id,
            hint,
        })
    }
}
