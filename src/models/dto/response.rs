use serde::Serialize;

use crate::models::domain::{Attempt, Question, Quiz};

/// Success envelope shared by every endpoint: `{ success: true, data }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data,
        }
    }
}

/// A question as delivered to a learner taking a quiz: the canonical
/// answer and explanation are stripped.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub quiz_id: String,
    pub text: String,
    pub question_type: crate::models::domain::QuestionType,
    pub options: Vec<String>,
    pub points: i32,
    pub difficulty: crate::models::domain::Difficulty,
}

impl From<Question> for QuestionView {
    fn from(question: Question) -> Self {
        QuestionView {
            id: question.id,
            quiz_id: question.quiz_id,
            text: question.text,
            question_type: question.question_type,
            options: question.options,
            points: question.points,
            difficulty: question.difficulty,
        }
    }
}

/// Payload of `GET /api/quizzes/{quiz_id}` in session mode.
#[derive(Debug, Serialize)]
pub struct QuizSessionResponse {
    pub quiz: Quiz,
    pub questions: Vec<QuestionView>,
}

/// Payload of `GET /api/quizzes/{quiz_id}` with `include_answers=true`.
#[derive(Debug, Serialize)]
pub struct QuizReviewResponse {
    pub quiz: Quiz,
    pub questions: Vec<Question>,
}

/// Per-question breakdown returned after a submission.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseDetail {
    pub question_id: String,
    pub question_text: String,
    pub answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub points_earned: i32,
    pub max_points: i32,
}

#[derive(Debug, Serialize)]
pub struct AttemptSummary {
    pub score: i32,
    #[serde(rename = "maxScore")]
    pub max_score: i32,
    pub percentage: f64,
    #[serde(rename = "correctAnswers")]
    pub correct_answers: usize,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    pub passed: bool,
    #[serde(rename = "timeSpent")]
    pub time_spent: i64,
    #[serde(rename = "attemptNumber")]
    pub attempt_number: i32,
}

/// Payload of `POST /api/quizzes/{quiz_id}/submit`.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub attempt: Attempt,
    pub responses: Vec<ResponseDetail>,
    pub summary: AttemptSummary,
}

/// Payload of `GET /api/quizzes/{quiz_id}/attempts`.
#[derive(Debug, Serialize)]
pub struct AttemptListResponse {
    pub attempts: Vec<Attempt>,
    pub total_attempts: usize,
}

/// Payload of `GET /api/questions/{question_id}/hint`.
#[derive(Debug, Serialize)]
pub struct HintResponse {
    pub question_id: String,
    pub hint: String,
}
