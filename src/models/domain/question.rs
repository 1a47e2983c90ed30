use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single question in a quiz's pool. Read-only to the engine; the
/// canonical answer is stripped by DTO before session delivery.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub quiz_id: String,
    pub text: String,
    pub question_type: QuestionType,
    /// Empty for short-answer questions.
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
    pub points: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Question {
    /// Whether a submitted answer matches the canonical one. Choice types
    /// compare exactly; short answers tolerate surrounding whitespace and
    /// letter case.
    pub fn matches(&self, submitted: &str) -> bool {
        match self.question_type {
            QuestionType::MultipleChoice | QuestionType::TrueFalse => {
                submitted == self.correct_answer
            }
            QuestionType::ShortAnswer => {
                submitted.trim().eq_ignore_ascii_case(self.correct_answer.trim())
            }
        }
    }
}
