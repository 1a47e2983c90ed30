use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed take of a quiz by one learner. Created exactly once per
/// submission and never mutated afterward. Responses are embedded so the
/// attempt and its per-question records commit as a single document write.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Attempt {
    pub id: String,
    pub quiz_id: String,
    pub learner_id: String,
    /// 1-based, gap-free per (learner, quiz). Enforced by a unique index.
    pub attempt_number: i32,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub score: i32,
    pub max_score: i32,
    pub percentage: f64,
    pub passed: bool,
    pub time_spent_seconds: i64,
    pub focus_lost_count: i64,
    pub tab_switches: i64,
    pub responses: Vec<QuestionResponse>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuestionResponse {
    pub id: String,
    pub question_id: String,
    /// None when the learner left the question unanswered.
    pub answer: Option<String>,
    pub is_correct: bool,
    pub points_earned: i32,
    pub time_spent_seconds: i64,
}
