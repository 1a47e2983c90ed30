use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_MAX_ATTEMPTS: i32 = 3;
pub const DEFAULT_QUESTION_COUNT: usize = 15;

/// Quiz definition. Authored outside the engine; read-only while a
/// learner is taking it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Percentage a learner's score must meet or exceed to pass.
    pub passing_score: i32,
    #[serde(default)]
    pub settings: QuizSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizSettings {
    /// Attempt ceiling per learner.
    pub max_attempts: i32,
    /// Number of questions sampled for one taking session.
    pub question_count: usize,
    /// Per-question time limit used for the speed bonus, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_seconds: Option<i64>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            question_count: DEFAULT_QUESTION_COUNT,
            time_limit_seconds: None,
        }
    }
}

impl Quiz {
    pub fn new(title: &str, passing_score: i32, settings: QuizSettings) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: None,
            passing_score,
            settings,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }
}
