use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

/// Body of `POST /api/quizzes/{quiz_id}/submit`.
///
/// `answers` maps question id to the learner's answer. `question_ids`, when
/// present, names the session's presented question set so unanswered
/// questions can be scored as incorrect; without it the full pool is scored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub answers: HashMap<String, String>,

    #[serde(default)]
    pub question_ids: Option<Vec<String>>,

    /// Seconds spent per question, keyed by question id. Optional; the
    /// speed bonus only applies when this is supplied.
    #[serde(default)]
    pub question_times: Option<HashMap<String, i64>>,

    #[validate(range(min = 0, message = "total_time must not be negative"))]
    pub total_time: i64,

    #[serde(default)]
    #[validate(range(min = 0, message = "focus_lost_count must not be negative"))]
    pub focus_lost_count: i64,

    #[serde(default)]
    #[validate(range(min = 0, message = "tab_switches must not be negative"))]
    pub tab_switches: i64,
}

/// Query parameters of `GET /api/quizzes/{quiz_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizQueryParams {
    #[serde(default)]
    pub include_answers: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_request_minimal_body_deserializes() {
        let json = r#"{ "answers": { "q-1": "Paris" }, "total_time": 90 }"#;

        let request: SubmitQuizRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.answers.len(), 1);
        assert_eq!(request.total_time, 90);
        assert_eq!(request.focus_lost_count, 0);
        assert_eq!(request.tab_switches, 0);
        assert!(request.question_ids.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn submit_request_rejects_negative_total_time() {
        let json = r#"{ "answers": {}, "total_time": -5 }"#;

        let request: SubmitQuizRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn quiz_query_params_default_to_hiding_answers() {
        let params: QuizQueryParams = serde_json::from_str("{}").unwrap();
        assert!(!params.include_answers);
    }
}
