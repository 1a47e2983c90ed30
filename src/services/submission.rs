use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::{Attempt, Question, QuestionResponse, Quiz},
    models::dto::request::SubmitQuizRequest,
    models::dto::response::{AttemptSummary, ResponseDetail, SubmissionResponse},
    repositories::{AttemptRepository, QuestionRepository, QuizRepository},
    services::{ledger, scoring},
};

/// How many times a submission re-reads the attempt count after losing the
/// unique-index race before giving up.
const CLAIM_RETRIES: u32 = 3;

/// Top-level entry point for answer submissions: validates the request,
/// loads the quiz and its pool, grades the presented session, and records
/// the attempt with its responses as one atomic document write.
pub struct SubmissionService {
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
    attempts: Arc<dyn AttemptRepository>,
}

impl SubmissionService {
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

    pub async fn submit(
        &self,
        claims: &Claims,
        quiz_id: &str,
        request: SubmitQuizRequest,
    ) -> AppResult<SubmissionResponse> {
        request.validate()?;

        let quiz = self
            .quizzes
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::QuizNotFound(quiz_id.to_string()))?;

        let pool = self.questions.find_by_quiz(quiz_id).await?;
        if pool.is_empty() {
            return Err(AppError::NoQuestions(quiz_id.to_string()));
        }

        let session = session_questions(pool, request.question_ids.as_deref())?;
        let graded = grade_session(&quiz, &session, &request);

        // The count-then-insert sequence races against concurrent
        // submissions from the same learner. The unique index on
        // (learner, quiz, attempt_number) makes the loser fail with
        // AttemptConflict; re-read the count and try again.
        for _ in 0..CLAIM_RETRIES {
            let count = self.attempts.count_for(&claims.sub, &quiz.id).await?;
            let attempt_number =
                ledger::next_attempt_number(count, quiz.settings.max_attempts)?;

            let attempt = graded.build_attempt(claims, &quiz, attempt_number, &request);

            match self.attempts.insert(attempt).await {
                Ok(saved) => {
                    log::info!(
                        "Learner {} completed quiz {} (attempt {}, {:.1}%, passed: {})",
                        claims.sub,
                        quiz.id,
                        saved.attempt_number,
                        saved.percentage,
                        saved.passed
                    );
                    return Ok(build_response(saved, graded.details.clone()));
                }
                Err(AppError::AttemptConflict) => {
                    log::warn!(
                        "Attempt number conflict for learner {} on quiz {}, retrying",
                        claims.sub,
                        quiz.id
                    );
                    continue;
                }
                Err(err) => return Err(err),
            }
        }

        Err(AppError::PersistenceFailure(
            "could not claim a unique attempt number".to_string(),
        ))
    }
}

/// Resolves the presented session set. When the request names the session's
/// question ids they are checked against the quiz's pool (a response must
/// never reference a question of another quiz); otherwise the whole pool
/// was presented.
fn session_questions(
    pool: Vec<Question>,
    presented_ids: Option<&[String]>,
) -> AppResult<Vec<Question>> {
    let Some(ids) = presented_ids else {
        return Ok(pool);
    };

    let mut by_id: HashMap<String, Question> =
        pool.into_iter().map(|q| (q.id.clone(), q)).collect();

    ids.iter()
        .map(|id| {
            by_id.remove(id).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "question '{}' does not belong to this quiz",
                    id
                ))
            })
        })
        .collect()
}

struct GradedSession {
    responses: Vec<QuestionResponse>,
    details: Vec<ResponseDetail>,
    score: i32,
    max_score: i32,
    correct_answers: usize,
    percentage: f64,
    passed: bool,
}

/// Replays the scoring calculator over every presented question. Missing
/// answers count as incorrect with zero points; the percentage is always
/// recomputed here, never trusted from the caller.
fn grade_session(quiz: &Quiz, session: &[Question], request: &SubmitQuizRequest) -> GradedSession {
    let mut responses = Vec::with_capacity(session.len());
    let mut details = Vec::with_capacity(session.len());
    let mut score = 0;
    let mut max_score = 0;
    let mut correct_answers = 0;

    for question in session {
        let answer = request.answers.get(&question.id);
        let is_correct = answer.is_some_and(|a| question.matches(a));

        let time_spent = request
            .question_times
            .as_ref()
            .and_then(|times| times.get(&question.id).copied());

        let timing = match (time_spent, quiz.settings.time_limit_seconds) {
            (Some(response_seconds), Some(limit_seconds)) => Some(scoring::QuestionTiming {
                response_seconds,
                limit_seconds,
            }),
            _ => None,
        };

        let points_earned = scoring::score_answer(question.points, is_correct, timing);

        score += points_earned;
        max_score += question.points;
        if is_correct {
            correct_answers += 1;
        }

        responses.push(QuestionResponse {
            id: Uuid::new_v4().to_string(),
            question_id: question.id.clone(),
            answer: answer.cloned(),
            is_correct,
            points_earned,
            time_spent_seconds: time_spent.unwrap_or(0),
        });

        details.push(ResponseDetail {
            question_id: question.id.clone(),
            question_text: question.text.clone(),
            answer: answer.cloned(),
            correct_answer: question.correct_answer.clone(),
            is_correct,
            points_earned,
            max_points: question.points,
        });
    }

    let percentage = if max_score > 0 {
        100.0 * f64::from(score) / f64::from(max_score)
    } else {
        0.0
    };
    let passed = percentage >= f64::from(quiz.passing_score);

    GradedSession {
        responses,
        details,
        score,
        max_score,
        correct_answers,
        percentage,
        passed,
    }
}

impl GradedSession {
    fn build_attempt(
        &self,
        claims: &Claims,
        quiz: &Quiz,
        attempt_number: i32,
        request: &SubmitQuizRequest,
    ) -> Attempt {
        Attempt {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz.id.clone(),
            learner_id: claims.sub.clone(),
            attempt_number,
            total_questions: self.responses.len(),
            correct_answers: self.correct_answers,
            score: self.score,
            max_score: self.max_score,
            percentage: self.percentage,
            passed: self.passed,
            time_spent_seconds: request.total_time,
            focus_lost_count: request.focus_lost_count,
            tab_switches: request.tab_switches,
            responses: self.responses.clone(),
            completed_at: Utc::now(),
        }
    }
}

fn build_response(attempt: Attempt, details: Vec<ResponseDetail>) -> SubmissionResponse {
    let summary = AttemptSummary {
        score: attempt.score,
        max_score: attempt.max_score,
        percentage: (attempt.percentage * 100.0).round() / 100.0,
        correct_answers: attempt.correct_answers,
        total_questions: attempt.total_questions,
        passed: attempt.passed,
        time_spent: attempt.time_spent_seconds,
        attempt_number: attempt.attempt_number,
    };

    SubmissionResponse {
        attempt,
        responses: details,
        summary,
    }
}
