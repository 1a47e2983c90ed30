use crate::errors::{AppError, AppResult};

/// Decides whether one more attempt is allowed and which sequence number
/// it gets. Numbers are 1-based and gap-free per (learner, quiz); the
/// unique attempt index plus orchestrator retry makes the decision safe
/// against concurrent submissions observing the same count.
pub fn next_attempt_number(existing_count: usize, max_attempts: i32) -> AppResult<i32> {
    if existing_count as i64 >= i64::from(max_attempts) {
        return Err(AppError::AttemptLimitExceeded {
            limit: max_attempts,
        });
    }

    Ok(existing_count as i32 + 1)
}
