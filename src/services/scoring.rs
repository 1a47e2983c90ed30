/// Timing of one answered question, used for the speed bonus.
#[derive(Clone, Copy, Debug)]
pub struct QuestionTiming {
    pub response_seconds: i64,
    pub limit_seconds: i64,
}

const MAX_BONUS_RATIO: f64 = 0.3;
const HALF_BONUS_RATIO: f64 = 0.6;
const MAX_BONUS_FRACTION: f64 = 0.30;
const HALF_BONUS_FRACTION: f64 = 0.15;

/// Points earned for one answered question: full base value when correct
/// plus a tiered speed bonus, zero when incorrect. No partial credit.
pub fn score_answer(points: i32, is_correct: bool, timing: Option<QuestionTiming>) -> i32 {
    if !is_correct {
        return 0;
    }

    points + timing.map_or(0, |t| time_bonus(points, t))
}

/// Tiered bonus for answering quickly relative to the per-question limit.
/// Floor at each tier; the thresholds are intentionally asymmetric and
/// must not be "rounded off". Without timing data the bonus is zero.
fn time_bonus(points: i32, timing: QuestionTiming) -> i32 {
    if timing.limit_seconds <= 0 || timing.response_seconds < 0 {
        return 0;
    }

    let ratio = timing.response_seconds as f64 / timing.limit_seconds as f64;

    if ratio <= MAX_BONUS_RATIO {
        (MAX_BONUS_FRACTION * f64::from(points)).floor() as i32
    } else if ratio <= HALF_BONUS_RATIO {
        (HALF_BONUS_FRACTION * f64::from(points)).floor() as i32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(response: i64, limit: i64) -> Option<QuestionTiming> {
        Some(QuestionTiming {
            response_seconds: response,
            limit_seconds: limit,
        })
    }

    #[test]
    fn incorrect_answers_score_zero_regardless_of_timing() {
        assert_eq!(score_answer(10, false, None), 0);
        assert_eq!(score_answer(10, false, timing(1, 100)), 0);
        assert_eq!(score_answer(0, false, None), 0);
    }

    #[test]
    fn fast_correct_answer_earns_max_bonus() {
        // ratio 0.2 -> 10 + floor(0.3 * 10) = 13
        assert_eq!(score_answer(10, true, timing(20, 100)), 13);
    }

    #[test]
    fn medium_speed_earns_half_bonus() {
        // ratio 0.45 -> 10 + floor(0.15 * 10) = 11
        assert_eq!(score_answer(10, true, timing(45, 100)), 11);
    }

    #[test]
    fn slow_correct_answer_earns_base_only() {
        // ratio 0.9 -> no bonus
        assert_eq!(score_answer(10, true, timing(90, 100)), 10);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(score_answer(10, true, timing(30, 100)), 13);
        assert_eq!(score_answer(10, true, timing(60, 100)), 11);
        assert_eq!(score_answer(10, true, timing(61, 100)), 10);
    }

    #[test]
    fn bonus_floors_rather_than_rounds() {
        // floor(0.3 * 9) = 2, not round(2.7) = 3
        assert_eq!(score_answer(9, true, timing(10, 100)), 11);
        // floor(0.15 * 13) = 1
        assert_eq!(score_answer(13, true, timing(50, 100)), 14);
    }

    #[test]
    fn missing_timing_means_base_points_only() {
        assert_eq!(score_answer(10, true, None), 10);
    }

    #[test]
    fn degenerate_limits_grant_no_bonus() {
        assert_eq!(score_answer(10, true, timing(5, 0)), 10);
        assert_eq!(score_answer(10, true, timing(-5, 100)), 10);
    }
}
