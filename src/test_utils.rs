#[cfg(test)]
pub mod fixtures {
    use crate::auth::{Claims, Role};
    use crate::models::domain::{Question, QuestionType, Quiz, QuizSettings};
    use chrono::Utc;

    pub fn quiz(id: &str, passing_score: i32) -> Quiz {
        Quiz {
            id: id.to_string(),
            title: format!("Quiz {}", id),
            description: None,
            passing_score,
            settings: QuizSettings::default(),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    pub fn multiple_choice_question(
        id: &str,
        quiz_id: &str,
        correct_answer: &str,
        points: i32,
    ) -> Question {
        Question {
            id: id.to_string(),
            quiz_id: quiz_id.to_string(),
            text: format!("Question {}", id),
            question_type: QuestionType::MultipleChoice,
            options: vec![
                "Paris".to_string(),
                "Berlin".to_string(),
                "Madrid".to_string(),
                "Rome".to_string(),
            ],
            correct_answer: correct_answer.to_string(),
            points,
            hint: None,
            explanation: None,
            difficulty: Default::default(),
            created_at: Some(Utc::now()),
        }
    }

    pub fn claims(learner_id: &str, role: Role) -> Claims {
        Claims {
            sub: learner_id.to_string(),
            email: format!("{}@example.com", learner_id),
            role,
            iat: 0,
            exp: 9999999999,
        }
    }

    pub fn learner_claims(learner_id: &str) -> Claims {
        claims(learner_id, Role::Learner)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::auth::Role;

    #[test]
    fn test_fixtures_quiz_defaults() {
        let quiz = quiz("quiz-1", 70);
        assert_eq!(quiz.passing_score, 70);
        assert_eq!(quiz.settings.max_attempts, 3);
    }

    #[test]
    fn test_fixtures_question() {
        let question = multiple_choice_question("q-1", "quiz-1", "Paris", 10);
        assert_eq!(question.quiz_id, "quiz-1");
        assert_eq!(question.points, 10);
        assert!(question.matches("Paris"));
    }

    #[test]
    fn test_fixtures_claims() {
        let claims = learner_claims("learner-1");
        assert_eq!(claims.sub, "learner-1");
        assert_eq!(claims.role, Role::Learner);
    }
}
