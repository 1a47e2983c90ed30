pub mod attempt_repository;
pub mod question_repository;
pub mod quiz_repository;

pub use attempt_repository::{AttemptRepository, MongoAttemptRepository};
pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};

#[cfg(test)]
pub use attempt_repository::MockAttemptRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use quiz_repository::MockQuizRepository;
