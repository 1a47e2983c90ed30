pub mod attempt;
pub mod question;
pub mod quiz;
pub use attempt::{Attempt, QuestionResponse};
pub use question::{Difficulty, Question, QuestionType};
pub use quiz::{Quiz, QuizSettings};
