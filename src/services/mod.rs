pub mod ledger;
pub mod quiz_service;
pub mod sampler;
pub mod scoring;
pub mod submission;

pub use quiz_service::QuizService;
pub use submission::SubmissionService;
