use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoAttemptRepository, MongoQuestionRepository, MongoQuizRepository},
    services::{QuizService, SubmissionService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub submission_service: Arc<SubmissionService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db, &config));
        quiz_repository.ensure_indexes().await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(&db, &config));
        question_repository.ensure_indexes().await?;

        let attempt_repository = Arc::new(MongoAttemptRepository::new(&db, &config));
        attempt_repository.ensure_indexes().await?;

        let quiz_service = Arc::new(QuizService::new(
            quiz_repository.clone(),
            question_repository.clone(),
            attempt_repository.clone(),
        ));
        let submission_service = Arc::new(SubmissionService::new(
            quiz_repository,
            question_repository,
            attempt_repository,
        ));

        Ok(Self {
            quiz_service,
            submission_service,
            db,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
