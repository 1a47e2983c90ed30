use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Attempt,
};

const DUPLICATE_KEY_CODE: i32 = 11000;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Inserts a finished attempt with its embedded responses as one
    /// document. Returns `AppError::AttemptConflict` when another
    /// submission already claimed the same (learner, quiz, attempt_number).
    async fn insert(&self, attempt: Attempt) -> AppResult<Attempt>;
    async fn count_for(&self, learner_id: &str, quiz_id: &str) -> AppResult<usize>;
    async fn find_for_learner(&self, learner_id: &str, quiz_id: &str)
        -> AppResult<Vec<Attempt>>;
}

pub struct MongoAttemptRepository {
    collection: Collection<Attempt>,
}

impl MongoAttemptRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.attempts_collection);
        Self { collection }
    }

    /// The compound unique index is what makes attempt numbering safe
    /// under concurrent submissions: the losing writer gets a duplicate
    /// key error instead of a silently duplicated attempt number.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for attempts collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let attempt_number_index = IndexModel::builder()
            .keys(doc! { "learner_id": 1, "quiz_id": 1, "attempt_number": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("learner_quiz_attempt_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(attempt_number_index).await?;

        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

#[async_trait]
impl AttemptRepository for MongoAttemptRepository {
    async fn insert(&self, attempt: Attempt) -> AppResult<Attempt> {
        match self.collection.insert_one(&attempt).await {
            Ok(_) => Ok(attempt),
            Err(err) if is_duplicate_key(&err) => Err(AppError::AttemptConflict),
            Err(err) => Err(err.into()),
        }
    }

    async fn count_for(&self, learner_id: &str, quiz_id: &str) -> AppResult<usize> {
        let count = self
            .collection
            .count_documents(doc! {
                "learner_id": learner_id,
                "quiz_id": quiz_id
            })
            .await?;
        Ok(count as usize)
    }

    async fn find_for_learner(
        &self,
        learner_id: &str,
        quiz_id: &str,
    ) -> AppResult<Vec<Attempt>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "attempt_number": 1 })
            .build();

        let attempts = self
            .collection
            .find(doc! {
                "learner_id": learner_id,
                "quiz_id": quiz_id
            })
            .with_options(find_options)
            .await?
            .try_collect()
            .await?;

        Ok(attempts)
    }
}
