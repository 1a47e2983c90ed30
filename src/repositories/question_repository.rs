use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

use crate::{config::Config, db::Database, errors::AppResult, models::domain::Question};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// The full question pool for a quiz, canonical answers included,
    /// ordered by creation time.
    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Question>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, config: &Config) -> Self {
        let collection = db.get_collection(&config.questions_collection);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let quiz_id_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1 })
            .options(IndexOptions::builder().name("quiz_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(quiz_id_index).await?;

        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn find_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Question>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": 1 })
            .build();

        let questions = self
            .collection
            .find(doc! { "quiz_id": quiz_id })
            .with_options(find_options)
            .await?
            .try_collect()
            .await?;

        Ok(questions)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }
}
