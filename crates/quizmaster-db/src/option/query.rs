use quizmaster_entity::option::{self, Entity as Option_, Model as OptionModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use std::error::Error;

use crate::error::DbError;

pub struct Query;

impl Query {
    pub async fn list_options_by_question<C: ConnectionTrait>(
        conn: &C,
        question_id: i32,
    ) -> Result<Vec<OptionModel>, DbError> {
        Option_::find()
            .filter(option::Column::QuestionId.eq(question_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load options by question");
            })
            .map_err(DbError::from)
    }

    /// The `is_correct` flags are the authoritative source of correctness,
    /// not the denormalized `correct_option` column on the question.
    pub async fn correct_options_by_question<C: ConnectionTrait>(
        conn: &C,
        question_id: i32,
    ) -> Result<Vec<OptionModel>, DbError> {
        Option_::find()
            .filter(option::Column::QuestionId.eq(question_id))
            .filter(option::Column::IsCorrect.eq(true))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load correct options");
            })
            .map_err(DbError::from)
    }
}
