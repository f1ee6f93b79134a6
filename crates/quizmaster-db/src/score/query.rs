use quizmaster_entity::score::{self, Entity as Score, Model as ScoreModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use std::error::Error;

use crate::error::DbError;

pub struct Query;

impl Query {
    pub async fn scores_by_user<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
    ) -> Result<Vec<ScoreModel>, DbError> {
        Score::find()
            .filter(score::Column::UserId.eq(user_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load scores by user");
            })
            .map_err(DbError::from)
    }

    pub async fn scores_by_quiz<C: ConnectionTrait>(
        conn: &C,
        quiz_id: i32,
    ) -> Result<Vec<ScoreModel>, DbError> {
        Score::find()
            .filter(score::Column::QuizId.eq(quiz_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load scores by quiz");
            })
            .map_err(DbError::from)
    }

    /// At most one row exists per (user, quiz) pair.
    pub async fn find_score<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        quiz_id: i32,
    ) -> Result<Option<ScoreModel>, DbError> {
        Score::find()
            .filter(score::Column::UserId.eq(user_id))
            .filter(score::Column::QuizId.eq(quiz_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load score");
            })
            .map_err(DbError::from)
    }
}
