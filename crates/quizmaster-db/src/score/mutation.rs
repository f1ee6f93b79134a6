use chrono::NaiveDateTime;
use quizmaster_entity::score;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use crate::error::DbError;

pub struct Mutation;

impl Mutation {
    /// Records a quiz attempt. A second attempt for the same (user, quiz)
    /// pair fails with [`DbError::UniqueViolation`].
    pub async fn record_attempt<C: ConnectionTrait>(
        conn: &C,
        quiz_id: i32,
        user_id: i32,
        total_scored: i32,
        time_stamp_of_attempt: Option<NaiveDateTime>,
    ) -> Result<score::Model, DbError> {
        let new_score = score::ActiveModel {
            quiz_id: Set(quiz_id),
            user_id: Set(user_id),
            total_scored: Set(total_scored),
            time_stamp_of_attempt: Set(time_stamp_of_attempt),
            ..Default::default()
        };
        new_score.insert(conn).await.map_err(DbError::from)
    }
}
