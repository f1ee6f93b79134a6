use chrono::{NaiveDateTime, Utc};
use quizmaster_entity::quiz::{self, Entity as Quiz};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use std::error::Error;

use crate::error::DbError;

pub struct Mutation;

impl Mutation {
    pub async fn create_quiz<C: ConnectionTrait>(
        conn: &C,
        admin_id: i32,
        chapter_id: i32,
        date_of_quiz: NaiveDateTime,
        time_duration: i32,
        remarks: Option<&str>,
    ) -> Result<quiz::Model, DbError> {
        let new_quiz = quiz::ActiveModel {
            admin_id: Set(admin_id),
            chapter_id: Set(chapter_id),
            date_of_quiz: Set(date_of_quiz),
            time_duration: Set(time_duration),
            remarks: Set(remarks.map(ToString::to_string)),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        new_quiz.insert(conn).await.map_err(DbError::from)
    }

    /// Cascades through questions, their options, and scores. The parent
    /// chapter is untouched.
    pub async fn delete_quiz<C: ConnectionTrait>(conn: &C, quiz_id: i32) -> Result<(), DbError> {
        let res = Quiz::delete_by_id(quiz_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete quiz");
            return Err(error.into());
        }
        Ok(())
    }
}
