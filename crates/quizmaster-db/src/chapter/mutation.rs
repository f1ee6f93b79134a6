use quizmaster_entity::chapter::{self, Entity as Chapter};
use sea_orm::ActiveValue::Unchanged;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use std::error::Error;

use crate::error::DbError;

pub struct Mutation;

impl Mutation {
    /// Fails with [`DbError::ForeignKeyViolation`] when `subject_id` does
    /// not reference an existing subject.
    pub async fn create_chapter<C: ConnectionTrait>(
        conn: &C,
        admin_id: i32,
        subject_id: i32,
        name: &str,
        description: Option<&str>,
    ) -> Result<chapter::Model, DbError> {
        let new_chapter = chapter::ActiveModel {
            admin_id: Set(admin_id),
            subject_id: Set(subject_id),
            name: Set(name.to_string()),
            description: Set(description.map(ToString::to_string)),
            ..Default::default()
        };
        new_chapter.insert(conn).await.map_err(DbError::from)
    }

    pub async fn update_chapter<C: ConnectionTrait>(
        conn: &C,
        chapter_id: i32,
        name: &str,
        description: Option<&str>,
    ) -> Result<chapter::Model, DbError> {
        let chapter = chapter::ActiveModel {
            id: Unchanged(chapter_id),
            name: Set(name.to_string()),
            description: Set(description.map(ToString::to_string)),
            ..Default::default()
        };
        chapter.update(conn).await.map_err(DbError::from)
    }

    /// Cascades through quizzes, questions, options, and scores.
    pub async fn delete_chapter<C: ConnectionTrait>(conn: &C, chapter_id: i32) -> Result<(), DbError> {
        let res = Chapter::delete_by_id(chapter_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete chapter");
            return Err(error.into());
        }
        Ok(())
    }
}
