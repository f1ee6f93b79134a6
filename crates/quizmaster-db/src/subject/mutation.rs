use quizmaster_entity::subject::{self, Entity as Subject};
use sea_orm::ActiveValue::Unchanged;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use std::error::Error;

use crate::error::DbError;

pub struct Mutation;

impl Mutation {
    pub async fn create_subject<C: ConnectionTrait>(
        conn: &C,
        admin_id: i32,
        name: &str,
        description: Option<&str>,
    ) -> Result<subject::Model, DbError> {
        let new_subject = subject::ActiveModel {
            admin_id: Set(admin_id),
            name: Set(name.to_string()),
            description: Set(description.map(ToString::to_string)),
            ..Default::default()
        };
        new_subject.insert(conn).await.map_err(DbError::from)
    }

    pub async fn update_subject<C: ConnectionTrait>(
        conn: &C,
        subject_id: i32,
        name: &str,
        description: Option<&str>,
    ) -> Result<subject::Model, DbError> {
        let subject = subject::ActiveModel {
            id: Unchanged(subject_id),
            name: Set(name.to_string()),
            description: Set(description.map(ToString::to_string)),
            ..Default::default()
        };
        subject.update(conn).await.map_err(DbError::from)
    }

    /// Cascades through chapters, quizzes, questions, options, and scores.
    pub async fn delete_subject<C: ConnectionTrait>(conn: &C, subject_id: i32) -> Result<(), DbError> {
        let res = Subject::delete_by_id(subject_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete subject");
            return Err(error.into());
        }
        Ok(())
    }
}
