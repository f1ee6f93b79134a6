use quizmaster_entity::admin::{self, Entity as Admin};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use std::error::Error;

use crate::error::DbError;

pub struct Mutation;

impl Mutation {
    pub async fn create_admin<C: ConnectionTrait>(
        conn: &C,
        username: &str,
        password: &str,
    ) -> Result<admin::Model, DbError> {
        let new_admin = admin::ActiveModel {
            username: Set(username.to_string()),
            password: Set(password.to_string()),
            ..Default::default()
        };
        new_admin.insert(conn).await.map_err(DbError::from)
    }

    /// Fails with [`DbError::ForeignKeyViolation`] while the admin still
    /// owns subjects, chapters, quizzes, or questions.
    pub async fn delete_admin<C: ConnectionTrait>(conn: &C, admin_id: i32) -> Result<(), DbError> {
        let res = Admin::delete_by_id(admin_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete admin");
            return Err(error.into());
        }
        Ok(())
    }
}
