use chrono::NaiveDate;
use quizmaster_entity::user::{self, Entity as User};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use std::error::Error;

use crate::error::DbError;

pub struct Mutation;

impl Mutation {
    /// Fails with [`DbError::UniqueViolation`] when the username is taken.
    pub async fn create_user<C: ConnectionTrait>(
        conn: &C,
        username: &str,
        password: &str,
        full_name: &str,
        qualification: Option<&str>,
        date_of_birth: Option<NaiveDate>,
    ) -> Result<user::Model, DbError> {
        let new_user = user::ActiveModel {
            username: Set(username.to_string()),
            password: Set(password.to_string()),
            full_name: Set(full_name.to_string()),
            qualification: Set(qualification.map(ToString::to_string)),
            date_of_birth: Set(date_of_birth),
            ..Default::default()
        };
        new_user.insert(conn).await.map_err(DbError::from)
    }

    /// Fails with [`DbError::ForeignKeyViolation`] while the user still has
    /// recorded scores.
    pub async fn delete_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<(), DbError> {
        let res = User::delete_by_id(user_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete user");
            return Err(error.into());
        }
        Ok(())
    }
}
