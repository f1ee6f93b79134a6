use quizmaster_entity::quiz::Model as QuizModel;
use quizmaster_entity::user::{self, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter};
use std::error::Error;

use crate::error::DbError;

pub struct Query;

impl Query {
    pub async fn find_user_by_id<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
    ) -> Result<Option<UserModel>, DbError> {
        User::find_by_id(user_id)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load user by id");
            })
            .map_err(DbError::from)
    }

    pub async fn find_user_by_username<C: ConnectionTrait>(
        conn: &C,
        username: &str,
    ) -> Result<Option<UserModel>, DbError> {
        User::find()
            .filter(user::Column::Username.eq(username))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load user by username");
            })
            .map_err(DbError::from)
    }

    pub async fn list_users<C: ConnectionTrait>(conn: &C) -> Result<Vec<UserModel>, DbError> {
        User::find()
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load users");
            })
            .map_err(DbError::from)
    }

    /// Quizzes the user has attempted, navigated through the scores
    /// association.
    pub async fn attempted_quizzes<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
    ) -> Result<Vec<QuizModel>, DbError> {
        let user = User::find_by_id(user_id)
            .one(conn)
            .await
            .map_err(DbError::from)?
            .ok_or_else(|| DbError::RecordNotFound(format!("user with id {user_id} not found")))?;

        user.find_related(quizmaster_entity::quiz::Entity)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load attempted quizzes");
            })
            .map_err(DbError::from)
    }
}
