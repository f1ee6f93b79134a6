use quizmaster_entity::admin::{self, Entity as Admin, Model as AdminModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use std::error::Error;

use crate::error::DbError;

pub struct Query;

impl Query {
    pub async fn find_admin_by_id<C: ConnectionTrait>(
        conn: &C,
        admin_id: i32,
    ) -> Result<Option<AdminModel>, DbError> {
        Admin::find_by_id(admin_id)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load admin by id");
            })
            .map_err(DbError::from)
    }

    pub async fn find_admin_by_username<C: ConnectionTrait>(
        conn: &C,
        username: &str,
    ) -> Result<Option<AdminModel>, DbError> {
        Admin::find()
            .filter(admin::Column::Username.eq(username))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load admin by username");
            })
            .map_err(DbError::from)
    }
}
