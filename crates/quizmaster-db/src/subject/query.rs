use quizmaster_entity::subject::{Entity as Subject, Model as SubjectModel};
use sea_orm::{ConnectionTrait, EntityTrait};
use std::error::Error;

use crate::error::DbError;

pub struct Query;

impl Query {
    pub async fn find_subject_by_id<C: ConnectionTrait>(
        conn: &C,
        subject_id: i32,
    ) -> Result<Option<SubjectModel>, DbError> {
        Subject::find_by_id(subject_id)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load subject by id");
            })
            .map_err(DbError::from)
    }

    pub async fn list_subjects<C: ConnectionTrait>(conn: &C) -> Result<Vec<SubjectModel>, DbError> {
        Subject::find()
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load subjects");
            })
            .map_err(DbError::from)
    }
}
