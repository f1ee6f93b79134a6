use quizmaster_entity::chapter::{self, Entity as Chapter, Model as ChapterModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use std::error::Error;

use crate::error::DbError;

pub struct Query;

impl Query {
    pub async fn find_chapter_by_id<C: ConnectionTrait>(
        conn: &C,
        chapter_id: i32,
    ) -> Result<Option<ChapterModel>, DbError> {
        Chapter::find_by_id(chapter_id)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load chapter by id");
            })
            .map_err(DbError::from)
    }

    pub async fn list_chapters_by_subject<C: ConnectionTrait>(
        conn: &C,
        subject_id: i32,
    ) -> Result<Vec<ChapterModel>, DbError> {
        Chapter::find()
            .filter(chapter::Column::SubjectId.eq(subject_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load chapters by subject");
            })
            .map_err(DbError::from)
    }
}
