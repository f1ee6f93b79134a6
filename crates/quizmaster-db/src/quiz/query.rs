use quizmaster_entity::quiz::{self, Entity as Quiz, Model as QuizModel};
use quizmaster_entity::user::Model as UserModel;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter};
use std::error::Error;

use crate::error::DbError;

pub struct Query;

impl Query {
    pub async fn find_quiz_by_id<C: ConnectionTrait>(
        conn: &C,
        quiz_id: i32,
    ) -> Result<Option<QuizModel>, DbError> {
        Quiz::find_by_id(quiz_id)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load quiz by id");
            })
            .map_err(DbError::from)
    }

    pub async fn list_quizzes_by_chapter<C: ConnectionTrait>(
        conn: &C,
        chapter_id: i32,
    ) -> Result<Vec<QuizModel>, DbError> {
        Quiz::find()
            .filter(quiz::Column::ChapterId.eq(chapter_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load quizzes by chapter");
            })
            .map_err(DbError::from)
    }

    /// Users who have attempted the quiz, navigated through the scores
    /// association.
    pub async fn attempting_users<C: ConnectionTrait>(
        conn: &C,
        quiz_id: i32,
    ) -> Result<Vec<UserModel>, DbError> {
        let quiz = Quiz::find_by_id(quiz_id)
            .one(conn)
            .await
            .map_err(DbError::from)?
            .ok_or_else(|| DbError::RecordNotFound(format!("quiz with id {quiz_id} not found")))?;

        quiz.find_related(quizmaster_entity::user::Entity)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load attempting users");
            })
            .map_err(DbError::from)
    }
}
