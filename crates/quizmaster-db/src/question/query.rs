use quizmaster_entity::question::{self, Entity as Question, Model as QuestionModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use std::error::Error;

use crate::error::DbError;

pub struct Query;

impl Query {
    pub async fn find_question_by_id<C: ConnectionTrait>(
        conn: &C,
        question_id: i32,
    ) -> Result<Option<QuestionModel>, DbError> {
        Question::find_by_id(question_id)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load question by id");
            })
            .map_err(DbError::from)
    }

    pub async fn list_questions_by_quiz<C: ConnectionTrait>(
        conn: &C,
        quiz_id: i32,
    ) -> Result<Vec<QuestionModel>, DbError> {
        Question::find()
            .filter(question::Column::QuizId.eq(quiz_id))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load questions by quiz");
            })
            .map_err(DbError::from)
    }
}
