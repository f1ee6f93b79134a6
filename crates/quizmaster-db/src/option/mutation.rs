use quizmaster_entity::option::{self, Entity as Option_};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use std::error::Error;

use crate::error::DbError;

pub struct Mutation;

impl Mutation {
    pub async fn add_option<C: ConnectionTrait>(
        conn: &C,
        question_id: i32,
        option_text: &str,
        is_correct: bool,
    ) -> Result<option::Model, DbError> {
        let new_option = option::ActiveModel {
            question_id: Set(question_id),
            option_text: Set(option_text.to_string()),
            is_correct: Set(is_correct),
            ..Default::default()
        };
        new_option.insert(conn).await.map_err(DbError::from)
    }

    pub async fn delete_option<C: ConnectionTrait>(conn: &C, option_id: i32) -> Result<(), DbError> {
        let res = Option_::delete_by_id(option_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete option");
            return Err(error.into());
        }
        Ok(())
    }
}
