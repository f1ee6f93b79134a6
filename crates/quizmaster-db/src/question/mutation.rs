use quizmaster_entity::question::{self, Entity as Question};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set, TransactionTrait};
use std::error::Error;

use crate::error::DbError;

pub struct Mutation;

impl Mutation {
    /// Inserts the question together with its options in one transaction,
    /// so a failing option insert leaves no half-written question behind.
    pub async fn create_question<C: ConnectionTrait + TransactionTrait>(
        db: &C,
        admin_id: i32,
        quiz_id: i32,
        question_statement: &str,
        correct_option: &str,
        options: Vec<(String, bool)>,
    ) -> Result<question::Model, DbError> {
        let txn = db.begin().await.map_err(DbError::from)?;

        let question = question::ActiveModel {
            admin_id: Set(admin_id),
            quiz_id: Set(quiz_id),
            question_statement: Set(question_statement.to_string()),
            correct_option: Set(correct_option.to_string()),
            ..Default::default()
        };
        let question_model = question.insert(&txn).await.map_err(DbError::from)?;

        for (option_text, is_correct) in options {
            crate::option::Mutation::add_option(&txn, question_model.id, &option_text, is_correct)
                .await?;
        }

        txn.commit().await.map_err(DbError::from)?;

        Ok(question_model)
    }

    /// Cascades to the question's options.
    pub async fn delete_question<C: ConnectionTrait>(conn: &C, question_id: i32) -> Result<(), DbError> {
        let res = Question::delete_by_id(question_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete question");
            return Err(error.into());
        }
        Ok(())
    }
}
