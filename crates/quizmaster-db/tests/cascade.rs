mod common;

use crate::common::{connect, create_test_admin, create_test_user, seed_math_tree};
use quizmaster_db::{chapter, option, question, quiz, score, subject};
use quizmaster_entity::{chapter::Entity as Chapter, option::Entity as Opt, question::Entity as Question, quiz::Entity as Quiz, score::Entity as Score};
use sea_orm::EntityTrait;
use test_log::test;

#[test(tokio::test)]
async fn test_delete_subject_cascades_four_levels() {
    let db = &connect().await;

    let admin = create_test_admin(db).await;
    let tree = seed_math_tree(db, admin.id).await;
    let user = create_test_user(db, "erin").await;
    score::Mutation::record_attempt(db, tree.quiz.id, user.id, 1, None)
        .await
        .unwrap();

    assert_eq!(Opt::find().all(db).await.unwrap().len(), 2);

    subject::Mutation::delete_subject(db, tree.subject.id).await.unwrap();

    assert!(Chapter::find().all(db).await.unwrap().is_empty());
    assert!(Quiz::find().all(db).await.unwrap().is_empty());
    assert!(Question::find().all(db).await.unwrap().is_empty());
    assert!(Opt::find().all(db).await.unwrap().is_empty());
    assert!(Score::find().all(db).await.unwrap().is_empty());

    // The user itself survives.
    assert!(quizmaster_db::user::Query::find_user_by_id(db, user.id)
        .await
        .unwrap()
        .is_some());
}

#[test(tokio::test)]
async fn test_delete_quiz_keeps_parent_chapter() {
    let db = &connect().await;

    let admin = create_test_admin(db).await;
    let tree = seed_math_tree(db, admin.id).await;
    let user = create_test_user(db, "frank").await;
    score::Mutation::record_attempt(db, tree.quiz.id, user.id, 2, None)
        .await
        .unwrap();

    quiz::Mutation::delete_quiz(db, tree.quiz.id).await.unwrap();

    assert!(Question::find().all(db).await.unwrap().is_empty());
    assert!(Opt::find().all(db).await.unwrap().is_empty());
    assert!(Score::find().all(db).await.unwrap().is_empty());

    let chapter = chapter::Query::find_chapter_by_id(db, tree.chapter.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(chapter.name, "Algebra");
}

#[test(tokio::test)]
async fn test_delete_chapter_cascades_quizzes() {
    let db = &connect().await;

    let admin = create_test_admin(db).await;
    let tree = seed_math_tree(db, admin.id).await;

    chapter::Mutation::delete_chapter(db, tree.chapter.id).await.unwrap();

    assert!(quiz::Query::find_quiz_by_id(db, tree.quiz.id).await.unwrap().is_none());
    assert!(Question::find().all(db).await.unwrap().is_empty());

    let subject = subject::Query::find_subject_by_id(db, tree.subject.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(subject.name, "Math");
}

#[test(tokio::test)]
async fn test_delete_question_cascades_options() {
    let db = &connect().await;

    let admin = create_test_admin(db).await;
    let tree = seed_math_tree(db, admin.id).await;

    question::Mutation::delete_question(db, tree.question.id).await.unwrap();

    assert!(option::Query::list_options_by_question(db, tree.question.id)
        .await
        .unwrap()
        .is_empty());
    assert!(quiz::Query::find_quiz_by_id(db, tree.quiz.id).await.unwrap().is_some());
}
