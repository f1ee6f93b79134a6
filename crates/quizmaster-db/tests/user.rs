mod common;

use crate::common::{connect, create_test_admin, create_test_user, seed_math_tree};
use chrono::NaiveDate;
use quizmaster_db::{user, DbError};
use test_log::test;

#[test(tokio::test)]
async fn test_create_and_find_user() {
    let db = &connect().await;

    let created = user::Mutation::create_user(
        db,
        "alice",
        "hunter2",
        "Alice Example",
        Some("BSc"),
        NaiveDate::from_ymd_opt(2001, 6, 1),
    )
    .await
    .unwrap();

    let found = user::Query::find_user_by_username(db, "alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.full_name, "Alice Example");
    assert_eq!(found.qualification.as_deref(), Some("BSc"));
    assert_eq!(found.date_of_birth, NaiveDate::from_ymd_opt(2001, 6, 1));

    let by_id = user::Query::find_user_by_id(db, created.id).await.unwrap();
    assert_eq!(by_id, Some(found));
}

#[test(tokio::test)]
async fn test_duplicate_username_rejected() {
    let db = &connect().await;

    create_test_user(db, "bob").await;

    let err = user::Mutation::create_user(db, "bob", "other", "Other Bob", None, None)
        .await
        .unwrap_err();
    assert!(
        matches!(err, DbError::UniqueViolation(_)),
        "expected unique violation, got {err:?}"
    );

    assert_eq!(user::Query::list_users(db).await.unwrap().len(), 1);
}

#[test(tokio::test)]
async fn test_delete_user_with_scores_is_restricted() {
    let db = &connect().await;

    let admin = create_test_admin(db).await;
    let tree = seed_math_tree(db, admin.id).await;
    let user = create_test_user(db, "carol").await;

    quizmaster_db::score::Mutation::record_attempt(db, tree.quiz.id, user.id, 1, None)
        .await
        .unwrap();

    let err = user::Mutation::delete_user(db, user.id).await.unwrap_err();
    assert!(
        matches!(err, DbError::ForeignKeyViolation(_)),
        "expected foreign key violation, got {err:?}"
    );

    // Without scores the delete goes through.
    let other = create_test_user(db, "dave").await;
    user::Mutation::delete_user(db, other.id).await.unwrap();
    assert!(user::Query::find_user_by_id(db, other.id).await.unwrap().is_none());
}
