use chrono::NaiveDate;
use quizmaster_db::schema;
use sea_orm::{Database, DatabaseConnection};

pub async fn connect() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    schema::setup(&db).await.unwrap();
    db
}

#[allow(dead_code)]
pub async fn create_test_admin(db: &DatabaseConnection) -> quizmaster_entity::admin::Model {
    quizmaster_db::admin::Mutation::create_admin(db, "root", "hunter2")
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> quizmaster_entity::user::Model {
    quizmaster_db::user::Mutation::create_user(db, username, "hunter2", "Test User", None, None)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub struct MathTree {
    pub subject: quizmaster_entity::subject::Model,
    pub chapter: quizmaster_entity::chapter::Model,
    pub quiz: quizmaster_entity::quiz::Model,
    pub question: quizmaster_entity::question::Model,
}

/// Subject("Math") -> Chapter("Algebra") -> Quiz(30 min) -> Question("2+2?")
/// with two options, one of them correct.
#[allow(dead_code)]
pub async fn seed_math_tree(db: &DatabaseConnection, admin_id: i32) -> MathTree {
    let subject = quizmaster_db::subject::Mutation::create_subject(db, admin_id, "Math", None)
        .await
        .unwrap();
    let chapter =
        quizmaster_db::chapter::Mutation::create_chapter(db, admin_id, subject.id, "Algebra", None)
            .await
            .unwrap();
    let date_of_quiz = NaiveDate::from_ymd_opt(2026, 1, 15)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let quiz =
        quizmaster_db::quiz::Mutation::create_quiz(db, admin_id, chapter.id, date_of_quiz, 30, None)
            .await
            .unwrap();
    let question = quizmaster_db::question::Mutation::create_question(
        db,
        admin_id,
        quiz.id,
        "2+2?",
        "4",
        vec![("4".to_owned(), true), ("5".to_owned(), false)],
    )
    .await
    .unwrap();

    MathTree {
        subject,
        chapter,
        quiz,
        question,
    }
}
