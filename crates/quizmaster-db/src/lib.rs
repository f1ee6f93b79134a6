pub mod admin;
pub mod chapter;
pub mod error;
pub mod option;
pub mod question;
pub mod quiz;
pub mod schema;
pub mod score;
pub mod subject;
pub mod user;

pub use error::DbError;
pub use sea_orm;
