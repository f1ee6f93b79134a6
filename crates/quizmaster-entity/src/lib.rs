pub mod admin;
pub mod chapter;
pub mod option;
pub mod question;
pub mod quiz;
pub mod score;
pub mod subject;
pub mod user;
