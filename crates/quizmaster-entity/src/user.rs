use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub qualification: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::score::Entity")]
    Score,
}

impl Related<super::score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Score.def()
    }
}

// Many-to-many with quizzes through the scores association.
impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        super::score::Relation::Quiz.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::score::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
