use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "Movie")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "MovieID")]
    #[serde(rename = "MovieID")]
    pub movie_id: i32,
    #[sea_orm(column_name = "Title")]
    #[serde(rename = "Title")]
    pub title: String,
    #[sea_orm(column_name = "Genre")]
    #[serde(rename = "Genre")]
    pub genre: String,
    #[sea_orm(column_name = "Duration")]
    #[serde(rename = "Duration")]
    pub duration: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::screening::Entity")]
    Screening,
}

impl Related<super::screening::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Screening.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
