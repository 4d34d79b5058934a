use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "Screenings")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ScreeningID")]
    #[serde(rename = "ScreeningID")]
    pub screening_id: i32,
    #[sea_orm(column_name = "MovieID")]
    #[serde(rename = "MovieID")]
    pub movie_id: i32,
    #[sea_orm(column_name = "Is3D")]
    #[serde(rename = "Is3D")]
    pub is_3d: bool,
    #[sea_orm(column_name = "AvailableSeats")]
    #[serde(rename = "AvailableSeats")]
    pub available_seats: i32,
    #[sea_orm(column_name = "ScreeningDateTime")]
    #[serde(rename = "ScreeningDateTime")]
    pub screening_date_time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::MovieId"
    )]
    Movie,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
