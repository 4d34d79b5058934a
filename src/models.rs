use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ScreeningPayload {
    #[serde(rename = "MovieID")]
    pub movie_id: i32,
    #[serde(rename = "Is3D")]
    pub is_3d: bool,
    #[serde(rename = "AvailableSeats")]
    pub available_seats: i32,
    #[serde(rename = "ScreeningDateTime")]
    pub screening_date_time: String,
}

// All four parameters stay optional strings: the booking frontend sends every
// key on each request, blank when unset, and blank must mean "no constraint".
#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(rename = "movieName")]
    pub movie_name: Option<String>,
    #[serde(rename = "minSeats")]
    pub min_seats: Option<String>,
}

#[derive(Debug, Serialize, FromQueryResult)]
pub struct ScreeningRow {
    #[serde(rename = "ScreeningID")]
    pub screening_id: i32,
    #[serde(rename = "AvailableSeats")]
    pub available_seats: i32,
    #[serde(rename = "ScreeningDateTime")]
    pub screening_date_time: String,
    #[serde(rename = "Is3D")]
    pub is_3d: bool,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Duration")]
    pub duration: i32,
}

#[derive(Debug, Default, FromQueryResult)]
pub struct Totals {
    pub total_count: i64,
    pub avg_seats: Option<f64>,
    pub avg_duration: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
pub struct GenreCount {
    pub genre: String,
    pub cnt: i64,
}

#[derive(Debug, Serialize)]
pub struct ScreeningStats {
    #[serde(rename = "totalCount")]
    pub total_count: i64,
    #[serde(rename = "avgSeats")]
    pub avg_seats: f64,
    #[serde(rename = "avgDuration")]
    pub avg_duration: f64,
    #[serde(rename = "prevalentGenre")]
    pub prevalent_genre: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub screenings: Vec<ScreeningRow>,
    pub stats: ScreeningStats,
}
