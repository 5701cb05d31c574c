use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A profile shown on the lover directory page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Lover {
    pub id: i32,
    pub name: String,
    /// Code of the city the profile belongs to, when known.
    pub city_code: Option<String>,
    /// Face-match score assigned by the matching pipeline.
    pub mark: f32,
    pub created_at: NaiveDateTime,
}
