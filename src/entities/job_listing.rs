use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "job_listings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub job_id: String, // The provider's listing id, globally unique
    pub search_term: String,
    pub title: String,
    pub company_name: String,
    pub location: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub qualifications: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub responsibilities: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub benefits: Option<String>,
    // Populated only when the listing's highlights carry no section titles;
    // mutually exclusive with the three fields above.
    #[sea_orm(column_type = "Text", nullable)]
    pub items: Option<String>,
    pub via: String, // "via " prefix already stripped
    pub posted_at: Option<String>, // Raw age string, e.g. "3 days ago"
    pub schedule_type: Option<String>,
    pub work_from_home: Option<bool>,
    pub salary: Option<String>,
    pub date_posted: Option<Date>, // Derived from posted_at when parseable
    pub date_scraped: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Helper structs for deserializing listings from the search provider's JSON.
// These mirror the provider's shape; `normalize` maps them onto the Model.
#[derive(Deserialize, Debug, Clone)]
pub struct RawListing {
    pub title: String,
    pub company_name: String,
    pub description: String,
    pub job_id: String,
    #[serde(default)] // Handle missing or null location
    pub location: Option<String>,
    #[serde(default)]
    pub job_highlights: Vec<RawHighlight>,
    #[serde(default)]
    pub detected_extensions: DetectedExtensions,
    pub via: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawHighlight {
    #[serde(default)] // Untitled highlight groups omit this key
    pub title: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DetectedExtensions {
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub schedule_type: Option<String>,
    #[serde(default)]
    pub work_from_home: Option<bool>,
    #[serde(default)]
    pub salary: Option<String>,
}
