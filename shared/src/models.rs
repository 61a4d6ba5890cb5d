use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A campground listing in the registry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Campground {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub location: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

/// A review attached to a campground. The review sequence of a campground
/// is its reviews ordered by `created_at` ascending (append order).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: Uuid,
    pub campground_id: Uuid,
    pub body: String,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

/// Submitted campground payload: `{ "campground": { ... } }`
#[derive(Debug, Clone, Deserialize)]
pub struct CampgroundPayload {
    pub campground: CampgroundDraft,
}

/// Raw campground fields as submitted. Every field is optional so the
/// validation stage can report all violations in one pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampgroundDraft {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}

/// A draft that passed validation: every field present and in bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CampgroundFields {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub location: String,
    pub image: String,
}

/// Submitted review payload: `{ "review": { ... } }`
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewPayload {
    pub review: ReviewDraft,
}

/// Review fields as submitted. Rating is intended to be 1-5 but the flow
/// does not enforce the range.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewDraft {
    pub body: String,
    pub rating: f64,
}
