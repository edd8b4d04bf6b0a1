//! Room listing models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who posted the listing
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserType {
    Tenant,
    Owner,
    #[serde(other)]
    Unknown,
}

impl UserType {
    pub fn all() -> [UserType; 2] {
        [UserType::Tenant, UserType::Owner]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Tenant => "Tenant",
            UserType::Owner => "Owner",
            UserType::Unknown => "Unknown",
        }
    }
}

/// A room listing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub user_id: String,
    pub user_type: UserType,
    pub city: String,
    pub size_of_place: String,
    pub nearby_landmark: String,
    pub rent_per_head: f64,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Room {
    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.as_ref()?.first().map(String::as_str)
    }
}

/// Body for `POST /rooms`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub user_id: String,
    pub user_type: UserType,
    pub city: String,
    pub size_of_place: String,
    pub nearby_landmark: String,
    pub rent_per_head: f64,
    pub amenities: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

/// Partial update body for `PATCH /rooms/{id}`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_of_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearby_landmark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_per_head: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Query filters for `GET /rooms`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
