//! Marketplace (used item) models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemCondition {
    New,
    #[serde(rename = "Like new")]
    LikeNew,
    Good,
    Fair,
    Poor,
    #[serde(other)]
    Unknown,
}

impl ItemCondition {
    pub fn all() -> [ItemCondition; 5] {
        [
            ItemCondition::New,
            ItemCondition::LikeNew,
            ItemCondition::Good,
            ItemCondition::Fair,
            ItemCondition::Poor,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCondition::New => "New",
            ItemCondition::LikeNew => "Like new",
            ItemCondition::Good => "Good",
            ItemCondition::Fair => "Fair",
            ItemCondition::Poor => "Poor",
            ItemCondition::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<ItemCondition> {
        ItemCondition::all().into_iter().find(|c| c.as_str() == value)
    }

    /// Badge style class for the condition
    pub fn badge_class(&self) -> &'static str {
        match self {
            ItemCondition::New | ItemCondition::LikeNew => "badge badge-success",
            ItemCondition::Good => "badge badge-info",
            ItemCondition::Fair => "badge badge-warning",
            ItemCondition::Poor => "badge badge-danger",
            ItemCondition::Unknown => "badge",
        }
    }
}

/// A second-hand item listed on the marketplace
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsedItem {
    pub id: String,
    pub user_id: String,
    pub brand_name: String,
    pub item_category: String,
    pub item_type: String,
    pub condition: ItemCondition,
    pub city: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for `POST /used-items`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewUsedItem {
    pub user_id: String,
    pub brand_name: String,
    pub item_category: String,
    pub item_type: String,
    pub condition: ItemCondition,
    pub city: String,
    pub price: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

/// Partial update body for `PATCH /used-items/{id}`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsedItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<ItemCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Query filters for `GET /used-items`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsedItemFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<ItemCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
