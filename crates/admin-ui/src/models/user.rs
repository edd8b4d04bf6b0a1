//! User profile models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gender as stored on the user profile
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
    #[serde(other)]
    Unknown,
}

impl Gender {
    pub fn all() -> [Gender; 3] {
        [Gender::Male, Gender::Female, Gender::Other]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Gender> {
        Gender::all().into_iter().find(|g| g.as_str() == value)
    }
}

/// Whether a user offers or looks for a room
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomStatus {
    #[serde(rename = "I have Room")]
    HaveRoom,
    #[serde(rename = "I need Room")]
    NeedRoom,
}

impl RoomStatus {
    pub fn all() -> [RoomStatus; 2] {
        [RoomStatus::HaveRoom, RoomStatus::NeedRoom]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::HaveRoom => "I have Room",
            RoomStatus::NeedRoom => "I need Room",
        }
    }
}

/// Roommate-seeker profile
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    pub full_name: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Free text on the wire; usually one of [`RoomStatus`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_habits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoking_habits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drinking_habits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pets_preference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_cleaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partying_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_fast_needs_roommate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_long_needs_roommate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcm_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Name shown in lists: display name if set, else full name
    pub fn shown_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.full_name)
    }

    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }

    /// Initial used by avatar placeholders
    pub fn initial(&self) -> char {
        self.shown_name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

/// Query filters for `GET /users`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Query filters for `GET /users/roommates`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoommateFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Partial update body for `PATCH /users/{uid}`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_completed: Option<bool>,
}
