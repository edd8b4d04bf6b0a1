//! Data models for the Hello Roomie admin dashboard

pub mod auth;
pub mod error;
pub mod moderation;
pub mod notification;
pub mod response;
pub mod room;
pub mod used_item;
pub mod user;

pub use auth::*;
pub use error::*;
pub use moderation::*;
pub use notification::*;
pub use response::*;
pub use room::*;
pub use used_item::*;
pub use user::*;
