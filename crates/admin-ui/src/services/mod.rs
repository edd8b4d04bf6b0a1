//! API services module

pub mod admin_api;
pub mod api_client;
pub mod notifications_api;
pub mod rooms_api;
pub mod used_items_api;
pub mod users_api;

pub use admin_api::*;
pub use api_client::*;
pub use notifications_api::*;
pub use rooms_api::*;
pub use used_items_api::*;
pub use users_api::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod api_client_test;
#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod test_support;
