//! Custom hooks module

pub mod use_auth;
pub mod use_remote;
pub mod use_toast;

pub use use_auth::*;
pub use use_remote::*;
pub use use_toast::*;
