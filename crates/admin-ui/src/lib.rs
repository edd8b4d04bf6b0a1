//! Hello Roomie Admin UI
//!
//! Web administration panel for the Hello Roomie platform.
//! Built with Dioxus and compiled to WebAssembly.

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod services;
pub mod table;
pub mod utils;

pub use app::App;
