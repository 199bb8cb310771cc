pub mod api;
pub mod auth;
pub mod config;
pub mod router;
pub mod session;
pub mod views;
