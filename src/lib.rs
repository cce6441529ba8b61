pub mod auth;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod i18n;
pub mod login;
pub mod role;
pub mod server;
pub mod session;
pub mod views;
