pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod markdown;
pub mod models;
pub mod ui;
