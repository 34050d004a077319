pub mod api;
pub mod config;
pub mod error;
pub mod intelligence;
pub mod models;
pub mod services;
