//! Core types shared by the flight engine and the scene

pub mod config;
pub mod coordinates;

pub use config::AppConfig;
