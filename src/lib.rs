pub mod config;
pub mod converter;
pub mod error;
pub mod logging;
pub mod sheet;
pub mod types;
