pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod countries;
pub mod data_provider;
pub mod error;
pub mod fixtures;
pub mod formatting;
pub mod levels;
pub mod session;
pub mod types;
pub mod view;

#[cfg(any(test, feature = "development"))]
pub mod dev;
