//! Relays Slack "raise your hand" status changes to discipline channels.

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod handler;
pub mod routing;
pub mod slack;
pub mod types;

#[cfg(test)]
mod testing;

pub use app::App;
pub use config::{Config, ConfigError};
pub use error::RelayError;
