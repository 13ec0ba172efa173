//! Configuration and external API wire models.

pub mod api;
pub mod config;
