//! Data models.

pub mod config;
pub mod entry;
pub mod media;
