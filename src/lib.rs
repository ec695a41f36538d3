//! Plex Sanitizer Library
//!
//! A library for cleaning media folder and file names into Plex-style
//! canonical names.

pub mod cli;
pub mod core;
pub mod error;
pub mod generators;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
