//! Command implementations.

pub mod files;
pub mod folders;
pub mod rules;
