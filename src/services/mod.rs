//! External collaborators.

pub mod metadata;
pub mod network;
