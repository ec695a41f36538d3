//! Core sanitization engine.

pub mod classifier;
pub mod engine;
pub mod pipeline;
pub mod resolver;
pub mod rules;
