//! Core modules: statistics model, readability scoring, input reading and
//! rendering/export.

pub mod model;
pub mod readability;
pub mod reader;
pub mod render;
