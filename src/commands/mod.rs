//! CLI command implementations

pub mod list;
pub mod new;
pub mod render;
