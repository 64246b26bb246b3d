//! HTTP handlers for the games catalog.

pub mod games;
pub use games::*;
