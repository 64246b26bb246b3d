//! SQL for the games catalog: fixed identifiers, values as parameters.

mod builder;
pub use builder::*;
