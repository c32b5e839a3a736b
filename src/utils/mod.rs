//! Generic utility primitives with zero domain knowledge.
//!
//! - `prompt` - interactive yes/no confirmation
//! - `sanitize` - filesystem-safe text transform

pub mod prompt;
pub mod sanitize;
