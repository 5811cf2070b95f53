//! Request and response schema types for the Baller Up API.
//!
//! Bodies are explicit serde structs rather than untyped JSON: every field
//! is named, and optionality is visible in the type.

pub mod queue;
pub mod scores;
