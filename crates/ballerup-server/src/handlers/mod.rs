//! HTTP handler modules for the Baller Up API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire the
//! store lock, delegate to the storage traits, and return JSON responses.
//! No queue semantics live in handlers.

pub mod queue;
pub mod scores;
