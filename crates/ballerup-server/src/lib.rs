//! HTTP/JSON API server for the Baller Up pickup-game queue.
//!
//! Exposes the waiting queue (list/join/leave/advance) and the scoreboard
//! counters over a small REST API polled by the court-side UI. This crate
//! contains the server framework, API schema types, error handling, and
//! route definitions; all queue semantics live in `ballerup-storage`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
