//! Types shared with the HTTP boundary.

pub mod api;
