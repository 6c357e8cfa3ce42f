//! Server-side models.
//!
//! - `context` - Caller scope every mutation runs under
//! - `fields` - Mutable field names per resource, used to validate patch documents

pub mod context;
pub mod fields;
