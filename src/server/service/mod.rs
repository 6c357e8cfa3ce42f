//! Service layer for guild-scoped resource families.
//!
//! Each operation opens one `UnitOfWork`, walks the ownership chain from the caller's
//! guild down to the target with `verify_scope` at every level, performs exactly one
//! audited write and commits. Services hold a borrowed connection pool and keep no state
//! between calls.

pub mod embed;
pub mod form;
pub mod giveaway;
pub mod glyph;
pub mod guild;
pub mod position;
pub mod profile;
pub mod raffle;
pub mod reaction_role;

#[cfg(test)]
mod test;
