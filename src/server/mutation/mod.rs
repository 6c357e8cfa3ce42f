//! Tenant-scoped mutation engine.
//!
//! Every mutating operation follows the same flow:
//!
//! 1. **Scope** (`guard`) - Each loaded resource is checked against the owner the caller
//!    stated, level by level from the guild down to the target
//! 2. **Position** (`ordering`) - Creates in an ordered collection take the lowest free
//!    position; explicit repositions are checked for collisions
//! 3. **Write** (`patch`) - Sparse patches touch only the fields they name
//! 4. **Audit** (`audit`) - Snapshot diff of the write, stored as one audit entry
//! 5. **Commit** (`unit_of_work`) - Data change and audit entry commit or roll back together
//!
//! Deletes go through `cascade`, which removes the full ownership subtree inside the same
//! transaction.

pub mod audit;
pub mod cascade;
pub mod guard;
pub mod ordering;
pub mod patch;
pub mod resource;
pub mod unit_of_work;

pub use guard::verify_scope;
pub use patch::Patch;
pub use resource::{Ordered, Resource, ResourceKind};
pub use unit_of_work::UnitOfWork;

#[cfg(test)]
mod test;
