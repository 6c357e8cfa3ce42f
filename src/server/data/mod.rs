//! Database repository layer.
//!
//! Writes go through `mutation::UnitOfWork`; the repositories here cover reads that sit
//! outside a mutation, such as reading back the audit trail.

pub mod audit_log;

#[cfg(test)]
mod test;
