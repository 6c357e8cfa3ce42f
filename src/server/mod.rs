//! Server-side business logic and data access.
//!
//! # Architecture
//!
//! - **Service Layer** (`service/`) - One service per resource family; each operation opens a
//!   unit of work, runs the ownership chain and commits with its audit entry
//! - **Mutation Layer** (`mutation/`) - Scope guard, sparse patches, audit diffs, sibling
//!   ordering, cascade planning and the unit of work tying them together
//! - **Data Layer** (`data/`) - Read-side repositories (audit log, lookups)
//! - **Model Layer** (`model/`) - Caller context and the mutable field sets of each resource
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Tracing subscriber, database connection and migrations

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod mutation;
pub mod service;
pub mod startup;
