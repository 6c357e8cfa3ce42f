//! Guildkeeper Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! guildkeeper mutation engine. This crate offers a builder pattern for creating test
//! contexts with in-memory SQLite databases and customizable table schemas, plus
//! factories that insert resources directly, bypassing the engine.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders and `create_*` shorthands per resource family
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_embed_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_embed_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let guild = factory::create_guild(db).await?;
//!     let embed = factory::create_embed(db, guild.guild_id).await?;
//!     // Perform operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
