//! Guildkeeper
//!
//! Backend for guild-scoped community resources: embeds, forms, giveaways, raffles,
//! reaction-role messages and member profiles. Every resource hangs off a single guild
//! row and every mutation goes through the same engine, which checks ownership at each
//! level of the chain, keeps sibling collections densely ordered, deletes whole subtrees
//! and writes exactly one audit entry in the same transaction as the change.

pub mod model;
pub mod server;
