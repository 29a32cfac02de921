//! # provenance-storage
//!
//! SQLite persistence for the Provenance classification engine.
//! WAL mode, single write-serialized connection, `user_version` schema
//! migrations. Hosts the knowledge-base store (the `KnowledgeBase` impl
//! with atomic find-or-create upsert) and the trained-model store.

pub mod engine;
pub mod migrations;

pub use engine::SqliteStorage;
