//! # hearth-memory
//!
//! Persistent fact memory for the Hearth agent: a key/value mapping held in
//! memory and mirrored to a single JSON document on disk. The whole document
//! is loaded once when the store opens and rewritten on every mutation.

pub mod store;

pub use store::{Facts, LoadOutcome, MemoryStore};
