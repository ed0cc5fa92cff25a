//! Integration tests for the coercion engine.
//!
//! Exercises the public API end to end: scalar dispatch chains, default
//! wrappers, collection coercion, capability-carrying caller types, and the
//! time/ascii conveniences.

mod arrays;
mod fixtures;
mod time;
