//! # weightbank-hash
//!
//! Fast hash backends. Both store weights as decimal strings inside one
//! named hash, matching the wire contract of the key-value server.

pub mod memory;
#[cfg(feature = "redis")]
pub mod redis_backend;
pub mod wire;

pub use memory::MemoryHashBackend;
#[cfg(feature = "redis")]
pub use redis_backend::RedisHashBackend;
