//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the ports: today, just the in-memory
//! `WordStore` used by tests and by embedders without a real backing
//! cache wired up yet.

pub mod crypto_adapter;
pub mod memory_store;

pub use crypto_adapter::*;
pub use memory_store::*;
