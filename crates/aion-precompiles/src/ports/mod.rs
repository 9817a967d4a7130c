//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions between the precompile engines and the outside world.
//!
//! - **Driving (inbound)**: [`inbound::PrecompiledContract`], the single
//!   entry point the VM calls into.
//! - **Driven (outbound)**: [`outbound::WordStore`], [`outbound::CryptoProvider`].
//!
//! No concrete implementations live in this module.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
