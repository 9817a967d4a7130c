//! # Domain Layer (Inner Hexagon)
//!
//! Pure types and checks for the MSC and TRS precompiles: fixed-width
//! value objects, decoded storage records, and structural invariants.
//! NO I/O, NO async, NO external dependencies.
//!
//! This is the inner layer of the hexagonal architecture; dependencies
//! point inward only (adapters and engines depend on this, not vice versa).

pub mod entities;
pub mod invariants;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use value_objects::*;
