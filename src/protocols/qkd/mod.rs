//! Quantum Key Distribution (QKD) Protocols.
//!
//! - **BB84**: prepare-and-measure key agreement with basis sifting.

pub mod bb84;
