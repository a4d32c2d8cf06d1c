//! Quantum Cryptography Protocols.
//!
//! This module contains the key agreement protocols the simulation can
//! run over a channel oracle.

pub mod qkd;
pub use qkd::bb84;
