pub mod errors;
pub mod oracle;
mod qubit;
pub(crate) mod symbols;

pub use oracle::{ChannelOracle, IdealChannel};
pub use qubit::{Gate, QubitState, StateVectorChannel};
pub use symbols::{Basis, ReceivedSymbol, Round, SentSymbol};
