pub mod cipher;
mod core;
mod exchange;
pub mod protocols;

pub use crate::core::{
    Basis, ChannelOracle, Gate, IdealChannel, QubitState, ReceivedSymbol, Round, SentSymbol,
    StateVectorChannel, errors, oracle,
};
pub use crate::exchange::{Exchange, ExchangeResult};
