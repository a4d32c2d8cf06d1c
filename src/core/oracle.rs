use crate::core::symbols::{Basis, ReceivedSymbol, SentSymbol};
use rand::Rng;

/// Boundary between the protocol loop and the transmission machinery.
///
/// One call carries one encoded symbol through the channel and measures
/// it in `receiver_basis`. Implementations must report the basis the
/// measurement actually used, and must honour the noiseless contract:
/// when the reported basis equals `sent.basis` the outcome is
/// `sent.bit`, otherwise the outcome is a fair coin.
pub trait ChannelOracle {
    fn measure(&mut self, sent: SentSymbol, receiver_basis: Basis) -> ReceivedSymbol;
}

/// Noiseless channel sampled in closed form.
///
/// Skips the state vector entirely: a matched basis reproduces the sent
/// bit, a mismatched one flips a fair coin.
#[derive(Debug, Clone)]
pub struct IdealChannel<R> {
    rng: R,
}

impl<R: Rng> IdealChannel<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChannelOracle for IdealChannel<R> {
    fn measure(&mut self, sent: SentSymbol, receiver_basis: Basis) -> ReceivedSymbol {
        let bit = if receiver_basis == sent.basis {
            sent.bit
        } else {
            self.rng.random_bool(0.5)
        };
        ReceivedSymbol {
            basis: receiver_basis,
            bit,
        }
    }
}

/// Oracle backed by a closure. Scripted test doubles use this.
pub struct FnChannel<F> {
    f: F,
}

impl<F> ChannelOracle for FnChannel<F>
where
    F: FnMut(SentSymbol, Basis) -> ReceivedSymbol,
{
    fn measure(&mut self, sent: SentSymbol, receiver_basis: Basis) -> ReceivedSymbol {
        (self.f)(sent, receiver_basis)
    }
}

/// Wraps a closure as a [`ChannelOracle`].
pub fn from_fn<F>(f: F) -> FnChannel<F>
where
    F: FnMut(SentSymbol, Basis) -> ReceivedSymbol,
{
    FnChannel { f }
}
