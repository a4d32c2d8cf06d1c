use rand::Rng;

/// Preparation and measurement frame for a single qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// Computational (Z) frame.
    Rectilinear,
    /// Hadamard (X) frame.
    Diagonal,
}

impl Basis {
    /// Draws a basis uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Basis::Diagonal
        } else {
            Basis::Rectilinear
        }
    }

    /// The opposite frame.
    pub fn other(self) -> Self {
        match self {
            Basis::Rectilinear => Basis::Diagonal,
            Basis::Diagonal => Basis::Rectilinear,
        }
    }
}

/// The sender's side of one round: a bit encoded in a basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentSymbol {
    pub bit: bool,
    pub basis: Basis,
}

impl SentSymbol {
    /// Draws bit and basis independently and uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            bit: rng.random_bool(0.5),
            basis: Basis::random(rng),
        }
    }
}

/// The receiver's side of one round: the basis the measurement used
/// and the bit it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceivedSymbol {
    pub basis: Basis,
    pub bit: bool,
}

/// One transmission. A run's transcript is its rounds in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub sent: SentSymbol,
    pub received: ReceivedSymbol,
}

impl Round {
    /// True when both parties used the same basis, so the round
    /// survives sifting.
    pub fn bases_match(&self) -> bool {
        self.sent.basis == self.received.basis
    }
}
