use crate::core::errors::GateError;
use crate::core::oracle::ChannelOracle;
use crate::core::symbols::{Basis, ReceivedSymbol, SentSymbol};
use ndarray::{Array1, Array2, arr2, array};
use num_complex::Complex64;
use rand::Rng;

/// Represents a single-qubit gate.
///
/// A gate is defined by its 2x2 unitary matrix.
pub struct Gate {
    matrix: Array2<Complex64>,
}

impl Gate {
    /// Creates a new `Gate` from a unitary matrix.
    ///
    /// # Arguments
    ///
    /// * `matrix` - A 2x2, unitary `Array2<Complex64>`.
    ///
    /// # Errors
    ///
    /// Returns a `GateError` if:
    /// - The matrix is not 2x2.
    /// - The matrix is not unitary.
    pub fn new(matrix: Array2<Complex64>) -> Result<Self, GateError> {
        if matrix.dim() != (2, 2) {
            return Err(GateError::InvalidDimensions);
        }

        if !Self::check_unitary(&matrix) {
            return Err(GateError::NonUnitary);
        }

        Ok(Self { matrix })
    }

    /// Checks if a given matrix is unitary
    fn check_unitary(matrix: &Array2<Complex64>) -> bool {
        let eye = Array2::<Complex64>::eye(2);

        let u_dagger = matrix.t().mapv(|x| x.conj());
        let product = matrix.dot(&u_dagger);

        product
            .iter()
            .zip(eye.iter())
            .all(|(a, b)| (*a - *b).norm() < 1e-6)
    }

    // --- Standard Gates ---

    /// Creates a Pauli-X gate (NOT gate).
    pub fn x() -> Gate {
        Gate::new(arr2(&[
            [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        ]))
        .unwrap()
    }

    /// Creates a Hadamard gate.
    pub fn h() -> Gate {
        let factor = 1.0 / 2.0_f64.sqrt();
        Gate::new(arr2(&[
            [Complex64::new(factor, 0.0), Complex64::new(factor, 0.0)],
            [Complex64::new(factor, 0.0), Complex64::new(-factor, 0.0)],
        ]))
        .unwrap()
    }
}

/// A pure single-qubit state.
///
/// Holds the two complex amplitudes over the computational basis.
#[derive(Debug, Clone)]
pub struct QubitState {
    amplitudes: Array1<Complex64>,
}

impl QubitState {
    /// Creates a qubit in |0⟩.
    pub fn new() -> Self {
        Self {
            amplitudes: array![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        }
    }

    /// Encodes one symbol: X for a one bit, then H for the diagonal frame.
    pub fn prepare(symbol: SentSymbol) -> Self {
        let mut state = Self::new();
        if symbol.bit {
            state.apply(&Gate::x());
        }
        if symbol.basis == Basis::Diagonal {
            state.apply(&Gate::h());
        }
        state
    }

    /// Applies a gate to the state.
    pub fn apply(&mut self, gate: &Gate) {
        self.amplitudes = gate.matrix.dot(&self.amplitudes);
    }

    /// Sum of squared amplitude norms; 1 for every reachable state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Measures the qubit in `basis`, consuming the state.
    ///
    /// A diagonal measurement rotates back into the computational frame
    /// first. Taking `self` by value keeps a measured qubit from being
    /// read twice.
    pub fn measure<R: Rng + ?Sized>(mut self, basis: Basis, rng: &mut R) -> bool {
        if basis == Basis::Diagonal {
            self.apply(&Gate::h());
        }

        let p_one = self.amplitudes[1].norm_sqr();
        let roll: f64 = rng.random();
        roll < p_one
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::new()
    }
}

/// Channel oracle that carries each symbol through a simulated qubit.
///
/// Produces the same distribution as [`IdealChannel`] by unitary
/// evolution instead of closed-form sampling.
///
/// [`IdealChannel`]: crate::core::oracle::IdealChannel
#[derive(Debug, Clone)]
pub struct StateVectorChannel<R> {
    rng: R,
}

impl<R: Rng> StateVectorChannel<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChannelOracle for StateVectorChannel<R> {
    fn measure(&mut self, sent: SentSymbol, receiver_basis: Basis) -> ReceivedSymbol {
        let bit = QubitState::prepare(sent).measure(receiver_basis, &mut self.rng);
        ReceivedSymbol {
            basis: receiver_basis,
            bit,
        }
    }
}
