//! Errors that can be returned from ring perception.

use thiserror::Error;

/// The graph handed to perception doesn't satisfy the adapter contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GraphInconsistency {
    #[error("bond {bond} connects atoms {} and {}, but there are only {atom_count} atoms", .atoms.0, .atoms.1)]
    BondOutOfRange {
        bond: usize,
        atoms: (usize, usize),
        atom_count: usize,
    },
    #[error("bond {bond} is in range but has no endpoints")]
    MissingBond { bond: usize },
    #[error("atom {atom} lists bond {bond} as incident, but the bond doesn't touch it")]
    IncidenceMismatch { atom: usize, bond: usize },
    #[error("bond {bond} touches atom {atom}, but the atom doesn't list it as incident")]
    MissingIncidence { atom: usize, bond: usize },
}

/// Something that should always hold for a well-formed graph didn't. These indicate a bug, not
/// bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvariantViolation {
    #[error("ring basis stopped at {found} rings, expected {expected}")]
    BasisIncomplete { found: usize, expected: usize },
    #[error("negative nullity: {bonds} bonds, {atoms} atoms, {components} components")]
    NegativeNullity {
        atoms: usize,
        bonds: usize,
        components: usize,
    },
}

/// Error returned from `perceive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RingError {
    #[error("inconsistent graph: {0}")]
    GraphInconsistency(#[from] GraphInconsistency),
    #[error("ring perception exceeded the message pool capacity of {capacity}")]
    ResourceExceeded { capacity: usize },
    #[error("ring perception invariant violated: {0}")]
    InvariantViolation(#[from] InvariantViolation),
}
impl RingError {
    /// Whether this error comes from the input rather than from the perception itself.
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::GraphInconsistency(_))
    }
}
