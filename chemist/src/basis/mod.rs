mod functions;
mod map;
mod set;

pub use functions::{ContractedGaussian, Primitive, Shell, ShellType};
pub use map::{BasisSetMap, BasisSetMapError, IndexKind, IndexRange, MappableShell};
pub use set::{AOBasisSet, AtomicBasisSet, BasisSetLibrary, BasisSetProvider};

use crate::periodic_table::ElementType;

/// Errors raised while assembling basis sets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasisError {
    #[error("got {coefficients} contraction coefficients but {exponents} exponents")]
    MismatchedPrimitives {
        coefficients: usize,
        exponents: usize,
    },
    #[error("no basis for element {0}")]
    MissingElement(ElementType),
}
