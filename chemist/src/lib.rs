//! Atoms, molecules and Gaussian basis sets, plus [`basis::BasisSetMap`] for translating
//! between atom, shell and atomic orbital indices of a basis set.

pub mod atom;
pub mod basis;
pub mod config;
pub mod molecule;
pub mod periodic_table;

pub use basis::{AOBasisSet, BasisSetMap, BasisSetMapError, IndexRange};
