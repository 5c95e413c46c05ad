use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::BasisError;

/// A single Gaussian primitive K*exp(-alpha*r^2), with K its contraction coefficient
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub coefficient: f64,
    pub exponent: f64,
}

/// Linear combination of many [`Primitive`]s
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractedGaussian(pub SmallVec<[Primitive; 6]>);

impl ContractedGaussian {
    /// Pairs up contraction coefficients with exponents. Both slices must be the same length.
    pub fn new(coefficients: &[f64], exponents: &[f64]) -> Result<Self, BasisError> {
        if coefficients.len() != exponents.len() {
            return Err(BasisError::MismatchedPrimitives {
                coefficients: coefficients.len(),
                exponents: exponents.len(),
            });
        }

        Ok(Self(
            coefficients
                .iter()
                .zip(exponents)
                .map(|(&coefficient, &exponent)| Primitive {
                    coefficient,
                    exponent,
                })
                .collect(),
        ))
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Whether the functions of a shell are real solid harmonics or Cartesian monomials.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShellType {
    #[default]
    Pure,
    Cartesian,
}

const ANGULAR_LABELS: &[char] = &['s', 'p', 'd', 'f', 'g', 'h', 'i', 'k', 'l', 'm', 'n'];

/// A group of atomic orbitals with the same center, angular momentum and contraction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    pub(crate) pure: ShellType,
    /// total angular momentum
    pub(crate) l: u32,
    pub(crate) contraction: ContractedGaussian,
    /// The position of this shell, in natural units
    pub(crate) center: Vector3<f64>,
}

impl Shell {
    pub fn new(
        pure: ShellType,
        l: u32,
        contraction: ContractedGaussian,
        center: Vector3<f64>,
    ) -> Self {
        Self {
            pure,
            l,
            contraction,
            center,
        }
    }

    pub fn pure(&self) -> ShellType {
        self.pure
    }

    pub fn l(&self) -> u32 {
        self.l
    }

    pub fn center(&self) -> &Vector3<f64> {
        &self.center
    }

    pub fn contracted_gaussian(&self) -> &ContractedGaussian {
        &self.contraction
    }

    /// Returns the number of atomic orbitals in this shell: 2l+1 for pure shells and
    /// (l+1)(l+2)/2 for cartesian ones.
    pub fn size(&self) -> usize {
        let l = self.l as usize;
        match self.pure {
            ShellType::Pure => 2 * l + 1,
            ShellType::Cartesian => (l + 1) * (l + 2) / 2,
        }
    }

    /// Every AO of the shell shares one contraction, so its primitives are the unique ones.
    pub fn n_unique_primitives(&self) -> usize {
        self.contraction.len()
    }

    pub fn unique_primitive(&self, index: usize) -> Option<&Primitive> {
        self.contraction.0.get(index)
    }

    /// Spectroscopic label of the angular momentum (`s`, `p`, `d`, ...).
    pub fn angular_label(&self) -> char {
        ANGULAR_LABELS
            .get(self.l as usize)
            .copied()
            .unwrap_or('?')
    }
}
