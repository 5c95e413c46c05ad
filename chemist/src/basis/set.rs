use std::{
    collections::HashMap,
    ops::{Add, AddAssign},
};

use nalgebra::Vector3;

use crate::{atom::Atom, molecule::Molecule, periodic_table::ElementType};

use super::{BasisError, ContractedGaussian, Primitive, Shell, ShellType};

/// Anything that can hand out the basis functions of a given atom.
pub trait BasisSetProvider {
    /// Returns the basis of `atom`, centered on the atom's position, if one exists.
    fn atomic_basis_set(&self, atom: &Atom) -> Option<AtomicBasisSet>;
}

/// A named library of atomic basis sets, one per element (e.g. STO-3G).
#[derive(Debug, Clone, Default)]
pub struct BasisSetLibrary {
    name: String,
    atomic_mapping: HashMap<ElementType, AtomicBasisSet>,
}

impl BasisSetLibrary {
    /// Create a new library given mappings from element type to the basis of that element
    pub(crate) fn new(name: String, atomic_mapping: HashMap<ElementType, AtomicBasisSet>) -> Self {
        Self {
            name,
            atomic_mapping,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the basis of a given element, centered at the origin, if it exists.
    pub fn for_element(&self, element: ElementType) -> Option<&AtomicBasisSet> {
        self.atomic_mapping.get(&element)
    }

    pub fn elements(&self) -> impl Iterator<Item = ElementType> + '_ {
        self.atomic_mapping.keys().copied()
    }
}

impl BasisSetProvider for BasisSetLibrary {
    fn atomic_basis_set(&self, atom: &Atom) -> Option<AtomicBasisSet> {
        self.for_element(atom.element_type)
            .map(|basis| basis.with_center(atom.position))
    }
}

/// Represents the shells placed on a single center.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicBasisSet {
    pub(crate) name: String,
    pub(crate) atomic_number: usize,
    pub(crate) center: Vector3<f64>,
    pub(crate) shells: Vec<Shell>,
}

impl AtomicBasisSet {
    pub fn new(name: impl Into<String>, atomic_number: usize, center: Vector3<f64>) -> Self {
        Self {
            name: name.into(),
            atomic_number,
            center,
            shells: Vec::new(),
        }
    }

    /// Appends a shell located at this basis set's center.
    pub fn add_shell(&mut self, pure: ShellType, l: u32, contraction: ContractedGaussian) {
        self.shells.push(Shell::new(pure, l, contraction, self.center));
    }

    /// Returns a copy of this basis set with it and all its shells moved to `center`.
    pub fn with_center(&self, center: Vector3<f64>) -> Self {
        Self {
            name: self.name.clone(),
            atomic_number: self.atomic_number,
            center,
            shells: self
                .shells
                .iter()
                .map(|shell| Shell { center, ..shell.clone() })
                .collect(),
        }
    }

    pub fn basis_set_name(&self) -> &str {
        &self.name
    }

    pub fn atomic_number(&self) -> usize {
        self.atomic_number
    }

    pub fn center(&self) -> &Vector3<f64> {
        &self.center
    }

    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    pub fn n_shells(&self) -> usize {
        self.shells.len()
    }

    pub fn n_aos(&self) -> usize {
        self.shells.iter().map(Shell::size).sum()
    }

    pub fn n_unique_primitives(&self) -> usize {
        self.shells.iter().map(Shell::n_unique_primitives).sum()
    }
}

/// The atomic orbital basis of a whole system: an ordered list of centers, each holding
/// its shells. Shells, AOs and primitives are numbered by flattening in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AOBasisSet {
    centers: Vec<AtomicBasisSet>,
    // running shell count after each center
    shell_ends: Vec<usize>,
}

impl AOBasisSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the basis of every atom of `molecule`, in molecule order.
    pub fn from_molecule(
        molecule: &Molecule,
        provider: &impl BasisSetProvider,
    ) -> Result<Self, BasisError> {
        let basis_set = molecule
            .atoms()
            .iter()
            .map(|atom| {
                provider
                    .atomic_basis_set(atom)
                    .ok_or(BasisError::MissingElement(atom.element_type))
            })
            .collect::<Result<Self, _>>()?;

        log::debug!(
            "basis set for {} atoms: {} shells, {} aos",
            molecule.len(),
            basis_set.n_shells(),
            basis_set.n_aos()
        );

        Ok(basis_set)
    }

    pub fn add_center(&mut self, center: AtomicBasisSet) {
        self.shell_ends.push(self.n_shells() + center.n_shells());
        self.centers.push(center);
    }

    pub fn centers(&self) -> &[AtomicBasisSet] {
        &self.centers
    }

    pub fn n_centers(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.iter().all(|center| center.shells.is_empty())
    }

    pub fn n_shells(&self) -> usize {
        self.shell_ends.last().copied().unwrap_or(0)
    }

    /// Iterates over every shell in basis set order.
    pub fn shells(&self) -> impl Iterator<Item = &Shell> + '_ {
        self.centers.iter().flat_map(|center| center.shells.iter())
    }

    /// Looks up a shell by its flattened index without walking the shells before it.
    pub fn shell(&self, index: usize) -> Option<&Shell> {
        // the first center whose shells end past `index`; empty centers are skipped
        let center = self.shell_ends.partition_point(|&end| end <= index);
        let first = center.checked_sub(1).map_or(0, |previous| self.shell_ends[previous]);
        self.centers.get(center)?.shells.get(index - first)
    }

    /// The index of the first shell of every center, followed by the total shell count.
    pub fn shell_offsets(&self) -> Vec<usize> {
        std::iter::once(0).chain(self.shell_ends.iter().copied()).collect()
    }

    pub fn n_aos(&self) -> usize {
        self.centers.iter().map(AtomicBasisSet::n_aos).sum()
    }

    /// The index of the first AO of every center, followed by the total AO count.
    pub fn ao_offsets(&self) -> Vec<usize> {
        offsets(self.centers.iter().map(AtomicBasisSet::n_aos))
    }

    pub fn n_unique_primitives(&self) -> usize {
        self.centers
            .iter()
            .map(AtomicBasisSet::n_unique_primitives)
            .sum()
    }

    pub fn unique_primitive(&self, index: usize) -> Option<&Primitive> {
        self.shells()
            .flat_map(|shell| shell.contraction.primitives())
            .nth(index)
    }

    /// The highest angular momentum of any shell, or `None` without shells.
    pub fn max_l(&self) -> Option<u32> {
        self.shells().map(Shell::l).max()
    }
}

fn offsets(counts: impl Iterator<Item = usize>) -> Vec<usize> {
    std::iter::once(0)
        .chain(counts.scan(0, |acc, count| {
            *acc += count;
            Some(*acc)
        }))
        .collect()
}

impl AddAssign<&AOBasisSet> for AOBasisSet {
    fn add_assign(&mut self, rhs: &AOBasisSet) {
        self.extend(rhs.centers.iter().cloned());
    }
}

impl Add<&AOBasisSet> for AOBasisSet {
    type Output = AOBasisSet;

    fn add(mut self, rhs: &AOBasisSet) -> Self::Output {
        self += rhs;
        self
    }
}

impl Extend<AtomicBasisSet> for AOBasisSet {
    fn extend<T: IntoIterator<Item = AtomicBasisSet>>(&mut self, iter: T) {
        for center in iter {
            self.add_center(center);
        }
    }
}

impl FromIterator<AtomicBasisSet> for AOBasisSet {
    fn from_iter<T: IntoIterator<Item = AtomicBasisSet>>(iter: T) -> Self {
        let mut basis_set = Self::new();
        basis_set.extend(iter);
        basis_set
    }
}
