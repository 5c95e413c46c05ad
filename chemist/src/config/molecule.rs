use nalgebra::Vector3;
use serde::Deserialize;

use crate::{atom::Atom, molecule::Molecule, periodic_table::ElementType};

use super::ConfigError;

/// Represents a full molecule in a config file.
/// A molecule is just a list of positioned atoms.
#[derive(Deserialize)]
pub struct ConfigMolecule(Vec<ConfigAtom>);

#[derive(Deserialize)]
struct ConfigAtom {
    element: ElementType,
    position: Vec<f64>,
}

impl TryFrom<ConfigMolecule> for Molecule {
    type Error = ConfigError;

    fn try_from(value: ConfigMolecule) -> Result<Self, Self::Error> {
        let ConfigMolecule(config_atoms) = value;

        config_atoms
            .into_iter()
            .enumerate()
            .map(|(index, atom)| {
                let &[x, y, z] = atom.position.as_slice() else {
                    return Err(ConfigError::Coordinates {
                        index,
                        count: atom.position.len(),
                    });
                };

                Ok(Atom::new(atom.element, Vector3::new(x, y, z)))
            })
            .collect()
    }
}
