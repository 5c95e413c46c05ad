pub use basis_set::ConfigBasisSet;
pub use molecule::ConfigMolecule;

mod basis_set;
mod molecule;

use std::{fs::File, io::BufReader, num::ParseFloatError, path::Path};

use serde::de::DeserializeOwned;

use crate::basis::BasisError;

/// Errors raised while reading input files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid number: {0}")]
    ParseFloat(#[from] ParseFloatError),
    #[error("unsupported function type `{0}`")]
    UnknownFunctionType(String),
    #[error("shell has {angular_momenta} angular momenta but {rows} coefficient rows")]
    MissingCoefficients { angular_momenta: usize, rows: usize },
    #[error("atom {index} has {count} coordinates, expected 3")]
    Coordinates { index: usize, count: usize },
    #[error(transparent)]
    Basis(#[from] BasisError),
}

/// Reads a json file into `T`.
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::{
        basis::{AOBasisSet, BasisSetLibrary, BasisSetMap},
        molecule::Molecule,
    };

    use super::{load, ConfigBasisSet, ConfigError, ConfigMolecule};

    fn data(path: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data").join(path)
    }

    #[test]
    fn load_sto_3g_water() -> Result<(), ConfigError> {
        let basis_set = load::<ConfigBasisSet>(data("basis/STO-3G.json"))?;
        let library = BasisSetLibrary::try_from(basis_set)?;
        let molecule = Molecule::try_from(load::<ConfigMolecule>(data("mol/water.json"))?)?;

        let basis_set = AOBasisSet::from_molecule(&molecule, &library)?;
        assert_eq!(basis_set.n_unique_primitives(), 15);

        let map = BasisSetMap::new(&basis_set).unwrap();
        assert_eq!((map.n_atoms(), map.n_shells(), map.n_aos()), (3, 5, 7));
        assert_eq!(map.atom_to_ao(0).unwrap(), (0, 5));
        assert_eq!(map.ao_to_atom(6), Ok(2));

        Ok(())
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            load::<ConfigMolecule>(data("mol/does-not-exist.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
