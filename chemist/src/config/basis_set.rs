use std::collections::HashMap;

use nalgebra::Vector3;
use serde::Deserialize;

use crate::{
    basis::{AtomicBasisSet, BasisSetLibrary, ContractedGaussian, ShellType},
    periodic_table::ElementType,
};

use super::ConfigError;

/// A basis set in the Basis Set Exchange json format.
#[derive(Deserialize)]
pub struct ConfigBasisSet {
    #[serde(default)]
    name: String,
    elements: HashMap<ElementType, ConfigElectronicConfiguration>,
}

#[derive(Deserialize)]
struct ConfigElectronicConfiguration {
    // ECP-only entries don't have any
    #[serde(default)]
    electron_shells: Vec<ConfigElectronShell>,
}

#[derive(Deserialize)]
struct ConfigElectronShell {
    function_type: String,
    angular_momentum: Vec<u32>,
    exponents: Vec<String>,
    coefficients: Vec<Vec<String>>,
}

impl ConfigElectronShell {
    fn shell_type(&self) -> Result<ShellType, ConfigError> {
        match self.function_type.as_str() {
            "gto" | "gto_spherical" => Ok(ShellType::Pure),
            "gto_cartesian" => Ok(ShellType::Cartesian),
            other => Err(ConfigError::UnknownFunctionType(other.to_owned())),
        }
    }

    /// Pairs every coefficient row with its angular momentum. SP-style entries list one
    /// angular momentum per row, general contractions share a single one between all rows.
    fn rows(&self) -> Result<impl Iterator<Item = (u32, &[String])>, ConfigError> {
        let angular_momenta = self.angular_momentum.len();
        let rows = self.coefficients.len();

        let valid = match angular_momenta {
            0 => false,
            1 => rows >= 1,
            _ => rows == angular_momenta,
        };
        if !valid {
            return Err(ConfigError::MissingCoefficients {
                angular_momenta,
                rows,
            });
        }

        Ok(self
            .coefficients
            .iter()
            .enumerate()
            .map(move |(index, row)| {
                let l = self.angular_momentum[index.min(angular_momenta - 1)];
                (l, row.as_slice())
            }))
    }
}

fn parse_all(values: &[String]) -> Result<Vec<f64>, ConfigError> {
    values
        .iter()
        .map(|value| Ok(value.trim().parse::<f64>()?))
        .collect()
}

impl TryFrom<ConfigBasisSet> for BasisSetLibrary {
    type Error = ConfigError;

    fn try_from(value: ConfigBasisSet) -> Result<Self, Self::Error> {
        let mut atomic_mapping = HashMap::with_capacity(value.elements.len());

        for (element, configuration) in value.elements {
            let mut atomic_basis =
                AtomicBasisSet::new(&value.name, element.atomic_number(), Vector3::zeros());

            for electron_shell in &configuration.electron_shells {
                let shell_type = electron_shell.shell_type()?;
                let exponents = parse_all(&electron_shell.exponents)?;

                for (l, row) in electron_shell.rows()? {
                    let coefficients = parse_all(row)?;
                    let contraction = ContractedGaussian::new(&coefficients, &exponents)?;
                    atomic_basis.add_shell(shell_type, l, contraction);
                }
            }

            log::trace!(
                "{element}: {} shells, {} aos",
                atomic_basis.n_shells(),
                atomic_basis.n_aos()
            );
            atomic_mapping.insert(element, atomic_basis);
        }

        log::debug!(
            "basis set library {:?} with {} elements",
            value.name,
            atomic_mapping.len()
        );

        Ok(Self::new(value.name, atomic_mapping))
    }
}
