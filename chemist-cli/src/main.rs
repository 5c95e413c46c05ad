use std::path::PathBuf;

use anyhow::Context;
use chemist::{
    basis::{AOBasisSet, BasisSetLibrary, BasisSetMap},
    config::{self, ConfigBasisSet, ConfigMolecule},
    molecule::Molecule,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What basis set to use, in Basis Set Exchange json format
    #[arg(long, short)]
    basis_set: PathBuf,
    /// A path to the molecule to build the basis for
    #[arg(long, short)]
    molecule: PathBuf,

    #[command(subcommand)]
    command: MapCommand,
}

#[derive(Subcommand, Debug)]
enum MapCommand {
    /// Print every index table of the basis set
    Map {
        /// Print the tables as json instead
        #[arg(long)]
        json: bool,
    },
    /// Translate a single index
    Lookup {
        query: Query,
        index: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Query {
    AtomToShell,
    AtomToAo,
    ShellToAo,
    ShellToAtom,
    AoToShell,
    AoToAtom,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args: Args = Args::parse();

    let library: BasisSetLibrary = config::load::<ConfigBasisSet>(&args.basis_set)
        .and_then(BasisSetLibrary::try_from)
        .with_context(|| format!("loading basis set {}", args.basis_set.display()))?;
    let molecule: Molecule = config::load::<ConfigMolecule>(&args.molecule)
        .and_then(Molecule::try_from)
        .with_context(|| format!("loading molecule {}", args.molecule.display()))?;

    log::info!("using basis set {} for {} atoms", library.name(), molecule.len());
    let basis_set = AOBasisSet::from_molecule(&molecule, &library)?;
    let map = BasisSetMap::new(&basis_set)?;

    match args.command {
        MapCommand::Map { json: true } => {
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        MapCommand::Map { json: false } => print_tables(&basis_set, &map)?,
        MapCommand::Lookup { query, index } => {
            let result = match query {
                Query::AtomToShell => map.atom_to_shell(index)?.to_string(),
                Query::AtomToAo => map.atom_to_ao(index)?.to_string(),
                Query::ShellToAo => map.shell_to_ao(index)?.to_string(),
                Query::ShellToAtom => map.shell_to_atom(index)?.to_string(),
                Query::AoToShell => map.ao_to_shell(index)?.to_string(),
                Query::AoToAtom => map.ao_to_atom(index)?.to_string(),
            };
            println!("{result}");
        }
    }

    Ok(())
}

fn print_tables(basis_set: &AOBasisSet, map: &BasisSetMap) -> anyhow::Result<()> {
    println!(
        "{} atoms, {} shells, {} aos",
        map.n_atoms(),
        map.n_shells(),
        map.n_aos()
    );

    for atom in 0..map.n_atoms() {
        println!(
            "atom {atom:>3}: shells {:<10} aos {}",
            map.atom_to_shell(atom)?.to_string(),
            map.atom_to_ao(atom)?
        );
    }

    for (index, shell) in basis_set.shells().enumerate() {
        println!(
            "shell {index:>3} ({}): aos {:<10} atom {}",
            shell.angular_label(),
            map.shell_to_ao(index)?.to_string(),
            map.shell_to_atom(index)?
        );
    }

    Ok(())
}
