use std::{fmt, ops::Range};

use itertools::Itertools;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::{AOBasisSet, Shell};

/// A half-open range of indices, `[begin, end)`. `begin` never exceeds `end`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawIndexRange")]
pub struct IndexRange {
    begin: usize,
    end: usize,
}

impl IndexRange {
    /// # Panics
    ///
    /// Panics if `begin > end`. Use [`IndexRange::try_new`] for unchecked input.
    pub const fn new(begin: usize, end: usize) -> Self {
        assert!(begin <= end, "index range ends before it begins");
        Self { begin, end }
    }

    pub const fn try_new(begin: usize, end: usize) -> Result<Self, BasisSetMapError> {
        if begin > end {
            return Err(BasisSetMapError::ReversedRange { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// The first index in the range.
    pub const fn begin(&self) -> usize {
        self.begin
    }

    /// One past the last index in the range.
    pub const fn end(&self) -> usize {
        self.end
    }

    pub const fn len(&self) -> usize {
        self.end - self.begin
    }

    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub const fn contains(&self, index: usize) -> bool {
        self.begin <= index && index < self.end
    }

    pub fn iter(&self) -> Range<usize> {
        self.begin..self.end
    }
}

impl From<IndexRange> for Range<usize> {
    fn from(range: IndexRange) -> Self {
        range.begin..range.end
    }
}

impl TryFrom<(usize, usize)> for IndexRange {
    type Error = BasisSetMapError;

    fn try_from((begin, end): (usize, usize)) -> Result<Self, Self::Error> {
        Self::try_new(begin, end)
    }
}

#[derive(Deserialize)]
struct RawIndexRange {
    begin: usize,
    end: usize,
}

impl TryFrom<RawIndexRange> for IndexRange {
    type Error = BasisSetMapError;

    fn try_from(RawIndexRange { begin, end }: RawIndexRange) -> Result<Self, Self::Error> {
        Self::try_new(begin, end)
    }
}

impl PartialEq<(usize, usize)> for IndexRange {
    fn eq(&self, &(begin, end): &(usize, usize)) -> bool {
        self.begin == begin && self.end == end
    }
}

impl IntoIterator for IndexRange {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

/// Which index space a lookup was made in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexKind {
    Atom,
    Shell,
    Ao,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IndexKind::Atom => "atom",
            IndexKind::Shell => "shell",
            IndexKind::Ao => "AO",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BasisSetMapError {
    #[error("cannot map a basis set without any shells")]
    EmptyBasisSet,
    #[error("{kind} index {index} is not in the range [0, {len})")]
    OutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },
    #[error("atom {0} has no shells")]
    EmptyAtom(usize),
    #[error("shell {0} has no AOs")]
    EmptyShell(usize),
    #[error("index range [{begin}, {end}) ends before it begins")]
    ReversedRange { begin: usize, end: usize },
    #[error("invalid basis set map tables: {0}")]
    InvalidTables(String),
}

/// The part of a shell the index mapping needs: how many AOs it holds and where it sits.
pub trait MappableShell {
    fn n_aos(&self) -> usize;
    fn center(&self) -> &Vector3<f64>;
}

impl MappableShell for Shell {
    fn n_aos(&self) -> usize {
        self.size()
    }

    fn center(&self) -> &Vector3<f64> {
        Shell::center(self)
    }
}

/// Translates between atom, shell and AO indices of a basis set.
///
/// Shells are assigned to atoms by their centers: consecutive shells whose centers are
/// bit-for-bit equal belong to the same atom, and every change of center starts a new
/// atom. There is no tolerance on the comparison, so `0.0` and `-0.0` are different
/// centers while two identical NaN coordinates are the same one.
///
/// The map is built once and never changes. It holds four tables:
/// - atom -> range of shells
/// - shell -> range of AOs
/// - AO -> shell
/// - shell -> atom
///
/// AO <-> atom lookups chain the AO <-> shell and shell <-> atom tables.
///
/// The default map is empty; every lookup on it fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "MapTables", try_from = "MapTables")]
pub struct BasisSetMap {
    atom_to_shell: Vec<IndexRange>,
    shell_to_ao: Vec<IndexRange>,
    ao_to_shell: Vec<usize>,
    shell_to_atom: Vec<usize>,
}

impl BasisSetMap {
    /// Builds the map for the shells of `basis_set`.
    pub fn new(basis_set: &AOBasisSet) -> Result<Self, BasisSetMapError> {
        Self::from_shells(basis_set.shells())
    }

    /// Builds the map in a single pass over `shells`, which must hold at least one shell
    /// and list the shells of each atom next to each other. Every shell needs at least
    /// one AO.
    pub fn from_shells<'a, S>(
        shells: impl IntoIterator<Item = &'a S>,
    ) -> Result<Self, BasisSetMapError>
    where
        S: MappableShell + 'a,
    {
        let mut shells = shells.into_iter().peekable();
        let mut previous_center = *shells
            .peek()
            .ok_or(BasisSetMapError::EmptyBasisSet)?
            .center();

        let mut map = Self::default();
        let mut atom_begin = 0;
        let mut ao_offset = 0;

        for (shell_index, shell) in shells.enumerate() {
            let n_aos = shell.n_aos();
            if n_aos == 0 {
                return Err(BasisSetMapError::EmptyShell(shell_index));
            }
            let aos = IndexRange::new(ao_offset, ao_offset + n_aos);
            map.shell_to_ao.push(aos);
            map.ao_to_shell.extend(std::iter::repeat(shell_index).take(n_aos));
            ao_offset += n_aos;

            if !same_center(shell.center(), &previous_center) {
                let atom = IndexRange::new(atom_begin, shell_index);
                log::trace!("atom {} -> shells {atom}", map.atom_to_shell.len());
                map.atom_to_shell.push(atom);
                previous_center = *shell.center();
                atom_begin = shell_index;
            }

            log::trace!(
                "shell {shell_index} -> aos {aos}, atom {}",
                map.atom_to_shell.len()
            );
            map.shell_to_atom.push(map.atom_to_shell.len());
        }

        let last_atom = IndexRange::new(atom_begin, map.shell_to_ao.len());
        map.atom_to_shell.push(last_atom);

        log::debug!(
            "basis set map: {} atoms, {} shells, {} aos",
            map.n_atoms(),
            map.n_shells(),
            map.n_aos()
        );

        Ok(map)
    }

    pub fn n_atoms(&self) -> usize {
        self.atom_to_shell.len()
    }

    pub fn n_shells(&self) -> usize {
        self.shell_to_ao.len()
    }

    pub fn n_aos(&self) -> usize {
        self.ao_to_shell.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shell_to_ao.is_empty()
    }

    /// Returns the range of shells centered on atom `atom`.
    pub fn atom_to_shell(&self, atom: usize) -> Result<IndexRange, BasisSetMapError> {
        lookup(&self.atom_to_shell, IndexKind::Atom, atom)
    }

    /// Returns the range of AOs centered on atom `atom`.
    pub fn atom_to_ao(&self, atom: usize) -> Result<IndexRange, BasisSetMapError> {
        let shells = self.atom_to_shell(atom)?;
        if shells.is_empty() {
            return Err(BasisSetMapError::EmptyAtom(atom));
        }

        let first = self.shell_to_ao(shells.begin())?;
        let last = self.shell_to_ao(shells.end() - 1)?;
        Ok(IndexRange::new(first.begin(), last.end()))
    }

    /// Returns the range of AOs that make up shell `shell`.
    pub fn shell_to_ao(&self, shell: usize) -> Result<IndexRange, BasisSetMapError> {
        lookup(&self.shell_to_ao, IndexKind::Shell, shell)
    }

    /// Returns the atom that shell `shell` is centered on.
    pub fn shell_to_atom(&self, shell: usize) -> Result<usize, BasisSetMapError> {
        lookup(&self.shell_to_atom, IndexKind::Shell, shell)
    }

    /// Returns the shell that AO `ao` belongs to.
    pub fn ao_to_shell(&self, ao: usize) -> Result<usize, BasisSetMapError> {
        lookup(&self.ao_to_shell, IndexKind::Ao, ao)
    }

    /// Returns the atom that AO `ao` is centered on.
    pub fn ao_to_atom(&self, ao: usize) -> Result<usize, BasisSetMapError> {
        self.shell_to_atom(self.ao_to_shell(ao)?)
    }
}

fn same_center(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.to_bits() == y.to_bits())
}

fn lookup<T: Copy>(table: &[T], kind: IndexKind, index: usize) -> Result<T, BasisSetMapError> {
    table
        .get(index)
        .copied()
        .ok_or(BasisSetMapError::OutOfRange {
            kind,
            index,
            len: table.len(),
        })
}

// the other two tables follow from these
impl PartialEq for BasisSetMap {
    fn eq(&self, other: &Self) -> bool {
        self.atom_to_shell == other.atom_to_shell && self.shell_to_ao == other.shell_to_ao
    }
}

impl Eq for BasisSetMap {}

/// Serialized form of a [`BasisSetMap`].
#[derive(Serialize, Deserialize)]
struct MapTables {
    atom_to_shell: Vec<IndexRange>,
    shell_to_ao: Vec<IndexRange>,
}

impl From<BasisSetMap> for MapTables {
    fn from(map: BasisSetMap) -> Self {
        Self {
            atom_to_shell: map.atom_to_shell,
            shell_to_ao: map.shell_to_ao,
        }
    }
}

impl TryFrom<MapTables> for BasisSetMap {
    type Error = BasisSetMapError;

    fn try_from(tables: MapTables) -> Result<Self, Self::Error> {
        let MapTables {
            atom_to_shell,
            shell_to_ao,
        } = tables;

        check_partition("atom", &atom_to_shell, shell_to_ao.len())?;
        let n_aos = shell_to_ao.last().map_or(0, IndexRange::end);
        check_partition("shell", &shell_to_ao, n_aos)?;

        let ao_to_shell = shell_to_ao
            .iter()
            .enumerate()
            .flat_map(|(shell, aos)| aos.iter().map(move |_| shell))
            .collect();
        let shell_to_atom = atom_to_shell
            .iter()
            .enumerate()
            .flat_map(|(atom, shells)| shells.iter().map(move |_| atom))
            .collect();

        Ok(Self {
            atom_to_shell,
            shell_to_ao,
            ao_to_shell,
            shell_to_atom,
        })
    }
}

/// Checks that `ranges` are non-empty, adjacent, and cover exactly `[0, len)`.
fn check_partition(kind: &str, ranges: &[IndexRange], len: usize) -> Result<(), BasisSetMapError> {
    let invalid = |reason: String| Err(BasisSetMapError::InvalidTables(reason));

    if let Some(range) = ranges.iter().find(|range| range.begin() >= range.end()) {
        return invalid(format!("{kind} range {range} is empty"));
    }
    if let Some(first) = ranges.first().filter(|range| range.begin() != 0) {
        return invalid(format!("first {kind} range {first} does not start at 0"));
    }
    if let Some((a, b)) = ranges.iter().tuple_windows().find(|(a, b)| a.end() != b.begin()) {
        return invalid(format!("{kind} ranges {a} and {b} are not adjacent"));
    }
    if ranges.last().map_or(0, IndexRange::end) != len {
        return invalid(format!("{kind} ranges do not cover [0, {len})"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use nalgebra::Vector3;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    struct TestShell {
        n_aos: usize,
        center: Vector3<f64>,
    }

    impl MappableShell for TestShell {
        fn n_aos(&self) -> usize {
            self.n_aos
        }

        fn center(&self) -> &Vector3<f64> {
            &self.center
        }
    }

    macro_rules! shells {
        ($(
            $n_aos:expr => ($x:expr, $y:expr, $z:expr)
        ),*) => {
            vec![
                $(TestShell {
                    n_aos: $n_aos,
                    center: Vector3::new($x, $y, $z),
                }),*
            ]
        };
    }

    fn water() -> Vec<TestShell> {
        shells! {
            1 => (0.0, 2.984338304722454, -4.109397663896704),
            1 => (0.0, 0.0, 0.0),
            1 => (0.0, 0.0, 0.0),
            3 => (0.0, 0.0, 0.0),
            1 => (0.0, 2.984338304722454, 4.109397663896704)
        }
    }

    /// Random shells over a handful of atoms; neighbouring atoms never share a center.
    fn random_shells(rng: &mut StdRng) -> Vec<TestShell> {
        let n_atoms = rng.gen_range(1..8);
        (0..n_atoms)
            .flat_map(|atom| {
                let center = Vector3::new(atom as f64, rng.gen(), rng.gen());
                (0..rng.gen_range(1..6))
                    .map(|_| TestShell {
                        n_aos: rng.gen_range(1..16),
                        center,
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn tables(map: &BasisSetMap) -> (Vec<(usize, usize)>, Vec<(usize, usize)>) {
        let ranges = |table: &[IndexRange]| {
            table
                .iter()
                .map(|range| (range.begin(), range.end()))
                .collect::<Vec<_>>()
        };
        (ranges(&map.atom_to_shell[..]), ranges(&map.shell_to_ao[..]))
    }

    #[test]
    fn water_tables() {
        let map = BasisSetMap::from_shells(&water()).unwrap();

        let (atom_to_shell, shell_to_ao) = tables(&map);
        assert_eq!(atom_to_shell, [(0, 1), (1, 4), (4, 5)]);
        assert_eq!(shell_to_ao, [(0, 1), (1, 2), (2, 3), (3, 6), (6, 7)]);
        assert_eq!(map.ao_to_shell, [0, 1, 2, 3, 3, 3, 4]);
        assert_eq!(map.shell_to_atom, [0, 1, 1, 1, 2]);

        assert_eq!((map.n_atoms(), map.n_shells(), map.n_aos()), (3, 5, 7));
        assert_eq!(map.atom_to_ao(1), Ok(IndexRange::new(1, 6)));
        assert_eq!(map.ao_to_atom(4), Ok(1));
        assert_eq!(map.shell_to_atom(4), Ok(2));
        assert!(map.shell_to_ao(3).unwrap().contains(5));
        assert_eq!(map.shell_to_ao(3).unwrap().iter().collect::<Vec<_>>(), [3, 4, 5]);
    }

    #[test]
    fn single_shell() {
        let map = BasisSetMap::from_shells(&shells! { 3 => (1.0, 2.0, 3.0) }).unwrap();

        assert_eq!(map.atom_to_shell(0), Ok(IndexRange::new(0, 1)));
        assert_eq!(map.atom_to_ao(0), Ok(IndexRange::new(0, 3)));
        assert_eq!(map.n_atoms(), 1);
    }

    #[test]
    fn empty_basis_set_is_rejected() {
        assert_eq!(
            BasisSetMap::from_shells(&Vec::<TestShell>::new()),
            Err(BasisSetMapError::EmptyBasisSet)
        );
        assert_eq!(
            BasisSetMap::new(&AOBasisSet::new()),
            Err(BasisSetMapError::EmptyBasisSet)
        );
    }

    #[test]
    fn centers_are_compared_exactly() {
        let map = BasisSetMap::from_shells(&shells! {
            1 => (0.0, 0.0, 0.1 + 0.2),
            1 => (0.0, 0.0, 0.3)
        })
        .unwrap();
        assert_eq!(map.n_atoms(), 2);

        // returning to an earlier center still starts a new atom
        let map = BasisSetMap::from_shells(&shells! {
            1 => (0.0, 0.0, 0.0),
            1 => (1.0, 0.0, 0.0),
            1 => (0.0, 0.0, 0.0)
        })
        .unwrap();
        assert_eq!(map.shell_to_atom, [0, 1, 2]);
    }

    #[test]
    fn signed_zeros_are_different_centers() {
        let map = BasisSetMap::from_shells(&shells! {
            1 => (0.0, 0.0, 0.0),
            1 => (-0.0, 0.0, 0.0)
        })
        .unwrap();

        assert_eq!(map.n_atoms(), 2);
        assert_eq!(map.shell_to_atom, [0, 1]);
    }

    #[test]
    fn nan_centers_group_by_bits() {
        let map = BasisSetMap::from_shells(&shells! {
            1 => (f64::NAN, 0.0, 0.0),
            2 => (f64::NAN, 0.0, 0.0),
            1 => (0.0, 0.0, 0.0)
        })
        .unwrap();

        let (atom_to_shell, _) = tables(&map);
        assert_eq!(atom_to_shell, [(0, 2), (2, 3)]);
        assert_eq!(map.atom_to_ao(0), Ok(IndexRange::new(0, 3)));
        assert!(atom_to_shell.iter().all(|(begin, end)| begin < end));
    }

    #[test]
    fn shells_without_aos_are_rejected() {
        assert_eq!(
            BasisSetMap::from_shells(&shells! {
                1 => (0.0, 0.0, 0.0),
                0 => (0.0, 0.0, 0.0)
            }),
            Err(BasisSetMapError::EmptyShell(1))
        );
        assert_eq!(
            BasisSetMap::from_shells(&shells! { 0 => (0.0, 0.0, 0.0) }),
            Err(BasisSetMapError::EmptyShell(0))
        );
    }

    #[test]
    fn reversed_ranges_are_rejected() {
        assert_eq!(
            IndexRange::try_new(3, 1),
            Err(BasisSetMapError::ReversedRange { begin: 3, end: 1 })
        );
        assert_eq!(IndexRange::try_from((3_usize, 1)), IndexRange::try_new(3, 1));
        assert_eq!(IndexRange::try_from((1_usize, 3)), Ok(IndexRange::new(1, 3)));
        assert_eq!(IndexRange::try_new(2, 2).map(|range| range.len()), Ok(0));

        assert!(serde_json::from_str::<IndexRange>(r#"{"begin":3,"end":1}"#).is_err());
        let range: IndexRange = serde_json::from_str(r#"{"begin":1,"end":3}"#).unwrap();
        assert_eq!(range.len(), 2);
    }

    #[test]
    #[should_panic]
    fn new_panics_on_reversed_range() {
        IndexRange::new(3, 1);
    }

    #[test]
    fn out_of_range_lookups() {
        let map = BasisSetMap::from_shells(&water()).unwrap();
        let out_of_range = |kind, index, len| BasisSetMapError::OutOfRange { kind, index, len };

        assert_eq!(map.atom_to_shell(3).unwrap_err(), out_of_range(IndexKind::Atom, 3, 3));
        assert_eq!(map.atom_to_ao(3).unwrap_err(), out_of_range(IndexKind::Atom, 3, 3));
        assert_eq!(map.shell_to_ao(5).unwrap_err(), out_of_range(IndexKind::Shell, 5, 5));
        assert_eq!(map.shell_to_atom(5).unwrap_err(), out_of_range(IndexKind::Shell, 5, 5));
        assert_eq!(map.ao_to_shell(7).unwrap_err(), out_of_range(IndexKind::Ao, 7, 7));
        assert_eq!(
            map.ao_to_atom(usize::MAX).unwrap_err(),
            out_of_range(IndexKind::Ao, usize::MAX, 7)
        );

        assert_eq!(
            map.ao_to_shell(7).unwrap_err().to_string(),
            "AO index 7 is not in the range [0, 7)"
        );
    }

    #[test]
    fn taken_map_is_empty() {
        let mut map = BasisSetMap::from_shells(&water()).unwrap();
        let copy = map.clone();
        let taken = std::mem::take(&mut map);

        assert_eq!(taken, copy);
        assert!(map.is_empty());
        assert_eq!((map.n_atoms(), map.n_shells(), map.n_aos()), (0, 0, 0));
        assert!(map.atom_to_shell(0).is_err());
        assert!(map.atom_to_ao(0).is_err());
        assert!(map.shell_to_ao(0).is_err());
        assert!(map.shell_to_atom(0).is_err());
        assert!(map.ao_to_shell(0).is_err());
        assert!(map.ao_to_atom(0).is_err());
    }

    #[test]
    fn copies_answer_the_same() {
        let map = BasisSetMap::from_shells(&water()).unwrap();
        let copy = map.clone();

        assert_eq!(copy, map);
        for ao in 0..map.n_aos() {
            assert_eq!(copy.ao_to_atom(ao), map.ao_to_atom(ao));
            assert_eq!(map.ao_to_atom(ao), map.ao_to_atom(ao));
        }
        for atom in 0..map.n_atoms() {
            assert_eq!(copy.atom_to_ao(atom), map.atom_to_ao(atom));
        }

        let other = BasisSetMap::from_shells(&shells! { 1 => (0.0, 0.0, 0.0) }).unwrap();
        assert_ne!(other, map);
    }

    #[test]
    fn random_basis_sets_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..64 {
            let shells = random_shells(&mut rng);
            let map = BasisSetMap::from_shells(&shells).unwrap();

            assert_eq!(map.n_shells(), shells.len());
            assert_eq!(map.n_aos(), shells.iter().map(|shell| shell.n_aos).sum::<usize>());

            // atoms partition the shells, shells partition the AOs
            let (atom_to_shell, shell_to_ao) = tables(&map);
            for (table, len) in [(atom_to_shell, map.n_shells()), (shell_to_ao, map.n_aos())] {
                assert_eq!(table.first().unwrap().0, 0);
                assert_eq!(table.last().unwrap().1, len);
                assert!(table.iter().tuple_windows().all(|(a, b)| a.1 == b.0));
            }

            for atom in 0..map.n_atoms() {
                let shells = map.atom_to_shell(atom).unwrap();
                assert!(shells.iter().all(|shell| map.shell_to_atom(shell) == Ok(atom)));

                let aos = map.atom_to_ao(atom).unwrap();
                assert!(aos.iter().all(|ao| map.ao_to_atom(ao) == Ok(atom)));
                assert_eq!(
                    aos.len(),
                    shells.iter().map(|shell| map.shell_to_ao(shell).unwrap().len()).sum::<usize>()
                );
            }

            for (index, shell) in shells.iter().enumerate() {
                let aos = map.shell_to_ao(index).unwrap();
                assert_eq!(aos.len(), shell.n_aos);
                assert!(aos.iter().all(|ao| map.ao_to_shell(ao) == Ok(index)));
            }

            // every map that can be built can be read back
            let json = serde_json::to_string(&map).unwrap();
            assert_eq!(serde_json::from_str::<BasisSetMap>(&json).unwrap(), map);
        }
    }

    #[test]
    fn serde_round_trip() {
        let map = BasisSetMap::from_shells(&water()).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"atom_to_shell":[{"begin":0,"end":1},{"begin":1,"end":4},{"begin":4,"end":5}],"#,
                r#""shell_to_ao":[{"begin":0,"end":1},{"begin":1,"end":2},{"begin":2,"end":3},"#,
                r#"{"begin":3,"end":6},{"begin":6,"end":7}]}"#
            )
        );

        let parsed: BasisSetMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
        assert_eq!(parsed.ao_to_shell, map.ao_to_shell);
        assert_eq!(parsed.shell_to_atom, map.shell_to_atom);
    }

    #[test]
    fn serde_rejects_broken_tables() {
        let parse = |json: &str| serde_json::from_str::<BasisSetMap>(json);

        // gap between shells
        assert!(parse(
            r#"{"atom_to_shell":[{"begin":0,"end":2}],
                "shell_to_ao":[{"begin":0,"end":1},{"begin":2,"end":3}]}"#
        )
        .is_err());
        // atoms do not cover every shell
        assert!(parse(
            r#"{"atom_to_shell":[{"begin":0,"end":1}],
                "shell_to_ao":[{"begin":0,"end":1},{"begin":1,"end":3}]}"#
        )
        .is_err());
        // reversed shell range
        assert!(parse(
            r#"{"atom_to_shell":[{"begin":0,"end":2}],
                "shell_to_ao":[{"begin":0,"end":3},{"begin":3,"end":1}]}"#
        )
        .is_err());
        // atom without shells
        assert!(parse(
            r#"{"atom_to_shell":[{"begin":0,"end":0},{"begin":0,"end":1}],
                "shell_to_ao":[{"begin":0,"end":1}]}"#
        )
        .is_err());

        let empty = parse(r#"{"atom_to_shell":[],"shell_to_ao":[]}"#).unwrap();
        assert!(empty.is_empty());
    }
}
