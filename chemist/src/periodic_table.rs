use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

macro_rules! elements {
    ($($element:ident = $z:literal),* $(,)?) => {
        /// A chemical element, identified by its atomic number.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum ElementType {
            $($element = $z),*
        }

        impl ElementType {
            const ALL: &'static [ElementType] = &[$(ElementType::$element),*];

            /// The element symbol, e.g. `"He"`.
            pub fn symbol(&self) -> &'static str {
                match self {
                    $(ElementType::$element => stringify!($element)),*
                }
            }
        }
    };
}

elements! {
    H = 1, He = 2,
    Li = 3, Be = 4, B = 5, C = 6, N = 7, O = 8, F = 9, Ne = 10,
    Na = 11, Mg = 12, Al = 13, Si = 14, P = 15, S = 16, Cl = 17, Ar = 18,
    K = 19, Ca = 20, Sc = 21, Ti = 22, V = 23, Cr = 24, Mn = 25, Fe = 26, Co = 27, Ni = 28,
    Cu = 29, Zn = 30, Ga = 31, Ge = 32, As = 33, Se = 34, Br = 35, Kr = 36,
}

impl ElementType {
    pub fn atomic_number(&self) -> usize {
        *self as usize
    }

    /// Looks up an element by its atomic number, if it is part of the table.
    pub fn from_atomic_number(atomic_number: usize) -> Option<Self> {
        atomic_number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element `{0}`")]
pub struct UnknownElement(pub String);

impl FromStr for ElementType {
    type Err = UnknownElement;

    /// Accepts either a symbol (`"O"`) or an atomic number (`"8"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(atomic_number) = s.parse::<usize>() {
            return Self::from_atomic_number(atomic_number)
                .ok_or_else(|| UnknownElement(s.to_owned()));
        }

        Self::ALL
            .iter()
            .find(|element| element.symbol().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| UnknownElement(s.to_owned()))
    }
}

impl Serialize for ElementType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for ElementType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ElementVisitor;

        impl de::Visitor<'_> for ElementVisitor {
            type Value = ElementType;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an element symbol or atomic number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                usize::try_from(v)
                    .ok()
                    .and_then(ElementType::from_atomic_number)
                    .ok_or_else(|| E::custom(UnknownElement(v.to_string())))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                usize::try_from(v)
                    .ok()
                    .and_then(ElementType::from_atomic_number)
                    .ok_or_else(|| E::custom(UnknownElement(v.to_string())))
            }
        }

        deserializer.deserialize_any(ElementVisitor)
    }
}
