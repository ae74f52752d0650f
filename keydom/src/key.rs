use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a node among its siblings.
///
/// Positional identity (`Index`) is what a node gets when nobody picked a key
/// for it. `Num` and `Str` come from caller-supplied key extractors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    Index(usize),
    Num(i64),
    Str(String),
}

impl Key {
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Self::Num(n.into())
    }
}

impl From<u32> for Key {
    fn from(n: u32) -> Self {
        Self::Num(n.into())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}
