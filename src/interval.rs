//! # Interval Tokens
//!
//! Symbolic chord-tone intervals as produced by the upstream chord parser:
//! an optional accidental prefix followed by a scale-degree number.
//!
//! ```text
//! "1"  "b3"  "3"  "b5"  "#5"  "bb7"  "b7"  "7"  "b9"  "#11"  "b13"
//! ```
//!
//! ## Ordering
//! Intervals sort by degree number, then by accidental at the same degree:
//! `bb < b < natural < #` (e.g. `b5 < 5 < #5`, `9 < #9`). The ordering is the
//! derived `Ord` of [`Interval`], so `sort` on a slice of intervals is the
//! canonical interval sort.
//!
//! ## Interval sets
//! The free functions in this module treat a `&[Interval]` as an ordered set.
//! None of them mutate their input; each returns a fresh `Vec`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HarmonyError;

/// Accidental shared by interval tokens and note names.
///
/// Declaration order is the sort tie-break for intervals at the same degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    #[default]
    Natural,
    Sharp,
}

impl Accidental {
    /// Chromatic alteration in semitones, as written in `*-alter` elements.
    pub fn semitones(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
        }
    }

    pub fn from_semitones(semitones: i8) -> Option<Self> {
        match semitones {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            _ => None,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
        }
    }
}

/// A chord tone relative to the root (`b9`, `#11`, `5`...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interval {
    // Field order matters: the derived Ord compares degree first.
    degree: u8,
    accidental: Accidental,
}

pub const MAX_DEGREE: u8 = 13;

impl Interval {
    pub const fn new(degree: u8, accidental: Accidental) -> Self {
        Self { degree, accidental }
    }

    pub const fn natural(degree: u8) -> Self {
        Self::new(degree, Accidental::Natural)
    }

    pub const fn flat(degree: u8) -> Self {
        Self::new(degree, Accidental::Flat)
    }

    pub const fn double_flat(degree: u8) -> Self {
        Self::new(degree, Accidental::DoubleFlat)
    }

    pub const fn sharp(degree: u8) -> Self {
        Self::new(degree, Accidental::Sharp)
    }

    /// Bare scale-degree number (`9` for `b9`)
    pub fn degree(&self) -> u8 {
        self.degree
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn is_altered(&self) -> bool {
        self.accidental != Accidental::Natural
    }

    /// The same degree without its accidental (`#11` -> `11`)
    pub fn unaltered(&self) -> Interval {
        Interval::natural(self.degree)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.accidental.prefix(), self.degree)
    }
}

impl FromStr for Interval {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let (accidental, number) = if let Some(rest) = token.strip_prefix("bb") {
            (Accidental::DoubleFlat, rest)
        } else if let Some(rest) = token.strip_prefix('b') {
            (Accidental::Flat, rest)
        } else if let Some(rest) = token.strip_prefix('#') {
            (Accidental::Sharp, rest)
        } else {
            (Accidental::Natural, token)
        };

        let degree: u8 = number
            .parse()
            .map_err(|_| HarmonyError::InvalidInterval(s.to_string()))?;
        if degree == 0 || degree > MAX_DEGREE {
            return Err(HarmonyError::InvalidInterval(s.to_string()));
        }

        Ok(Interval::new(degree, accidental))
    }
}

impl TryFrom<String> for Interval {
    type Error = HarmonyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.to_string()
    }
}

/// Append `interval` unless it is already in the set.
pub fn add_interval(intervals: &[Interval], interval: Interval) -> Vec<Interval> {
    let mut result = intervals.to_vec();
    if !result.contains(&interval) {
        result.push(interval);
    }
    result
}

/// Remove the first occurrence of `interval`, if any.
pub fn remove_interval(intervals: &[Interval], interval: Interval) -> Vec<Interval> {
    let mut result = intervals.to_vec();
    if let Some(index) = result.iter().position(|i| *i == interval) {
        result.remove(index);
    }
    result
}

/// Canonical interval order: by degree, then `bb < b < natural < #`.
pub fn sort_intervals(intervals: &[Interval]) -> Vec<Interval> {
    let mut result = intervals.to_vec();
    result.sort();
    result
}

/// Same length and element-wise identical once both sides are sorted.
pub fn is_equal(a: &[Interval], b: &[Interval]) -> bool {
    a.len() == b.len() && sort_intervals(a) == sort_intervals(b)
}

/// True if at least one of `search` is present in `intervals`.
pub fn has_one_of(intervals: &[Interval], search: &[Interval]) -> bool {
    search.iter().any(|interval| intervals.contains(interval))
}

/// Parse a list of interval tokens, failing on the first invalid one.
pub fn parse_intervals<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Interval>, HarmonyError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}
