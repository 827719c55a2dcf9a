//! MusicXML `kind` values.
//!
//! The enumeration mirrors the MusicXML 3.x `kind-value` type, including the
//! functional kinds (`Neapolitan`, `Italian`, `French`, `German`, `Tristan`,
//! `pedal`, `none`) that have no interval equivalent. Those exist so that a
//! decoded tree can name them, but the [`catalog`](crate::catalog) never maps
//! them to intervals and the classifier never selects them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HarmonyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Kind {
    // Triads
    Major,
    Minor,
    Augmented,
    Diminished,
    // Sevenths
    Dominant,
    MajorSeventh,
    MinorSeventh,
    DiminishedSeventh,
    AugmentedSeventh,
    HalfDiminished,
    MajorMinor,
    // Sixths
    MajorSixth,
    MinorSixth,
    // Ninths
    DominantNinth,
    MajorNinth,
    MinorNinth,
    // 11ths
    Dominant11th,
    Major11th,
    Minor11th,
    // 13ths
    Dominant13th,
    Major13th,
    Minor13th,
    // Suspended
    SuspendedSecond,
    SuspendedFourth,
    // Functional sixths
    Neapolitan,
    Italian,
    French,
    German,
    // Other
    Pedal,
    Power,
    Tristan,
    Other,
    None,
}

impl Kind {
    pub const ALL: [Kind; 33] = [
        Kind::Major,
        Kind::Minor,
        Kind::Augmented,
        Kind::Diminished,
        Kind::Dominant,
        Kind::MajorSeventh,
        Kind::MinorSeventh,
        Kind::DiminishedSeventh,
        Kind::AugmentedSeventh,
        Kind::HalfDiminished,
        Kind::MajorMinor,
        Kind::MajorSixth,
        Kind::MinorSixth,
        Kind::DominantNinth,
        Kind::MajorNinth,
        Kind::MinorNinth,
        Kind::Dominant11th,
        Kind::Major11th,
        Kind::Minor11th,
        Kind::Dominant13th,
        Kind::Major13th,
        Kind::Minor13th,
        Kind::SuspendedSecond,
        Kind::SuspendedFourth,
        Kind::Neapolitan,
        Kind::Italian,
        Kind::French,
        Kind::German,
        Kind::Pedal,
        Kind::Power,
        Kind::Tristan,
        Kind::Other,
        Kind::None,
    ];

    /// The token written as `<kind>` content.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Major => "major",
            Kind::Minor => "minor",
            Kind::Augmented => "augmented",
            Kind::Diminished => "diminished",
            Kind::Dominant => "dominant",
            Kind::MajorSeventh => "major-seventh",
            Kind::MinorSeventh => "minor-seventh",
            Kind::DiminishedSeventh => "diminished-seventh",
            Kind::AugmentedSeventh => "augmented-seventh",
            Kind::HalfDiminished => "half-diminished",
            Kind::MajorMinor => "major-minor",
            Kind::MajorSixth => "major-sixth",
            Kind::MinorSixth => "minor-sixth",
            Kind::DominantNinth => "dominant-ninth",
            Kind::MajorNinth => "major-ninth",
            Kind::MinorNinth => "minor-ninth",
            Kind::Dominant11th => "dominant-11th",
            Kind::Major11th => "major-11th",
            Kind::Minor11th => "minor-11th",
            Kind::Dominant13th => "dominant-13th",
            Kind::Major13th => "major-13th",
            Kind::Minor13th => "minor-13th",
            Kind::SuspendedSecond => "suspended-second",
            Kind::SuspendedFourth => "suspended-fourth",
            Kind::Neapolitan => "Neapolitan",
            Kind::Italian => "Italian",
            Kind::French => "French",
            Kind::German => "German",
            Kind::Pedal => "pedal",
            Kind::Power => "power",
            Kind::Tristan => "Tristan",
            Kind::Other => "other",
            Kind::None => "none",
        }
    }

    /// Kinds that describe harmonic function rather than a stack of intervals
    pub fn is_functional(&self) -> bool {
        matches!(
            self,
            Kind::Neapolitan
                | Kind::Italian
                | Kind::French
                | Kind::German
                | Kind::Pedal
                | Kind::Tristan
                | Kind::None
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| HarmonyError::MalformedHarmony(format!("unknown kind '{}'", s)))
    }
}

impl TryFrom<String> for Kind {
    type Error = HarmonyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        kind.as_str().to_string()
    }
}
