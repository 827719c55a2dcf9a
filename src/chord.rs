//! # Chord Input Model
//!
//! The normalized chord produced by the upstream chord-symbol parser. The
//! renderer only reads its `normalized` and `formatted` parts.
//!
//! ## Shape
//! ```text
//! Chord
//!   ├── normalized
//!   │     ├── quality: Quality (major, minor7, dominant7, ...)
//!   │     ├── intervals: Vec<Interval> (the full resolved interval set)
//!   │     ├── extensions: Vec<Extension> (9, 11, 13; last = highest)
//!   │     ├── adds / alterations / omits: Vec<Interval>
//!   │     ├── isSuspended: bool
//!   │     └── intents: { alt, eleventh }
//!   ├── formatted
//!   │     ├── rootNote: "C#"
//!   │     ├── bassNote: Option<"Ab">
//!   │     └── descriptor: "mi7"
//!   └── (any other upstream fields, carried through; a stale `musicxml` is dropped by `render`)
//! ```
//!
//! ## Loading
//! Chords are plain serde data with the upstream camelCase field names.
//! [`Chord::from_yaml`] loads one from a YAML document.
//!
//! ```rust
//! use chord_harmony::{Chord, Quality};
//!
//! let chord = Chord::from_yaml(r#"
//! normalized:
//!   quality: minor7
//!   intervals: ['1', 'b3', '5', 'b7']
//! formatted:
//!   rootNote: C#
//!   descriptor: mi7
//! "#)?;
//! assert_eq!(chord.normalized.quality, Quality::Minor7);
//! assert!(chord.formatted.bass_note.is_none());
//! # Ok::<(), chord_harmony::HarmonyError>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::error::HarmonyError;
use crate::interval::Interval;

/// Chord quality as classified by the upstream parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Quality {
    Major,
    Minor,
    Augmented,
    Diminished,
    Dominant7,
    Major7,
    Minor7,
    MinorMajor7,
    Diminished7,
    Major6,
    Minor6,
    Power,
    Bass,
}

/// Stacked extension above the seventh
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize_repr, Deserialize_repr,
)]
#[repr(u8)]
pub enum Extension {
    Ninth = 9,
    Eleventh = 11,
    Thirteenth = 13,
}

/// Flags for alteration patterns the parser recognized as a whole
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intents {
    /// `alt` / `altered` chords: the alterations are implied by the suffix
    pub alt: bool,
    pub eleventh: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedChord {
    pub quality: Quality,
    pub intervals: Vec<Interval>,
    #[serde(default)]
    pub extensions: Vec<Extension>,
    #[serde(default)]
    pub adds: Vec<Interval>,
    #[serde(default)]
    pub alterations: Vec<Interval>,
    #[serde(default)]
    pub omits: Vec<Interval>,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub intents: Intents,
}

impl NormalizedChord {
    pub fn new(quality: Quality, intervals: Vec<Interval>) -> Self {
        Self {
            quality,
            intervals,
            extensions: Vec::new(),
            adds: Vec::new(),
            alterations: Vec::new(),
            omits: Vec::new(),
            is_suspended: false,
            intents: Intents::default(),
        }
    }

    pub fn is_extended(&self) -> bool {
        !self.extensions.is_empty()
    }

    /// The last (highest) entry of the extension chain
    pub fn highest_extension(&self) -> Option<Extension> {
        self.extensions.last().copied()
    }
}

/// Display strings for the chord, as the upstream formatter printed them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedChord {
    pub root_note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bass_note: Option<String>,
    #[serde(default)]
    pub descriptor: String,
}

impl FormattedChord {
    pub fn new(root_note: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            root_note: root_note.into(),
            bass_note: None,
            descriptor: descriptor.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    pub normalized: NormalizedChord,
    pub formatted: FormattedChord,
    /// Upstream fields the renderer does not read (input, parser configuration...)
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Chord {
    pub fn new(normalized: NormalizedChord, formatted: FormattedChord) -> Self {
        Self {
            normalized,
            formatted,
            extra: BTreeMap::new(),
        }
    }

    /// Load a chord from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, HarmonyError> {
        serde_yaml::from_str(source).map_err(|e| HarmonyError::InvalidChord(e.to_string()))
    }
}
