//! # Error Types
//!
//! This module defines all error types for the harmony renderer.
//!
//! ## Error Types
//! - `KindNotInCatalog` - a MusicXML kind has no interval set in the catalog
//!   (internal-consistency failure, the quality and kind tables are out of step)
//! - `InvalidInterval` - an interval token such as `b9` or `#11` failed to parse
//! - `InvalidNote` - a root/bass display string is not a note name
//! - `InvalidChord` - a chord document could not be deserialized
//! - `MalformedHarmony` - a node tree handed to the decoder is not a harmony tree
//!
//! ## Usage
//! ```rust
//! use chord_harmony::{Chord, HarmonyError, render_harmony};
//!
//! # let source = "normalized:\n  quality: major\n  intervals: ['1', '3', '5']\nformatted:\n  rootNote: C\n  descriptor: ''\n";
//! let chord = Chord::from_yaml(source)?;
//! match render_harmony(&chord) {
//!     Ok(harmony) => assert_eq!(harmony.name(), "harmony"),
//!     Err(HarmonyError::KindNotInCatalog { kind }) => {
//!         eprintln!("catalog is missing {}", kind);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok::<(), HarmonyError>(())
//! ```

use thiserror::Error;

use crate::kind::Kind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarmonyError {
    /// A kind was selected (or decoded) that has no interval set.
    ///
    /// The quality → kind table and the kind → intervals catalog must stay in
    /// lockstep, so this never happens for chords coming from the upstream parser.
    /// Functional kinds such as `Neapolitan` always end up here.
    ///
    /// # Example
    /// ```
    /// # use chord_harmony::{HarmonyError, Kind};
    /// let err = HarmonyError::KindNotInCatalog { kind: Kind::Tristan };
    /// assert_eq!(err.to_string(), "Kind 'Tristan' has no interval set in the kind catalog");
    /// ```
    #[error("Kind '{kind}' has no interval set in the kind catalog")]
    KindNotInCatalog { kind: Kind },

    /// Interval token that is not `[bb|b|#]<degree>`.
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// Note display string that does not split into a step and an accidental.
    ///
    /// # Example
    /// ```
    /// # use chord_harmony::HarmonyError;
    /// let err = HarmonyError::InvalidNote("H".to_string());
    /// assert_eq!(err.to_string(), "Invalid note: H");
    /// ```
    #[error("Invalid note: {0}")]
    InvalidNote(String),

    /// Chord document rejected by the deserializer.
    #[error("Invalid chord: {0}")]
    InvalidChord(String),

    /// The decoder met a node tree that does not follow the harmony content model.
    #[error("Malformed harmony: {0}")]
    MalformedHarmony(String),
}
