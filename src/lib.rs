//! # chord-harmony
//!
//! Render normalized chord symbols as MusicXML `<harmony>` elements.
//!
//! The input is a chord already parsed and normalized by a chord-symbol parser
//! (quality, interval set, extensions, explicit adds / alterations / omits).
//! The output is a node tree mirroring the MusicXML harmony content model:
//! `root`, `kind`, optional `bass`, then `degree` elements.
//!
//! ## Pipeline
//! ```text
//! Chord ──► classify ──► { kind, kind text, degrees } ──► harmony builder ──► XmlNode
//!              │
//!              └── catalog (kind -> intervals), interval-set utilities
//! ```
//!
//! ## Example
//! ```rust
//! use chord_harmony::{render, Chord};
//!
//! let chord = Chord::from_yaml(r#"
//! normalized:
//!   quality: major6
//!   intervals: ['1', '3', '5', '6', '9']
//!   adds: ['9']
//! formatted:
//!   rootNote: Eb
//!   descriptor: '69'
//! "#)?;
//!
//! let rendered = render(chord)?;
//! let harmony = &rendered.musicxml;
//! assert_eq!(harmony.child("kind").unwrap().text_content(), Some("major-sixth"));
//!
//! // the 9 is implied by the "69" text, so it is not printed
//! let degree = harmony.child("degree").unwrap();
//! assert_eq!(degree.attr("print-object"), Some("no"));
//! # Ok::<(), chord_harmony::HarmonyError>(())
//! ```

pub mod catalog;
pub mod chord;
pub mod classify;
pub mod decode;
pub mod error;
pub mod harmony;
pub mod interval;
pub mod kind;
pub mod node;
pub mod note;

pub use chord::{Chord, Extension, FormattedChord, Intents, NormalizedChord, Quality};
pub use classify::{classify, Classification, Degree, DegreeType};
pub use error::*;
pub use harmony::{render, render_harmony, RenderedChord};
pub use interval::{Accidental, Interval};
pub use kind::Kind;
pub use node::{Content, XmlNode};
