//! # Kind & Degree Classifier
//!
//! Decides how a normalized chord is spelled in MusicXML: one `kind` value, the
//! text printed for it, and the `degree` modifications (add / alter /
//! subtract) that reconcile the kind's implied intervals with the chord's
//! actual intervals.
//!
//! ## Pipeline
//! 1. **Special cases** - if the chord's interval set is exactly the set of
//!    `half-diminished`, `augmented-seventh`, `suspended-second` or
//!    `suspended-fourth`, that kind wins with a fixed glyph and no degrees.
//! 2. **Generic kind** - the quality picks the kind; dominant, major and minor
//!    sevenths move up to their ninth / 11th / 13th kind when extended.
//! 3. **Degrees** - every chord interval missing from the kind becomes an
//!    `alter` (when the kind holds the unaltered degree) or an `add`; a
//!    missing third or fifth becomes a `subtract`.
//! 4. **Order** - degrees are sorted by degree number (stable, so `b9` keeps
//!    its place before `#9`).
//!
//! ## Printability
//! Some degrees are implied by the kind text and must not be drawn, while
//! remaining in the tree (`print-object="no"`):
//! - the 9 of a sixth chord (`69`)
//! - 9/11/13 of an extended minor-major chord, unless explicitly added
//! - the 4 of a suspended chord (`sus`)
//! - every degree of an `alt` chord
//! - the omitted third of a suspended chord, and any omitted fifth
//!
//! ## 11th / 13th kinds
//! The catalog spells `dominant-11th`/`major-11th` without the major third
//! and `dominant-13th`/`major-13th` without the 11th. When reconciling against
//! those kinds the missing interval is put back into the base the chord is
//! compared with, so that `C11` reads as an 11th chord with its third removed
//! and `C13(#11)` as an altered 11th, exactly as MusicXML implies them.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::catalog::kind_intervals;
use crate::chord::{Chord, Extension, NormalizedChord, Quality};
use crate::error::HarmonyError;
use crate::interval::{add_interval, has_one_of, is_equal, Interval};
use crate::kind::Kind;

const MAJOR_THIRD: Interval = Interval::natural(3);
const MINOR_THIRD: Interval = Interval::flat(3);
const FOURTH: Interval = Interval::natural(4);
const FIFTH: Interval = Interval::natural(5);
const NINTH: Interval = Interval::natural(9);
const ELEVENTH: Interval = Interval::natural(11);
const THIRTEENTH: Interval = Interval::natural(13);

const THIRDS: [Interval; 2] = [MINOR_THIRD, MAJOR_THIRD];
const FIFTHS: [Interval; 4] = [
    Interval::flat(5),
    FIFTH,
    Interval::sharp(5),
    Interval::flat(13),
];
const EXTENSIONS: [Interval; 3] = [NINTH, ELEVENTH, THIRTEENTH];

/// Kinds whose interval set fully describes the chord, with their printed glyph.
const SPECIAL_CASES: [(Kind, &str); 4] = [
    (Kind::HalfDiminished, "ø"),
    (Kind::AugmentedSeventh, "+7"),
    (Kind::SuspendedSecond, "sus2"),
    (Kind::SuspendedFourth, "sus4"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreeType {
    Add,
    Alter,
    Subtract,
}

impl DegreeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeType::Add => "add",
            DegreeType::Alter => "alter",
            DegreeType::Subtract => "subtract",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "add" => Some(DegreeType::Add),
            "alter" => Some(DegreeType::Alter),
            "subtract" => Some(DegreeType::Subtract),
            _ => None,
        }
    }
}

/// One `<degree>` modification layered on top of a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    pub degree_type: DegreeType,
    pub interval: Interval,
    /// `false` renders as `print-object="no"`
    pub printable: bool,
}

impl Degree {
    pub fn new(degree_type: DegreeType, interval: Interval, printable: bool) -> Self {
        Self {
            degree_type,
            interval,
            printable,
        }
    }

    /// `<degree-value>`: the bare degree number
    pub fn value(&self) -> u8 {
        self.interval.degree()
    }

    /// `<degree-alter>`: semitones from the accidental
    pub fn alter(&self) -> i8 {
        self.interval.accidental().semitones()
    }
}

/// The MusicXML spelling of a chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: Kind,
    pub kind_text: String,
    pub degrees: Vec<Degree>,
}

/// Select the kind, kind text and ordered degrees for `chord`.
///
/// # Errors
/// [`HarmonyError::KindNotInCatalog`] if the selected kind has no catalog entry.
/// That can only happen if the quality table and the catalog drift apart.
///
/// # Example
/// ```
/// use chord_harmony::{classify, Chord, Kind};
///
/// let chord = Chord::from_yaml(r#"
/// normalized:
///   quality: minor7
///   intervals: ['1', 'b3', 'b5', 'b7']
/// formatted:
///   rootNote: C
///   descriptor: mi7(b5)
/// "#)?;
/// let classification = classify(&chord)?;
/// assert_eq!(classification.kind, Kind::HalfDiminished);
/// assert_eq!(classification.kind_text, "ø");
/// assert!(classification.degrees.is_empty());
/// # Ok::<(), chord_harmony::HarmonyError>(())
/// ```
pub fn classify(chord: &Chord) -> Result<Classification, HarmonyError> {
    let normalized = &chord.normalized;

    for (kind, glyph) in SPECIAL_CASES {
        if is_equal(&normalized.intervals, kind_intervals(kind)?) {
            debug!("special case {} for {}", kind, chord.formatted.root_note);
            return Ok(Classification {
                kind,
                kind_text: glyph.to_string(),
                degrees: Vec::new(),
            });
        }
    }

    let kind = kind_for_quality(normalized);
    debug!(
        "{}{}: quality {:?} -> kind {}",
        chord.formatted.root_note, chord.formatted.descriptor, normalized.quality, kind
    );

    let mut degrees = all_degrees(kind, normalized)?;
    degrees.sort_by_key(Degree::value);

    Ok(Classification {
        kind,
        kind_text: chord.formatted.descriptor.clone(),
        degrees,
    })
}

/// The generic quality -> kind table.
fn kind_for_quality(chord: &NormalizedChord) -> Kind {
    let extension = chord.highest_extension();
    match chord.quality {
        Quality::Dominant7 => match extension {
            Some(Extension::Ninth) => Kind::DominantNinth,
            Some(Extension::Eleventh) => Kind::Dominant11th,
            Some(Extension::Thirteenth) => Kind::Dominant13th,
            None => Kind::Dominant,
        },
        Quality::Major7 => match extension {
            Some(Extension::Ninth) => Kind::MajorNinth,
            Some(Extension::Eleventh) => Kind::Major11th,
            Some(Extension::Thirteenth) => Kind::Major13th,
            None => Kind::MajorSeventh,
        },
        Quality::Minor7 => match extension {
            Some(Extension::Ninth) => Kind::MinorNinth,
            Some(Extension::Eleventh) => Kind::Minor11th,
            Some(Extension::Thirteenth) => Kind::Minor13th,
            None => Kind::MinorSeventh,
        },
        Quality::Major => Kind::Major,
        Quality::Minor => Kind::Minor,
        Quality::Augmented => Kind::Augmented,
        Quality::Diminished => Kind::Diminished,
        Quality::MinorMajor7 => Kind::MajorMinor,
        Quality::Diminished7 => Kind::DiminishedSeventh,
        Quality::Major6 => Kind::MajorSixth,
        Quality::Minor6 => Kind::MinorSixth,
        Quality::Power => Kind::Power,
        Quality::Bass => Kind::Other,
    }
}

/// Interval the catalog leaves out of `kind` but MusicXML implies.
fn implied_by_kind(kind: Kind) -> Option<Interval> {
    match kind {
        Kind::Dominant11th | Kind::Major11th => Some(MAJOR_THIRD),
        Kind::Dominant13th | Kind::Major13th => Some(ELEVENTH),
        _ => None,
    }
}

fn all_degrees(kind: Kind, chord: &NormalizedChord) -> Result<Vec<Degree>, HarmonyError> {
    let kind_set = kind_intervals(kind)?;
    let implied = implied_by_kind(kind);
    let base = match implied {
        Some(interval) => add_interval(kind_set, interval),
        None => kind_set.to_vec(),
    };
    let intervals = &chord.intervals;
    let mut degrees = Vec::new();

    // adds & alters
    for &interval in intervals.iter().filter(|i| !base.contains(i)) {
        let degree_type = if interval.is_altered() && base.contains(&interval.unaltered()) {
            DegreeType::Alter
        } else {
            DegreeType::Add
        };
        let printable = !(is_ninth_in_six_nine(interval, kind)
            || is_extension_in_minor_major(interval, kind, chord)
            || is_fourth_in_suspended(interval, chord)
            || chord.intents.alt);
        push_degree(&mut degrees, degree_type, interval, printable);
    }

    // an implied interval that the chord really contains must survive decoding
    if let Some(interval) = implied {
        let added_explicitly = interval == MAJOR_THIRD && chord.adds.contains(&MAJOR_THIRD);
        if intervals.contains(&interval) && !added_explicitly {
            push_degree(&mut degrees, DegreeType::Add, interval, !chord.intents.alt);
        }
    }

    // omitted third
    if !has_one_of(intervals, &THIRDS) {
        if let Some(third) = third_of(&base) {
            let printable = !chord.is_suspended;
            push_degree(&mut degrees, DegreeType::Subtract, third, printable);
        }
    }

    // omitted fifth
    if !has_one_of(intervals, &FIFTHS) && kind_set.contains(&FIFTH) {
        push_degree(&mut degrees, DegreeType::Subtract, FIFTH, false);
    }

    // a third explicitly added back (e.g. 7sus(add3))
    if chord.adds.contains(&MAJOR_THIRD) {
        push_degree(&mut degrees, DegreeType::Add, MAJOR_THIRD, true);
    }

    Ok(degrees)
}

fn push_degree(
    degrees: &mut Vec<Degree>,
    degree_type: DegreeType,
    interval: Interval,
    printable: bool,
) {
    trace!(
        "degree {} {} (print: {})",
        degree_type.as_str(),
        interval,
        printable
    );
    degrees.push(Degree::new(degree_type, interval, printable));
}

/// The third to subtract; the minor third wins if both are present.
fn third_of(intervals: &[Interval]) -> Option<Interval> {
    THIRDS.into_iter().find(|third| intervals.contains(third))
}

/// The 9 of a 6/9 chord is already in the "69" text.
fn is_ninth_in_six_nine(interval: Interval, kind: Kind) -> bool {
    interval == NINTH && matches!(kind, Kind::MajorSixth | Kind::MinorSixth)
}

/// miMa9/miMa11/miMa13 imply their extension chain.
fn is_extension_in_minor_major(interval: Interval, kind: Kind, chord: &NormalizedChord) -> bool {
    kind == Kind::MajorMinor
        && chord.is_extended()
        && EXTENSIONS.contains(&interval)
        && !chord.adds.contains(&interval)
}

/// The "sus" text already says 4.
fn is_fourth_in_suspended(interval: Interval, chord: &NormalizedChord) -> bool {
    interval == FOURTH && chord.is_suspended
}
