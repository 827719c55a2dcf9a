//! # Kind Catalog
//!
//! Maps every MusicXML kind that has an interval equivalent to its canonical
//! interval set. The table is built once, on first use, and is read-only for
//! the rest of the process.
//!
//! ## Derivation
//! Triads are primitive. Every other entry is the next-simpler entry plus (or
//! minus) a single interval:
//!
//! ```text
//! major ──► dominant ──► dominant-ninth ──┬──► dominant-11th  (- 3, + 11)
//!                                         └──► dominant-13th  (+ 13)
//! major ──► major-seventh ──► major-ninth ┬──► major-11th     (- 3, + 11)
//!                                         └──► major-13th     (+ 13)
//! minor ──► minor-seventh ──► minor-ninth ──► minor-11th ──► minor-13th
//! ```
//!
//! ## Irregularities
//! The interval sets follow the chord-symbol conventions of the upstream parser,
//! not MusicXML's own reading of the kinds:
//! - `dominant-11th` and `major-11th` do not contain the major third.
//! - `dominant-13th` and `major-13th` are built on the ninth, so they do not
//!   contain the 11th.
//!
//! The classifier compensates for both when it reconciles a chord against one
//! of these kinds (see [`classify`](crate::classify)).
//!
//! Functional kinds (`Neapolitan`, `Italian`, `French`, `German`, `Tristan`,
//! `pedal`, `none`) are absent; asking for them is an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::HarmonyError;
use crate::interval::{add_interval, remove_interval, Interval};
use crate::kind::Kind;

const ROOT: Interval = Interval::natural(1);
const MINOR_THIRD: Interval = Interval::flat(3);
const MAJOR_THIRD: Interval = Interval::natural(3);
const FOURTH: Interval = Interval::natural(4);
const DIMINISHED_FIFTH: Interval = Interval::flat(5);
const FIFTH: Interval = Interval::natural(5);
const AUGMENTED_FIFTH: Interval = Interval::sharp(5);
const SIXTH: Interval = Interval::natural(6);
const DIMINISHED_SEVENTH: Interval = Interval::double_flat(7);
const MINOR_SEVENTH: Interval = Interval::flat(7);
const MAJOR_SEVENTH: Interval = Interval::natural(7);
const NINTH: Interval = Interval::natural(9);
const ELEVENTH: Interval = Interval::natural(11);
const THIRTEENTH: Interval = Interval::natural(13);

static KIND_TO_INTERVALS: Lazy<HashMap<Kind, Vec<Interval>>> = Lazy::new(build_catalog);

fn build_catalog() -> HashMap<Kind, Vec<Interval>> {
    let mut table: HashMap<Kind, Vec<Interval>> = HashMap::new();

    // Insert `base + added` under `kind`. Every base is inserted before it is derived from.
    fn derive(catalog: &mut HashMap<Kind, Vec<Interval>>, kind: Kind, base: Kind, added: Interval) {
        let intervals = add_interval(&catalog[&base], added);
        catalog.insert(kind, intervals);
    }

    // Triads
    table.insert(Kind::Major, vec![ROOT, MAJOR_THIRD, FIFTH]);
    table.insert(Kind::Minor, vec![ROOT, MINOR_THIRD, FIFTH]);
    table.insert(Kind::Augmented, vec![ROOT, MAJOR_THIRD, AUGMENTED_FIFTH]);
    table.insert(Kind::Diminished, vec![ROOT, MINOR_THIRD, DIMINISHED_FIFTH]);

    // Sevenths
    derive(&mut table, Kind::Dominant, Kind::Major, MINOR_SEVENTH);
    derive(&mut table, Kind::MajorSeventh, Kind::Major, MAJOR_SEVENTH);
    derive(&mut table, Kind::MinorSeventh, Kind::Minor, MINOR_SEVENTH);
    derive(
        &mut table,
        Kind::DiminishedSeventh,
        Kind::Diminished,
        DIMINISHED_SEVENTH,
    );
    derive(
        &mut table,
        Kind::AugmentedSeventh,
        Kind::Augmented,
        MINOR_SEVENTH,
    );
    derive(
        &mut table,
        Kind::HalfDiminished,
        Kind::Diminished,
        MINOR_SEVENTH,
    );
    derive(&mut table, Kind::MajorMinor, Kind::Minor, MAJOR_SEVENTH);

    // Sixths
    derive(&mut table, Kind::MajorSixth, Kind::Major, SIXTH);
    derive(&mut table, Kind::MinorSixth, Kind::Minor, SIXTH);

    // Ninths
    derive(&mut table, Kind::DominantNinth, Kind::Dominant, NINTH);
    derive(&mut table, Kind::MajorNinth, Kind::MajorSeventh, NINTH);
    derive(&mut table, Kind::MinorNinth, Kind::MinorSeventh, NINTH);

    // 11ths: no major third in the chord-symbol reading
    for (kind, base) in [
        (Kind::Dominant11th, Kind::DominantNinth),
        (Kind::Major11th, Kind::MajorNinth),
    ] {
        let without_third = remove_interval(&table[&base], MAJOR_THIRD);
        table.insert(kind, add_interval(&without_third, ELEVENTH));
    }
    derive(&mut table, Kind::Minor11th, Kind::MinorNinth, ELEVENTH);

    // 13ths: dominant and major skip the 11th
    derive(
        &mut table,
        Kind::Dominant13th,
        Kind::DominantNinth,
        THIRTEENTH,
    );
    derive(&mut table, Kind::Major13th, Kind::MajorNinth, THIRTEENTH);
    derive(&mut table, Kind::Minor13th, Kind::Minor11th, THIRTEENTH);

    // Suspended
    table.insert(Kind::SuspendedSecond, vec![ROOT, FIFTH, NINTH]);
    table.insert(Kind::SuspendedFourth, vec![ROOT, FOURTH, FIFTH]);

    // Other
    table.insert(Kind::Power, vec![ROOT, FIFTH]);
    // "other" is used when the harmony is entirely made of added degrees
    table.insert(Kind::Other, vec![ROOT]);

    table
}

/// Canonical interval set of `kind`.
///
/// # Errors
/// [`HarmonyError::KindNotInCatalog`] for kinds without an interval equivalent.
///
/// # Example
/// ```
/// use chord_harmony::{catalog::kind_intervals, Interval, Kind};
///
/// let dominant = kind_intervals(Kind::Dominant).unwrap();
/// assert_eq!(dominant, &[Interval::natural(1), Interval::natural(3), Interval::natural(5), Interval::flat(7)]);
/// assert!(kind_intervals(Kind::Neapolitan).is_err());
/// ```
pub fn kind_intervals(kind: Kind) -> Result<&'static [Interval], HarmonyError> {
    KIND_TO_INTERVALS
        .get(&kind)
        .map(Vec::as_slice)
        .ok_or(HarmonyError::KindNotInCatalog { kind })
}

/// Kinds that have a catalog entry, in declaration order.
pub fn cataloged_kinds() -> impl Iterator<Item = Kind> {
    Kind::ALL
        .into_iter()
        .filter(|kind| KIND_TO_INTERVALS.contains_key(kind))
}
