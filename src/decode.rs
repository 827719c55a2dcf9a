//! # Harmony Decoder
//!
//! Reads a harmony back into the interval set it describes: the kind's
//! catalog intervals, with every degree applied in order.
//!
//! | degree type | effect                                          |
//! |-------------|-------------------------------------------------|
//! | `add`       | add the interval if absent                      |
//! | `subtract`  | remove the interval                             |
//! | `alter`     | remove the unaltered degree, add the altered one |
//!
//! Afterwards a `b13` cancels a natural `5`, as it does in the chord-symbol
//! interval sets. Decoding a rendered chord gives back the chord's own
//! intervals.

use crate::catalog::kind_intervals;
use crate::classify::{Degree, DegreeType};
use crate::error::HarmonyError;
use crate::interval::{
    add_interval, remove_interval, sort_intervals, Accidental, Interval, MAX_DEGREE,
};
use crate::kind::Kind;
use crate::node::XmlNode;

const FIFTH: Interval = Interval::natural(5);
const FLAT_THIRTEENTH: Interval = Interval::flat(13);

/// Apply `degrees` to the catalog intervals of `kind`; the result is sorted.
pub fn harmony_to_intervals(kind: Kind, degrees: &[Degree]) -> Result<Vec<Interval>, HarmonyError> {
    let mut intervals = kind_intervals(kind)?.to_vec();

    for degree in degrees {
        intervals = match degree.degree_type {
            DegreeType::Add => add_interval(&intervals, degree.interval),
            DegreeType::Subtract => remove_interval(&intervals, degree.interval),
            DegreeType::Alter => {
                let without = remove_interval(&intervals, degree.interval.unaltered());
                add_interval(&without, degree.interval)
            }
        };
    }

    if intervals.contains(&FIFTH) && intervals.contains(&FLAT_THIRTEENTH) {
        intervals = remove_interval(&intervals, FIFTH);
    }

    Ok(sort_intervals(&intervals))
}

/// The `kind` of a harmony tree.
pub fn kind_from_harmony(harmony: &XmlNode) -> Result<Kind, HarmonyError> {
    expect_harmony(harmony)?;
    let token = harmony
        .child("kind")
        .and_then(XmlNode::text_content)
        .ok_or_else(|| malformed("missing <kind>"))?;
    token.parse()
}

/// The `degree` children of a harmony tree, in document order.
pub fn degrees_from_harmony(harmony: &XmlNode) -> Result<Vec<Degree>, HarmonyError> {
    expect_harmony(harmony)?;
    harmony
        .children_named("degree")
        .map(degree_from_node)
        .collect()
}

/// Decode a whole harmony tree to its interval set.
///
/// # Example
/// ```
/// use chord_harmony::{decode::intervals_from_harmony, render_harmony, Chord};
///
/// let chord = Chord::from_yaml(r#"
/// normalized:
///   quality: dominant7
///   intervals: ['1', '3', 'b5', 'b7', 'b9']
/// formatted:
///   rootNote: G
///   descriptor: '7'
/// "#)?;
/// let harmony = render_harmony(&chord)?;
/// assert_eq!(intervals_from_harmony(&harmony)?, chord.normalized.intervals);
/// # Ok::<(), chord_harmony::HarmonyError>(())
/// ```
pub fn intervals_from_harmony(harmony: &XmlNode) -> Result<Vec<Interval>, HarmonyError> {
    let kind = kind_from_harmony(harmony)?;
    let degrees = degrees_from_harmony(harmony)?;
    harmony_to_intervals(kind, &degrees)
}

fn expect_harmony(node: &XmlNode) -> Result<(), HarmonyError> {
    if node.name() == "harmony" {
        Ok(())
    } else {
        Err(malformed(format!("expected <harmony>, found <{}>", node.name())))
    }
}

fn malformed(message: impl Into<String>) -> HarmonyError {
    HarmonyError::MalformedHarmony(message.into())
}

fn bad_field(field: &str, value: &str) -> HarmonyError {
    malformed(format!("bad degree {} '{}'", field, value))
}

fn degree_field<'a>(node: &'a XmlNode, name: &str) -> Result<&'a str, HarmonyError> {
    node.child(name)
        .and_then(XmlNode::text_content)
        .ok_or_else(|| malformed(format!("<degree> without <{}>", name)))
}

fn degree_from_node(node: &XmlNode) -> Result<Degree, HarmonyError> {
    let value = degree_field(node, "degree-value")?;
    let degree = value
        .parse::<u8>()
        .ok()
        .filter(|d| (1..=MAX_DEGREE).contains(d))
        .ok_or_else(|| bad_field("value", value))?;

    let alter = degree_field(node, "degree-alter")?;
    let accidental = alter
        .parse::<i8>()
        .ok()
        .and_then(Accidental::from_semitones)
        .ok_or_else(|| bad_field("alter", alter))?;

    let token = degree_field(node, "degree-type")?;
    let degree_type = DegreeType::from_str(token).ok_or_else(|| bad_field("type", token))?;

    let interval = Interval::new(degree, accidental);
    let printable = node.attr("print-object") != Some("no");

    Ok(Degree::new(degree_type, interval, printable))
}
