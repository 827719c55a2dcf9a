//! # Harmony Tree Builder
//!
//! Assembles the MusicXML `<harmony>` node tree from a chord's classification
//! and its formatted note names.
//!
//! ## Content Model
//! ```text
//! harmony
//!   ├── root      (root-step, root-alter?)
//!   ├── kind      text="<kind text>"  content = kind token
//!   ├── bass?     (bass-step, bass-alter?)
//!   └── degree*   print-object="no"?
//!         ├── degree-value
//!         ├── degree-alter
//!         └── degree-type
//! ```
//!
//! ## Entry Points
//! - [`render_harmony()`] - chord -> harmony tree
//! - [`render()`] - chord -> the same chord plus its `musicxml` tree
//!
//! `render_harmony` only reads the chord. `render` takes the chord by value and
//! returns it next to its tree, dropping any `musicxml` field a previous render
//! left in the chord's pass-through fields.

use serde::Serialize;

use crate::chord::Chord;
use crate::classify::{classify, Degree};
use crate::error::HarmonyError;
use crate::kind::Kind;
use crate::node::XmlNode;
use crate::note::Note;

/// Which note element to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteRole {
    Root,
    Bass,
}

impl NoteRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteRole::Root => "root",
            NoteRole::Bass => "bass",
        }
    }
}

/// A chord together with its rendered `<harmony>` tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedChord {
    #[serde(flatten)]
    pub chord: Chord,
    pub musicxml: XmlNode,
}

/// Render `chord` as a `<harmony>` node tree.
///
/// # Example
/// ```rust
/// use chord_harmony::{render_harmony, Chord};
///
/// let chord = Chord::from_yaml(r#"
/// normalized:
///   quality: dominant7
///   intervals: ['1', '3', '5', 'b7']
/// formatted:
///   rootNote: C
///   descriptor: '7'
/// "#)?;
/// let harmony = render_harmony(&chord)?;
///
/// assert_eq!(harmony.name(), "harmony");
/// assert_eq!(harmony.children().len(), 2); // root + kind
/// assert_eq!(harmony.child("kind").unwrap().text_content(), Some("dominant"));
/// # Ok::<(), chord_harmony::HarmonyError>(())
/// ```
pub fn render_harmony(chord: &Chord) -> Result<XmlNode, HarmonyError> {
    let classification = classify(chord)?;

    let mut content = vec![
        note_node(NoteRole::Root, &chord.formatted.root_note)?,
        kind_node(classification.kind, &classification.kind_text),
    ];

    if let Some(bass_note) = &chord.formatted.bass_note {
        content.push(note_node(NoteRole::Bass, bass_note)?);
    }

    content.extend(classification.degrees.iter().map(degree_node));

    Ok(harmony_node(content))
}

/// Render `chord` and hand it back with its `musicxml` tree attached.
///
/// A chord that was itself loaded from a rendered document still carries the
/// old tree under `extra`; it is replaced by the new one.
pub fn render(mut chord: Chord) -> Result<RenderedChord, HarmonyError> {
    chord.extra.remove("musicxml");
    let musicxml = render_harmony(&chord)?;
    Ok(RenderedChord { chord, musicxml })
}

/// `<root>` / `<bass>` with a step and, for altered notes, an alter.
pub fn note_node(role: NoteRole, note: &str) -> Result<XmlNode, HarmonyError> {
    let parsed: Note = note.parse()?;
    let prefix = role.as_str();

    let step = XmlNode::text(format!("{}-step", prefix), parsed.name.as_str());
    let mut content = vec![step];
    if let Some(alter) = parsed.alter() {
        let alter = XmlNode::text(format!("{}-alter", prefix), alter.to_string());
        content.push(alter);
    }

    Ok(XmlNode::parent(prefix, content))
}

pub fn kind_node(kind: Kind, text: &str) -> XmlNode {
    XmlNode::text("kind", kind.as_str()).with_attr("text", text)
}

pub fn degree_node(degree: &Degree) -> XmlNode {
    let node = XmlNode::parent(
        "degree",
        vec![
            XmlNode::text("degree-value", degree.value().to_string()),
            XmlNode::text("degree-alter", degree.alter().to_string()),
            XmlNode::text("degree-type", degree.degree_type.as_str()),
        ],
    );

    if degree.printable {
        node
    } else {
        node.with_attr("print-object", "no")
    }
}

pub fn harmony_node(content: Vec<XmlNode>) -> XmlNode {
    XmlNode::parent("harmony", content)
}
