//! Integration tests for the harmony renderer
//!
//! Renders a table of chords (as the upstream chord-symbol parser normalizes
//! them) and checks the full `<harmony>` tree: root, bass, kind, kind text,
//! degrees and their printability. Every chord is also decoded back to make
//! sure the tree describes the chord's original interval set.

use chord_harmony::decode::{degrees_from_harmony, intervals_from_harmony};
use chord_harmony::interval::{parse_intervals, sort_intervals};
use chord_harmony::{
    render, render_harmony, Chord, Extension, FormattedChord, Interval, NormalizedChord, Quality,
    XmlNode,
};

/// Space separated interval tokens, e.g. "1 3 #5 b7"
fn intervals(tokens: &str) -> Vec<Interval> {
    let tokens: Vec<&str> = tokens.split_whitespace().collect();
    parse_intervals(&tokens).unwrap()
}

/// Comma separated entries, e.g. "subtract 3, add 4"
fn list(entries: &str) -> Vec<&str> {
    entries
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .collect()
}

struct Case {
    symbol: &'static str,
    chord: Chord,
}

impl Case {
    fn new(symbol: &'static str, quality: Quality, tokens: &str, descriptor: &str) -> Self {
        let normalized = NormalizedChord::new(quality, intervals(tokens));
        Case {
            symbol,
            chord: Chord::new(normalized, FormattedChord::new("C", descriptor)),
        }
    }

    fn root(mut self, root: &str) -> Self {
        self.chord.formatted.root_note = root.to_string();
        self
    }

    fn bass(mut self, bass: &str) -> Self {
        self.chord.formatted.bass_note = Some(bass.to_string());
        self
    }

    fn ext(mut self, extensions: &[Extension]) -> Self {
        self.chord.normalized.extensions = extensions.to_vec();
        self
    }

    fn adds(mut self, tokens: &str) -> Self {
        self.chord.normalized.adds = intervals(tokens);
        self
    }

    fn sus(mut self) -> Self {
        self.chord.normalized.is_suspended = true;
        self
    }

    fn alt(mut self) -> Self {
        self.chord.normalized.intents.alt = true;
        self
    }
}

/// Expected rendering of a case
struct Expected {
    root: (&'static str, Option<&'static str>),
    bass: Option<(&'static str, Option<&'static str>)>,
    kind: &'static str,
    kind_text: &'static str,
    /// "<type> <interval>" entries, e.g. "alter b5, add 11"
    degrees: &'static str,
    /// intervals of the degrees rendered with print-object="no"
    hidden: &'static str,
}

const C: (&str, Option<&str>) = ("C", None);

fn expect(
    kind: &'static str,
    kind_text: &'static str,
    degrees: &'static str,
    hidden: &'static str,
) -> Expected {
    Expected {
        root: C,
        bass: None,
        kind,
        kind_text,
        degrees,
        hidden,
    }
}

use Extension::{Eleventh, Ninth, Thirteenth};
use Quality::*;

fn all_cases() -> Vec<(Case, Expected)> {
    vec![
        // Triads, sixths, sevenths
        (
            Case::new("C", Major, "1 3 5", ""),
            expect("major", "", "", ""),
        ),
        (
            Case::new("C5", Power, "1 5", "5"),
            expect("power", "5", "", ""),
        ),
        (
            Case::new("C+", Augmented, "1 3 #5", "+"),
            expect("augmented", "+", "", ""),
        ),
        (
            Case::new("C°", Diminished, "1 b3 b5", "dim"),
            expect("diminished", "dim", "", ""),
        ),
        (
            Case::new("C(b5)", Major, "1 3 b5", ""),
            expect("major", "", "alter b5", ""),
        ),
        (
            Case::new("Cmi(#5)", Minor, "1 b3 #5", "mi"),
            expect("minor", "mi", "alter #5", ""),
        ),
        (
            Case::new("C6", Major6, "1 3 5 6", "6"),
            expect("major-sixth", "6", "", ""),
        ),
        (
            Case::new("C6(#5)", Major6, "1 3 #5 6", "6"),
            expect("major-sixth", "6", "alter #5", ""),
        ),
        (
            Case::new("C69", Major6, "1 3 5 6 9", "69").adds("9"),
            expect("major-sixth", "69", "add 9", "9"),
        ),
        (
            Case::new("C69(#11)", Major6, "1 3 5 6 9 #11", "69").adds("9"),
            expect("major-sixth", "69", "add 9, add #11", "9"),
        ),
        (
            Case::new("Cmi69(add11)", Minor6, "1 b3 5 6 9 11", "mi69").adds("9 11"),
            expect("minor-sixth", "mi69", "add 9, add 11", "9"),
        ),
        (
            Case::new("C6(b9)", Major6, "1 3 5 6 b9", "6"),
            expect("major-sixth", "6", "add b9", ""),
        ),
        (
            Case::new("C7", Dominant7, "1 3 5 b7", "7"),
            expect("dominant", "7", "", ""),
        ),
        (
            Case::new("Cma7(#5)", Major7, "1 3 #5 7", "ma7"),
            expect("major-seventh", "ma7", "alter #5", ""),
        ),
        (
            Case::new("CMA7(add 13)", Major7, "1 3 5 7 13", "ma7").adds("13"),
            expect("major-seventh", "ma7", "add 13", ""),
        ),
        (
            Case::new("Cmi7(b5,#5)", Minor7, "1 b3 b5 #5 b7", "mi7"),
            expect("minor-seventh", "mi7", "alter b5, alter #5", ""),
        ),
        (
            Case::new("Cmi7(b5,add11)", Minor7, "1 b3 b5 b7 11", "mi7").adds("11"),
            expect("minor-seventh", "mi7", "alter b5, add 11", ""),
        ),
        (
            Case::new("CMI7(omit 5)", Minor7, "1 b3 b7", "mi7"),
            expect("minor-seventh", "mi7", "subtract 5", "5"),
        ),
        (
            Case::new("C7(omit 3)", Dominant7, "1 5 b7", "7"),
            expect("dominant", "7", "subtract 3", ""),
        ),
        (
            Case::new("C-b6", Minor, "1 b3 5 b6", "mi"),
            expect("minor", "mi", "add b6", ""),
        ),
        (
            Case::new("Cadd9", Major, "1 3 5 9", "").adds("9"),
            expect("major", "", "add 9", ""),
        ),
        (
            Case::new("Cadd11", Major, "1 3 5 11", "").adds("11"),
            expect("major", "", "add 11", ""),
        ),
        (
            Case::new("C bass", Bass, "1", " bass"),
            expect("other", " bass", "", ""),
        ),
        // Special cases
        (
            Case::new("Cmi7(b5)", Minor7, "1 b3 b5 b7", "mi7(b5)"),
            expect("half-diminished", "ø", "", ""),
        ),
        (
            Case::new("C7(#5)", Dominant7, "1 3 #5 b7", "7(#5)"),
            expect("augmented-seventh", "+7", "", ""),
        ),
        (
            Case::new("Cadd9(omit3)", Major, "1 5 9", "").adds("9"),
            expect("suspended-second", "sus2", "", ""),
        ),
        (
            Case::new("Csus", Major, "1 4 5", "sus").sus(),
            expect("suspended-fourth", "sus4", "", ""),
        ),
        // Extended chords
        (
            Case::new("Cma9(no3)", Major7, "1 5 7 9", "ma9").ext(&[Ninth]),
            expect("major-ninth", "ma9", "subtract 3", ""),
        ),
        (
            Case::new("Cma9(#11)", Major7, "1 3 5 7 9 #11", "ma9").ext(&[Ninth]),
            expect("major-ninth", "ma9", "add #11", ""),
        ),
        (
            Case::new("Cma13", Major7, "1 3 5 7 9 13", "ma13").ext(&[Ninth, Eleventh, Thirteenth]),
            expect("major-13th", "ma13", "", ""),
        ),
        (
            Case::new("Cma13(#11)", Major7, "1 3 5 7 9 #11 13", "ma13")
                .ext(&[Ninth, Eleventh, Thirteenth]),
            expect("major-13th", "ma13", "alter #11", ""),
        ),
        (
            Case::new("Cmi9(b5)", Minor7, "1 b3 b5 b7 9", "mi9").ext(&[Ninth]),
            expect("minor-ninth", "mi9", "alter b5", ""),
        ),
        (
            Case::new("Cmi11(b5,no3)", Minor7, "1 b5 b7 9 11", "mi11").ext(&[Ninth, Eleventh]),
            expect("minor-11th", "mi11", "subtract b3, alter b5", ""),
        ),
        (
            Case::new("Cmi11(b5,b13)", Minor7, "1 b3 b5 b7 9 11 b13", "mi11")
                .ext(&[Ninth, Eleventh]),
            expect("minor-11th", "mi11", "alter b5, add b13", ""),
        ),
        (
            Case::new("Cmi13", Minor7, "1 b3 5 b7 9 11 13", "mi13")
                .ext(&[Ninth, Eleventh, Thirteenth]),
            expect("minor-13th", "mi13", "", ""),
        ),
        (
            Case::new("C9", Dominant7, "1 3 5 b7 9", "9").ext(&[Ninth]),
            expect("dominant-ninth", "9", "", ""),
        ),
        (
            Case::new("C9(13)", Dominant7, "1 3 5 b7 9 13", "13").ext(&[Ninth, Thirteenth]),
            expect("dominant-13th", "13", "", ""),
        ),
        (
            Case::new("C9sus", Dominant7, "1 4 5 b7 9", "9sus")
                .ext(&[Ninth])
                .sus(),
            expect("dominant-ninth", "9sus", "subtract 3, add 4", "3, 4"),
        ),
        (
            Case::new("C11", Dominant7, "1 5 b7 9 11", "9sus")
                .ext(&[Ninth, Eleventh])
                .sus(),
            expect("dominant-11th", "9sus", "subtract 3", "3"),
        ),
        (
            Case::new("C11(b9)", Dominant7, "1 5 b7 b9 11", "7sus")
                .ext(&[Ninth, Eleventh])
                .sus(),
            expect("dominant-11th", "7sus", "subtract 3, alter b9", "3"),
        ),
        (
            Case::new("C13", Dominant7, "1 3 5 b7 9 13", "13").ext(&[Ninth, Eleventh, Thirteenth]),
            expect("dominant-13th", "13", "", ""),
        ),
        (
            Case::new("C13sus", Dominant7, "1 4 5 b7 9 13", "13sus")
                .ext(&[Ninth, Eleventh, Thirteenth])
                .sus(),
            expect("dominant-13th", "13sus", "subtract 3, add 4", "3, 4"),
        ),
        (
            Case::new("C13(b5,b9,#9)", Dominant7, "1 3 b5 b7 b9 #9 13", "13")
                .ext(&[Ninth, Eleventh, Thirteenth]),
            expect("dominant-13th", "13", "alter b5, alter b9, alter #9", ""),
        ),
        (
            Case::new("C13(#11)", Dominant7, "1 3 5 b7 9 #11 13", "13")
                .ext(&[Ninth, Eleventh, Thirteenth]),
            expect("dominant-13th", "13", "alter #11", ""),
        ),
        // Dominant alterations
        (
            Case::new("C7sus", Dominant7, "1 4 5 b7", "7sus").sus(),
            expect("dominant", "7sus", "subtract 3, add 4", "3, 4"),
        ),
        (
            Case::new("C7sus(b9)", Dominant7, "1 4 5 b7 b9", "7sus").sus(),
            expect("dominant", "7sus", "subtract 3, add 4, add b9", "3, 4"),
        ),
        (
            Case::new("C7(b13)", Dominant7, "1 3 b7 b13", "7"),
            expect("dominant", "7", "add b13", ""),
        ),
        (
            Case::new(
                "C7(b5,#5,b9,#9,b13)",
                Dominant7,
                "1 3 b5 #5 b7 b9 #9 b13",
                "7",
            ),
            expect(
                "dominant",
                "7",
                "alter b5, alter #5, add b9, add #9, add b13",
                "",
            ),
        ),
        (
            Case::new("C7(b9,#11)", Dominant7, "1 3 5 b7 b9 #11", "7"),
            expect("dominant", "7", "add b9, add #11", ""),
        ),
        (
            Case::new("Calt", Dominant7, "1 3 b5 #5 b7 b9 #9 #11 b13", "7alt").alt(),
            expect(
                "dominant",
                "7alt",
                "alter b5, alter #5, add b9, add #9, add #11, add b13",
                "b5, #5, b9, #9, #11, b13",
            ),
        ),
        // Minor-major
        (
            Case::new("CmiMa7", MinorMajor7, "1 b3 5 7", "miMa7"),
            expect("major-minor", "miMa7", "", ""),
        ),
        (
            Case::new("CmiMa9(add13)", MinorMajor7, "1 b3 5 7 9 13", "miMa9")
                .ext(&[Ninth])
                .adds("13"),
            expect("major-minor", "miMa9", "add 9, add 13", "9"),
        ),
        (
            Case::new("CmiMa13", MinorMajor7, "1 b3 5 7 9 11 13", "miMa13")
                .ext(&[Ninth, Eleventh, Thirteenth]),
            expect(
                "major-minor",
                "miMa13",
                "add 9, add 11, add 13",
                "9, 11, 13",
            ),
        ),
        (
            Case::new(
                "CmiMa11(add 9,add 11)",
                MinorMajor7,
                "1 b3 5 7 9 11",
                "miMa11",
            )
            .ext(&[Ninth, Eleventh])
            .adds("9 11"),
            expect("major-minor", "miMa11", "add 9, add 11", ""),
        ),
        // Diminished sevenths
        (
            Case::new("Cdim7", Diminished7, "1 b3 b5 bb7", "dim7"),
            expect("diminished-seventh", "dim7", "", ""),
        ),
        (
            Case::new(
                "Cdim7(add ma7,9,11,b13)",
                Diminished7,
                "1 b3 b5 bb7 7 9 11 b13",
                "dim7",
            )
            .adds("7 9 11 b13"),
            expect(
                "diminished-seventh",
                "dim7",
                "add 7, add 9, add 11, add b13",
                "",
            ),
        ),
    ]
}

fn note_of(harmony: &XmlNode, role: &str) -> Option<(String, Option<String>)> {
    let note = harmony.child(role)?;
    let step = note
        .child(&format!("{}-step", role))
        .and_then(XmlNode::text_content)?
        .to_string();
    let alter = note
        .child(&format!("{}-alter", role))
        .and_then(XmlNode::text_content)
        .map(str::to_string);
    Some((step, alter))
}

fn owned(note: (&str, Option<&str>)) -> (String, Option<String>) {
    (note.0.to_string(), note.1.map(str::to_string))
}

fn check_case(case: &Case, expected: &Expected) {
    let symbol = case.symbol;
    let harmony = render_harmony(&case.chord).unwrap_or_else(|e| panic!("{}: {}", symbol, e));
    assert_eq!(harmony.name(), "harmony", "{}", symbol);

    let root = note_of(&harmony, "root");
    assert_eq!(root, Some(owned(expected.root)), "{}: root", symbol);
    let bass = note_of(&harmony, "bass");
    assert_eq!(bass, expected.bass.map(owned), "{}: bass", symbol);

    let kind = harmony.child("kind").expect("kind element");
    let token = kind.text_content();
    assert_eq!(token, Some(expected.kind), "{}: kind", symbol);
    let text = kind.attr("text");
    assert_eq!(text, Some(expected.kind_text), "{}: kind text", symbol);

    let degrees = degrees_from_harmony(&harmony).unwrap();
    let actual: Vec<String> = degrees
        .iter()
        .map(|d| format!("{} {}", d.degree_type.as_str(), d.interval))
        .collect();
    assert_eq!(actual, list(expected.degrees), "{}: degrees", symbol);

    let hidden: Vec<String> = degrees
        .iter()
        .filter(|d| !d.printable)
        .map(|d| d.interval.to_string())
        .collect();
    assert_eq!(hidden, list(expected.hidden), "{}: hidden", symbol);
}

#[test]
fn test_chord_table() {
    for (case, expected) in all_cases() {
        check_case(&case, &expected);
    }
}

#[test]
fn test_harmony_decodes_to_chord_intervals() {
    for (case, _) in all_cases() {
        let harmony = render_harmony(&case.chord).unwrap();
        let decoded = intervals_from_harmony(&harmony).unwrap();
        assert_eq!(
            decoded,
            sort_intervals(&case.chord.normalized.intervals),
            "{} does not round-trip",
            case.symbol
        );
    }
}

#[test]
fn test_notes_and_bass() {
    let cases = [
        (
            Case::new("C/E", Major, "1 3 5", "").bass("E"),
            Expected {
                bass: Some(("E", None)),
                ..expect("major", "", "", "")
            },
        ),
        (
            Case::new("Bb/C", Major, "1 3 5", "").root("Bb").bass("C"),
            Expected {
                root: ("B", Some("-1")),
                bass: Some(("C", None)),
                ..expect("major", "", "", "")
            },
        ),
        (
            Case::new("F/F#", Major, "1 3 5", "").root("F").bass("F#"),
            Expected {
                root: ("F", None),
                bass: Some(("F", Some("1"))),
                ..expect("major", "", "", "")
            },
        ),
        (
            Case::new("G7SUS/A", Dominant7, "1 4 5 b7", "7sus")
                .root("G")
                .bass("A")
                .sus(),
            Expected {
                root: ("G", None),
                bass: Some(("A", None)),
                ..expect("dominant", "7sus", "subtract 3, add 4", "3, 4")
            },
        ),
        (
            Case::new("C#MA7SUS(b5)", Major7, "1 4 b5 7", "ma7sus")
                .root("C#")
                .sus(),
            Expected {
                root: ("C", Some("1")),
                ..expect(
                    "major-seventh",
                    "ma7sus",
                    "subtract 3, add 4, alter b5",
                    "3, 4",
                )
            },
        ),
        (
            Case::new("F#7SUS(add 3)", Dominant7, "1 3 4 5 b7", "7sus")
                .root("F#")
                .adds("3")
                .sus(),
            Expected {
                root: ("F", Some("1")),
                ..expect("dominant", "7sus", "add 3, add 4", "4")
            },
        ),
        (
            Case::new("G#MI7(add 11, omit 5)", Minor7, "1 b3 b7 11", "mi7")
                .root("G#")
                .adds("11"),
            Expected {
                root: ("G", Some("1")),
                ..expect("minor-seventh", "mi7", "subtract 5, add 11", "5")
            },
        ),
        (
            Case::new("Bb(add 9,add b13)", Major, "1 3 9 b13", "")
                .root("Bb")
                .adds("9 b13"),
            Expected {
                root: ("B", Some("-1")),
                ..expect("major", "", "add 9, add b13", "")
            },
        ),
        (
            Case::new("A+(add b9,add #9)", Augmented, "1 3 #5 b9 #9", "+")
                .root("A")
                .adds("b9 #9"),
            Expected {
                root: ("A", None),
                ..expect("augmented", "+", "add b9, add #9", "")
            },
        ),
        (
            Case::new("EbMA7(#5)/F", Major7, "1 3 #5 7", "ma7")
                .root("Eb")
                .bass("F"),
            Expected {
                root: ("E", Some("-1")),
                bass: Some(("F", None)),
                ..expect("major-seventh", "ma7", "alter #5", "")
            },
        ),
        (
            Case::new("C#mi7(b9,#9)/Ab", Minor7, "1 b3 5 b7 b9 #9", "mi7")
                .root("C#")
                .bass("Ab")
                .adds("b9 #9"),
            Expected {
                root: ("C", Some("1")),
                bass: Some(("A", Some("-1"))),
                ..expect("minor-seventh", "mi7", "add b9, add #9", "")
            },
        ),
    ];

    for (case, expected) in &cases {
        check_case(case, expected);
        let harmony = render_harmony(&case.chord).unwrap();
        let decoded = intervals_from_harmony(&harmony).unwrap();
        let original = sort_intervals(&case.chord.normalized.intervals);
        assert_eq!(decoded, original, "{}", case.symbol);
    }
}

#[test]
fn test_minimal_tree_is_root_and_kind() {
    let case = Case::new("C7", Dominant7, "1 3 5 b7", "7");
    let harmony = render_harmony(&case.chord).unwrap();
    let names: Vec<&str> = harmony.children().iter().map(XmlNode::name).collect();
    assert_eq!(names, vec!["root", "kind"]);
}

#[test]
fn test_element_order() {
    let case = Case::new("G7SUS/A", Dominant7, "1 4 5 b7", "7sus")
        .root("G")
        .bass("A")
        .sus();
    let harmony = render_harmony(&case.chord).unwrap();
    let names: Vec<&str> = harmony.children().iter().map(XmlNode::name).collect();
    assert_eq!(names, vec!["root", "kind", "bass", "degree", "degree"]);
}

#[test]
fn test_rendering_is_deterministic() {
    for (case, _) in all_cases() {
        let first = render_harmony(&case.chord).unwrap();
        let second = render_harmony(&case.chord).unwrap();
        assert_eq!(first, second, "{}", case.symbol);
    }
}

#[test]
fn test_render_leaves_chord_untouched() {
    for (case, _) in all_cases() {
        let original = case.chord.clone();
        let rendered = render(case.chord).unwrap();
        assert_eq!(rendered.chord, original);
        assert_eq!(rendered.musicxml, render_harmony(&original).unwrap());
    }
}

#[test]
fn test_rendering_a_rendered_chord_replaces_its_tree() {
    let case = Case::new("C7sus", Dominant7, "1 4 5 b7", "7sus").sus();
    let first = render(case.chord).unwrap();
    let first_document = serde_yaml::to_string(&first).unwrap();

    // the old tree comes back as a pass-through field
    let reloaded = Chord::from_yaml(&first_document).unwrap();
    assert!(reloaded.extra.contains_key("musicxml"));

    let second = render(reloaded).unwrap();
    assert!(!second.chord.extra.contains_key("musicxml"));
    assert_eq!(second.chord, first.chord);
    assert_eq!(second.musicxml, first.musicxml);

    let second_document = serde_yaml::to_string(&second).unwrap();
    assert_eq!(second_document.matches("musicxml:").count(), 1);
    assert_eq!(second_document, first_document);

    let reparsed = Chord::from_yaml(&second_document).unwrap();
    let tree = &reparsed.extra["musicxml"];
    assert_eq!(tree["_name"], "harmony");
}

#[test]
fn test_special_case_beats_quality() {
    // a "major" chord whose intervals are a half-diminished seventh
    let case = Case::new("C?", Major, "b7 b5 b3 1", "");
    let harmony = render_harmony(&case.chord).unwrap();
    let kind = harmony.child("kind").unwrap();
    assert_eq!(kind.text_content(), Some("half-diminished"));
    assert_eq!(kind.attr("text"), Some("ø"));
    assert_eq!(harmony.children_named("degree").count(), 0);
}

#[test]
fn test_every_quality_resolves_to_a_cataloged_kind() {
    let qualities = [
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
    ];
    let chains: [&[Extension]; 4] = [
        &[],
        &[Ninth],
        &[Ninth, Eleventh],
        &[Ninth, Eleventh, Thirteenth],
    ];

    for quality in qualities {
        for chain in chains {
            let case = Case::new("C", quality, "1 3 5", "").ext(chain);
            assert!(
                render_harmony(&case.chord).is_ok(),
                "{:?} with {:?} has no catalog entry",
                quality,
                chain
            );
        }
    }
}

#[test]
fn test_render_from_yaml_document() {
    let source = r#"
input:
  symbol: Calt
normalized:
  quality: dominant7
  intervals: ['1', '3', 'b5', '#5', 'b7', 'b9', '#9', '#11', 'b13']
  alterations: ['b5', '#5', 'b9', '#9', '#11', 'b13']
  intents:
    alt: true
formatted:
  rootNote: C
  descriptor: 7alt
"#;
    let chord = Chord::from_yaml(source).unwrap();
    let rendered = render(chord).unwrap();

    let degrees = degrees_from_harmony(&rendered.musicxml).unwrap();
    assert_eq!(degrees.len(), 6);
    assert!(degrees.iter().all(|d| !d.printable));

    // the upstream fields travel with the rendered chord
    let value = serde_yaml::to_value(&rendered).unwrap();
    assert!(value.get("input").is_some());
    assert!(value.get("normalized").is_some());
    let tree_name = value
        .get("musicxml")
        .and_then(|m| m.get("_name"))
        .and_then(|n| n.as_str());
    assert_eq!(tree_name, Some("harmony"));
}
