//! Root and bass note names.
//!
//! The formatter gives notes as display strings (`C`, `F#`, `Bb`). MusicXML
//! wants them split into a step letter and an optional chromatic alteration.

use std::fmt;
use std::str::FromStr;

use crate::error::HarmonyError;
use crate::interval::Accidental;

/// Note letter (A-G)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::D => "D",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::G => "G",
            NoteName::A => "A",
            NoteName::B => "B",
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub name: NoteName,
    pub accidental: Accidental,
}

impl Note {
    /// Value for `<root-alter>` / `<bass-alter>`; `None` for natural notes.
    pub fn alter(&self) -> Option<i8> {
        match self.accidental {
            Accidental::Natural => None,
            accidental => Some(accidental.semitones()),
        }
    }
}

impl FromStr for Note {
    type Err = HarmonyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let name = chars
            .next()
            .and_then(NoteName::from_char)
            .ok_or_else(|| HarmonyError::InvalidNote(s.to_string()))?;

        let accidental = match chars.as_str() {
            "" => Accidental::Natural,
            "#" | "♯" => Accidental::Sharp,
            "b" | "♭" => Accidental::Flat,
            _ => return Err(HarmonyError::InvalidNote(s.to_string())),
        };

        Ok(Note { name, accidental })
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accidental = match self.accidental {
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
            Accidental::DoubleFlat => "bb",
            Accidental::Natural => "",
        };
        write!(f, "{}{}", self.name.as_str(), accidental)
    }
}
