use std::fmt;
use std::str::FromStr;

/// How the composition automaton should interpret a layout's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyboardType {
    /// Two-set style: keys produce initial consonants and vowels.
    #[default]
    Jamo,
    /// Jamo layout that also produces archaic jamo.
    JamoYet,
    /// Three-set style: initial, medial and final jamo on separate keys.
    Jaso,
    /// Jaso layout that also produces archaic jamo.
    JasoYet,
    /// Latin transliteration input.
    Romaja,
}

impl KeyboardType {
    pub const ALL: [KeyboardType; 5] = [
        KeyboardType::Jamo,
        KeyboardType::JamoYet,
        KeyboardType::Jaso,
        KeyboardType::JasoYet,
        KeyboardType::Romaja,
    ];

    /// Numeric code used by automaton implementations.
    pub fn code(self) -> u8 {
        match self {
            KeyboardType::Jamo => 0,
            KeyboardType::JamoYet => 1,
            KeyboardType::Jaso => 2,
            KeyboardType::JasoYet => 3,
            KeyboardType::Romaja => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// The `type` attribute value used in layout files.
    pub fn as_str(self) -> &'static str {
        match self {
            KeyboardType::Jamo => "jamo",
            KeyboardType::JamoYet => "jamo-yet",
            KeyboardType::Jaso => "jaso",
            KeyboardType::JasoYet => "jaso-yet",
            KeyboardType::Romaja => "romaja",
        }
    }
}

impl fmt::Display for KeyboardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for KeyboardType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown keyboard type: {}", s))
    }
}
