use crate::error::{Error, Result};

/// Practice paragraph shown on every run
pub const PRACTICE_PARAGRAPH: &str = "Typing is a fundamental skill that helps you communicate efficiently with computers. Practice daily to improve your speed and accuracy, and learn to use all your fingers for the best results.";

/// The fixed passage a session is typed against. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceText {
    chars: Vec<char>,
}

impl ReferenceText {
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::EmptyReference);
        }
        Ok(Self {
            chars: text.chars().collect(),
        })
    }

    pub fn practice() -> Self {
        Self {
            chars: PRACTICE_PARAGRAPH.chars().collect(),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }
}

impl std::fmt::Display for ReferenceText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
