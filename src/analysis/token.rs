use serde::{Serialize, Deserialize};

/// Word boundary proposed by a segmentation engine, prior to filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCandidate {
    pub text: String,      // Surface text, expected non-empty
    pub tag: String,       // Engine-assigned lemma/type tag
}

impl WordCandidate {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        WordCandidate {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// Token emitted by the pull protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start_offset: usize,        // Char offset into the input (approximate)
    pub end_offset: usize,
    pub token_type: String,         // Candidate tag carried through
    pub position_increment: u32,    // Slots advanced since the previous token, >= 1
}

/// Finalization value produced by `end()`: a zero-length span at the final
/// running offset, with any trailing skip count folded into the increment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerEnd {
    pub offset: usize,
    pub position_increment: u32,
}
