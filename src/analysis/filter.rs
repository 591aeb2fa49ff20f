use crate::analysis::token::WordCandidate;

pub trait CandidateFilter: Send + Sync {
    fn accept(&self, candidate: &WordCandidate) -> bool;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn CandidateFilter>;
}

/// Drops single stray punctuation and symbol characters.
///
/// A one-character candidate is accepted only if the character is a Unicode
/// letter or digit; anything two characters or longer is kept, including
/// hyphenated compounds.
pub struct WordCharacterFilter;

impl CandidateFilter for WordCharacterFilter {
    fn accept(&self, candidate: &WordCandidate) -> bool {
        let mut chars = candidate.text.chars();
        match (chars.next(), chars.next()) {
            (Some(only), None) => only.is_alphanumeric(),
            (Some(_), Some(_)) => true,
            (None, _) => false,
        }
    }

    fn name(&self) -> &str {
        "word_character"
    }

    fn clone_box(&self) -> Box<dyn CandidateFilter> {
        Box::new(WordCharacterFilter)
    }
}

/// Passes every candidate through, for hosts that filter downstream.
pub struct AcceptAllFilter;

impl CandidateFilter for AcceptAllFilter {
    fn accept(&self, _candidate: &WordCandidate) -> bool {
        true
    }

    fn name(&self) -> &str {
        "accept_all"
    }

    fn clone_box(&self) -> Box<dyn CandidateFilter> {
        Box::new(AcceptAllFilter)
    }
}
