use std::collections::HashSet;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::WordCandidate;
use crate::core::config::TokenizerConfig;

pub const TAG_WORD: &str = "word";
pub const TAG_NUMBER: &str = "number";
pub const TAG_PUNCT: &str = "punct";
pub const TAG_COMPOUND: &str = "compound";

/// Word-segmentation engine consumed by the tokenizer.
///
/// One line in, sentences of ordered word candidates out. No offsets are
/// returned; the tokenizer reconstructs them from accepted-token lengths.
/// Each tokenizer instance owns its own engine, never shared across threads.
pub trait SegmentationEngine: Send + Sync {
    fn segment(&self, line: &str) -> Vec<Vec<WordCandidate>>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn SegmentationEngine>;
}

/// Syllable-level segmenter over Unicode word boundaries.
///
/// Vietnamese is written with space-separated syllables, so word-boundary
/// splitting is a reasonable baseline. Punctuation runs are kept as
/// candidates so the downstream filter can count them as skipped positions.
pub struct SyllableSegmenter {
    sentence_detection: bool,
    terminator: Regex,
}

impl SyllableSegmenter {
    pub fn new(sentence_detection: bool) -> Self {
        SyllableSegmenter {
            sentence_detection,
            terminator: Regex::new(r"^[.!?…]+$").expect("terminator pattern is valid"),
        }
    }

    fn candidates(&self, line: &str) -> Vec<WordCandidate> {
        line.split_word_bounds()
            .filter(|chunk| !chunk.trim().is_empty())
            .map(|chunk| WordCandidate::new(chunk, classify(chunk)))
            .collect()
    }
}

fn classify(chunk: &str) -> &'static str {
    if chunk.chars().all(|c| c.is_numeric()) {
        TAG_NUMBER
    } else if chunk.chars().any(|c| c.is_alphanumeric()) {
        TAG_WORD
    } else {
        TAG_PUNCT
    }
}

impl SegmentationEngine for SyllableSegmenter {
    fn segment(&self, line: &str) -> Vec<Vec<WordCandidate>> {
        let candidates = self.candidates(line);
        if candidates.is_empty() {
            return Vec::new();
        }
        if !self.sentence_detection {
            return vec![candidates];
        }

        let mut sentences = Vec::new();
        let mut current = Vec::new();
        for candidate in candidates {
            let terminal = self.terminator.is_match(&candidate.text);
            current.push(candidate);
            if terminal {
                sentences.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            sentences.push(current);
        }
        sentences
    }

    fn name(&self) -> &str {
        "syllable"
    }

    fn clone_box(&self) -> Box<dyn SegmentationEngine> {
        Box::new(SyllableSegmenter::new(self.sentence_detection))
    }
}

/// Dictionary-driven segmenter joining adjacent syllables into compounds.
///
/// Greedy longest match against a lexicon of multi-syllable entries, the
/// ambiguity-resolution strategy of the default engine. The lexicon is built
/// once at construction and read-only afterwards. Matching is
/// case-insensitive; entries are stored lowercased.
pub struct DictionarySegmenter {
    inner: SyllableSegmenter,
    lexicon: HashSet<String>,
    max_syllables: usize,
}

impl DictionarySegmenter {
    pub fn new(sentence_detection: bool, entries: Vec<String>) -> Self {
        let lexicon: HashSet<String> = entries.into_iter().map(|e| e.to_lowercase()).collect();
        let max_syllables = lexicon
            .iter()
            .map(|entry| entry.split_whitespace().count())
            .max()
            .unwrap_or(0);
        DictionarySegmenter {
            inner: SyllableSegmenter::new(sentence_detection),
            lexicon,
            max_syllables,
        }
    }

    /// Starter lexicon of frequent compounds, in the spirit of a bundled
    /// stop-word list. Production hosts supply their own dictionary.
    pub fn with_builtin_lexicon(sentence_detection: bool) -> Self {
        let entries = vec![
            "bộ trưởng", "bộ ngoại giao", "ngoại giao", "việt nam", "hà nội",
            "chính phủ", "thủ tướng", "quốc hội", "nhà nước", "công ty",
            "thị trường", "đại học", "giáo dục", "kinh tế", "xã hội",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        DictionarySegmenter::new(sentence_detection, entries)
    }

    fn join(&self, sentence: Vec<WordCandidate>) -> Vec<WordCandidate> {
        let mut joined = Vec::with_capacity(sentence.len());
        let mut index = 0;
        while index < sentence.len() {
            let longest = self.max_syllables.min(sentence.len() - index);
            let mut advanced = 0;
            for window in (2..=longest).rev() {
                let span = &sentence[index..index + window];
                // Compounds never cross punctuation or numbers
                if span.iter().any(|c| c.tag != TAG_WORD) {
                    continue;
                }
                let key = span
                    .iter()
                    .map(|c| c.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                if self.lexicon.contains(&key.to_lowercase()) {
                    joined.push(WordCandidate::new(key, TAG_COMPOUND));
                    advanced = window;
                    break;
                }
            }
            if advanced == 0 {
                joined.push(sentence[index].clone());
                index += 1;
            } else {
                index += advanced;
            }
        }
        joined
    }
}

impl SegmentationEngine for DictionarySegmenter {
    fn segment(&self, line: &str) -> Vec<Vec<WordCandidate>> {
        self.inner
            .segment(line)
            .into_iter()
            .map(|sentence| self.join(sentence))
            .collect()
    }

    fn name(&self) -> &str {
        "dictionary"
    }

    fn clone_box(&self) -> Box<dyn SegmentationEngine> {
        Box::new(DictionarySegmenter {
            inner: SyllableSegmenter::new(self.inner.sentence_detection),
            lexicon: self.lexicon.clone(),
            max_syllables: self.max_syllables,
        })
    }
}

/// Default engine for a given configuration.
pub fn default_engine(config: TokenizerConfig) -> Box<dyn SegmentationEngine> {
    if config.ambiguity_resolution {
        Box::new(DictionarySegmenter::with_builtin_lexicon(
            config.sentence_detection,
        ))
    } else {
        Box::new(SyllableSegmenter::new(config.sentence_detection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentence: &[WordCandidate]) -> Vec<&str> {
        sentence.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn syllables_keep_punctuation_as_candidates() {
        let engine = SyllableSegmenter::new(false);
        let sentences = engine.segment("Ông Thắng, 21 tuổi.");
        assert_eq!(sentences.len(), 1);
        assert_eq!(
            texts(&sentences[0]),
            vec!["Ông", "Thắng", ",", "21", "tuổi", "."]
        );
        assert_eq!(sentences[0][2].tag, TAG_PUNCT);
        assert_eq!(sentences[0][3].tag, TAG_NUMBER);
        assert_eq!(sentences[0][4].tag, TAG_WORD);
    }

    #[test]
    fn sentence_detection_groups_at_terminators() {
        let engine = SyllableSegmenter::new(true);
        let sentences = engine.segment("Một hai. Ba bốn!");
        assert_eq!(sentences.len(), 2);
        assert_eq!(texts(&sentences[0]), vec!["Một", "hai", "."]);
        assert_eq!(texts(&sentences[1]), vec!["Ba", "bốn", "!"]);
    }

    #[test]
    fn empty_line_yields_no_sentences() {
        let engine = SyllableSegmenter::new(true);
        assert!(engine.segment("").is_empty());
        assert!(engine.segment("   ").is_empty());
    }

    #[test]
    fn dictionary_joins_longest_match() {
        let engine = DictionarySegmenter::with_builtin_lexicon(false);
        let sentences = engine.segment("bộ trưởng bộ ngoại giao Việt Nam");
        assert_eq!(sentences.len(), 1);
        assert_eq!(
            texts(&sentences[0]),
            vec!["bộ trưởng", "bộ ngoại giao", "Việt Nam"]
        );
        assert!(sentences[0].iter().all(|c| c.tag == TAG_COMPOUND));
    }

    #[test]
    fn dictionary_does_not_join_across_punctuation() {
        let engine = DictionarySegmenter::new(
            false,
            vec!["bộ trưởng".to_string()],
        );
        let sentences = engine.segment("bộ, trưởng");
        assert_eq!(texts(&sentences[0]), vec!["bộ", ",", "trưởng"]);
    }

    #[test]
    fn empty_lexicon_passes_syllables_through() {
        let engine = DictionarySegmenter::new(false, Vec::new());
        let sentences = engine.segment("bộ trưởng");
        assert_eq!(texts(&sentences[0]), vec!["bộ", "trưởng"]);
    }

    #[test]
    fn default_engine_honors_ambiguity_flag() {
        let plain = default_engine(TokenizerConfig::default());
        assert_eq!(plain.name(), "syllable");
        let resolving =
            default_engine(TokenizerConfig::default().with_ambiguity_resolution(true));
        assert_eq!(resolving.name(), "dictionary");
    }
}
