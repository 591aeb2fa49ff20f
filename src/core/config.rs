/// Construction-time configuration for the tokenizer.
///
/// Both flags parameterize the bundled default engine: `sentence_detection`
/// turns on sentence grouping at terminator punctuation, and
/// `ambiguity_resolution` enables dictionary-driven compound joining.
/// A custom engine receives its own configuration at construction; the
/// flags are not re-sent on every segment call.
#[derive(Debug, Clone, Copy)]
pub struct TokenizerConfig {
    pub sentence_detection: bool,
    pub ambiguity_resolution: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig {
            sentence_detection: true,
            ambiguity_resolution: false,
        }
    }
}

impl TokenizerConfig {
    pub fn with_sentence_detection(mut self, enabled: bool) -> Self {
        self.sentence_detection = enabled;
        self
    }

    pub fn with_ambiguity_resolution(mut self, enabled: bool) -> Self {
        self.ambiguity_resolution = enabled;
        self
    }
}
