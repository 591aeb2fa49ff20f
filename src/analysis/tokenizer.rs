use std::io::BufRead;

use crate::analysis::filter::{CandidateFilter, WordCharacterFilter};
use crate::analysis::lines::LineSplitter;
use crate::analysis::segmenter::{SegmentationEngine, default_engine};
use crate::analysis::token::{Token, TokenizerEnd, WordCandidate};
use crate::core::config::TokenizerConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::diagnostics::sink::{DiagnosticEvent, DiagnosticSink, NoopSink};

/// Lifecycle of one document pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Uninitialized,
    Buffered,
    Exhausted,
}

type OffsetCorrector = Box<dyn Fn(usize) -> usize + Send>;

/// Pull-based Vietnamese token stream for search indexing.
///
/// `reset` buffers a whole document (line by line through the segmentation
/// engine), `next_token` pulls filtered tokens with offsets and position
/// increments, `end` finalizes the stream. The instance is reusable: call
/// `reset` again for the next document, the engine is constructed once.
///
/// Buffering the full document before the first pull is deliberate: the
/// engine interface is per-line with no incremental cross-line API, so the
/// stream cannot be produced lazily. Bounded by realistic document sizes.
///
/// Offsets are char-based approximations, advanced by accepted-token length
/// plus one separator; the engine returns no source positions. Hosts that
/// preprocess the input can remap emitted offsets via `with_offset_corrector`.
pub struct VietnameseTokenizer {
    engine: Box<dyn SegmentationEngine>,
    filter: Box<dyn CandidateFilter>,
    sink: Box<dyn DiagnosticSink>,
    correct: OffsetCorrector,
    buffer: Vec<WordCandidate>,
    cursor: usize,
    offset: usize,
    skipped_positions: u32,
    emitted: usize,
    rejected: usize,
    state: StreamState,
}

impl VietnameseTokenizer {
    pub fn new() -> Self {
        Self::with_config(TokenizerConfig::default())
    }

    pub fn with_config(config: TokenizerConfig) -> Self {
        VietnameseTokenizer {
            engine: default_engine(config),
            filter: Box::new(WordCharacterFilter),
            sink: Box::new(NoopSink),
            correct: Box::new(|offset| offset),
            buffer: Vec::new(),
            cursor: 0,
            offset: 0,
            skipped_positions: 0,
            emitted: 0,
            rejected: 0,
            state: StreamState::Uninitialized,
        }
    }

    /// Swap in a custom segmentation engine (deterministic stubs in tests,
    /// dictionary-backed services in production).
    pub fn with_engine(mut self, engine: Box<dyn SegmentationEngine>) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_filter(mut self, filter: Box<dyn CandidateFilter>) -> Self {
        self.filter = filter;
        self
    }

    /// Optional telemetry; defaults to no-op and never affects tokenization.
    pub fn with_diagnostics(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Host-supplied remapping from internal char offsets to original-document
    /// offsets, applied at emission only.
    pub fn with_offset_corrector(
        mut self,
        correct: impl Fn(usize) -> usize + Send + 'static,
    ) -> Self {
        self.correct = Box::new(correct);
        self
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Buffer an entire document for pulling.
    ///
    /// Reads the input to completion, one line at a time, flattening the
    /// engine output in line, then sentence, then word order. An I/O failure
    /// propagates unchanged and leaves the stream uninitialized; it must be
    /// reset again before use.
    pub fn reset<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.state = StreamState::Uninitialized;
        self.buffer.clear();
        self.cursor = 0;
        self.offset = 0;
        self.skipped_positions = 0;
        self.emitted = 0;
        self.rejected = 0;

        let mut lines = 0;
        for line in LineSplitter::new(input) {
            let line = line?;
            lines += 1;
            for sentence in self.engine.segment(&line) {
                self.buffer.extend(sentence);
            }
        }

        self.sink.record(DiagnosticEvent::DocumentBuffered {
            lines,
            candidates: self.buffer.len(),
        });
        self.state = StreamState::Buffered;
        Ok(())
    }

    /// Pull the next accepted token, or `None` once the buffer is drained.
    ///
    /// Rejected candidates (filter policy, or defensively an empty-text
    /// candidate from a misbehaving engine) count as skipped positions and
    /// do not advance the running offset.
    pub fn next_token(&mut self) -> Option<Token> {
        while self.cursor < self.buffer.len() {
            let candidate = &self.buffer[self.cursor];
            self.cursor += 1;

            if candidate.text.is_empty() || !self.filter.accept(candidate) {
                self.skipped_positions += 1;
                self.rejected += 1;
                continue;
            }

            let length = candidate.text.chars().count();
            let token = Token {
                text: candidate.text.clone(),
                start_offset: (self.correct)(self.offset),
                end_offset: (self.correct)(self.offset + length),
                token_type: candidate.tag.clone(),
                position_increment: self.skipped_positions + 1,
            };
            self.offset += length + 1;
            self.skipped_positions = 0;
            self.emitted += 1;
            return Some(token);
        }
        self.state = StreamState::Exhausted;
        None
    }

    /// Finalize the stream after the last pull: a zero-length span at the
    /// final offset, with any trailing skip count folded into the increment
    /// so the total advance stays consistent for downstream consumers.
    pub fn end(&mut self) -> Result<TokenizerEnd> {
        if self.state == StreamState::Uninitialized {
            return Err(Error::new(
                ErrorKind::InvalidState,
                "end() called before reset()".to_string(),
            ));
        }
        self.sink.record(DiagnosticEvent::StreamFinalized {
            emitted: self.emitted,
            skipped: self.rejected,
        });
        Ok(TokenizerEnd {
            offset: (self.correct)(self.offset),
            position_increment: self.skipped_positions,
        })
    }

    /// Convenience wrapper: one full reset/drain cycle over an in-memory
    /// string, discarding the finalization value.
    pub fn tokenize(&mut self, text: &str) -> Result<Vec<Token>> {
        self.reset(text.as_bytes())?;
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        self.end()?;
        Ok(tokens)
    }
}

impl Default for VietnameseTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::segmenter::TAG_COMPOUND;

    /// One candidate per whitespace-delimited chunk, one sentence per line.
    struct WhitespaceStub;

    impl SegmentationEngine for WhitespaceStub {
        fn segment(&self, line: &str) -> Vec<Vec<WordCandidate>> {
            let words: Vec<WordCandidate> = line
                .split_whitespace()
                .map(|w| WordCandidate::new(w, "stub"))
                .collect();
            if words.is_empty() { Vec::new() } else { vec![words] }
        }

        fn name(&self) -> &str {
            "whitespace_stub"
        }

        fn clone_box(&self) -> Box<dyn SegmentationEngine> {
            Box::new(WhitespaceStub)
        }
    }

    fn stub_tokenizer() -> VietnameseTokenizer {
        VietnameseTokenizer::new().with_engine(Box::new(WhitespaceStub))
    }

    fn drain(tokenizer: &mut VietnameseTokenizer) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = tokenizer.next_token() {
            tokens.push(token);
        }
        tokens
    }

    #[test]
    fn multi_line_document_keeps_line_order() {
        let mut tokenizer = stub_tokenizer();
        tokenizer
            .reset("Ông Phan Mạnh Thắng.\nBộ trưởng.".as_bytes())
            .unwrap();
        let tokens = drain(&mut tokenizer);

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Ông", "Phan", "Mạnh", "Thắng.", "Bộ", "trưởng."]
        );
        // Second line starts at or after the first line's last end offset
        assert!(tokens[4].start_offset >= tokens[3].end_offset);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 3); // char length of "Ông"
    }

    #[test]
    fn offsets_are_monotonic() {
        let mut tokenizer = stub_tokenizer();
        let input = "Ông Phan Mạnh Thắng, bộ trưởng bộ ngoại giao Việt Nam";
        tokenizer.reset(input.as_bytes()).unwrap();
        let tokens = drain(&mut tokenizer);

        let total_chars = input.chars().count();
        let mut previous_end = 0;
        for token in &tokens {
            assert!(token.start_offset >= previous_end);
            assert!(token.end_offset <= total_chars + 1);
            previous_end = token.end_offset;
        }
    }

    #[test]
    fn position_increments_account_for_skipped_candidates() {
        let mut tokenizer = stub_tokenizer();
        // Stub yields ".", "a", ",", "b" as separate candidates
        tokenizer.reset(". a , b".as_bytes()).unwrap();
        let tokens = drain(&mut tokenizer);
        let finish = tokenizer.end().unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].position_increment, 2); // "." skipped
        assert_eq!(tokens[1].position_increment, 2); // "," skipped
        assert_eq!(finish.position_increment, 0);

        let total: u32 = tokens.iter().map(|t| t.position_increment).sum::<u32>()
            + finish.position_increment;
        assert_eq!(total, 4); // 2 accepted + 2 rejected
    }

    #[test]
    fn trailing_skips_fold_into_end() {
        let mut tokenizer = stub_tokenizer();
        tokenizer.reset("xin chào . !".as_bytes()).unwrap();
        let tokens = drain(&mut tokenizer);
        let finish = tokenizer.end().unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(finish.position_increment, 2);
        // Rejected candidates did not widen the offset window
        assert_eq!(finish.offset, tokens[1].end_offset + 1);
    }

    #[test]
    fn empty_input_yields_no_tokens_and_zero_end() {
        let mut tokenizer = stub_tokenizer();
        tokenizer.reset("".as_bytes()).unwrap();
        assert!(tokenizer.next_token().is_none());
        assert_eq!(tokenizer.state(), StreamState::Exhausted);

        let finish = tokenizer.end().unwrap();
        assert_eq!(finish.offset, 0);
        assert_eq!(finish.position_increment, 0);
    }

    #[test]
    fn instance_is_reusable_across_documents() {
        let mut tokenizer = stub_tokenizer();

        tokenizer.reset("tài liệu một .".as_bytes()).unwrap();
        drain(&mut tokenizer);
        tokenizer.end().unwrap();

        tokenizer.reset("tài liệu hai".as_bytes()).unwrap();
        let second = drain(&mut tokenizer);
        tokenizer.end().unwrap();

        let mut fresh = stub_tokenizer();
        fresh.reset("tài liệu hai".as_bytes()).unwrap();
        let expected = drain(&mut fresh);

        assert_eq!(second, expected);
        assert_eq!(second[0].start_offset, 0);
        assert_eq!(second[0].position_increment, 1);
    }

    #[test]
    fn empty_text_candidates_are_skipped_defensively() {
        struct EmptyTextStub;

        impl SegmentationEngine for EmptyTextStub {
            fn segment(&self, _line: &str) -> Vec<Vec<WordCandidate>> {
                vec![vec![
                    WordCandidate::new("", "stub"),
                    WordCandidate::new("hai", "stub"),
                ]]
            }

            fn name(&self) -> &str {
                "empty_text_stub"
            }

            fn clone_box(&self) -> Box<dyn SegmentationEngine> {
                Box::new(EmptyTextStub)
            }
        }

        let mut tokenizer =
            VietnameseTokenizer::new().with_engine(Box::new(EmptyTextStub));
        tokenizer.reset("x".as_bytes()).unwrap();
        let tokens = drain(&mut tokenizer);

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "hai");
        assert_eq!(tokens[0].position_increment, 2);
    }

    #[test]
    fn end_before_reset_is_an_error() {
        let mut tokenizer = stub_tokenizer();
        let err = tokenizer.end().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidState));
    }

    #[test]
    fn io_failure_leaves_stream_uninitialized() {
        use std::io::{self, BufReader, Read};

        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk gone"))
            }
        }

        let mut tokenizer = stub_tokenizer();
        let err = tokenizer.reset(BufReader::new(FailingReader)).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Io));
        assert_eq!(tokenizer.state(), StreamState::Uninitialized);
        assert!(tokenizer.end().is_err());
    }

    #[test]
    fn offset_corrector_remaps_emitted_offsets() {
        let mut tokenizer = stub_tokenizer().with_offset_corrector(|offset| offset + 10);
        tokenizer.reset("một hai".as_bytes()).unwrap();
        let tokens = drain(&mut tokenizer);

        assert_eq!(tokens[0].start_offset, 10);
        assert_eq!(tokens[0].end_offset, 13);
        assert_eq!(tokens[1].start_offset, 14);

        let finish = tokenizer.end().unwrap();
        assert_eq!(finish.offset, 18);
    }

    #[test]
    fn default_engine_filters_stray_punctuation() {
        let mut tokenizer = VietnameseTokenizer::new();
        let tokens = tokenizer.tokenize("Ông Phan Mạnh Thắng.").unwrap();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Ông", "Phan", "Mạnh", "Thắng"]);
        assert!(tokens.iter().all(|t| t.token_type == "word"));
    }

    #[test]
    fn ambiguity_resolution_emits_compounds() {
        let config = TokenizerConfig::default().with_ambiguity_resolution(true);
        let mut tokenizer = VietnameseTokenizer::with_config(config);
        let tokens = tokenizer
            .tokenize("bộ trưởng bộ ngoại giao Việt Nam")
            .unwrap();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["bộ trưởng", "bộ ngoại giao", "Việt Nam"]);
        assert!(tokens.iter().all(|t| t.token_type == TAG_COMPOUND));
    }
}
