/// Plugging a custom segmentation engine into the tokenizer
///
/// Shows the three host-facing seams:
/// - a custom SegmentationEngine (here a trivial whitespace splitter)
/// - an offset corrector remapping into original-document positions
/// - a JSON-lines diagnostic sink on stdout

use viseg::analysis::segmenter::SegmentationEngine;
use viseg::analysis::token::WordCandidate;
use viseg::analysis::tokenizer::VietnameseTokenizer;
use viseg::diagnostics::sink::JsonLinesSink;

/// One candidate per whitespace chunk, tagged by a trivial rule.
struct WhitespaceEngine;

impl SegmentationEngine for WhitespaceEngine {
    fn segment(&self, line: &str) -> Vec<Vec<WordCandidate>> {
        let words: Vec<WordCandidate> = line
            .split_whitespace()
            .map(|w| {
                let tag = if w.chars().all(|c| c.is_numeric()) {
                    "number"
                } else {
                    "word"
                };
                WordCandidate::new(w, tag)
            })
            .collect();
        if words.is_empty() { Vec::new() } else { vec![words] }
    }

    fn name(&self) -> &str {
        "whitespace"
    }

    fn clone_box(&self) -> Box<dyn SegmentationEngine> {
        Box::new(WhitespaceEngine)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pretend the host stripped a 12-char preamble before tokenizing
    let mut tokenizer = VietnameseTokenizer::new()
        .with_engine(Box::new(WhitespaceEngine))
        .with_offset_corrector(|offset| offset + 12)
        .with_diagnostics(Box::new(JsonLinesSink::new(std::io::stdout())));

    tokenizer.reset("Bộ trưởng họp báo ngày 21\ntại Hà Nội".as_bytes())?;
    while let Some(token) = tokenizer.next_token() {
        println!(
            "[{}..{}] {} ({})",
            token.start_offset, token.end_offset, token.text, token.token_type
        );
    }
    let finish = tokenizer.end()?;
    println!("final offset: {}", finish.offset);

    Ok(())
}
