pub mod core;
pub mod analysis;
pub mod diagnostics;

/*
┌─────────────────────────────── VISEG STRUCT ARCHITECTURE ─────────────────────────────────┐
│                                                                                            │
│  ┌──────────────────────────────────────────────────────────────────────────────────┐    │
│  │                         struct VietnameseTokenizer                                │    │
│  │  engine: Box<dyn SegmentationEngine>   // Word-boundary detection (pluggable)     │    │
│  │  filter: Box<dyn CandidateFilter>      // Drops noise candidates                  │    │
│  │  sink: Box<dyn DiagnosticSink>         // Optional telemetry, no-op by default    │    │
│  │  buffer: Vec<WordCandidate>            // One document, flattened line order      │    │
│  │  cursor / offset / skipped_positions   // Pull-protocol state, zeroed on reset    │    │
│  └──────────────────────────────────────────────────────────────────────────────────┘    │
│                                                                                            │
│  reset(input) ──reads──> LineSplitter ──per line──> SegmentationEngine ──fills──> buffer  │
│  next_token() ──pulls──> buffer ──filters──> Token { text, offsets, type, increment }     │
│  end()        ──emits──> TokenizerEnd { final offset, trailing skip count }               │
│                                                                                            │
│  ┌────────────────────────┐  ┌───────────────────────┐  ┌─────────────────────────┐      │
│  │ trait SegmentationEng. │  │ trait CandidateFilter │  │ trait DiagnosticSink    │      │
│  │ • SyllableSegmenter    │  │ • WordCharacterFilter │  │ • NoopSink              │      │
│  │ • DictionarySegmenter  │  │ • AcceptAllFilter     │  │ • JsonLinesSink         │      │
│  └────────────────────────┘  └───────────────────────┘  └─────────────────────────┘      │
└────────────────────────────────────────────────────────────────────────────────────────────┘
*/
