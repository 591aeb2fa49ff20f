pub mod filter;
pub mod lines;
pub mod segmenter;
pub mod token;
pub mod tokenizer;
