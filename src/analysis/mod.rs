//! Lexical analysis over extracted result records
//!
//! Pure text processing: tokenization with numeric/date noise filtering and
//! bigram frequency ranking. No I/O, no failure cases.

pub mod phrases;
pub mod tokenizer;

pub use phrases::{PhraseCount, count_bigrams, rank_phrases};
pub use tokenizer::{is_lexical_token, text_blob, tokenize};
