//! Pure text reflow logic: character classification, sentence
//! normalization and line packing.

pub mod classifier;
pub mod document;
pub mod normalizer;
pub mod reflow;

pub use classifier::{
    count_visible, count_weighted, is_countable, is_hangul_syllable, is_invisible,
    is_visible_char, CountingPolicy,
};
pub use document::{Document, Line};
pub use normalizer::{normalize_sentences, PARAGRAPH_BREAK};
pub use reflow::{
    format_text, reflow, reflow_document, split_by_policy, ReflowEngine, DEFAULT_LINE_BUDGET,
};
