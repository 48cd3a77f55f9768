//! Korean-aware text reflow
//!
//! This crate rewraps pasted text into lines holding at most a fixed number
//! of *counted* characters. Which characters count is decided by a
//! [`CountingPolicy`]: only Hangul syllables, every non-space character, or
//! every character outside a punctuation and invisible-mark exclusion set.
//! Words longer than the budget are cut into budget-sized fragments, and an
//! optional normalization pass turns every sentence into its own paragraph
//! before wrapping.
//!
//! # Architecture
//!
//! - **Domain layer**: character classification, sentence normalization and
//!   greedy line packing as pure functions
//! - **API layer**: validated configuration, input sources and output
//!   statistics for host applications
//!
//! # Example
//!
//! ```rust
//! use textbreak_core::{reflow, CountingPolicy};
//!
//! let text = "가나다라마바사아자차카";
//! let result = reflow(text, 5, CountingPolicy::KoreanOnly, false).unwrap();
//! assert_eq!(result, "가나다라마\n바사아자차\n카");
//! ```
//!
//! With a configured processor:
//!
//! ```rust
//! use textbreak_core::{Config, CountingPolicy, Reflower};
//!
//! let config = Config::builder()
//!     .line_budget(18)
//!     .policy(CountingPolicy::KoreanOnly)
//!     .normalize_sentences(true)
//!     .build()
//!     .unwrap();
//! let output = Reflower::with_config(config)
//!     .unwrap()
//!     .process_text("안녕하세요. 저는 개발자입니다.");
//! assert_eq!(output.text(), "안녕하세요.\n\n저는 개발자입니다.");
//! ```

pub mod api;
pub mod domain;
pub mod error;

pub use api::{Config, ConfigBuilder, Input, Output, ReflowStats, Reflower};
pub use domain::*;
pub use error::{Error, Result};
