//! HTML tokenizer module.
//!
//! Implements [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//! of the WHATWG HTML Living Standard as a pull-based state machine.

/// Parse error kinds and categories.
pub mod error;
/// Positional access into the decoded input.
pub mod input;
/// Named character reference lookup table per § 13.5.
pub mod named_character_references;
/// Tokenizer configuration.
pub mod options;
/// Token types produced by the tokenizer.
pub mod token;
/// HTML tokenizer state machine implementation.
pub mod core;

mod builder;
mod character_reference;
mod comment;
mod doctype;
mod helpers;
mod raw_text;

pub use self::core::{HTMLTokenizer, TokenizerState};
pub use error::{ErrorCategory, ParseError, ParseErrorKind};
pub use input::InputCursor;
pub use options::TokenizerOptions;
pub use token::{Attribute, Token};
