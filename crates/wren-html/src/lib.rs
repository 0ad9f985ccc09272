//! Streaming HTML tokenizer for the Wren toolkit.
//!
//! # Scope
//!
//! This crate implements the **HTML Tokenizer**
//! ([WHATWG § 13.2.5](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)):
//! - Data, tag, attribute, comment and DOCTYPE states
//! - RCDATA, RAWTEXT, script data, PLAINTEXT and CDATA states, entered at the
//!   request of a tree constructor
//! - Named and numeric character references
//! - Parse errors recorded with their WHATWG error codes
//!
//! Tokens are produced one at a time with [`HTMLTokenizer::next_token`] (or
//! through the [`Iterator`] impl). Adjacent character data is delivered as a
//! single [`Token::Character`].
//!
//! ```
//! use wren_html::{HTMLTokenizer, Token};
//!
//! let mut tokenizer = HTMLTokenizer::new("<!-- hi -->");
//! assert_eq!(tokenizer.next_token(), Some(Token::Comment { data: " hi ".to_string() }));
//! assert_eq!(tokenizer.next_token(), Some(Token::EndOfFile));
//! assert_eq!(tokenizer.next_token(), None);
//! ```
//!
//! # Not Yet Implemented
//!
//! - The complete named character reference table (a common subset is built in)
//! - Tree construction

/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use tokenizer::{
    Attribute, ErrorCategory, HTMLTokenizer, InputCursor, ParseError, ParseErrorKind, Token,
    TokenizerOptions, TokenizerState,
};
