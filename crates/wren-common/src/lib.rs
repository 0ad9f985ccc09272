//! Common utilities for the Wren tokenizer.
//!
//! This crate provides shared infrastructure used by the tokenizer and its
//! command-line harness:
//! - **Warning System** - de-duplicated diagnostics routed through `log`

pub mod warning;
