//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Token creation and emission ("Create a new ... token", "Emit the current token")
//! - End tag helpers for the RCDATA, RAWTEXT and script data states
//! - Parse error recording

use core::mem;

use super::builder::{TagKind, TokenBuilder};
use super::core::{HTMLTokenizer, TokenizerState};
use super::error::{ParseError, ParseErrorKind};
use super::token::Token;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next iteration of the main
    /// loop.
    pub(super) fn switch_to(&mut self, new_state: TokenizerState) {
        if self.state != new_state {
            log::trace!(target: "wren::tokenizer", "{} -> {}", self.state, new_state);
        }
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The current input character is processed again in the new state.
    pub(super) fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.switch_to(new_state);
    }

    /// Switch back to the saved return state.
    pub(super) fn switch_to_return_state(&mut self) {
        let state = self.return_state.take().unwrap_or(TokenizerState::Data);
        self.switch_to(state);
    }

    /// Reconsume the current input character in the saved return state.
    pub(super) fn reconsume_in_return_state(&mut self) {
        let state = self.return_state.take().unwrap_or(TokenizerState::Data);
        self.reconsume_in(state);
    }

    /// "U+0009 CHARACTER TABULATION (tab), U+000A LINE FEED (LF),
    /// U+000C FORM FEED (FF), U+0020 SPACE"
    ///
    /// CR never reaches the tokenizer once newlines are normalized; without
    /// normalization it is ordinary content.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C')
    }

    /// Apply the `lowercase_names` option to a tag or attribute name character.
    pub(super) fn fold_name_char(&self, c: char) -> char {
        if self.options.lowercase_names {
            c.to_ascii_lowercase()
        } else {
            c
        }
    }
}

// =============================================================================
// Token Construction Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Create a new ... token"
    ///
    /// Pending character data is emitted first so that text never follows a
    /// structural token it preceded in the input.
    pub(super) fn create_token(&mut self, builder: TokenBuilder) {
        self.flush_pending_text();
        self.current_token = Some(builder);
    }

    /// Start the end tag that RCDATA, RAWTEXT and script data speculatively
    /// build after `</`. If it turns out not to be an appropriate end tag its
    /// characters become text again, so pending text is left alone here.
    pub(super) fn start_candidate_end_tag(&mut self) {
        self.current_token = Some(TokenBuilder::new_end_tag());
    }

    /// Apply `f` to the token under construction, if there is one.
    pub(super) fn update_current_token(&mut self, f: impl FnOnce(&mut TokenBuilder)) {
        if let Some(token) = self.current_token.as_mut() {
            f(token);
        }
    }

    /// "Append the current input character to the current tag token's tag name."
    pub(super) fn append_to_tag_name(&mut self, c: char) {
        let c = self.fold_name_char(c);
        self.update_current_token(|token| token.append_to_tag_name(c));
    }

    /// "Append the current input character to the current attribute's name."
    pub(super) fn append_to_attribute_name(&mut self, c: char) {
        let c = self.fold_name_char(c);
        self.update_current_token(|token| token.append_to_current_attribute_name(c));
    }

    /// "Append the current input character to the current attribute's value."
    pub(super) fn append_to_attribute_value(&mut self, c: char) {
        self.update_current_token(|token| token.append_to_current_attribute_value(c));
    }

    /// "Append the current input character to the comment token's data."
    pub(super) fn append_to_comment(&mut self, c: char) {
        self.update_current_token(|token| token.append_to_comment(c));
    }

    /// Set the current DOCTYPE token's force-quirks flag to on.
    pub(super) fn set_force_quirks(&mut self) {
        self.update_current_token(TokenBuilder::set_force_quirks);
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "When the user agent leaves the attribute name state (and before
    /// emitting the tag token, if appropriate), the complete attribute's name
    /// must be compared to the other attributes on the same token; if there is
    /// already an attribute on the token with the exact same name, then this
    /// is a duplicate-attribute parse error"
    ///
    /// The attribute is only marked here; whether it is dropped is decided
    /// when the token is emitted.
    pub(super) fn check_duplicate_attribute(&mut self) {
        let is_duplicate = self
            .current_token
            .as_mut()
            .is_some_and(TokenBuilder::mark_current_attribute_if_duplicate);
        if is_duplicate {
            self.log_parse_error(ParseErrorKind::DuplicateAttribute);
        }
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Emit the current token"
    ///
    /// Emitting an end tag with attributes or with its self-closing flag set
    /// is a parse error; the token is emitted anyway.
    pub(super) fn emit_current_token(&mut self) {
        let Some(builder) = self.current_token.take() else {
            return;
        };
        self.flush_pending_text();

        if let TokenBuilder::Tag {
            kind: TagKind::End,
            self_closing,
            attributes,
            ..
        } = &builder
        {
            if !attributes.is_empty() {
                self.log_parse_error(ParseErrorKind::EndTagWithAttributes);
            }
            if *self_closing {
                self.log_parse_error(ParseErrorKind::EndTagWithTrailingSolidus);
            }
        }

        let token = builder.finish(self.options.drop_duplicate_attributes);
        if let Token::StartTag { name, .. } = &token {
            self.last_start_tag_name = Some(name.clone());
        }
        self.output.push_back(token);
    }

    /// "Emit the current input character as a character token."
    ///
    /// Characters are buffered and delivered as one Character token once the
    /// run of text ends.
    pub(super) fn emit_character(&mut self, c: char) {
        self.pending_text.push(c);
    }

    /// Emit every character of `s` as character tokens.
    pub(super) fn emit_str(&mut self, s: &str) {
        self.pending_text.push_str(s);
    }

    /// Deliver the buffered run of text, if any, as one Character token.
    pub(super) fn flush_pending_text(&mut self) {
        if !self.pending_text.is_empty() {
            let data = mem::take(&mut self.pending_text);
            self.output.push_back(Token::Character { data });
        }
    }

    /// "Emit an end-of-file token."
    ///
    /// Only the first call has an effect. A token still under construction
    /// at this point is discarded, as every EOF branch of the state machine
    /// requires.
    pub(super) fn emit_eof(&mut self) {
        if self.has_emitted_eof {
            return;
        }
        self.current_token = None;
        self.flush_pending_text();
        self.output.push_back(Token::EndOfFile);
        self.has_emitted_eof = true;
        log::debug!(
            target: "wren::tokenizer",
            "end of file after {} code points, {} parse errors",
            self.input.position(),
            self.errors.len()
        );
    }
}

// =============================================================================
// End Tag Helpers (RCDATA / RAWTEXT / script data)
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.5.11 RCDATA end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#rcdata-end-tag-name-state)
    ///
    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any."
    ///
    /// Names are compared ASCII case-insensitively because tag names are not
    /// lowercased unless `lowercase_names` is set.
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        let Some(last_start_tag) = self.last_start_tag_name.as_deref() else {
            return false;
        };
        self.current_token.as_ref().is_some_and(|token| {
            token.is_end_tag()
                && token
                    .tag_name()
                    .is_some_and(|name| name.eq_ignore_ascii_case(last_start_tag))
        })
    }

    /// "Anything else" branch of every end tag name state:
    ///
    /// "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS character
    /// token, and a character token for each of the characters in the temporary
    /// buffer (in the order they were added to the buffer). Reconsume in the
    /// X state."
    pub(super) fn emit_end_tag_name_as_text(&mut self, text_state: TokenizerState) {
        self.current_token = None;
        self.emit_str("</");
        let buffer = mem::take(&mut self.temporary_buffer);
        self.emit_str(&buffer);
        self.reconsume_in(text_state);
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl HTMLTokenizer {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Records a parse error at the current input position. Parse errors are
    /// never fatal and are kept on this tokenizer only.
    pub(super) fn log_parse_error(&mut self, kind: ParseErrorKind) {
        let error = ParseError {
            kind,
            position: self.input.position(),
        };
        log::debug!(target: "wren::tokenizer", "{error}");
        self.errors.push(error);
    }
}
