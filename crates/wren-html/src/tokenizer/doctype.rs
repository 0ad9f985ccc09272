//! DOCTYPE states, § 13.2.5.53 to § 13.2.5.68.
//!
//! The public and system identifier states come in mirrored pairs; each pair
//! is handled by one method parameterized by [`Identifier`].

use super::builder::TokenBuilder;
use super::core::{HTMLTokenizer, Identifier, TokenizerState};
use super::error::ParseErrorKind;

impl HTMLTokenizer {
    /// [§ 13.2.5.53 DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-state)
    pub(super) fn handle_doctype_state(&mut self) {
        match self.current_input_character {
            // "U+0009 CHARACTER TABULATION (tab), U+000A LINE FEED (LF), U+000C FORM FEED (FF),
            // U+0020 SPACE"
            // "Switch to the before DOCTYPE name state."
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeDOCTYPEName);
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "Reconsume in the before DOCTYPE name state."
            Some('>') => self.reconsume_in(TokenizerState::BeforeDOCTYPEName),
            // "EOF"
            // "This is an eof-in-doctype parse error. Create a new DOCTYPE token. Set its
            // force-quirks flag to on. Emit the current token. Emit an end-of-file token."
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.create_token(TokenBuilder::new_doctype());
                self.emit_doctype_at_eof();
            }
            // "Anything else"
            // "This is a missing-whitespace-before-doctype-name parse error. Reconsume in the
            // before DOCTYPE name state."
            Some(_) => {
                self.log_parse_error(ParseErrorKind::MissingWhitespaceBeforeDoctypeName);
                self.reconsume_in(TokenizerState::BeforeDOCTYPEName);
            }
        }
    }

    /// [§ 13.2.5.54 Before DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-name-state)
    pub(super) fn handle_before_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Create a new DOCTYPE token.
            // Set the token's name to a U+FFFD REPLACEMENT CHARACTER character. Switch to the
            // DOCTYPE name state."
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.start_doctype_name('\u{FFFD}');
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is a missing-doctype-name parse error. Create a new DOCTYPE token. Set its
            // force-quirks flag to on. Switch to the data state. Emit the current token."
            Some('>') => {
                self.log_parse_error(ParseErrorKind::MissingDoctypeName);
                self.create_token(TokenBuilder::new_doctype());
                self.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.create_token(TokenBuilder::new_doctype());
                self.emit_doctype_at_eof();
            }
            // "ASCII upper alpha"
            // "Create a new DOCTYPE token. Set the token's name to the lowercase version of the
            // current input character."
            // "Anything else"
            // "Create a new DOCTYPE token. Set the token's name to the current input character."
            Some(c) => self.start_doctype_name(c.to_ascii_lowercase()),
        }
    }

    fn start_doctype_name(&mut self, first: char) {
        self.create_token(TokenBuilder::new_doctype());
        self.update_current_token(|token| token.append_to_doctype_name(first));
        self.switch_to(TokenizerState::DOCTYPEName);
    }

    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    pub(super) fn handle_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterDOCTYPEName);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.update_current_token(|token| token.append_to_doctype_name('\u{FFFD}'));
            }
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.emit_doctype_at_eof();
            }
            // "ASCII upper alpha"
            // "Append the lowercase version of the current input character to the current
            // DOCTYPE token's name."
            Some(c) => {
                let c = c.to_ascii_lowercase();
                self.update_current_token(|token| token.append_to_doctype_name(c));
            }
        }
    }

    /// [§ 13.2.5.56 After DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-name-state)
    pub(super) fn handle_after_doctype_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.emit_doctype_at_eof();
            }
            // "If the six characters starting from the current input character are an ASCII
            // case-insensitive match for the word "PUBLIC", then consume those characters and
            // switch to the after DOCTYPE public keyword state."
            //
            // "Otherwise, if the six characters starting from the current input character are an
            // ASCII case-insensitive match for the word "SYSTEM", then consume those characters
            // and switch to the after DOCTYPE system keyword state."
            //
            // "Otherwise, this is an invalid-character-sequence-after-doctype-name parse error.
            // Set the current DOCTYPE token's force-quirks flag to on. Reconsume in the bogus
            // DOCTYPE state."
            Some(c) => {
                if self.keyword_starts_at_current_character(c, "PUBLIC") {
                    self.switch_to(TokenizerState::AfterDOCTYPEPublicKeyword);
                } else if self.keyword_starts_at_current_character(c, "SYSTEM") {
                    self.switch_to(TokenizerState::AfterDOCTYPESystemKeyword);
                } else {
                    self.log_parse_error(ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName);
                    self.set_force_quirks();
                    self.reconsume_in(TokenizerState::BogusDOCTYPE);
                }
            }
        }
    }

    /// ASCII case-insensitive match of `keyword` where `current` is its first
    /// letter. On a match the rest of the keyword is consumed; otherwise the
    /// cursor does not move.
    fn keyword_starts_at_current_character(&mut self, current: char, keyword: &str) -> bool {
        let mut letters = keyword.chars();
        letters
            .next()
            .is_some_and(|first| first.eq_ignore_ascii_case(&current))
            && self
                .input
                .match_literal_ignore_ascii_case(letters.as_str())
    }

    /// [§ 13.2.5.57 After DOCTYPE public keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-keyword-state)
    /// [§ 13.2.5.63 After DOCTYPE system keyword state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-keyword-state)
    pub(super) fn handle_after_doctype_keyword_state(&mut self, identifier: Identifier) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(match identifier {
                    Identifier::Public => TokenizerState::BeforeDOCTYPEPublicIdentifier,
                    Identifier::System => TokenizerState::BeforeDOCTYPESystemIdentifier,
                });
            }
            // "U+0022 QUOTATION MARK (")"
            // "This is a missing-whitespace-after-doctype-public-keyword parse error. Set the
            // current DOCTYPE token's public identifier to the empty string (not missing), then
            // switch to the DOCTYPE public identifier (double-quoted) state."
            Some(quote @ ('"' | '\'')) => {
                self.log_parse_error(match identifier {
                    Identifier::Public => ParseErrorKind::MissingWhitespaceAfterDoctypePublicKeyword,
                    Identifier::System => ParseErrorKind::MissingWhitespaceAfterDoctypeSystemKeyword,
                });
                self.begin_doctype_identifier(identifier, quote);
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is a missing-doctype-public-identifier parse error. Set the current DOCTYPE
            // token's force-quirks flag to on. Switch to the data state. Emit the current
            // DOCTYPE token."
            Some('>') => self.emit_doctype_missing_identifier(identifier),
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.emit_doctype_at_eof();
            }
            Some(_) => self.bogus_doctype_missing_quote(identifier),
        }
    }

    /// [§ 13.2.5.58 Before DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-public-identifier-state)
    /// [§ 13.2.5.64 Before DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#before-doctype-system-identifier-state)
    pub(super) fn handle_before_doctype_identifier_state(&mut self, identifier: Identifier) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some(quote @ ('"' | '\'')) => self.begin_doctype_identifier(identifier, quote),
            Some('>') => self.emit_doctype_missing_identifier(identifier),
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.emit_doctype_at_eof();
            }
            Some(_) => self.bogus_doctype_missing_quote(identifier),
        }
    }

    /// [§ 13.2.5.59 DOCTYPE public identifier (double-quoted) state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-public-identifier-(double-quoted)-state)
    /// and the single-quoted and system identifier variants.
    pub(super) fn handle_doctype_identifier_quoted_state(
        &mut self,
        identifier: Identifier,
        quote: char,
    ) {
        match self.current_input_character {
            // "U+0022 QUOTATION MARK (")"
            // "Switch to the after DOCTYPE public identifier state."
            Some(c) if c == quote => {
                self.switch_to(match identifier {
                    Identifier::Public => TokenizerState::AfterDOCTYPEPublicIdentifier,
                    Identifier::System => TokenizerState::AfterDOCTYPESystemIdentifier,
                });
            }
            Some('\0') => {
                self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter);
                self.append_to_doctype_identifier(identifier, '\u{FFFD}');
            }
            // "U+003E GREATER-THAN SIGN (>)"
            // "This is an abrupt-doctype-public-identifier parse error. Set the current DOCTYPE
            // token's force-quirks flag to on. Switch to the data state. Emit the current
            // DOCTYPE token."
            Some('>') => {
                self.log_parse_error(match identifier {
                    Identifier::Public => ParseErrorKind::AbruptDoctypePublicIdentifier,
                    Identifier::System => ParseErrorKind::AbruptDoctypeSystemIdentifier,
                });
                self.set_force_quirks();
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.emit_doctype_at_eof();
            }
            Some(c) => self.append_to_doctype_identifier(identifier, c),
        }
    }

    /// [§ 13.2.5.61 After DOCTYPE public identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-public-identifier-state)
    pub(super) fn handle_after_doctype_public_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BetweenDOCTYPEPublicAndSystemIdentifiers);
            }
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "This is a missing-whitespace-between-doctype-public-and-system-identifiers parse
            // error. Set the current DOCTYPE token's system identifier to the empty string (not
            // missing), then switch to the DOCTYPE system identifier (double-quoted) state."
            Some(quote @ ('"' | '\'')) => {
                self.log_parse_error(
                    ParseErrorKind::MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
                );
                self.begin_doctype_identifier(Identifier::System, quote);
            }
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.emit_doctype_at_eof();
            }
            Some(_) => self.bogus_doctype_missing_quote(Identifier::System),
        }
    }

    /// [§ 13.2.5.62 Between DOCTYPE public and system identifiers state](https://html.spec.whatwg.org/multipage/parsing.html#between-doctype-public-and-system-identifiers-state)
    pub(super) fn handle_between_doctype_public_and_system_identifiers_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            Some(quote @ ('"' | '\'')) => self.begin_doctype_identifier(Identifier::System, quote),
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.emit_doctype_at_eof();
            }
            Some(_) => self.bogus_doctype_missing_quote(Identifier::System),
        }
    }

    /// [§ 13.2.5.67 After DOCTYPE system identifier state](https://html.spec.whatwg.org/multipage/parsing.html#after-doctype-system-identifier-state)
    pub(super) fn handle_after_doctype_system_identifier_state(&mut self) {
        match self.current_input_character {
            Some(c) if Self::is_whitespace_char(c) => {}
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            None => {
                self.log_parse_error(ParseErrorKind::EofInDoctype);
                self.emit_doctype_at_eof();
            }
            // "Anything else"
            // "This is an unexpected-character-after-doctype-system-identifier parse error.
            // Reconsume in the bogus DOCTYPE state. (This does not set the current DOCTYPE
            // token's force-quirks flag to on.)"
            Some(_) => {
                self.log_parse_error(ParseErrorKind::UnexpectedCharacterAfterDoctypeSystemIdentifier);
                self.reconsume_in(TokenizerState::BogusDOCTYPE);
            }
        }
    }

    /// [§ 13.2.5.68 Bogus DOCTYPE state](https://html.spec.whatwg.org/multipage/parsing.html#bogus-doctype-state)
    pub(super) fn handle_bogus_doctype_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.switch_to(TokenizerState::Data);
                self.emit_current_token();
            }
            // "U+0000 NULL"
            // "This is an unexpected-null-character parse error. Ignore the character."
            Some('\0') => self.log_parse_error(ParseErrorKind::UnexpectedNullCharacter),
            // "EOF"
            // "Emit the DOCTYPE token. Emit an end-of-file token."
            None => {
                self.emit_current_token();
                self.emit_eof();
            }
            Some(_) => {}
        }
    }

    /// Set the identifier to the empty string (not missing) and switch to
    /// the matching quoted identifier state.
    fn begin_doctype_identifier(&mut self, identifier: Identifier, quote: char) {
        let double = quote == '"';
        let state = match identifier {
            Identifier::Public => {
                self.update_current_token(TokenBuilder::set_public_identifier_empty);
                if double {
                    TokenizerState::DOCTYPEPublicIdentifierDoubleQuoted
                } else {
                    TokenizerState::DOCTYPEPublicIdentifierSingleQuoted
                }
            }
            Identifier::System => {
                self.update_current_token(TokenBuilder::set_system_identifier_empty);
                if double {
                    TokenizerState::DOCTYPESystemIdentifierDoubleQuoted
                } else {
                    TokenizerState::DOCTYPESystemIdentifierSingleQuoted
                }
            }
        };
        self.switch_to(state);
    }

    fn append_to_doctype_identifier(&mut self, identifier: Identifier, c: char) {
        match identifier {
            Identifier::Public => {
                self.update_current_token(|token| token.append_to_public_identifier(c));
            }
            Identifier::System => {
                self.update_current_token(|token| token.append_to_system_identifier(c));
            }
        }
    }

    /// "This is a missing-doctype-public-identifier parse error. Set the
    /// current DOCTYPE token's force-quirks flag to on. Switch to the data
    /// state. Emit the current DOCTYPE token."
    fn emit_doctype_missing_identifier(&mut self, identifier: Identifier) {
        self.log_parse_error(match identifier {
            Identifier::Public => ParseErrorKind::MissingDoctypePublicIdentifier,
            Identifier::System => ParseErrorKind::MissingDoctypeSystemIdentifier,
        });
        self.set_force_quirks();
        self.switch_to(TokenizerState::Data);
        self.emit_current_token();
    }

    /// "This is a missing-quote-before-doctype-public-identifier parse error.
    /// Set the current DOCTYPE token's force-quirks flag to on. Reconsume in
    /// the bogus DOCTYPE state."
    fn bogus_doctype_missing_quote(&mut self, identifier: Identifier) {
        self.log_parse_error(match identifier {
            Identifier::Public => ParseErrorKind::MissingQuoteBeforeDoctypePublicIdentifier,
            Identifier::System => ParseErrorKind::MissingQuoteBeforeDoctypeSystemIdentifier,
        });
        self.set_force_quirks();
        self.reconsume_in(TokenizerState::BogusDOCTYPE);
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on. Emit the
    /// current DOCTYPE token. Emit an end-of-file token."
    fn emit_doctype_at_eof(&mut self) {
        self.set_force_quirks();
        self.emit_current_token();
        self.emit_eof();
    }
}
