//! Character reference states.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//! through [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state).
//!
//! Every entry into these states records a return state. Decoded text goes
//! back to where the `&` was found: the current attribute's value when the
//! return state is an attribute value state, character data otherwise.

use core::mem;

use super::core::{HTMLTokenizer, TokenizerState};
use super::error::ParseErrorKind;
use super::named_character_references::{any_entity_has_prefix, longest_match};

impl HTMLTokenizer {
    /// Returns true if the return state is an attribute value state.
    /// WHATWG: "consumed as part of an attribute"
    pub(super) const fn is_consumed_as_part_of_attribute(&self) -> bool {
        matches!(
            self.return_state,
            Some(
                TokenizerState::AttributeValueDoubleQuoted
                    | TokenizerState::AttributeValueSingleQuoted
                    | TokenizerState::AttributeValueUnquoted
            )
        )
    }

    /// "Flush code points consumed as a character reference"
    ///
    /// "When a state says to flush code points consumed as a character
    /// reference, it means that for each code point in the temporary buffer (in
    /// the order they were added to the buffer) user agent must append the code
    /// point from the buffer to the current attribute's value if the character
    /// reference was consumed as part of an attribute, or emit the code point as
    /// a character token otherwise."
    pub(super) fn flush_code_points_consumed_as_character_reference(&mut self) {
        let buffer = mem::take(&mut self.temporary_buffer);
        if self.is_consumed_as_part_of_attribute() {
            self.update_current_token(|token| {
                for c in buffer.chars() {
                    token.append_to_current_attribute_value(c);
                }
            });
        } else {
            self.emit_str(&buffer);
        }
    }

    /// [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
    pub(super) fn handle_character_reference_state(&mut self) {
        // "Set the temporary buffer to the empty string. Append a U+0026 AMPERSAND (&)
        // character to the temporary buffer."
        self.temporary_buffer.clear();
        self.temporary_buffer.push('&');

        match self.current_input_character {
            // "ASCII alphanumeric - Reconsume in the named character reference state."
            Some(c) if c.is_ascii_alphanumeric() => {
                self.reconsume_in(TokenizerState::NamedCharacterReference);
            }
            // "U+0023 NUMBER SIGN (#) - Append the current input character to the temporary
            // buffer. Switch to the numeric character reference state."
            Some('#') => {
                self.temporary_buffer.push('#');
                self.switch_to(TokenizerState::NumericCharacterReference);
            }
            // "Anything else - Flush code points consumed as a character reference.
            // Reconsume in the return state."
            _ => {
                self.flush_code_points_consumed_as_character_reference();
                self.reconsume_in_return_state();
            }
        }
    }

    /// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
    ///
    /// "Consume the maximum number of characters possible, where the consumed
    /// characters are one of the identifiers in the named character references
    /// table. Append each character to the temporary buffer when it's consumed."
    pub(super) fn handle_named_character_reference_state(&mut self) {
        // Entered by reconsuming the first name character; step back onto it so
        // the whole candidate can be examined with lookahead.
        self.input.reconsume();
        let candidate = self.peek_entity_candidate();

        let Some((name, replacement)) = longest_match(&candidate) else {
            // "Otherwise - Flush code points consumed as a character reference. Switch to the
            // ambiguous ampersand state."
            self.flush_code_points_consumed_as_character_reference();
            self.switch_to(TokenizerState::AmbiguousAmpersand);
            return;
        };

        for _ in name.chars() {
            let _ = self.input.next_codepoint();
        }
        self.temporary_buffer.push_str(name);

        let ends_with_semicolon = name.ends_with(';');

        // "If the character reference was consumed as part of an attribute, and the last
        // character matched is not a U+003B SEMICOLON character (;), and the next input
        // character is either a U+003D EQUALS SIGN character (=) or an ASCII alphanumeric,
        // then, for historical reasons, flush code points consumed as a character reference
        // and switch to the return state."
        if self.is_consumed_as_part_of_attribute()
            && !ends_with_semicolon
            && self
                .input
                .peek_codepoint(0)
                .is_some_and(|c| c == '=' || c.is_ascii_alphanumeric())
        {
            self.flush_code_points_consumed_as_character_reference();
            self.switch_to_return_state();
            return;
        }

        // "If the last character matched is not a U+003B SEMICOLON character (;), then this
        // is a missing-semicolon-after-character-reference parse error."
        if !ends_with_semicolon {
            self.log_parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);
        }

        // "Set the temporary buffer to the empty string. Append one or two characters
        // corresponding to the character reference name (as given by the second column of
        // the named character references table) to the temporary buffer."
        self.temporary_buffer.clear();
        self.temporary_buffer.push_str(replacement);
        self.flush_code_points_consumed_as_character_reference();
        self.switch_to_return_state();
    }

    /// The longest run of upcoming characters that could still be (part of) a
    /// named reference: ASCII alphanumerics, optionally closed by a `;`.
    fn peek_entity_candidate(&self) -> String {
        let mut candidate = String::new();
        let mut offset = 0;
        while let Some(c) = self.input.peek_codepoint(offset) {
            if !(c.is_ascii_alphanumeric() || c == ';') {
                break;
            }
            candidate.push(c);
            if c == ';' || !any_entity_has_prefix(&candidate) {
                break;
            }
            offset += 1;
        }
        candidate
    }

    /// [§ 13.2.5.74 Ambiguous ampersand state](https://html.spec.whatwg.org/multipage/parsing.html#ambiguous-ampersand-state)
    pub(super) fn handle_ambiguous_ampersand_state(&mut self) {
        match self.current_input_character {
            // "ASCII alphanumeric - If the character reference was consumed as part of an
            // attribute, then append the current input character to the current attribute's
            // value. Otherwise, emit the current input character as a character token."
            Some(c) if c.is_ascii_alphanumeric() => {
                if self.is_consumed_as_part_of_attribute() {
                    self.append_to_attribute_value(c);
                } else {
                    self.emit_character(c);
                }
            }
            // "U+003B SEMICOLON (;) - This is an unknown-named-character-reference parse error.
            // Reconsume in the return state."
            Some(';') => {
                self.log_parse_error(ParseErrorKind::UnknownNamedCharacterReference);
                self.reconsume_in_return_state();
            }
            // "Anything else - Reconsume in the return state."
            _ => self.reconsume_in_return_state(),
        }
    }

    /// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
    pub(super) fn handle_numeric_character_reference_state(&mut self) {
        // "Set the character reference code to zero (0)."
        self.character_reference_code = 0;

        match self.current_input_character {
            // "U+0078 LATIN SMALL LETTER X, U+0058 LATIN CAPITAL LETTER X - Append the current
            // input character to the temporary buffer. Switch to the hexadecimal character
            // reference start state."
            Some(c @ ('x' | 'X')) => {
                self.temporary_buffer.push(c);
                self.switch_to(TokenizerState::HexadecimalCharacterReferenceStart);
            }
            // "Anything else - Reconsume in the decimal character reference start state."
            _ => self.reconsume_in(TokenizerState::DecimalCharacterReferenceStart),
        }
    }

    /// [§ 13.2.5.76 Hexadecimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-start-state)
    pub(super) fn handle_hexadecimal_character_reference_start_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_hexdigit() => {
                self.reconsume_in(TokenizerState::HexadecimalCharacterReference);
            }
            _ => self.absence_of_digits(),
        }
    }

    /// [§ 13.2.5.77 Decimal character reference start state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-start-state)
    pub(super) fn handle_decimal_character_reference_start_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_digit() => {
                self.reconsume_in(TokenizerState::DecimalCharacterReference);
            }
            _ => self.absence_of_digits(),
        }
    }

    /// "This is an absence-of-digits-in-numeric-character-reference parse
    /// error. Flush code points consumed as a character reference. Reconsume in
    /// the return state."
    fn absence_of_digits(&mut self) {
        self.log_parse_error(ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference);
        self.flush_code_points_consumed_as_character_reference();
        self.reconsume_in_return_state();
    }

    /// [§ 13.2.5.78 Hexadecimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#hexadecimal-character-reference-state)
    /// [§ 13.2.5.79 Decimal character reference state](https://html.spec.whatwg.org/multipage/parsing.html#decimal-character-reference-state)
    ///
    /// The code saturates instead of overflowing; any saturated value is out
    /// of range and gets replaced at the end.
    pub(super) fn handle_numeric_digits_state(&mut self, radix: u32) {
        match self.current_input_character {
            // "ASCII digit / ASCII hex digit - Multiply the character reference code by 16 (10).
            // Add a numeric version of the current input character to the character
            // reference code."
            Some(c) if c.is_digit(radix) => {
                let digit = c.to_digit(radix).unwrap_or(0);
                self.character_reference_code = self
                    .character_reference_code
                    .saturating_mul(radix)
                    .saturating_add(digit);
            }
            // "U+003B SEMICOLON - Switch to the numeric character reference end state."
            //
            // The end state does not consume, so the semicolon is handed over as the
            // current input character instead.
            Some(';') => self.reconsume_in(TokenizerState::NumericCharacterReferenceEnd),
            // "Anything else - This is a missing-semicolon-after-character-reference parse
            // error. Reconsume in the numeric character reference end state."
            _ => {
                self.log_parse_error(ParseErrorKind::MissingSemicolonAfterCharacterReference);
                self.reconsume_in(TokenizerState::NumericCharacterReferenceEnd);
            }
        }
    }

    /// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
    pub(super) fn handle_numeric_character_reference_end_state(&mut self) {
        let code = self.checked_character_reference_code();

        // "Set the temporary buffer to the empty string. Append a code point equal to the
        // character reference code to the temporary buffer. Flush code points consumed as a
        // character reference. Switch to the return state."
        self.temporary_buffer.clear();
        self.temporary_buffer
            .push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
        self.flush_code_points_consumed_as_character_reference();

        if self.current_input_character == Some(';') {
            self.switch_to_return_state();
        } else {
            self.reconsume_in_return_state();
        }
    }

    /// "Check the character reference code" and return the code point to use.
    fn checked_character_reference_code(&mut self) -> u32 {
        let code = self.character_reference_code;

        // "If the number is 0x00, then this is a null-character-reference parse error. Set the
        // character reference code to 0xFFFD."
        if code == 0 {
            self.log_parse_error(ParseErrorKind::NullCharacterReference);
            return 0xFFFD;
        }
        // "If the number is greater than 0x10FFFF, then this is a
        // character-reference-outside-unicode-range parse error. Set the character reference
        // code to 0xFFFD."
        if code > 0x10_FFFF {
            self.log_parse_error(ParseErrorKind::CharacterReferenceOutsideUnicodeRange);
            return 0xFFFD;
        }
        // "If the number is a surrogate, then this is a surrogate-character-reference parse
        // error. Set the character reference code to 0xFFFD."
        if (0xD800..=0xDFFF).contains(&code) {
            self.log_parse_error(ParseErrorKind::SurrogateCharacterReference);
            return 0xFFFD;
        }
        // "If the number is a noncharacter, then this is a noncharacter-character-reference
        // parse error."
        if is_noncharacter(code) {
            self.log_parse_error(ParseErrorKind::NoncharacterCharacterReference);
        }
        // "If the number is 0x0D, or a control that's not ASCII whitespace, then this is a
        // control-character-reference parse error. If the number is one of the numbers in the
        // first column of the following table, then find the row with that number in the
        // first column, and set the character reference code to the number in the second
        // column of that row."
        if code == 0x0D || (is_control(code) && !is_ascii_whitespace(code)) {
            self.log_parse_error(ParseErrorKind::ControlCharacterReference);
            if let Some(replacement) = c1_replacement(code) {
                return replacement;
            }
        }
        code
    }
}

/// [Noncharacter](https://infra.spec.whatwg.org/#noncharacter): U+FDD0 to
/// U+FDEF, and the last two code points of every plane.
const fn is_noncharacter(code: u32) -> bool {
    matches!(code, 0xFDD0..=0xFDEF) || (code <= 0x10_FFFF && code & 0xFFFE == 0xFFFE)
}

/// [Control](https://infra.spec.whatwg.org/#control): a C0 control or a code
/// point in the range U+007F DELETE to U+009F APPLICATION PROGRAM COMMAND.
const fn is_control(code: u32) -> bool {
    matches!(code, 0x00..=0x1F | 0x7F..=0x9F)
}

const fn is_ascii_whitespace(code: u32) -> bool {
    matches!(code, 0x09 | 0x0A | 0x0C | 0x0D | 0x20)
}

/// The windows-1252 interpretation of C1 controls used by numeric references.
const fn c1_replacement(code: u32) -> Option<u32> {
    let replacement = match code {
        0x80 => 0x20AC, // EURO SIGN (€)
        0x82 => 0x201A, // SINGLE LOW-9 QUOTATION MARK (‚)
        0x83 => 0x0192, // LATIN SMALL LETTER F WITH HOOK (ƒ)
        0x84 => 0x201E, // DOUBLE LOW-9 QUOTATION MARK („)
        0x85 => 0x2026, // HORIZONTAL ELLIPSIS (…)
        0x86 => 0x2020, // DAGGER (†)
        0x87 => 0x2021, // DOUBLE DAGGER (‡)
        0x88 => 0x02C6, // MODIFIER LETTER CIRCUMFLEX ACCENT (ˆ)
        0x89 => 0x2030, // PER MILLE SIGN (‰)
        0x8A => 0x0160, // LATIN CAPITAL LETTER S WITH CARON (Š)
        0x8B => 0x2039, // SINGLE LEFT-POINTING ANGLE QUOTATION MARK (‹)
        0x8C => 0x0152, // LATIN CAPITAL LIGATURE OE (Œ)
        0x8E => 0x017D, // LATIN CAPITAL LETTER Z WITH CARON (Ž)
        0x91 => 0x2018, // LEFT SINGLE QUOTATION MARK (‘)
        0x92 => 0x2019, // RIGHT SINGLE QUOTATION MARK (’)
        0x93 => 0x201C, // LEFT DOUBLE QUOTATION MARK (“)
        0x94 => 0x201D, // RIGHT DOUBLE QUOTATION MARK (”)
        0x95 => 0x2022, // BULLET (•)
        0x96 => 0x2013, // EN DASH (–)
        0x97 => 0x2014, // EM DASH
        0x98 => 0x02DC, // SMALL TILDE (˜)
        0x99 => 0x2122, // TRADE MARK SIGN (™)
        0x9A => 0x0161, // LATIN SMALL LETTER S WITH CARON (š)
        0x9B => 0x203A, // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK (›)
        0x9C => 0x0153, // LATIN SMALL LIGATURE OE (œ)
        0x9E => 0x017E, // LATIN SMALL LETTER Z WITH CARON (ž)
        0x9F => 0x0178, // LATIN CAPITAL LETTER Y WITH DIAERESIS (Ÿ)
        _ => return None,
    };
    Some(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noncharacters() {
        assert!(is_noncharacter(0xFDD0));
        assert!(is_noncharacter(0xFFFE));
        assert!(is_noncharacter(0x10_FFFF));
        assert!(!is_noncharacter(0xFFFD));
    }

    #[test]
    fn c1_table_covers_windows_1252_holes() {
        assert_eq!(c1_replacement(0x80), Some(0x20AC));
        assert_eq!(c1_replacement(0x81), None);
        assert_eq!(c1_replacement(0x9F), Some(0x0178));
    }
}
