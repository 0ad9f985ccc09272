//! Tokenizer parse errors.
//!
//! [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
//!
//! "This specification defines the parsing rules for HTML documents, whether
//! they are syntactically correct or not. Certain points in the parsing
//! algorithm are said to be parse errors."
//!
//! Parse errors never stop tokenization. They are recorded on the tokenizer
//! together with the input offset at which they were detected.

use serde::Serialize;
use strum_macros::IntoStaticStr;
use thiserror::Error;

/// Broad classification of a [`ParseErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCategory {
    /// Syntax that HTML content does not support at all, such as processing
    /// instructions or CDATA sections outside foreign content. Recovered by
    /// treating the construct as a bogus comment.
    UnsupportedConstruct,
    /// The same attribute name appeared twice on one tag.
    DuplicateAttribute,
    /// Any other recoverable syntax error.
    Malformed,
}

/// The tokenizer parse errors from the WHATWG error table.
///
/// `code()` returns the standard's kebab-case error code, e.g.
/// `ParseErrorKind::EofInTag.code() == "eof-in-tag"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, IntoStaticStr, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ParseErrorKind {
    /// `<!-->` or `<!--->`
    #[error("comment closed before any data")]
    AbruptClosingOfEmptyComment,
    /// `>` inside a DOCTYPE public identifier
    #[error("DOCTYPE public identifier ended abruptly")]
    AbruptDoctypePublicIdentifier,
    /// `>` inside a DOCTYPE system identifier
    #[error("DOCTYPE system identifier ended abruptly")]
    AbruptDoctypeSystemIdentifier,
    /// `&#` or `&#x` with no digits
    #[error("numeric character reference has no digits")]
    AbsenceOfDigitsInNumericCharacterReference,
    /// `<![CDATA[` outside foreign content
    #[error("CDATA section in HTML content")]
    CdataInHtmlContent,
    /// Numeric reference above U+10FFFF
    #[error("character reference outside the Unicode range")]
    CharacterReferenceOutsideUnicodeRange,
    /// Numeric reference to a control character
    #[error("character reference to a control character")]
    ControlCharacterReference,
    /// Attribute name repeated on one tag
    #[error("duplicate attribute")]
    DuplicateAttribute,
    /// `</a href="x">`
    #[error("end tag with attributes")]
    EndTagWithAttributes,
    /// `</a/>`
    #[error("end tag with trailing solidus")]
    EndTagWithTrailingSolidus,
    /// Input ends after `<` or `</`
    #[error("end of file before tag name")]
    EofBeforeTagName,
    /// Input ends inside a CDATA section
    #[error("end of file in CDATA section")]
    EofInCdata,
    /// Input ends inside a comment
    #[error("end of file in comment")]
    EofInComment,
    /// Input ends inside a DOCTYPE
    #[error("end of file in DOCTYPE")]
    EofInDoctype,
    /// Input ends inside `<!--` in escaped script data
    #[error("end of file in comment-like text in script")]
    EofInScriptHtmlCommentLikeText,
    /// Input ends inside a start or end tag
    #[error("end of file in tag")]
    EofInTag,
    /// `--!>`
    #[error("comment closed by --!>")]
    IncorrectlyClosedComment,
    /// `<!` not followed by `--`, `DOCTYPE` or `[CDATA[`
    #[error("incorrectly opened comment")]
    IncorrectlyOpenedComment,
    /// Something other than PUBLIC or SYSTEM after the DOCTYPE name
    #[error("invalid character sequence after DOCTYPE name")]
    InvalidCharacterSequenceAfterDoctypeName,
    /// `<` followed by something that cannot start a tag name
    #[error("invalid first character of tag name")]
    InvalidFirstCharacterOfTagName,
    /// `<a href=>`
    #[error("missing attribute value")]
    MissingAttributeValue,
    /// `<!DOCTYPE>`
    #[error("missing DOCTYPE name")]
    MissingDoctypeName,
    /// `<!DOCTYPE html PUBLIC>`
    #[error("missing DOCTYPE public identifier")]
    MissingDoctypePublicIdentifier,
    /// `<!DOCTYPE html SYSTEM>`
    #[error("missing DOCTYPE system identifier")]
    MissingDoctypeSystemIdentifier,
    /// `</>`
    #[error("missing end tag name")]
    MissingEndTagName,
    /// Unquoted DOCTYPE public identifier
    #[error("missing quote before DOCTYPE public identifier")]
    MissingQuoteBeforeDoctypePublicIdentifier,
    /// Unquoted DOCTYPE system identifier
    #[error("missing quote before DOCTYPE system identifier")]
    MissingQuoteBeforeDoctypeSystemIdentifier,
    /// `&amp` without the trailing semicolon
    #[error("missing semicolon after character reference")]
    MissingSemicolonAfterCharacterReference,
    /// `PUBLIC"`
    #[error("missing whitespace after DOCTYPE PUBLIC keyword")]
    MissingWhitespaceAfterDoctypePublicKeyword,
    /// `SYSTEM"`
    #[error("missing whitespace after DOCTYPE SYSTEM keyword")]
    MissingWhitespaceAfterDoctypeSystemKeyword,
    /// `<!DOCTYPEhtml>`
    #[error("missing whitespace before DOCTYPE name")]
    MissingWhitespaceBeforeDoctypeName,
    /// `<a x="1"y="2">`
    #[error("missing whitespace between attributes")]
    MissingWhitespaceBetweenAttributes,
    /// `"public""system"`
    #[error("missing whitespace between DOCTYPE public and system identifiers")]
    MissingWhitespaceBetweenDoctypePublicAndSystemIdentifiers,
    /// `<!--` inside a comment
    #[error("nested comment")]
    NestedComment,
    /// Numeric reference to a noncharacter
    #[error("character reference to a noncharacter")]
    NoncharacterCharacterReference,
    /// `&#0;`
    #[error("null character reference")]
    NullCharacterReference,
    /// Numeric reference to a surrogate
    #[error("character reference to a surrogate")]
    SurrogateCharacterReference,
    /// Trailing garbage after the DOCTYPE system identifier
    #[error("unexpected character after DOCTYPE system identifier")]
    UnexpectedCharacterAfterDoctypeSystemIdentifier,
    /// `"`, `'` or `<` in an attribute name
    #[error("unexpected character in attribute name")]
    UnexpectedCharacterInAttributeName,
    /// `"`, `'`, `<`, `=` or `` ` `` in an unquoted attribute value
    #[error("unexpected character in unquoted attribute value")]
    UnexpectedCharacterInUnquotedAttributeValue,
    /// `<a =x>`
    #[error("unexpected equals sign before attribute name")]
    UnexpectedEqualsSignBeforeAttributeName,
    /// U+0000 in the input
    #[error("unexpected NULL character")]
    UnexpectedNullCharacter,
    /// `<?xml ...>`
    #[error("unexpected question mark instead of tag name")]
    UnexpectedQuestionMarkInsteadOfTagName,
    /// `<a / b>`
    #[error("unexpected solidus in tag")]
    UnexpectedSolidusInTag,
    /// `&foo;` that names no known entity
    #[error("unknown named character reference")]
    UnknownNamedCharacterReference,
}

impl ParseErrorKind {
    /// The WHATWG error code, e.g. `"unexpected-null-character"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// The category this error belongs to.
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::UnexpectedQuestionMarkInsteadOfTagName | Self::CdataInHtmlContent => {
                ErrorCategory::UnsupportedConstruct
            }
            Self::DuplicateAttribute => ErrorCategory::DuplicateAttribute,
            _ => ErrorCategory::Malformed,
        }
    }
}

/// A parse error and the code-point offset at which it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[error("{kind} ({code}) at offset {position}", code = .kind.code())]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Number of code points consumed when the error was detected.
    pub position: usize,
}

impl ParseError {
    /// Shorthand for `self.kind.category()`.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}
