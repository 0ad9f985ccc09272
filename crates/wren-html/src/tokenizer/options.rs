use serde::Deserialize;

/// Switches for the places where the tokenizer can either stay lenient or
/// follow the WHATWG algorithm to the letter.
///
/// The defaults are lenient. [`TokenizerOptions::whatwg`] turns every
/// conformance switch on.
///
/// Options can be read from JSON; missing fields take their default:
///
/// ```
/// use wren_html::TokenizerOptions;
///
/// let options: TokenizerOptions =
///     serde_json::from_str(r#"{ "lowercase_names": true }"#).unwrap();
/// assert!(options.lowercase_names);
/// assert!(options.normalize_newlines);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct TokenizerOptions {
    /// Recognize `<!doctype` in any ASCII case. Off: only `<!DOCTYPE`
    /// starts a DOCTYPE and anything else is an incorrectly opened comment.
    pub case_insensitive_doctype: bool,
    /// Drop the later occurrence of a repeated attribute name. Off: every
    /// occurrence is kept. The duplicate-attribute error is recorded either way.
    pub drop_duplicate_attributes: bool,
    /// ASCII-lowercase tag and attribute names as they are read.
    /// DOCTYPE names are always lowercased.
    pub lowercase_names: bool,
    /// Turn CR LF pairs and lone CRs into LF before tokenizing.
    pub normalize_newlines: bool,
}

impl TokenizerOptions {
    /// Every WHATWG conformance switch enabled.
    #[must_use]
    pub const fn whatwg() -> Self {
        Self {
            case_insensitive_doctype: true,
            drop_duplicate_attributes: true,
            lowercase_names: true,
            normalize_newlines: true,
        }
    }
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            case_insensitive_doctype: false,
            drop_duplicate_attributes: false,
            lowercase_names: false,
            normalize_newlines: true,
        }
    }
}
