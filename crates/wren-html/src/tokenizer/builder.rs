//! In-progress tokens.
//!
//! The state machine mutates a [`TokenBuilder`] one code point at a time and
//! converts it into an immutable [`Token`] when the token is emitted. A builder
//! never outlives its token: emitting consumes it, and creating a new token
//! replaces it.

use super::token::{Attribute, Token};

/// An attribute whose name and value are still being collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct AttributeBuilder {
    pub(crate) name: String,
    pub(crate) value: String,
    /// Set when leaving the attribute name state found an earlier attribute
    /// with the same name.
    pub(crate) duplicate: bool,
}

/// Which kind of tag a [`TokenBuilder::Tag`] will become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TagKind {
    Start,
    End,
}

/// The current token under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenBuilder {
    Doctype {
        name: Option<String>,
        public_identifier: Option<String>,
        system_identifier: Option<String>,
        force_quirks: bool,
    },
    Tag {
        kind: TagKind,
        name: String,
        self_closing: bool,
        attributes: Vec<AttributeBuilder>,
    },
    Comment {
        data: String,
    },
}

impl TokenBuilder {
    /// "When a DOCTYPE token is created, its name, public identifier, and system
    /// identifier must be marked as missing (which is a distinct state from the
    /// empty string), and the force-quirks flag must be set to off."
    pub(crate) const fn new_doctype() -> Self {
        Self::Doctype {
            name: None,
            public_identifier: None,
            system_identifier: None,
            force_quirks: false,
        }
    }

    /// "When a start or end tag token is created, its self-closing flag must be
    /// unset (its other state is that it be set), and its attributes list must
    /// be empty."
    pub(crate) const fn new_start_tag() -> Self {
        Self::Tag {
            kind: TagKind::Start,
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    pub(crate) const fn new_end_tag() -> Self {
        Self::Tag {
            kind: TagKind::End,
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    pub(crate) const fn new_comment() -> Self {
        Self::Comment {
            data: String::new(),
        }
    }

    /// Mutation helpers for use during tokenization.
    /// These panic if called on the wrong token variant, which indicates a bug
    /// in the tokenizer state machine.
    ///
    /// [§ 13.2.5.55 DOCTYPE name state](https://html.spec.whatwg.org/multipage/parsing.html#doctype-name-state)
    ///
    /// "Append the current input character to the current DOCTYPE token's name."
    pub(crate) fn append_to_doctype_name(&mut self, c: char) {
        match self {
            Self::Doctype { name, .. } => name.get_or_insert_with(String::new).push(c),
            _ => panic!("append_to_doctype_name called on non-DOCTYPE token"),
        }
    }

    /// "Set the current DOCTYPE token's public identifier to the empty string
    /// (not missing)"
    pub(crate) fn set_public_identifier_empty(&mut self) {
        match self {
            Self::Doctype {
                public_identifier, ..
            } => *public_identifier = Some(String::new()),
            _ => panic!("set_public_identifier_empty called on non-DOCTYPE token"),
        }
    }

    /// "Append the current input character to the current DOCTYPE token's
    /// public identifier."
    pub(crate) fn append_to_public_identifier(&mut self, c: char) {
        match self {
            Self::Doctype {
                public_identifier, ..
            } => public_identifier.get_or_insert_with(String::new).push(c),
            _ => panic!("append_to_public_identifier called on non-DOCTYPE token"),
        }
    }

    /// "Set the current DOCTYPE token's system identifier to the empty string
    /// (not missing)"
    pub(crate) fn set_system_identifier_empty(&mut self) {
        match self {
            Self::Doctype {
                system_identifier, ..
            } => *system_identifier = Some(String::new()),
            _ => panic!("set_system_identifier_empty called on non-DOCTYPE token"),
        }
    }

    /// "Append the current input character to the current DOCTYPE token's
    /// system identifier."
    pub(crate) fn append_to_system_identifier(&mut self, c: char) {
        match self {
            Self::Doctype {
                system_identifier, ..
            } => system_identifier.get_or_insert_with(String::new).push(c),
            _ => panic!("append_to_system_identifier called on non-DOCTYPE token"),
        }
    }

    /// "Set the current DOCTYPE token's force-quirks flag to on."
    pub(crate) fn set_force_quirks(&mut self) {
        match self {
            Self::Doctype { force_quirks, .. } => *force_quirks = true,
            _ => panic!("set_force_quirks called on non-DOCTYPE token"),
        }
    }

    /// [§ 13.2.5.8 Tag name state](https://html.spec.whatwg.org/multipage/parsing.html#tag-name-state)
    ///
    /// "Append the current input character to the current tag token's tag name."
    pub(crate) fn append_to_tag_name(&mut self, c: char) {
        match self {
            Self::Tag { name, .. } => name.push(c),
            _ => panic!("append_to_tag_name called on non-tag token"),
        }
    }

    /// [§ 13.2.5.40 Self-closing start tag state](https://html.spec.whatwg.org/multipage/parsing.html#self-closing-start-tag-state)
    ///
    /// "Set the self-closing flag of the current tag token."
    pub(crate) fn set_self_closing(&mut self) {
        match self {
            Self::Tag { self_closing, .. } => *self_closing = true,
            _ => panic!("set_self_closing called on non-tag token"),
        }
    }

    /// "Start a new attribute in the current tag token."
    pub(crate) fn start_new_attribute(&mut self) {
        match self {
            Self::Tag { attributes, .. } => attributes.push(AttributeBuilder::default()),
            _ => panic!("start_new_attribute called on non-tag token"),
        }
    }

    /// "Append the current input character to the current attribute's name."
    pub(crate) fn append_to_current_attribute_name(&mut self, c: char) {
        match self {
            Self::Tag { attributes, .. } => {
                if let Some(attr) = attributes.last_mut() {
                    attr.name.push(c);
                }
            }
            _ => panic!("append_to_current_attribute_name called on non-tag token"),
        }
    }

    /// "Append the current input character to the current attribute's value."
    pub(crate) fn append_to_current_attribute_value(&mut self, c: char) {
        match self {
            Self::Tag { attributes, .. } => {
                if let Some(attr) = attributes.last_mut() {
                    attr.value.push(c);
                }
            }
            _ => panic!("append_to_current_attribute_value called on non-tag token"),
        }
    }

    /// [§ 13.2.5.33 Attribute name state](https://html.spec.whatwg.org/multipage/parsing.html#attribute-name-state)
    ///
    /// "the complete attribute's name must be compared to the other attributes
    /// on the same token; if there is already an attribute on the token with the
    /// exact same name, then this is a duplicate-attribute parse error"
    ///
    /// Marks the current attribute and returns true if it duplicates an
    /// earlier one.
    pub(crate) fn mark_current_attribute_if_duplicate(&mut self) -> bool {
        let Self::Tag { attributes, .. } = self else {
            return false;
        };
        let Some((current, earlier)) = attributes.split_last_mut() else {
            return false;
        };
        current.duplicate = earlier.iter().any(|attr| attr.name == current.name);
        current.duplicate
    }

    /// The tag name so far, if this is a tag.
    pub(crate) fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Tag { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns true for an end tag builder.
    pub(crate) fn is_end_tag(&self) -> bool {
        matches!(self, Self::Tag { kind: TagKind::End, .. })
    }

    /// "Append the current input character to the comment token's data."
    pub(crate) fn append_to_comment(&mut self, c: char) {
        match self {
            Self::Comment { data } => data.push(c),
            _ => panic!("append_to_comment called on non-comment token"),
        }
    }

    pub(crate) fn append_str_to_comment(&mut self, s: &str) {
        match self {
            Self::Comment { data } => data.push_str(s),
            _ => panic!("append_str_to_comment called on non-comment token"),
        }
    }

    /// Materialize the finished token.
    ///
    /// Attributes marked as duplicates are dropped when `drop_duplicates` is
    /// set, which keeps the first occurrence of every name.
    pub(crate) fn finish(self, drop_duplicates: bool) -> Token {
        match self {
            Self::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            } => Token::Doctype {
                name,
                public_identifier,
                system_identifier,
                force_quirks,
            },
            Self::Tag {
                kind,
                name,
                self_closing,
                attributes,
            } => {
                let attributes = attributes
                    .into_iter()
                    .filter(|attr| !(drop_duplicates && attr.duplicate))
                    .map(|attr| Attribute::new(attr.name, attr.value))
                    .collect();
                match kind {
                    TagKind::Start => Token::StartTag {
                        name,
                        self_closing,
                        attributes,
                    },
                    TagKind::End => Token::EndTag {
                        name,
                        self_closing,
                        attributes,
                    },
                }
            }
            Self::Comment { data } => Token::Comment { data },
        }
    }
}
