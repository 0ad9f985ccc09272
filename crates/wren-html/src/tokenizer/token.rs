use core::fmt;

use serde::Serialize;

/// An attribute on a start or end tag token.
///
/// Per [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization):
/// "a list of attributes, each of which has a name and a value"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// "each of which has a name"
    pub name: String,
    /// "and a value"
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
///
/// "The output of the tokenization step is a series of zero or more of the following
/// tokens: DOCTYPE, start tag, end tag, comment, character, end-of-file."
///
/// Tokens are finished values: the tokenizer assembles them in private
/// builders and hands each one out exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Token {
    /// "DOCTYPE tokens have a name, a public identifier, a system identifier,
    /// and a force-quirks flag."
    ///
    /// A missing name or identifier is `None`, which is distinct from the
    /// empty string.
    Doctype {
        /// "a name"
        name: Option<String>,
        /// "a public identifier"
        public_identifier: Option<String>,
        /// "a system identifier"
        system_identifier: Option<String>,
        /// "a force-quirks flag"
        force_quirks: bool,
    },

    /// "Start and end tag tokens have a tag name, a self-closing flag, and a
    /// list of attributes, each of which has a name and a value."
    StartTag {
        /// "a tag name"
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// End tag token. Same structure as a start tag.
    EndTag {
        /// "a tag name"
        name: String,
        /// "a self-closing flag"
        self_closing: bool,
        /// "a list of attributes"
        attributes: Vec<Attribute>,
    },

    /// "Comment and character tokens have data."
    Comment {
        /// "data"
        data: String,
    },

    /// A run of adjacent character data.
    ///
    /// The standard describes one token per character; consecutive
    /// characters that are not separated by another token are delivered
    /// together.
    Character {
        /// "data"
        data: String,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// Returns true if this is a DOCTYPE token.
    #[must_use]
    pub const fn is_doctype(&self) -> bool {
        matches!(self, Self::Doctype { .. })
    }

    /// Returns true if this is a start tag token.
    #[must_use]
    pub const fn is_start_tag(&self) -> bool {
        matches!(self, Self::StartTag { .. })
    }

    /// Returns true if this is an end tag token.
    #[must_use]
    pub const fn is_end_tag(&self) -> bool {
        matches!(self, Self::EndTag { .. })
    }

    /// Returns true if this is a comment token.
    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self, Self::Comment { .. })
    }

    /// Returns true if this is a character token.
    #[must_use]
    pub const fn is_character(&self) -> bool {
        matches!(self, Self::Character { .. })
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// The tag name of a start or end tag.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name, .. } => name,
            _ => panic!("tag_name called on non-tag token"),
        }
    }

    /// The self-closing flag of a start or end tag.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token.
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        match self {
            Self::StartTag { self_closing, .. } | Self::EndTag { self_closing, .. } => {
                *self_closing
            }
            _ => panic!("is_self_closing called on non-tag token"),
        }
    }

    /// The attributes of a start or end tag, in source order.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Self::StartTag { attributes, .. } | Self::EndTag { attributes, .. } => attributes,
            _ => panic!("attributes called on non-tag token"),
        }
    }

    /// Value of the first attribute called `name`, if the tag has one.
    ///
    /// # Panics
    ///
    /// Panics if called on a non-tag token.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// The data of a comment or character token.
    ///
    /// # Panics
    ///
    /// Panics if called on any other kind of token.
    #[must_use]
    pub fn data(&self) -> &str {
        match self {
            Self::Comment { data } | Self::Character { data } => data,
            _ => panic!("data called on token without data"),
        }
    }

    /// Short lowercase name of the token kind, e.g. `"start-tag"`.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Doctype { .. } => "doctype",
            Self::StartTag { .. } => "start-tag",
            Self::EndTag { .. } => "end-tag",
            Self::Comment { .. } => "comment",
            Self::Character { .. } => "character",
            Self::EndOfFile => "eof",
        }
    }
}

/// Writes the token back as markup.
///
/// Attribute values are always double-quoted and self-closing tags are
/// written as `<name />`, so well-formed input in that normal form survives
/// a round trip. The end-of-file token writes nothing.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype {
                name,
                public_identifier,
                system_identifier,
                ..
            } => {
                write!(f, "<!DOCTYPE")?;
                if let Some(n) = name {
                    write!(f, " {n}")?;
                }
                match (public_identifier, system_identifier) {
                    (Some(pub_id), Some(sys_id)) => write!(f, " PUBLIC \"{pub_id}\" \"{sys_id}\"")?,
                    (Some(pub_id), None) => write!(f, " PUBLIC \"{pub_id}\"")?,
                    (None, Some(sys_id)) => write!(f, " SYSTEM \"{sys_id}\"")?,
                    (None, None) => {}
                }
                write!(f, ">")
            }
            Self::StartTag {
                name,
                self_closing,
                attributes,
            }
            | Self::EndTag {
                name,
                self_closing,
                attributes,
            } => {
                let slash = if self.is_end_tag() { "/" } else { "" };
                write!(f, "<{slash}{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::Comment { data } => write!(f, "<!--{data}-->"),
            Self::Character { data } => f.write_str(data),
            Self::EndOfFile => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reconstructs_markup() {
        let tag = Token::StartTag {
            name: "a".to_string(),
            self_closing: false,
            attributes: vec![Attribute::new("href", "x")],
        };
        assert_eq!(tag.to_string(), r#"<a href="x">"#);

        let end = Token::EndTag {
            name: "a".to_string(),
            self_closing: false,
            attributes: Vec::new(),
        };
        assert_eq!(end.to_string(), "</a>");

        let doctype = Token::Doctype {
            name: Some("html".to_string()),
            public_identifier: None,
            system_identifier: Some("about:legacy-compat".to_string()),
            force_quirks: false,
        };
        assert_eq!(doctype.to_string(), r#"<!DOCTYPE html SYSTEM "about:legacy-compat">"#);
        assert_eq!(Token::EndOfFile.to_string(), "");
    }

    #[test]
    fn accessors_read_the_active_variant() {
        let tag = Token::StartTag {
            name: "input".to_string(),
            self_closing: true,
            attributes: vec![Attribute::new("type", "text"), Attribute::new("type", "radio")],
        };
        assert_eq!(tag.tag_name(), "input");
        assert!(tag.is_self_closing());
        assert_eq!(tag.attribute("type"), Some("text"));
        assert_eq!(tag.attribute("name"), None);
        assert_eq!(tag.kind_name(), "start-tag");
    }

    #[test]
    fn kind_names_are_kebab_case() {
        let names: Vec<&str> = [
            Token::Doctype {
                name: None,
                public_identifier: None,
                system_identifier: None,
                force_quirks: false,
            },
            Token::StartTag {
                name: "a".to_string(),
                self_closing: false,
                attributes: vec![],
            },
            Token::EndTag {
                name: "a".to_string(),
                self_closing: false,
                attributes: vec![],
            },
            Token::Comment {
                data: String::new(),
            },
            Token::Character {
                data: "x".to_string(),
            },
            Token::EndOfFile,
        ]
        .iter()
        .map(Token::kind_name)
        .collect();
        assert_eq!(
            names,
            ["doctype", "start-tag", "end-tag", "comment", "character", "eof"]
        );
    }

    #[test]
    #[should_panic(expected = "tag_name called on non-tag token")]
    fn tag_name_on_comment_is_a_contract_violation() {
        let comment = Token::Comment {
            data: "x".to_string(),
        };
        let _ = comment.tag_name();
    }
}
