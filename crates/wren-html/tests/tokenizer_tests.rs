//! Integration tests for the HTML tokenizer.

use wren_html::{
    Attribute, ErrorCategory, HTMLTokenizer, ParseErrorKind, Token, TokenizerOptions,
    TokenizerState,
};

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<Token> {
    HTMLTokenizer::new(input).into_tokens()
}

/// Helper to tokenize a string and return the tokens plus the parse error kinds
fn tokenize_with_errors(input: &str) -> (Vec<Token>, Vec<ParseErrorKind>) {
    let mut tokenizer = HTMLTokenizer::new(input);
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    let errors = tokenizer.errors().iter().map(|error| error.kind).collect();
    (tokens, errors)
}

/// Concatenate the data of every character token
fn text_of(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|t| {
            if let Token::Character { data } = t {
                Some(data.as_str())
            } else {
                None
            }
        })
        .collect()
}

/// Drive the tokenizer the way a tree builder would: after the start tag of
/// a raw text element, switch the tokenizer into the matching state.
fn tokenize_with_content_model(input: &str) -> Vec<Token> {
    let mut tokenizer = HTMLTokenizer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token() {
        if let Token::StartTag { name, .. } = &token {
            let state = match name.to_ascii_lowercase().as_str() {
                "title" | "textarea" => Some(TokenizerState::RCDATA),
                "style" | "xmp" | "iframe" | "noembed" | "noframes" => {
                    Some(TokenizerState::RAWTEXT)
                }
                "script" => Some(TokenizerState::ScriptData),
                "plaintext" => Some(TokenizerState::PLAINTEXT),
                _ => None,
            };
            if let Some(state) = state {
                tokenizer.set_state(state);
            }
        }
        tokens.push(token);
    }
    tokens
}

// =============================================================================
// Basic tokens
// =============================================================================

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens.len(), 2); // one coalesced run + EOF
    assert!(matches!(&tokens[0], Token::Character { data } if data == "Hello"));
    assert!(matches!(tokens[1], Token::EndOfFile));
}

#[test]
fn test_empty_input() {
    let tokens = tokenize("");
    assert_eq!(tokens, vec![Token::EndOfFile]);
}

#[test]
fn test_doctype() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 2); // DOCTYPE + EOF
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert!(public_identifier.is_none());
            assert!(system_identifier.is_none());
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<div>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name,
            self_closing,
            attributes,
        } => {
            assert_eq!(name, "div");
            assert!(!self_closing);
            assert!(attributes.is_empty());
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_end_tag() {
    let tokens = tokenize("</div>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::EndTag { name, .. } => {
            assert_eq!(name, "div");
        }
        _ => panic!("Expected EndTag token"),
    }
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::StartTag {
            name, self_closing, ..
        } => {
            assert_eq!(name, "br");
            assert!(self_closing);
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_self_closing_tag_after_whitespace() {
    let tokens = tokenize("<img src=\"a.png\" />");
    assert!(tokens[0].is_self_closing());
    assert_eq!(tokens[0].attribute("src"), Some("a.png"));
}

#[test]
fn test_comment() {
    let tokens = tokenize("<!-- hi -->");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, " hi "),
        _ => panic!("Expected Comment token"),
    }
}

#[test]
fn test_tag_with_text_content() {
    let tokens = tokenize("<p>hi</p>");
    assert_eq!(
        tokens,
        vec![
            Token::StartTag {
                name: "p".to_string(),
                self_closing: false,
                attributes: vec![],
            },
            Token::Character {
                data: "hi".to_string()
            },
            Token::EndTag {
                name: "p".to_string(),
                self_closing: false,
                attributes: vec![],
            },
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_simple_html_document() {
    let input = "<!DOCTYPE html><html><head><title>T</title></head><body><p class=\"x\">Hi</p></body></html>";
    let tokens = tokenize(input);

    let kinds: Vec<&str> = tokens.iter().map(Token::kind_name).collect();
    assert_eq!(
        kinds,
        vec![
            "doctype",
            "start-tag",
            "start-tag",
            "start-tag",
            "character",
            "end-tag",
            "end-tag",
            "start-tag",
            "start-tag",
            "character",
            "end-tag",
            "end-tag",
            "end-tag",
            "eof",
        ]
    );
    assert_eq!(tokens[8].attribute("class"), Some("x"));
    assert_eq!(text_of(&tokens), "THi");
}

#[test]
fn test_text_between_tags_is_not_split() {
    let tokens = tokenize("a<b>c d</b>e");
    assert_eq!(text_of(&tokens[..1]), "a");
    assert!(matches!(&tokens[2], Token::Character { data } if data == "c d"));
    assert!(matches!(&tokens[4], Token::Character { data } if data == "e"));
    assert_eq!(tokens.len(), 6);
}

// =============================================================================
// Attributes
// =============================================================================

#[test]
fn test_attribute_double_quoted() {
    let tokens = tokenize(r#"<a href="x">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes, &vec![Attribute::new("href", "x")]);
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_attribute_single_quoted() {
    let tokens = tokenize("<div class='foo bar'>");
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 1);
            assert_eq!(attributes[0].name, "class");
            assert_eq!(attributes[0].value, "foo bar");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_attribute_unquoted() {
    let tokens = tokenize("<input type=text>");
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].name, "type");
            assert_eq!(attributes[0].value, "text");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_boolean_attribute() {
    let tokens = tokenize("<input disabled>");
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].name, "disabled");
            assert_eq!(attributes[0].value, "");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_multiple_attributes() {
    let tokens = tokenize(r#"<input type="checkbox" checked name=agree>"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            let names: Vec<&str> = attributes.iter().map(|a| a.name.as_str()).collect();
            assert_eq!(names, vec!["type", "checked", "name"]);
            assert_eq!(attributes[2].value, "agree");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_missing_whitespace_between_attributes() {
    let (tokens, errors) = tokenize_with_errors(r#"<a x="1"y="2">"#);
    assert_eq!(tokens[0].attribute("x"), Some("1"));
    assert_eq!(tokens[0].attribute("y"), Some("2"));
    assert_eq!(errors, vec![ParseErrorKind::MissingWhitespaceBetweenAttributes]);
}

#[test]
fn test_equals_sign_before_attribute_name() {
    let (tokens, errors) = tokenize_with_errors("<a =b>");
    assert_eq!(tokens[0].attributes(), &[Attribute::new("=b", "")]);
    assert_eq!(errors, vec![ParseErrorKind::UnexpectedEqualsSignBeforeAttributeName]);
}

#[test]
fn test_missing_attribute_value() {
    let (tokens, errors) = tokenize_with_errors("<a x=>");
    assert_eq!(tokens[0].attribute("x"), Some(""));
    assert_eq!(errors, vec![ParseErrorKind::MissingAttributeValue]);
}

#[test]
fn test_duplicate_attributes_kept_by_default() {
    let (tokens, errors) = tokenize_with_errors("<a x=1 x=2>");
    assert_eq!(
        tokens[0].attributes(),
        &[Attribute::new("x", "1"), Attribute::new("x", "2")]
    );
    assert_eq!(errors, vec![ParseErrorKind::DuplicateAttribute]);
}

#[test]
fn test_duplicate_attributes_dropped_when_requested() {
    let options = TokenizerOptions {
        drop_duplicate_attributes: true,
        ..TokenizerOptions::default()
    };
    let mut tokenizer = HTMLTokenizer::with_options("<a x=1 y=2 x=3>", options);
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    assert_eq!(
        tokens[0].attributes(),
        &[Attribute::new("x", "1"), Attribute::new("y", "2")]
    );
    assert_eq!(tokenizer.errors().len(), 1);
    assert_eq!(tokenizer.errors()[0].category(), ErrorCategory::DuplicateAttribute);
}

#[test]
fn test_end_tag_with_attributes() {
    let (tokens, errors) = tokenize_with_errors("</a b>");
    assert!(tokens[0].is_end_tag());
    assert_eq!(tokens[0].attributes(), &[Attribute::new("b", "")]);
    assert_eq!(errors, vec![ParseErrorKind::EndTagWithAttributes]);
}

#[test]
fn test_end_tag_with_trailing_solidus() {
    let (tokens, errors) = tokenize_with_errors("</br/>");
    assert_eq!(tokens[0].tag_name(), "br");
    assert!(tokens[0].is_self_closing());
    assert_eq!(errors, vec![ParseErrorKind::EndTagWithTrailingSolidus]);
}

// =============================================================================
// Name case handling
// =============================================================================

#[test]
fn test_names_are_verbatim_by_default() {
    let tokens = tokenize("<DIV Class=X></Div>");
    assert_eq!(tokens[0].tag_name(), "DIV");
    assert_eq!(tokens[0].attributes(), &[Attribute::new("Class", "X")]);
    assert_eq!(tokens[1].tag_name(), "Div");
}

#[test]
fn test_lowercase_names_option() {
    let options = TokenizerOptions {
        lowercase_names: true,
        ..TokenizerOptions::default()
    };
    let tokens = HTMLTokenizer::with_options("<DIV Class=X></Div>", options).into_tokens();
    assert_eq!(tokens[0].tag_name(), "div");
    // Values are never folded.
    assert_eq!(tokens[0].attributes(), &[Attribute::new("class", "X")]);
    assert_eq!(tokens[1].tag_name(), "div");
}

#[test]
fn test_doctype_keyword_is_case_sensitive_by_default() {
    let (tokens, errors) = tokenize_with_errors("<!doctype html>");
    match &tokens[0] {
        Token::Comment { data } => assert_eq!(data, "doctype html"),
        _ => panic!("Expected Comment token"),
    }
    assert_eq!(errors, vec![ParseErrorKind::IncorrectlyOpenedComment]);
}

#[test]
fn test_case_insensitive_doctype_option() {
    let options = TokenizerOptions {
        case_insensitive_doctype: true,
        ..TokenizerOptions::default()
    };
    let tokens = HTMLTokenizer::with_options("<!doctype html>", options).into_tokens();
    assert!(tokens[0].is_doctype());
}

#[test]
fn test_doctype_name_is_lowercased() {
    let tokens = tokenize("<!DOCTYPE HTML>");
    match &tokens[0] {
        Token::Doctype { name, .. } => assert_eq!(name.as_deref(), Some("html")),
        _ => panic!("Expected DOCTYPE token"),
    }
}

// =============================================================================
// DOCTYPE
// =============================================================================

#[test]
fn test_doctype_public_and_system_identifiers() {
    let (tokens, errors) = tokenize_with_errors(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#,
    );
    assert!(errors.is_empty());
    match &tokens[0] {
        Token::Doctype {
            name,
            public_identifier,
            system_identifier,
            force_quirks,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert_eq!(public_identifier.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
            assert_eq!(
                system_identifier.as_deref(),
                Some("http://www.w3.org/TR/html4/strict.dtd")
            );
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_system_identifier_only() {
    let tokens = tokenize("<!DOCTYPE html SYSTEM 'about:legacy-compat'>");
    match &tokens[0] {
        Token::Doctype {
            public_identifier,
            system_identifier,
            force_quirks,
            ..
        } => {
            assert!(public_identifier.is_none());
            assert_eq!(system_identifier.as_deref(), Some("about:legacy-compat"));
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_empty_public_identifier_is_present() {
    let tokens = tokenize(r#"<!DOCTYPE html PUBLIC "">"#);
    match &tokens[0] {
        Token::Doctype {
            public_identifier, ..
        } => assert_eq!(public_identifier.as_deref(), Some("")),
        _ => panic!("Expected DOCTYPE token"),
    }
}

#[test]
fn test_doctype_missing_name() {
    let (tokens, errors) = tokenize_with_errors("<!DOCTYPE>");
    match &tokens[0] {
        Token::Doctype {
            name, force_quirks, ..
        } => {
            assert!(name.is_none());
            assert!(force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
    assert_eq!(errors, vec![ParseErrorKind::MissingDoctypeName]);
}

#[test]
fn test_doctype_bogus_keyword() {
    let (tokens, errors) = tokenize_with_errors("<!DOCTYPE html bogus>");
    match &tokens[0] {
        Token::Doctype {
            name, force_quirks, ..
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert!(force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
    assert_eq!(
        errors,
        vec![ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName]
    );
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_doctype_keyword_is_case_insensitive() {
    let (tokens, errors) = tokenize_with_errors(r#"<!DOCTYPE html sYsTeM "x">"#);
    match &tokens[0] {
        Token::Doctype {
            system_identifier,
            force_quirks,
            ..
        } => {
            assert_eq!(system_identifier.as_deref(), Some("x"));
            assert!(!force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
    assert!(errors.is_empty());
}

#[test]
fn test_doctype_truncated_keyword_consumes_one_character() {
    let mut tokenizer = HTMLTokenizer::new("<!DOCTYPE html PUBLI>x");
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    match &tokens[0] {
        Token::Doctype {
            public_identifier,
            force_quirks,
            ..
        } => {
            assert!(public_identifier.is_none());
            assert!(force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
    assert_eq!(text_of(&tokens), "x");
    let errors = tokenizer.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName);
    assert_eq!(errors[0].position, "<!DOCTYPE html P".len());
}

#[test]
fn test_doctype_missing_quote_before_public_identifier() {
    let (tokens, errors) = tokenize_with_errors("<!DOCTYPE html PUBLIC foo>");
    assert!(matches!(
        tokens[0],
        Token::Doctype {
            force_quirks: true,
            ..
        }
    ));
    assert_eq!(
        errors,
        vec![ParseErrorKind::MissingQuoteBeforeDoctypePublicIdentifier]
    );
}

#[test]
fn test_doctype_at_eof() {
    let (tokens, errors) = tokenize_with_errors("<!DOCTYPE html");
    match &tokens[0] {
        Token::Doctype {
            name, force_quirks, ..
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert!(force_quirks);
        }
        _ => panic!("Expected DOCTYPE token"),
    }
    assert_eq!(errors, vec![ParseErrorKind::EofInDoctype]);
    assert!(tokens[1].is_eof());
}

// =============================================================================
// Comments and markup declarations
// =============================================================================

#[test]
fn test_empty_comment_closed_abruptly() {
    let (tokens, errors) = tokenize_with_errors("<!-->");
    assert!(matches!(&tokens[0], Token::Comment { data } if data.is_empty()));
    assert_eq!(errors, vec![ParseErrorKind::AbruptClosingOfEmptyComment]);
}

#[test]
fn test_incorrectly_closed_comment() {
    let (tokens, errors) = tokenize_with_errors("<!--a--!>");
    assert!(matches!(&tokens[0], Token::Comment { data } if data == "a"));
    assert_eq!(errors, vec![ParseErrorKind::IncorrectlyClosedComment]);
}

#[test]
fn test_nested_comment() {
    let (tokens, errors) = tokenize_with_errors("<!-- a <!-- b -->");
    assert!(matches!(&tokens[0], Token::Comment { data } if data == " a <!-- b "));
    assert_eq!(errors, vec![ParseErrorKind::NestedComment]);
}

#[test]
fn test_comment_with_inner_dashes() {
    let tokens = tokenize("<!--a-b--c--->");
    assert!(matches!(&tokens[0], Token::Comment { data } if data == "a-b--c-"));
}

#[test]
fn test_comment_at_eof() {
    let (tokens, errors) = tokenize_with_errors("<!--x");
    assert!(matches!(&tokens[0], Token::Comment { data } if data == "x"));
    assert!(tokens[1].is_eof());
    assert_eq!(errors, vec![ParseErrorKind::EofInComment]);
}

#[test]
fn test_processing_instruction_becomes_bogus_comment() {
    let mut tokenizer = HTMLTokenizer::new("<?xml version?>");
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    assert!(matches!(&tokens[0], Token::Comment { data } if data == "?xml version?"));
    let errors = tokenizer.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].kind,
        ParseErrorKind::UnexpectedQuestionMarkInsteadOfTagName
    );
    assert_eq!(errors[0].category(), ErrorCategory::UnsupportedConstruct);
}

#[test]
fn test_cdata_in_html_content_is_a_bogus_comment() {
    let (tokens, errors) = tokenize_with_errors("<![CDATA[x]]>");
    assert!(matches!(&tokens[0], Token::Comment { data } if data == "[CDATA[x]]"));
    assert_eq!(errors, vec![ParseErrorKind::CdataInHtmlContent]);
}

#[test]
fn test_cdata_section_when_allowed() {
    let mut tokenizer = HTMLTokenizer::new("<![CDATA[a<b]]>c");
    tokenizer.set_cdata_allowed(true);
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    assert_eq!(
        tokens,
        vec![
            Token::Character {
                data: "a<bc".to_string()
            },
            Token::EndOfFile
        ]
    );
    assert!(tokenizer.errors().is_empty());
}

#[test]
fn test_cdata_section_at_eof() {
    let mut tokenizer = HTMLTokenizer::new("<![CDATA[abc");
    tokenizer.set_cdata_allowed(true);
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    assert_eq!(text_of(&tokens), "abc");
    assert_eq!(tokenizer.errors()[0].kind, ParseErrorKind::EofInCdata);
}

// =============================================================================
// Malformed tags and end of file
// =============================================================================

#[test]
fn test_less_than_sign_at_eof() {
    let (tokens, errors) = tokenize_with_errors("a<");
    assert_eq!(
        tokens,
        vec![
            Token::Character {
                data: "a<".to_string()
            },
            Token::EndOfFile
        ]
    );
    assert_eq!(errors, vec![ParseErrorKind::EofBeforeTagName]);
}

#[test]
fn test_invalid_first_character_of_tag_name() {
    let (tokens, errors) = tokenize_with_errors("1 < 2");
    assert_eq!(text_of(&tokens), "1 < 2");
    assert_eq!(errors, vec![ParseErrorKind::InvalidFirstCharacterOfTagName]);
}

#[test]
fn test_missing_end_tag_name() {
    let (tokens, errors) = tokenize_with_errors("</>");
    assert_eq!(tokens, vec![Token::EndOfFile]);
    assert_eq!(errors, vec![ParseErrorKind::MissingEndTagName]);
}

#[test]
fn test_eof_in_tag_discards_the_tag() {
    let (tokens, errors) = tokenize_with_errors("text<div class=");
    assert_eq!(
        tokens,
        vec![
            Token::Character {
                data: "text".to_string()
            },
            Token::EndOfFile
        ]
    );
    assert_eq!(errors, vec![ParseErrorKind::EofInTag]);
}

#[test]
fn test_eof_is_emitted_once() {
    let mut tokenizer = HTMLTokenizer::new("<p>");
    assert!(tokenizer.next_token().is_some_and(|t| t.is_start_tag()));
    assert!(!tokenizer.is_finished());
    assert_eq!(tokenizer.next_token(), Some(Token::EndOfFile));
    assert!(tokenizer.is_finished());
    assert_eq!(tokenizer.next_token(), None);
    assert_eq!(tokenizer.next_token(), None);
}

#[test]
fn test_null_character_in_data() {
    let mut tokenizer = HTMLTokenizer::new("a\0b");
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    assert_eq!(text_of(&tokens), "a\0b");
    let errors = tokenizer.take_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::UnexpectedNullCharacter);
    assert_eq!(errors[0].position, 2);
    assert!(tokenizer.errors().is_empty());
}

#[test]
fn test_null_character_in_tag_name() {
    let (tokens, errors) = tokenize_with_errors("<a\0>");
    assert_eq!(tokens[0].tag_name(), "a\u{FFFD}");
    assert_eq!(errors, vec![ParseErrorKind::UnexpectedNullCharacter]);
}

// =============================================================================
// Newline normalization
// =============================================================================

#[test]
fn test_newlines_are_normalized_by_default() {
    let tokens = tokenize("a\r\nb\rc");
    assert_eq!(text_of(&tokens), "a\nb\nc");
}

#[test]
fn test_newline_normalization_can_be_disabled() {
    let options = TokenizerOptions {
        normalize_newlines: false,
        ..TokenizerOptions::default()
    };
    let tokens = HTMLTokenizer::with_options("a\r\nb", options).into_tokens();
    assert_eq!(text_of(&tokens), "a\r\nb");
}

#[test]
fn test_from_code_points() {
    let code_points: Vec<char> = "<b>x</b>".chars().collect();
    let tokens =
        HTMLTokenizer::from_code_points(&code_points, TokenizerOptions::default()).into_tokens();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].tag_name(), "b");
}

// =============================================================================
// Raw text content models
// =============================================================================

#[test]
fn test_title_element_rcdata() {
    let tokens = tokenize_with_content_model("<title>a<b>&amp;</title>");
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].tag_name(), "title");
    assert!(matches!(&tokens[1], Token::Character { data } if data == "a<b>&"));
    assert!(tokens[2].is_end_tag());
    assert_eq!(tokens[2].tag_name(), "title");
}

#[test]
fn test_style_element_rawtext() {
    let tokens = tokenize_with_content_model("<style>p { x: '</b>' } &amp;</style>");
    assert_eq!(tokens.len(), 4);
    assert!(matches!(&tokens[1], Token::Character { data } if data == "p { x: '</b>' } &amp;"));
    assert_eq!(tokens[2].tag_name(), "style");
}

#[test]
fn test_end_tag_match_ignores_case() {
    let tokens = tokenize_with_content_model("<TITLE>x</title>");
    assert_eq!(text_of(&tokens), "x");
    assert!(tokens[2].is_end_tag());
}

#[test]
fn test_rcdata_without_last_start_tag() {
    let mut tokenizer = HTMLTokenizer::new("a</x>b");
    tokenizer.set_state(TokenizerState::RCDATA);
    let tokens = tokenizer.into_tokens();
    assert_eq!(
        tokens,
        vec![
            Token::Character {
                data: "a</x>b".to_string()
            },
            Token::EndOfFile
        ]
    );
}

#[test]
fn test_set_last_start_tag() {
    let mut tokenizer = HTMLTokenizer::new("abc</textarea>def");
    tokenizer.set_state(TokenizerState::RCDATA);
    tokenizer.set_last_start_tag(Some("textarea"));
    let tokens = tokenizer.into_tokens();
    assert_eq!(tokens.len(), 4);
    assert!(matches!(&tokens[0], Token::Character { data } if data == "abc"));
    assert_eq!(tokens[1].tag_name(), "textarea");
    assert!(matches!(&tokens[2], Token::Character { data } if data == "def"));
}

#[test]
fn test_script_data() {
    let tokens = tokenize_with_content_model("<script>if (a<b) x--;</script>");
    assert_eq!(tokens.len(), 4);
    assert!(matches!(&tokens[1], Token::Character { data } if data == "if (a<b) x--;"));
    assert_eq!(tokens[2].tag_name(), "script");
}

#[test]
fn test_script_data_double_escaped() {
    let tokens = tokenize_with_content_model("<script><!--<script>x</script>--></script>");
    assert_eq!(tokens.len(), 4);
    assert!(
        matches!(&tokens[1], Token::Character { data } if data == "<!--<script>x</script>-->")
    );
    assert!(tokens[2].is_end_tag());
}

#[test]
fn test_script_data_escaped_at_eof() {
    let mut tokenizer = HTMLTokenizer::new("<!--x");
    tokenizer.set_state(TokenizerState::ScriptData);
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    assert_eq!(text_of(&tokens), "<!--x");
    assert_eq!(
        tokenizer.errors()[0].kind,
        ParseErrorKind::EofInScriptHtmlCommentLikeText
    );
}

#[test]
fn test_plaintext_never_ends() {
    let tokens = tokenize_with_content_model("<plaintext></plaintext><b>");
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[1], Token::Character { data } if data == "</plaintext><b>"));
}

// =============================================================================
// Character references
// =============================================================================

#[test]
fn test_character_reference_bare_ampersand() {
    // [§ 13.2.5.72 Character reference state]
    // Bare ampersand followed by non-alphanumeric should flush as literal '&'
    let (tokens, errors) = tokenize_with_errors("a & b");
    assert_eq!(
        tokens,
        vec![
            Token::Character {
                data: "a & b".to_string()
            },
            Token::EndOfFile
        ]
    );
    assert!(errors.is_empty());
}

#[test]
fn test_named_character_reference_amp() {
    // [§ 13.2.5.73 Named character reference state]
    let tokens = tokenize("a &amp; b");
    assert_eq!(tokens.len(), 2);
    assert_eq!(text_of(&tokens), "a & b");
}

#[test]
fn test_named_character_reference_lt_gt() {
    let tokens = tokenize("&lt;div&gt;");
    assert_eq!(text_of(&tokens), "<div>");
}

#[test]
fn test_named_character_reference_without_semicolon() {
    // Legacy entities without semicolon still resolve, with a parse error
    let (tokens, errors) = tokenize_with_errors("&amp is ok");
    assert_eq!(text_of(&tokens), "& is ok");
    assert_eq!(errors, vec![ParseErrorKind::MissingSemicolonAfterCharacterReference]);
}

#[test]
fn test_named_character_reference_longest_prefix() {
    // "not" is the longest entity name that prefixes "notit;"
    let (tokens, errors) = tokenize_with_errors("I'm &notit; I tell you");
    assert_eq!(text_of(&tokens), "I'm \u{AC}it; I tell you");
    assert_eq!(errors, vec![ParseErrorKind::MissingSemicolonAfterCharacterReference]);
}

#[test]
fn test_named_character_reference_prefers_longer_name() {
    let (tokens, errors) = tokenize_with_errors("&notin;");
    assert_eq!(text_of(&tokens), "\u{2209}");
    assert!(errors.is_empty());
}

#[test]
fn test_named_character_reference_unknown() {
    // Unknown entities are passed through as-is
    let (tokens, errors) = tokenize_with_errors("&foo;");
    assert_eq!(text_of(&tokens), "&foo;");
    assert_eq!(errors, vec![ParseErrorKind::UnknownNamedCharacterReference]);
}

#[test]
fn test_named_character_reference_unknown_without_semicolon() {
    let (tokens, errors) = tokenize_with_errors("&foo bar");
    assert_eq!(text_of(&tokens), "&foo bar");
    assert!(errors.is_empty());
}

#[test]
fn test_named_character_reference_in_attribute() {
    // Entities in attribute values should be replaced
    let tokens = tokenize(r#"<a href="?a=1&amp;b=2">"#);
    match &tokens[0] {
        Token::StartTag { attributes, .. } => {
            assert_eq!(attributes[0].value, "?a=1&b=2");
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_legacy_reference_in_attribute_is_left_alone() {
    // Without a semicolon and followed by '=' or an alphanumeric, the
    // reference stays literal inside attribute values.
    let (tokens, errors) = tokenize_with_errors(r#"<a href="/?x=1&amp=2&notx=3&not">"#);
    assert_eq!(tokens[0].attribute("href"), Some("/?x=1&amp=2&notx=3\u{AC}"));
    assert_eq!(errors, vec![ParseErrorKind::MissingSemicolonAfterCharacterReference]);
}

#[test]
fn test_character_reference_in_unquoted_attribute() {
    let tokens = tokenize("<a x=&lt;>");
    assert_eq!(tokens[0].attribute("x"), Some("<"));
}

#[test]
fn test_numeric_character_references() {
    let (tokens, errors) = tokenize_with_errors("&#65;&#x41;&#X61");
    assert_eq!(tokens.len(), 2);
    assert_eq!(text_of(&tokens), "AAa");
    assert_eq!(errors, vec![ParseErrorKind::MissingSemicolonAfterCharacterReference]);
}

#[test]
fn test_numeric_character_reference_without_digits() {
    let (tokens, errors) = tokenize_with_errors("&#;&#x;");
    assert_eq!(text_of(&tokens), "&#;&#x;");
    assert_eq!(
        errors,
        vec![
            ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference,
            ParseErrorKind::AbsenceOfDigitsInNumericCharacterReference,
        ]
    );
}

#[test]
fn test_null_character_reference() {
    let (tokens, errors) = tokenize_with_errors("&#0;");
    assert_eq!(text_of(&tokens), "\u{FFFD}");
    assert_eq!(errors, vec![ParseErrorKind::NullCharacterReference]);
}

#[test]
fn test_c1_control_character_reference_is_remapped() {
    let (tokens, errors) = tokenize_with_errors("&#128;&#x99;");
    assert_eq!(text_of(&tokens), "\u{20AC}\u{2122}");
    assert_eq!(
        errors,
        vec![
            ParseErrorKind::ControlCharacterReference,
            ParseErrorKind::ControlCharacterReference,
        ]
    );
}

#[test]
fn test_out_of_range_character_references() {
    let (tokens, errors) = tokenize_with_errors("&#xD800;&#x110000;&#99999999999999;");
    assert_eq!(text_of(&tokens), "\u{FFFD}\u{FFFD}\u{FFFD}");
    assert_eq!(
        errors,
        vec![
            ParseErrorKind::SurrogateCharacterReference,
            ParseErrorKind::CharacterReferenceOutsideUnicodeRange,
            ParseErrorKind::CharacterReferenceOutsideUnicodeRange,
        ]
    );
}

#[test]
fn test_noncharacter_reference_is_kept() {
    let (tokens, errors) = tokenize_with_errors("&#xFFFE;");
    assert_eq!(text_of(&tokens), "\u{FFFE}");
    assert_eq!(errors, vec![ParseErrorKind::NoncharacterCharacterReference]);
}

// =============================================================================
// Errors and display
// =============================================================================

#[test]
fn test_parse_error_codes_and_positions() {
    let mut tokenizer = HTMLTokenizer::new("<a\0>");
    let _ = tokenizer.by_ref().count();
    let error = tokenizer.errors()[0];
    assert_eq!(error.kind.code(), "unexpected-null-character");
    assert_eq!(error.position, 3);
    assert_eq!(
        error.to_string(),
        "unexpected NULL character (unexpected-null-character) at offset 3"
    );
}

#[test]
fn test_display_reconstructs_plain_markup() {
    let input = r#"<!DOCTYPE html><a href="x" hidden="">t</a><br /><!--c-->"#;
    let rendered: String = tokenize(input).iter().map(ToString::to_string).collect();
    assert_eq!(rendered, input);
}

#[test]
fn test_whatwg_options() {
    let options = TokenizerOptions::whatwg();
    let tokens = HTMLTokenizer::with_options("<!doctype html><DIV ID=a>", options).into_tokens();
    assert!(tokens[0].is_doctype());
    assert_eq!(tokens[1].tag_name(), "div");
    assert_eq!(tokens[1].attribute("id"), Some("a"));
}

#[test]
fn test_interleaved_tokenizers_keep_their_own_errors() {
    let first_input = "a\0<b>\0</b>\0";
    let second_input = "<p x x></p y=1><q";
    let (_, first_alone) = tokenize_with_errors(first_input);
    let (_, second_alone) = tokenize_with_errors(second_input);

    let mut first = HTMLTokenizer::new(first_input);
    let mut second = HTMLTokenizer::new(second_input);
    loop {
        let a = first.next_token();
        let b = second.next_token();
        if a.is_none() && b.is_none() {
            break;
        }
    }

    let first_kinds: Vec<ParseErrorKind> = first.errors().iter().map(|e| e.kind).collect();
    let second_kinds: Vec<ParseErrorKind> = second.errors().iter().map(|e| e.kind).collect();
    assert_eq!(first_kinds, first_alone);
    assert_eq!(second_kinds, second_alone);
    assert_eq!(first_kinds, vec![ParseErrorKind::UnexpectedNullCharacter; 3]);
    assert_eq!(
        second_kinds,
        vec![
            ParseErrorKind::DuplicateAttribute,
            ParseErrorKind::EndTagWithAttributes,
            ParseErrorKind::EofInTag,
        ]
    );
}

#[test]
fn test_repeated_errors_are_all_recorded() {
    let input = "\0".repeat(2000);
    let (tokens, errors) = tokenize_with_errors(&input);
    assert_eq!(text_of(&tokens), input);
    assert_eq!(errors.len(), 2000);

    // A fresh tokenizer starts with no errors of its own.
    let fresh = HTMLTokenizer::new("x\0");
    assert!(fresh.errors().is_empty());
}
