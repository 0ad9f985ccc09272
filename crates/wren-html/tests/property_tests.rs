//! Property tests for the HTML tokenizer.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use wren_html::{HTMLTokenizer, ParseErrorKind, Token};

/// A well-formed tag or text run whose tokens render back to the same markup.
#[derive(Debug, Clone)]
enum Piece {
    Start {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    End(String),
    Text(String),
    Comment(String),
}

fn word(g: &mut Gen, alphabet: &[char], min: usize) -> String {
    let len = min + usize::arbitrary(g) % 6;
    (0..len)
        .filter_map(|_| g.choose(alphabet).copied())
        .collect()
}

const NAME_CHARS: &[char] = &['a', 'b', 'c', 'd', 'p', 'x', 'y', 'z'];
const TEXT_CHARS: &[char] = &['a', 'b', 'Z', '0', '9', ' ', '.', '\n', '-'];

impl Arbitrary for Piece {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 4 {
            0 => {
                let count = usize::arbitrary(g) % 3;
                Self::Start {
                    name: word(g, NAME_CHARS, 1),
                    attributes: (0..count)
                        .map(|_| (word(g, NAME_CHARS, 1), word(g, TEXT_CHARS, 0)))
                        .collect(),
                    self_closing: bool::arbitrary(g),
                }
            }
            1 => Self::End(word(g, NAME_CHARS, 1)),
            2 => Self::Text(word(g, TEXT_CHARS, 1)),
            _ => Self::Comment(word(g, NAME_CHARS, 0)),
        }
    }
}

impl Piece {
    fn to_markup(&self) -> String {
        match self {
            Self::Start {
                name,
                attributes,
                self_closing,
            } => {
                let mut markup = format!("<{name}");
                for (attr_name, value) in attributes {
                    markup.push_str(&format!(" {attr_name}=\"{value}\""));
                }
                if *self_closing {
                    markup.push_str(" /");
                }
                markup.push('>');
                markup
            }
            Self::End(name) => format!("</{name}>"),
            Self::Text(text) => text.clone(),
            Self::Comment(data) => format!("<!--{data}-->"),
        }
    }
}

#[quickcheck]
fn eof_is_last_and_unique(input: String) -> bool {
    let mut tokenizer = HTMLTokenizer::new(&input);
    let tokens: Vec<Token> = tokenizer.by_ref().collect();
    let eof_count = tokens.iter().filter(|t| t.is_eof()).count();
    eof_count == 1
        && tokens.last().is_some_and(Token::is_eof)
        && tokenizer.next_token().is_none()
        && tokenizer.next_token().is_none()
}

#[quickcheck]
fn tokenizing_is_deterministic(input: String) -> bool {
    let mut first = HTMLTokenizer::new(&input);
    let mut second = HTMLTokenizer::new(&input);
    loop {
        let a = first.next_token();
        let b = second.next_token();
        if a != b || first.position() != second.position() {
            return false;
        }
        if a.is_none() {
            break;
        }
    }
    first.errors() == second.errors() && first.state() == second.state()
}

#[quickcheck]
fn character_tokens_are_coalesced(input: String) -> bool {
    let tokens = HTMLTokenizer::new(&input).into_tokens();
    tokens
        .windows(2)
        .all(|pair| !(pair[0].is_character() && pair[1].is_character()))
}

#[quickcheck]
fn character_tokens_are_never_empty(input: String) -> bool {
    HTMLTokenizer::new(&input)
        .into_tokens()
        .iter()
        .all(|t| !matches!(t, Token::Character { data } if data.is_empty()))
}

#[quickcheck]
fn plain_text_is_one_token(input: String) -> bool {
    let text: String = input
        .chars()
        .filter(|c| !matches!(c, '<' | '&' | '\r'))
        .collect();
    let tokens = HTMLTokenizer::new(&text).into_tokens();
    if text.is_empty() {
        tokens == vec![Token::EndOfFile]
    } else {
        tokens == vec![Token::Character { data: text }, Token::EndOfFile]
    }
}

#[quickcheck]
fn well_formed_markup_round_trips(pieces: Vec<Piece>) -> bool {
    let markup: String = pieces.iter().map(Piece::to_markup).collect();
    let mut tokenizer = HTMLTokenizer::new(&markup);
    let rendered: String = tokenizer.by_ref().map(|token| token.to_string()).collect();
    rendered == markup
        && tokenizer
            .errors()
            .iter()
            .all(|e| e.kind == ParseErrorKind::DuplicateAttribute)
}
