//! Positional access into the decoded input stream.
//!
//! [§ 13.2.3.5 Preprocessing the input stream](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
//!
//! The tokenizer never sees bytes. The cursor is built once over an immutable
//! sequence of code points and only ever moves forward, except for the single
//! step back that "reconsume" needs.

/// A cursor over an immutable sequence of code points.
///
/// EOF is not a code point: once every code point has been consumed,
/// [`InputCursor::next_codepoint`] returns `None`. Consuming EOF still counts
/// as a step, so [`InputCursor::reconsume`] after EOF leaves the cursor at EOF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCursor {
    input: Box<[char]>,
    // Ranges over 0..=input.len() + 1; the extra slot is "EOF was consumed".
    position: usize,
}

impl InputCursor {
    /// Create a cursor over already-decoded code points.
    #[must_use]
    pub fn new(code_points: impl Into<Box<[char]>>) -> Self {
        Self {
            input: code_points.into(),
            position: 0,
        }
    }

    /// Create a cursor over `input`, optionally applying newline normalization.
    ///
    /// [§ 13.2.3.5](https://html.spec.whatwg.org/multipage/parsing.html#preprocessing-the-input-stream)
    /// "Before the tokenization stage, the input stream must be preprocessed by
    /// normalizing newlines." Every CR LF pair and every lone CR become a
    /// single LF.
    #[must_use]
    pub fn from_str_with_newlines(input: &str, normalize_newlines: bool) -> Self {
        if !normalize_newlines {
            return Self::new(input.chars().collect::<Vec<_>>());
        }

        let mut code_points = Vec::with_capacity(input.len());
        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\r' {
                if chars.peek() == Some(&'\n') {
                    let _ = chars.next();
                }
                code_points.push('\n');
            } else {
                code_points.push(c);
            }
        }
        Self::new(code_points)
    }

    /// [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
    ///
    /// "Consume the next input character"
    ///
    /// Returns the code point at the cursor and advances past it, or `None`
    /// at the end of the input.
    pub fn next_codepoint(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if self.position <= self.input.len() {
            self.position += 1;
        }
        c
    }

    /// Look at the code point `offset` positions past the cursor without
    /// consuming anything.
    #[must_use]
    pub fn peek_codepoint(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Step back over the most recently consumed code point (or EOF).
    pub const fn reconsume(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// "If the next few characters are..."
    ///
    /// If the upcoming code points are exactly `literal`, consume all of them
    /// and return `true`. Otherwise consume nothing.
    pub fn match_literal(&mut self, literal: &str) -> bool {
        self.match_with(literal, |input_char, literal_char| input_char == literal_char)
    }

    /// Like [`InputCursor::match_literal`], comparing ASCII letters
    /// case-insensitively ("an ASCII case-insensitive match for the word").
    pub fn match_literal_ignore_ascii_case(&mut self, literal: &str) -> bool {
        self.match_with(literal, |input_char, literal_char| {
            input_char.eq_ignore_ascii_case(&literal_char)
        })
    }

    fn match_with(&mut self, literal: &str, eq: impl Fn(char, char) -> bool) -> bool {
        let mut length = 0;
        for (offset, literal_char) in literal.chars().enumerate() {
            match self.peek_codepoint(offset) {
                Some(input_char) if eq(input_char, literal_char) => length = offset + 1,
                _ => return false,
            }
        }
        self.position += length;
        true
    }

    /// Number of code points consumed so far, not counting EOF.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position.min(self.input.len())
    }

    /// Returns true once every code point has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Total number of code points in the input.
    #[must_use]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Returns true if the input has no code points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }
}

impl From<&str> for InputCursor {
    fn from(input: &str) -> Self {
        Self::from_str_with_newlines(input, true)
    }
}
