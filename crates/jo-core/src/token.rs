//! Tokenizer for jo source text.
//!
//! Splits text into runs of one character class. Letters and digits group
//! into runs, every other non-whitespace character is a token of its own,
//! and whitespace groups only while the same character repeats.

use std::fmt;

/// Character class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// ASCII letters.
    Ident,
    /// ASCII digits.
    Number,
    /// Any single character that is not a letter, digit, or whitespace.
    Symbol,
    /// A run of one repeated whitespace character (space, tab, or newline).
    Separator,
}

impl TokenKind {
    /// Class of a single character.
    pub fn of(c: char) -> Self {
        match c {
            ' ' | '\t' | '\n' => Self::Separator,
            'a'..='z' | 'A'..='Z' => Self::Ident,
            '0'..='9' => Self::Number,
            _ => Self::Symbol,
        }
    }

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "id",
            Self::Number => "num",
            Self::Symbol => "sym",
            Self::Separator => "sep",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token borrowed from the source text.
///
/// `pos` is a byte offset into the source. `line` and `col` are zero-based;
/// `col` counts characters since the last newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Character class.
    pub kind: TokenKind,
    /// The token's text.
    pub text: &'a str,
    /// Byte offset of the first character.
    pub pos: usize,
    /// Line of the first character.
    pub line: u32,
    /// Column of the first character.
    pub col: u32,
}

/// A cursor position in the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Byte offset.
    pub pos: usize,
    /// Zero-based line.
    pub line: u32,
    /// Zero-based column in characters.
    pub col: u32,
}

/// Lazy tokenizer over a source string.
///
/// # Example
/// ```
/// use jo_core::token::{TokenKind, Tokenizer};
/// let kinds: Vec<_> = Tokenizer::new("x1 + 2").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Ident,
///         TokenKind::Number,
///         TokenKind::Separator,
///         TokenKind::Symbol,
///         TokenKind::Separator,
///         TokenKind::Number,
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    src: &'a str,
    cursor: Position,
    mark: Position,
}

impl<'a> Tokenizer<'a> {
    /// A tokenizer positioned at the start of `src`.
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            cursor: Position::default(),
            mark: Position::default(),
        }
    }

    /// Where the next token will start.
    pub fn position(&self) -> Position {
        self.cursor
    }

    /// Where the most recent token started.
    pub fn mark(&self) -> Position {
        self.mark
    }

    /// Scan the next token, or `None` at the end of the source.
    pub fn token(&mut self) -> Option<Token<'a>> {
        self.mark = self.cursor;
        let start = self.cursor.pos;
        let mut kind: Option<TokenKind> = None;

        while let Some(c) = self.src[self.cursor.pos..].chars().next() {
            let class = TokenKind::of(c);
            let text = &self.src[start..self.cursor.pos];
            let (advance, emit) = match class {
                TokenKind::Symbol => (text.is_empty(), true),
                TokenKind::Ident | TokenKind::Number => {
                    let ends = kind.is_some_and(|k| k != class);
                    (!ends, ends)
                }
                TokenKind::Separator => {
                    let ends = text.chars().next_back().is_some_and(|last| last != c);
                    (!ends, ends)
                }
            };

            if advance {
                self.advance(c);
                kind = Some(class);
            }
            if emit {
                break;
            }
        }

        kind.map(|kind| Token {
            kind,
            text: &self.src[start..self.cursor.pos],
            pos: start,
            line: self.mark.line,
            col: self.mark.col,
        })
    }

    fn advance(&mut self, c: char) {
        self.cursor.pos += c.len_utf8();
        self.cursor.col += 1;
        if c == '\n' {
            self.cursor.line += 1;
            self.cursor.col = 0;
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.token()
    }
}

/// Every token in `src`, in order.
pub fn tokenize(src: &str) -> Vec<Token<'_>> {
    Tokenizer::new(src).collect()
}
