//! Token-stream parsing base.
//!
//! Independent of the collection engine: a small recursive-descent
//! foundation that drives a [`TokenStream`] with bounded lookahead and
//! lookbehind, and keeps two distinct error severities. A failed
//! [`Parser::expect`] is fatal and aborts the parse through `Err`;
//! [`Parser::raise`] records a [`Diagnostic`] and never alters control
//! flow.

use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

/// Line/column pair. A zero position stands in for an empty stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Number,
    Str,
    Punctuator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Number => "number",
            TokenKind::Str => "string",
            TokenKind::Punctuator => "punctuator",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// Source of tokens with a movable read head.
pub trait TokenStream {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Token `offset` positions ahead of the read head, without consuming.
    fn peek(&self, offset: usize) -> Option<&Token>;

    /// Token `offset` positions behind the read head; `peek_back(0)` is
    /// always `None`.
    fn peek_back(&self, offset: usize) -> Option<&Token>;

    /// The most recently consumed token.
    fn previous(&self) -> Option<&Token> {
        self.peek_back(1)
    }

    /// Consume and return the token at the read head.
    fn next(&mut self) -> Option<Token>;
}

/// In-memory stream over an already-lexed token buffer.
pub struct VecStream {
    tokens: Vec<Token>,
    head: usize,
}

impl VecStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, head: 0 }
    }
}

impl TokenStream for VecStream {
    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.head + offset)
    }

    fn peek_back(&self, offset: usize) -> Option<&Token> {
        if offset == 0 || offset > self.head {
            return None;
        }
        self.tokens.get(self.head - offset)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.head).cloned();
        if token.is_some() {
            self.head += 1;
        }
        token
    }
}

/// Fatal parse failure. Raised by [`Parser::expect`] on a mismatch and
/// aborts the parse immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedToken {
        expected: TokenKind,
        found: Option<TokenKind>,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => match found {
                Some(found) => {
                    write!(f, "expected type \"{}\" but received \"{}\"", expected, found)
                }
                None => write!(f, "expected type \"{}\" but received end of input", expected),
            },
        }
    }
}

impl Error for ParseError {}

/// Non-fatal diagnostic recorded by [`Parser::raise`]. Recording one never
/// halts the parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub error: String,
    pub kind: String,
    pub message: String,
    pub span: Span,
}

pub struct Parser<S> {
    stream: S,
    diagnostics: Vec<Diagnostic>,
}

impl<S: TokenStream> Parser<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            diagnostics: Vec::new(),
        }
    }

    /// Run `driver` against this parser and time it. Helper routines take
    /// `&mut Parser` as their first argument, which gives them the same
    /// access to `matches`/`expect`/`raise` a bound method would have.
    pub fn parse<T, F>(&mut self, driver: F) -> Result<(T, Duration), ParseError>
    where
        F: FnOnce(&mut Self) -> Result<T, ParseError>,
    {
        let start = Instant::now();
        let ast = driver(self)?;
        Ok((ast, start.elapsed()))
    }

    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.stream.peek(offset)
    }

    pub fn look_back(&self, offset: usize) -> Option<&Token> {
        self.stream.peek_back(offset)
    }

    pub fn previous(&self) -> Option<&Token> {
        self.stream.previous()
    }

    #[allow(clippy::should_implement_trait)] // consuming step, named after the stream op
    pub fn next(&mut self) -> Option<Token> {
        self.stream.next()
    }

    /// Span of the current token; a zero span for an empty stream; the
    /// previous token's span once the stream is exhausted.
    pub fn location(&self) -> Span {
        if let Some(token) = self.peek(0) {
            token.span
        } else if self.stream.is_empty() {
            Span::default()
        } else {
            self.look_back(1).map(|t| t.span).unwrap_or_default()
        }
    }

    /// Does the lookahead token have this kind (and, if given, this text)?
    /// Never consumes.
    pub fn matches(&self, kind: TokenKind, text: Option<&str>) -> bool {
        match self.peek(0) {
            Some(token) => token.kind == kind && text.map_or(true, |t| token.text == t),
            None => false,
        }
    }

    /// True if any alternative matches the lookahead token.
    pub fn matches_any(&self, alternatives: &[(TokenKind, Option<&str>)]) -> bool {
        alternatives
            .iter()
            .any(|(kind, text)| self.matches(*kind, *text))
    }

    /// Consume the current token if it matches, otherwise fail fatally.
    pub fn expect(&mut self, kind: TokenKind, text: Option<&str>) -> Result<Token, ParseError> {
        if self.matches(kind, text) {
            Ok(self.next().expect("matches implies a current token"))
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind,
                found: self.peek(0).map(|t| t.kind),
            })
        }
    }

    /// Record a diagnostic at the current location and continue.
    pub fn raise(&mut self, message: &str, kind: Option<&str>) {
        let error = match self.peek(0) {
            Some(token) => format!("unexpected token: {}", token.kind),
            None => "unexpected end of input".to_string(),
        };
        let span = self.location();
        self.diagnostics.push(Diagnostic {
            error,
            kind: kind.unwrap_or("ParseError").to_string(),
            message: message.to_string(),
            span,
        });
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
