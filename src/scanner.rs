use std::iter::Peekable;
use std::mem;
use std::str::CharIndices;

use fnv::FnvHashMap;
use unicode_segmentation::GraphemeCursor;

use crate::error::*;
use crate::source_loc::*;
use crate::token::*;

lazy_static! {
    static ref KEYWORDS: FnvHashMap<&'static str, TokenType> = {
        let mut m = FnvHashMap::default();
        use crate::token::TokenType::*;
        m.insert("and", And);
        m.insert("class", Class);
        m.insert("else", Else);
        m.insert("false", False);
        m.insert("for", For);
        m.insert("fun", Fun);
        m.insert("if", If);
        m.insert("nil", Nil);
        m.insert("or", Or);
        m.insert("print", Print);
        m.insert("return", Return);
        m.insert("super", Super);
        m.insert("this", This);
        m.insert("true", True);
        m.insert("var", Var);
        m.insert("while", While);

        m
    };
}

/// Scans a complete source string.  Every lexical error is handed to the
/// reporter in source order; the returned tokens always end with `Eof`.
pub fn scan<'source, R>(source: &'source str, reporter: &mut R) -> Vec<Token<'source>>
    where R: ErrorReporter + ?Sized
{
    Scanner::new(source).scan_tokens_reporting(reporter)
}

#[derive(Clone)]
pub struct Scanner<'source> {
    source: &'source str,
    tokens: Vec<Token<'source>>,
    errors: Vec<ScanErrorCause>,
    char_indices: Peekable<CharIndices<'source>>,
    start: usize,
    line: u32,
    // Columns count grapheme clusters, so an accented letter is one column
    // even when it's several chars.  This is the column of the next cluster.
    column: u16,
    start_column: u16,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Scanner<'source> {
        Scanner {
            source,
            char_indices: source.char_indices().peekable(),
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            line: 1,
            column: 1,
            start_column: 1,
        }
    }

    pub fn scan_tokens(&mut self) -> Result<Vec<Token<'source>>, ScanError<'source>> {
        let (tokens, errors) = self.scan_all();

        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(ScanError::new(errors, tokens))
        }
    }

    pub fn scan_tokens_reporting<R>(&mut self, reporter: &mut R) -> Vec<Token<'source>>
        where R: ErrorReporter + ?Sized
    {
        let (tokens, errors) = self.scan_all();
        for cause in errors.iter() {
            reporter.report(cause.source_loc.line, &cause.message);
        }

        tokens
    }

    fn scan_all(&mut self) -> (Vec<Token<'source>>, Vec<ScanErrorCause>) {
        while ! self.is_at_end() {
            self.scan_token();
        }

        self.start = self.peek_index();
        self.start_column = self.column;
        self.add_token(TokenType::Eof);

        let tokens = mem::take(&mut self.tokens);
        let errors = mem::take(&mut self.errors);

        (tokens, errors)
    }

    fn scan_token(&mut self) {
        // We are at the beginning of the next lexeme.
        self.start = self.peek_index();
        self.start_column = self.column;

        let c = match self.advance() {
            None => return,
            Some(c) => c,
        };

        use crate::token::TokenType::*;
        match c {
            '(' => self.add_token(LeftParen),
            ')' => self.add_token(RightParen),
            '{' => self.add_token(LeftBrace),
            '}' => self.add_token(RightBrace),
            ',' => self.add_token(Comma),
            '.' => self.add_token(Dot),
            '-' => self.add_token(Minus),
            '+' => self.add_token(Plus),
            ';' => self.add_token(Semicolon),
            '*' => self.add_token(Star),
            '!' => {
                let token_type = if self.matches('=') { BangEqual } else { Bang };
                self.add_token(token_type);
            }
            '=' => {
                let token_type = if self.matches('=') { EqualEqual } else { Equal };
                self.add_token(token_type);
            }
            '<' => {
                let token_type = if self.matches('=') { LessEqual } else { Less };
                self.add_token(token_type);
            }
            '>' => {
                let token_type = if self.matches('=') { GreaterEqual } else { Greater };
                self.add_token(token_type);
            }
            '/' => {
                if self.matches('/') {
                    // A comment until the end of the line.
                    self.advance_to_eol();
                } else {
                    self.add_token(Slash);
                }
            }
            ' ' | '\r' | '\t' => (), // Ignore whitespace.
            '\n' => self.newline(),
            '"' => self.scan_string(),
            c if is_digit(c) => self.scan_number(),
            c if c.is_alphabetic() => self.scan_identifier(),
            c => {
                let loc = SourceLoc::new(self.line, self.start_column);
                self.error(ScanErrorCause::new(loc, &format!("Unexpected character: {}", c)));
            }
        };
    }

    // Conditionally advance if the next char matches an expected one.
    // Returns true if we matched.
    fn matches(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }

        self.advance();

        true
    }

    fn peek(&mut self) -> Option<char> {
        self.char_indices.peek().map(|&(_, c)| c)
    }

    // This is looking ahead 2 chars.
    fn peek_next(&mut self) -> Option<char> {
        if self.is_at_end() {
            return None;
        }

        let mut cloned = self.char_indices.clone();
        cloned.next();

        cloned.next().map(|(_, c)| c)
    }

    // Byte offset of the next char.
    fn peek_index(&mut self) -> usize {
        match self.char_indices.peek() {
            None => self.source.len(),
            Some((i, _)) => *i,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let (i, c) = self.char_indices.next()?;

        // Only a finished grapheme cluster moves the column.
        if self.is_grapheme_boundary(i + c.len_utf8()) {
            self.column = self.column.saturating_add(1);
        }

        Some(c)
    }

    fn is_grapheme_boundary(&self, offset: usize) -> bool {
        let mut cursor = GraphemeCursor::new(offset, self.source.len(), true);

        // The whole source is one chunk, so no more context can be asked for.
        cursor.is_boundary(self.source, 0).unwrap_or(true)
    }

    fn advance_while(&mut self, predicate: fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if ! predicate(c) {
                break;
            }
            self.advance();
        }
    }

    fn advance_to_eol(&mut self) {
        // Keep the newline next so the main loop counts it.
        self.advance_while(|c| c != '\n');
    }

    fn newline(&mut self) {
        self.line = self.line.saturating_add(1);
        self.column = 1;
    }

    fn scan_string(&mut self) {
        let value_start = self.peek_index();

        loop {
            match self.peek() {
                None => {
                    let loc = SourceLoc::new(self.line, self.column);
                    self.error(ScanErrorCause::new(loc, "Unterminated string"));
                    return;
                }
                Some('"') => break,
                Some(c) => {
                    self.advance();
                    if c == '\n' {
                        self.newline();
                    }
                }
            };
        }

        // Trim the surrounding quotes.
        let value = &self.source[value_start..self.peek_index()];

        // The closing quote.
        self.advance();

        self.add_literal_token(TokenType::String, value);
    }

    fn scan_number(&mut self) {
        self.advance_while(is_digit);

        // Look for a fractional part.  A dot without a digit after it is
        // left for the next token.
        if self.peek() == Some('.') && self.peek_next().map_or(false, is_digit) {
            // Consume the dot.
            self.advance();
            self.advance_while(is_digit);
        }

        // Converting to a number is left to whoever consumes the token.
        let text = self.current_lexeme();
        self.add_literal_token(TokenType::Number, text);
    }

    fn scan_identifier(&mut self) {
        self.advance_while(char::is_alphanumeric);

        let text = self.current_lexeme();

        // See if the identifier is a reserved word.
        let token_type = match KEYWORDS.get(text) {
            None => TokenType::Identifier,
            Some(token_type) => *token_type,
        };

        self.add_literal_token(token_type, text);
    }

    fn is_at_end(&mut self) -> bool {
        self.char_indices.peek().is_none()
    }

    fn current_lexeme(&mut self) -> &'source str {
        let end = self.peek_index();

        &self.source[self.start..end]
    }

    fn error(&mut self, error: ScanErrorCause) {
        self.errors.push(error);
    }

    // Add a token to the output.
    fn add_token(&mut self, token_type: TokenType) {
        self.push_token(token_type, None);
    }

    fn add_literal_token(&mut self, token_type: TokenType, literal: &'source str) {
        self.push_token(token_type, Some(literal));
    }

    fn push_token(&mut self, token_type: TokenType, literal: Option<&'source str>) {
        let text = self.current_lexeme();
        let token = Token::new(token_type, text, literal, self.line, self.start_column, self.start);

        #[cfg(feature = "debug-trace-scan")]
        eprintln!("{:>4}:{:<4} {}", token.line, token.column, token);

        self.tokens.push(token);
    }
}

// Note: built-in is_numeric() uses a more complicated unicode definition of
// numeric.
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
