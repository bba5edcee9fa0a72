use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TokenType {
    // Single-character tokens.
    LeftParen, RightParen, LeftBrace, RightBrace,
    Comma, Dot, Minus, Plus, Semicolon, Slash, Star,

    // One or two character tokens.
    Bang, BangEqual,
    Equal, EqualEqual,
    Greater, GreaterEqual,
    Less, LessEqual,

    // Literals.
    Identifier, String, Number,

    // Keywords.
    And, Class, Else, False, Fun, For, If, Nil, Or,
    Print, Return, Super, This, True, Var, While,

    Eof,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'a> {
    pub token_type: TokenType,
    pub lexeme: &'a str,
    // Raw text: string contents without quotes, the numeral for numbers, the
    // name for identifiers and keywords.
    pub literal: Option<&'a str>,
    pub line: u32,
    pub column: u16,
    // Byte offset of the lexeme in the source.
    pub offset: usize,
}

impl<'a> Token<'a> {
    pub fn new(token_type: TokenType,
               lexeme: &'a str,
               literal: Option<&'a str>,
               line: u32,
               column: u16,
               offset: usize)
        -> Token<'a>
    {
        Token {
            token_type,
            lexeme,
            literal,
            line,
            column,
            offset,
        }
    }

    // One past the last byte of the lexeme.
    pub fn end_offset(&self) -> usize {
        self.offset + self.lexeme.len()
    }

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::Eof
    }
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "type:{:?} lexeme:{} literal:", self.token_type, self.lexeme)?;
        match self.literal {
            None => write!(f, "None")?,
            Some(literal) => write!(f, "{}", literal)?,
        };
        write!(f, " line:{}", self.line)
    }
}
