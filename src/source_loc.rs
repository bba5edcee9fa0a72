use std::fmt;

use crate::token::Token;

// Location in a source file.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SourceLoc {
    pub line: u32,
    pub column: u16,
}

impl SourceLoc {
    pub fn new(line: u32, column: u16) -> SourceLoc {
        SourceLoc {
            line,
            column,
        }
    }
}

impl Default for SourceLoc {
    fn default() -> SourceLoc {
        SourceLoc {
            line: 1,
            column: 1,
        }
    }
}

impl fmt::Display for SourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl<'a> From<&Token<'a>> for SourceLoc {
    fn from(token: &Token<'a>) -> SourceLoc {
        SourceLoc::new(token.line, token.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;

    #[test]
    fn test_source_loc_from_token() {
        let token = Token::new(TokenType::Comma, ",", None, 7, 12, 80);
        assert_eq!(SourceLoc::from(&token), SourceLoc::new(7, 12));
        assert_eq!(SourceLoc::new(7, 12).to_string(), "7:12");
        assert_eq!(SourceLoc::default(), SourceLoc::new(1, 1));
    }
}
