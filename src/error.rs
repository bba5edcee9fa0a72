use crate::source_loc::*;
use crate::token::Token;

/// Returned by `Scanner::scan_tokens` when at least one lexical error was
/// found.  Scanning never stops early, so the tokens recovered around the
/// errors are kept alongside the causes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanError<'a> {
    pub causes: Vec<ScanErrorCause>,
    pub tokens: Vec<Token<'a>>,
}

impl<'a> ScanError<'a> {
    pub fn new(causes: Vec<ScanErrorCause>, tokens: Vec<Token<'a>>) -> ScanError<'a> {
        ScanError {
            causes,
            tokens,
        }
    }

    pub fn message(&self) -> String {
        match self.causes.first() {
            None => "unknown cause".to_string(),
            Some(err) => err.message.to_string(),
        }
    }

    pub fn source_loc(&self) -> SourceLoc {
        match self.causes.first() {
            None => SourceLoc::default(),
            Some(err) => err.source_loc,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanErrorCause {
    pub source_loc: SourceLoc,
    pub message: String,
}

impl ScanErrorCause {
    pub fn new(source_loc: SourceLoc, message: &str) -> ScanErrorCause {
        ScanErrorCause {
            source_loc,
            message: message.to_string(),
        }
    }
}

/// Sink for lexical errors.  It decides how errors are presented; the
/// scanner only says where and what.
pub trait ErrorReporter {
    fn report(&mut self, line: u32, message: &str);
}

impl<F> ErrorReporter for F where F: FnMut(u32, &str) {
    fn report(&mut self, line: u32, message: &str) {
        self(line, message)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_without_causes() {
        let error = ScanError::new(Vec::new(), Vec::new());
        assert_eq!(error.message(), "unknown cause");
        assert_eq!(error.source_loc(), SourceLoc::default());
    }

    #[test]
    fn test_scan_error_first_cause() {
        let causes = vec![ScanErrorCause::new(SourceLoc::new(2, 3), "Unexpected character: #"),
                          ScanErrorCause::new(SourceLoc::new(4, 1), "Unterminated string")];
        let error = ScanError::new(causes, Vec::new());
        assert_eq!(error.message(), "Unexpected character: #");
        assert_eq!(error.source_loc(), SourceLoc::new(2, 3));
    }
}
