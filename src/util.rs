use crate::error::ErrorReporter;
use crate::source_loc::SourceLoc;

pub fn error(line: u32, message: &str) {
    println!("line {}: Error: {}", line, message);
}

pub fn error_at(source_loc: &SourceLoc, message: &str) {
    println!("[{}] Error: {}", source_loc, message);
}

// Prints every report to the console and remembers whether anything was
// reported.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    pub had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> ConsoleReporter {
        ConsoleReporter::default()
    }
}

impl ErrorReporter for ConsoleReporter {
    fn report(&mut self, line: u32, message: &str) {
        self.had_error = true;
        error(line, message);
    }
}
