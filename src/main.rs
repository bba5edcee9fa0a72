use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::process;

use argparse::{ArgumentParser, Print, Store};

use lox_scanner::error::ScanError;
use lox_scanner::scanner::{self, Scanner};
use lox_scanner::token::Token;
use lox_scanner::util::{self, ConsoleReporter};

enum RunError {
    RunIoError(io::Error),
    RunScanError,
}

fn main() {
    let mut script_filename = "".to_string();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Lox language scanner");
        ap.add_option(
            &["--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );
        ap.refer(&mut script_filename)
            .add_argument("script_filename", Store,
                          "Lox file to scan.  Omit to scan lines from an interactive prompt.");
        ap.parse_args_or_exit();
    }
    if ! script_filename.is_empty() {
        let run_result = run_file(&script_filename);

        match run_result {
            Ok(_) => (),
            Err(RunError::RunIoError(error)) => {
                eprintln!("unable to read {}: {}", script_filename, error);
                process::exit(66);
            }
            Err(RunError::RunScanError) => process::exit(65),
        }
    }
    else {
        run_prompt();
    }
}

fn run_prompt() {
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().expect("run_prompt: unable to flush stdout");

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            // End of input.
            Ok(0) => break,
            Ok(_) => {
                if ! input.trim().is_empty() {
                    run_line(&input);
                }
            }
            Err(error) => {
                println!("Error reading stdin: {:?}", error);
                break;
            }
        }
    }
}

// Each line is scanned on its own.  Errors are printed as they are reported
// and don't end the session.
fn run_line(source: &str) {
    let mut reporter = ConsoleReporter::new();
    let tokens = scanner::scan(source, &mut reporter);
    print_tokens(&tokens);
}

fn run_file(file_path: &str) -> Result<(), RunError> {
    let mut file = File::open(file_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let mut scanner = Scanner::new(&contents);
    match scanner.scan_tokens() {
        Ok(tokens) => {
            print_tokens(&tokens);

            Ok(())
        }
        Err(err) => {
            print_scan_error(&err);

            Err(RunError::RunScanError)
        }
    }
}

fn print_scan_error(err: &ScanError) {
    print_tokens(&err.tokens);
    // Print all causes.
    for cause in err.causes.iter() {
        util::error_at(&cause.source_loc, &cause.message);
    }
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens.iter() {
        println!("{}", token);
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> RunError {
        RunError::RunIoError(err)
    }
}
