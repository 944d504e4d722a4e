//! Argument parsing and exit handling
//!
//! Every failure exits with status 1: usage errors, pre-existing targets and
//! runtime errors alike. `--help` and `--version` exit 0.

use clap::Parser;

/// Exit status for any failure
pub const EXIT_FAILURE: i32 = 1;

/// Parse the process arguments, exiting with [`EXIT_FAILURE`] on usage errors.
///
/// clap exits with 2 on its own, which the tools' callers do not expect.
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { EXIT_FAILURE } else { 0 });
        }
    }
}

/// Report the outcome of a command and exit non-zero on error.
///
/// With `trace` the whole context chain is printed instead of the top-level
/// message.
pub fn finish(result: anyhow::Result<()>, trace: bool) {
    if let Err(e) = result {
        if trace {
            eprintln!("Error: {:?}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(EXIT_FAILURE);
    }
}
