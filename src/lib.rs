//! A small command interpreter built around a replaceable search path.
//!
//! The crate is split along the stages of the interpreter loop: [`lexer`]
//! turns a line of input into tokens, [`parser`] groups the tokens into
//! commands and validates output redirection, and [`Interpreter`] drives
//! dispatch, either to a built-in command or to an external program found
//! through the search path kept in [`env::Environment`].
//!
//! Every failure, from a malformed line to a command that cannot be
//! launched, is reported to standard error as the same fixed message and
//! the session keeps going.

mod builtin;
pub mod env;
mod external;
mod interpreter;
pub mod lexer;
pub mod parser;

/// Just a convenient re-export of the interpreter loop.
///
/// See [`Interpreter`] for the session entry points.
pub use interpreter::Interpreter;

use std::io::Write;

/// The one diagnostic ever shown to the user, whatever the cause.
pub const ERROR_MESSAGE: &str = "An error has occurred\n";

/// Prints [`ERROR_MESSAGE`] to standard error.
///
/// A failure to write it is ignored; there is nowhere left to report to.
pub fn report_error() {
    let _ = std::io::stderr().write_all(ERROR_MESSAGE.as_bytes());
}
