//! The read and dispatch loop.

use crate::env::Environment;
use crate::parser::{self, Segment};
use crate::{builtin, external, lexer, report_error};
use anyhow::Result;
use log::debug;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::BufRead;
use std::process::Child;

const PROMPT: &str = "wish> ";

/// Drives a session: reads lines, parses them, dispatches each command
/// and reaps the background commands the line leaves behind.
///
/// All interpreter state lives in the owned [`Environment`]; the only
/// process-wide state touched is the working directory.
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Runs a prompted session on the terminal.
    ///
    /// Every line is offered to the in-session history before it runs.
    /// Any read failure, end-of-file and Ctrl-C included, returns to a
    /// fresh prompt; the session only ends through the `exit` command.
    pub fn run_interactive(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()?;
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    self.run_line(&line);
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => continue,
                Err(err) => debug!("readline failed: {}", err),
            }
        }
    }

    /// Runs every line from `reader` without prompting.
    ///
    /// End of input ends the session; a read failure is reported and ends
    /// it too.
    pub fn run_script<R: BufRead>(&mut self, reader: R) -> Result<()> {
        for line in reader.lines() {
            match line {
                Ok(line) => self.run_line(&line),
                Err(err) => {
                    debug!("reading input failed: {}", err);
                    report_error();
                    break;
                }
            }
        }
        Ok(())
    }

    /// One pass of the loop: tokenize, split, dispatch, then wait for the
    /// line's background commands.
    fn run_line(&mut self, line: &str) {
        let tokens = lexer::split_into_tokens(line);
        if tokens.is_empty() {
            return;
        }

        let mut jobs: Vec<Child> = Vec::new();
        for parsed in parser::parse_line(&tokens) {
            match parsed {
                Ok(segment) => match self.run_segment(&segment) {
                    Ok(Some(child)) => jobs.push(child),
                    Ok(None) => {}
                    Err(err) => {
                        debug!("{:#}", err);
                        report_error();
                    }
                },
                Err(err) => {
                    debug!("parse error: {:?}", err);
                    report_error();
                }
            }
        }

        for mut job in jobs {
            if let Err(err) = job.wait() {
                debug!("waiting for pid {} failed: {}", job.id(), err);
            }
        }
    }

    /// Builtins are checked first; everything else goes through the
    /// search path. Only an external background command yields a child.
    fn run_segment(&mut self, segment: &Segment) -> Result<Option<Child>> {
        if let Some(result) = builtin::dispatch(segment, &mut self.env) {
            return result.map(|_| None);
        }
        external::launch(&self.env, segment)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
