//! Commands handled inside the interpreter process.

use crate::env::Environment;
use crate::parser::Segment;
use anyhow::{Context, Result, bail};
use log::debug;

/// A command executed in-process instead of being spawned.
pub(crate) trait BuiltinCommand: Sync {
    /// Canonical name of the command, e.g. "cd".
    fn name(&self) -> &'static str;

    /// Executes the command against the interpreter state.
    fn run(&self, args: &[String], env: &mut Environment) -> Result<()>;
}

static BUILTINS: [&dyn BuiltinCommand; 3] = [&Exit, &Cd, &SetPath];

/// Runs `segment` as a builtin, if its command name is one.
///
/// Returns `None` when the name is not a builtin so the caller can fall
/// through to the search path. A builtin combined with `>` is refused
/// without running it.
pub(crate) fn dispatch(segment: &Segment, env: &mut Environment) -> Option<Result<()>> {
    let name = segment.argv.first()?.as_str();
    let builtin = BUILTINS.iter().find(|b| b.name() == name)?;
    if segment.redirect.is_some() {
        return Some(Err(anyhow::anyhow!("cannot redirect builtin {}", name)));
    }
    Some(builtin.run(&segment.argv[1..], env))
}

/// Terminate the interpreter. Takes no arguments.
struct Exit;

impl BuiltinCommand for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn run(&self, args: &[String], _env: &mut Environment) -> Result<()> {
        if !args.is_empty() {
            bail!("exit takes no arguments");
        }
        debug!("exit requested");
        std::process::exit(0)
    }
}

/// Change the working directory. Takes exactly one argument.
struct Cd;

impl BuiltinCommand for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn run(&self, args: &[String], env: &mut Environment) -> Result<()> {
        if args.len() != 1 {
            bail!("cd takes exactly one argument");
        }
        let target = &args[0];
        std::env::set_current_dir(target)
            .with_context(|| format!("cd: can't chdir to {}", target))?;
        env.current_dir = std::env::current_dir().context("cd: can't read the new directory")?;
        Ok(())
    }
}

/// Replace the search path with the arguments, which may be none.
struct SetPath;

impl BuiltinCommand for SetPath {
    fn name(&self) -> &'static str {
        "path"
    }

    fn run(&self, args: &[String], env: &mut Environment) -> Result<()> {
        env.replace_search_path(args.to_vec());
        Ok(())
    }
}
