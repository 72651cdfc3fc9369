//! Launching commands found through the search path.

use crate::env::Environment;
use crate::parser::Segment;
use anyhow::{Context, Result, bail};
use log::debug;
use std::fs::OpenOptions;
use std::process::{Child, Command, Stdio};

/// Spawns the command a segment describes.
///
/// The command name is resolved through the environment's search path;
/// there is no fallback. With `> file` on the segment, the file is
/// created or truncated with mode 0644 before the child is spawned and
/// becomes its stdout. A foreground command is waited for, its exit
/// status discarded, and `None` is returned; a background command's
/// handle is returned for the caller to reap.
pub(crate) fn launch(env: &Environment, segment: &Segment) -> Result<Option<Child>> {
    let (name, args) = match segment.argv.split_first() {
        Some(pair) => pair,
        None => bail!("empty command"),
    };
    let executable = match env.resolve(name) {
        Some(path) => path,
        None => bail!("command not found: {}", name),
    };

    let mut command = Command::new(&executable);
    command.args(args).current_dir(&env.current_dir);
    set_argv0(&mut command, name);

    if let Some(target) = &segment.redirect {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let file = options
            .open(target)
            .with_context(|| format!("can't open redirect target {}", target))?;
        command.stdout(Stdio::from(file));
    }

    let mut child = command
        .spawn()
        .with_context(|| format!("can't spawn {}", executable.display()))?;
    debug!("spawned {} as pid {}", name, child.id());

    if segment.background {
        return Ok(Some(child));
    }
    child
        .wait()
        .with_context(|| format!("can't wait for {}", name))?;
    Ok(None)
}

/// The child keeps seeing the name it was invoked with, not the resolved
/// path.
#[cfg(unix)]
fn set_argv0(command: &mut Command, name: &str) {
    use std::os::unix::process::CommandExt;
    command.arg0(name);
}

#[cfg(not(unix))]
fn set_argv0(_command: &mut Command, _name: &str) {}
