use anyhow::{Context, Result, bail};
use argh::FromArgs;
use log::debug;
use std::fs::File;
use std::io::{BufReader, IsTerminal};
use wish::{Interpreter, report_error};

#[derive(FromArgs)]
/// A minimal command interpreter.
///
/// With no arguments it runs interactively when standard input is a
/// terminal and otherwise consumes standard input as a script. With file
/// arguments it runs the first file; any further arguments must name the
/// very same file.
struct Options {
    #[argh(positional, greedy)]
    /// script to run; repeated paths must all point at one file
    scripts: Vec<String>,
}

fn main() {
    env_logger::init();
    let options: Options = argh::from_env();

    if let Err(err) = run(&options) {
        debug!("{:#}", err);
        report_error();
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<()> {
    let mut interpreter = Interpreter::new();
    match open_script(&options.scripts)? {
        Some(script) => interpreter.run_script(BufReader::new(script)),
        None if std::io::stdin().is_terminal() => interpreter.run_interactive(),
        None => interpreter.run_script(std::io::stdin().lock()),
    }
}

/// Opens the script named on the command line, if any.
///
/// Several paths are accepted only when they all refer to the same file,
/// by device and inode; the script still runs once.
fn open_script(paths: &[String]) -> Result<Option<File>> {
    let (first, rest) = match paths.split_first() {
        Some(pair) => pair,
        None => return Ok(None),
    };

    let script = File::open(first).with_context(|| format!("can't open script {}", first))?;
    let identity = script
        .metadata()
        .with_context(|| format!("can't stat script {}", first))?;

    for other in rest {
        let metadata =
            std::fs::metadata(other).with_context(|| format!("can't stat script {}", other))?;
        if !same_file(&identity, &metadata) {
            bail!("scripts {} and {} are different files", first, other);
        }
    }

    Ok(Some(script))
}

#[cfg(unix)]
fn same_file(a: &std::fs::Metadata, b: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    a.dev() == b.dev() && a.ino() == b.ino()
}

#[cfg(not(unix))]
fn same_file(_a: &std::fs::Metadata, _b: &std::fs::Metadata) -> bool {
    false
}
