use anyhow::{Context, Result, bail};
use argh::FromArgs;
use std::process::Command;
use std::time::Instant;

#[derive(FromArgs)]
/// Run a command and report its wall-clock duration.
struct Options {
    #[argh(positional, greedy)]
    /// command to run, with its arguments
    command: Vec<String>,
}

fn main() -> Result<()> {
    let options: Options = argh::from_env();
    let (program, args) = match options.command.split_first() {
        Some(pair) => pair,
        None => bail!("no command given"),
    };

    let started = Instant::now();
    Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("can't run {}", program))?;
    let elapsed = started.elapsed();

    println!("Elapsed time: {:.5} seconds", elapsed.as_secs_f64());
    Ok(())
}
