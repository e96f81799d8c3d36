mod match_cmd;
mod parse_cmd;
mod test_files;
mod to_dfa;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A command-line front end for the `lfa` regex engine: match words against
/// a regex, inspect its parsed syntax tree, run it against files of test
/// words, or convert a loaded NFA text file into an equivalent DFA.
#[derive(Debug, Parser)]
#[command(name = "lfa", version, about)]
pub struct LfaArgs {
    /// Suppress informational messages; only the requested output is printed.
    #[arg(long, global = true)]
    pub no_log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether one or more words fully match a regex.
    Match(MatchArgs),
    /// Parse a regex and print its syntax tree.
    Parse(ParseArgs),
    /// Run a regex against the lines of one or more files.
    TestFiles(TestFilesArgs),
    /// Load an NFA from the text format and print the equivalent DFA.
    ToDfa(ToDfaArgs),
}

#[derive(Debug, clap::Args)]
pub struct MatchArgs {
    /// The regex to compile.
    pub regex: String,
    /// Words to test. If none are given, words are read one per line from stdin.
    pub words: Vec<String>,
}

#[derive(Debug, clap::Args)]
pub struct ParseArgs {
    /// The regex to parse.
    pub regex: String,
}

#[derive(Debug, clap::Args)]
pub struct TestFilesArgs {
    /// The regex every line of every file is checked against.
    pub regex: String,
    /// Files whose lines are checked, one word per line.
    pub files: Vec<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct ToDfaArgs {
    /// Path to a file in the NFA text format (see the library docs).
    pub file: PathBuf,
}

fn main() {
    let args = LfaArgs::parse();

    let result = match &args.command {
        Command::Match(cmd_args) => match_cmd::run(&args, cmd_args),
        Command::Parse(cmd_args) => parse_cmd::run(&args, cmd_args),
        Command::TestFiles(cmd_args) => test_files::run(&args, cmd_args),
        Command::ToDfa(cmd_args) => to_dfa::run(&args, cmd_args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
