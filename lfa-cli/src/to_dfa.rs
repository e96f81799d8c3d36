use crate::{LfaArgs, ToDfaArgs};
use lfa::automaton::parse::AutomatonLoadError;
use lfa::automaton::{Automaton, AutomatonError};
use std::fs;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {0}: {1}")]
    File(std::path::PathBuf, io::Error),
    #[error("could not parse {0} as an NFA: {1}")]
    Parse(std::path::PathBuf, AutomatonLoadError),
    #[error("could not convert {0} to a DFA: {1}")]
    Convert(std::path::PathBuf, AutomatonError),
}

pub fn run(main_args: &LfaArgs, args: &ToDfaArgs) -> Result<(), Error> {
    let log = |s: &str| {
        if !main_args.no_log {
            println!("{s}");
        }
    };
    macro_rules! log {
        ($($t:tt)*) => (log(&format!($($t)*)))
    }

    let contents = fs::read_to_string(&args.file).map_err(|e| Error::File(args.file.clone(), e))?;
    let nfa = Automaton::load_from(&contents).map_err(|e| Error::Parse(args.file.clone(), e))?;
    log!("Loaded a {}-state NFA from {}", nfa.len(), args.file.display());

    let dfa = nfa.to_dfa().map_err(|e| Error::Convert(args.file.clone(), e))?;
    log!("Converted to a {}-state DFA via the subset construction:", dfa.len());
    println!("{}", dfa.to_text());

    Ok(())
}
