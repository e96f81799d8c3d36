use crate::{LfaArgs, MatchArgs};
use lfa::regex::Regex;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0:?} is not a valid regular expression: {1}")]
    Regex(String, String),
    #[error("could not read a word from stdin: {0}")]
    Stdin(io::Error),
}

pub fn run(main_args: &LfaArgs, args: &MatchArgs) -> Result<(), Error> {
    let log = |s: &str| {
        if !main_args.no_log {
            println!("{s}");
        }
    };
    macro_rules! log {
        ($($t:tt)*) => (log(&format!($($t)*)))
    }

    let regex = Regex::new(&args.regex).map_err(|e| Error::Regex(args.regex.clone(), e.to_string()))?;
    log!("Compiled {:?} into a {}-state automaton", args.regex, regex.nfa().len());

    if args.words.is_empty() {
        log!("No words given, reading one per line from stdin:");
        for line in io::stdin().lock().lines() {
            let word = line.map_err(Error::Stdin)?;
            report(&regex, &word);
        }
    } else {
        for word in &args.words {
            report(&regex, word);
        }
    }

    Ok(())
}

fn report(regex: &Regex, word: &str) {
    if regex.eval(word) {
        println!("[ OK ] {word}");
    } else {
        println!("[FAIL] {word}");
    }
}
