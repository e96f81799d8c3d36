use crate::{LfaArgs, TestFilesArgs};
use lfa::regex::Regex;
use std::fs;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0:?} is not a valid regular expression: {1}")]
    Regex(String, String),
    #[error("could not read {0}: {1}")]
    File(std::path::PathBuf, io::Error),
}

pub fn run(main_args: &LfaArgs, args: &TestFilesArgs) -> Result<(), Error> {
    let log = |s: &str| {
        if !main_args.no_log {
            println!("{s}");
        }
    };
    macro_rules! log {
        ($($t:tt)*) => (log(&format!($($t)*)))
    }

    let regex = Regex::new(&args.regex).map_err(|e| Error::Regex(args.regex.clone(), e.to_string()))?;

    for path in &args.files {
        let contents = fs::read_to_string(path).map_err(|e| Error::File(path.clone(), e))?;
        println!("Testing file {}:", path.display());
        let mut total = 0;
        let mut passed = 0;
        for line in contents.lines() {
            total += 1;
            let accepted = regex.eval(line);
            if accepted {
                passed += 1;
            }
            println!("{} {line}", if accepted { "[ OK ]" } else { "[FAIL]" });
        }
        log!("{passed}/{total} lines passed in file {}", path.display());
    }

    Ok(())
}
