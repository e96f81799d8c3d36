//! Parsing for the NFA text format: a header describing state ids, then a
//! transition list, then the initial state and the terminal states. This is
//! the optional loader mentioned alongside [`super::Automaton`]. A file may
//! carry a test-word list after the terminal states, which this parser
//! deliberately leaves unconsumed for the caller to deal with.

use super::Automaton;
use nom::character::complete::{digit1, multispace0};
use nom::combinator::map_res;
use nom::multi::count;
use nom::sequence::preceded;
use nom::{Finish, IResult};
use std::collections::HashSet;
use thiserror::Error;

/// An error raised while loading an [`Automaton`] from the text format.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AutomatonLoadError {
    #[error("malformed NFA description: {0}")]
    Malformed(String),
    #[error("state '{0}' is used in a transition but was never declared")]
    UnknownState(usize),
    #[error("state '{0}' declared multiple times")]
    DuplicateStateDefinition(usize),
    #[error("initial state '{0}' was never declared")]
    MissingInitialState(usize),
}

struct RawNfa {
    states: Vec<usize>,
    transitions: Vec<(usize, usize, u8)>,
    init: usize,
    terminals: Vec<usize>,
}

fn number(input: &str) -> IResult<&str, usize> {
    preceded(multispace0, map_res(digit1, str::parse))(input)
}

fn token_char(input: &str) -> IResult<&str, u8> {
    let (input, _) = multispace0(input)?;
    let mut chars = input.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii() => {
            let rest_start = chars.next().map(|(i, _)| i).unwrap_or(input.len());
            Ok((&input[rest_start..], c as u8))
        }
        _ => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        ))),
    }
}

fn transition(input: &str) -> IResult<&str, (usize, usize, u8)> {
    let (input, src) = number(input)?;
    let (input, dst) = number(input)?;
    let (input, c) = token_char(input)?;
    Ok((input, (src, dst, c)))
}

fn nfa_body(input: &str) -> IResult<&str, RawNfa> {
    let (input, n) = number(input)?;
    let (input, states) = count(number, n)(input)?;
    let (input, m) = number(input)?;
    let (input, transitions) = count(transition, m)(input)?;
    let (input, init) = number(input)?;
    let (input, k) = number(input)?;
    let (input, terminals) = count(number, k)(input)?;
    Ok((
        input,
        RawNfa {
            states,
            transitions,
            init,
            terminals,
        },
    ))
}

impl Automaton {
    /// Loads an automaton from the NFA text format described in the library
    /// docs. Any content following the terminal-state list (such as a list
    /// of test words) is left unparsed.
    pub fn load_from(input: &str) -> Result<Automaton, AutomatonLoadError> {
        let (_, raw) = nfa_body(input)
            .finish()
            .map_err(|e: nom::error::Error<&str>| AutomatonLoadError::Malformed(e.to_string()))?;
        raw.try_into()
    }
}

impl TryFrom<RawNfa> for Automaton {
    type Error = AutomatonLoadError;

    fn try_from(raw: RawNfa) -> Result<Self, Self::Error> {
        let RawNfa {
            states,
            transitions,
            init,
            terminals,
        } = raw;

        let mut declared = HashSet::with_capacity(states.len());
        for &state in &states {
            if !declared.insert(state) {
                return Err(AutomatonLoadError::DuplicateStateDefinition(state));
            }
        }

        if !declared.contains(&init) {
            return Err(AutomatonLoadError::MissingInitialState(init));
        }

        let mut automaton = Automaton::new();
        for &state in &states {
            automaton.insert_node(state);
        }
        for (src, dst, c) in transitions {
            if !declared.contains(&src) {
                return Err(AutomatonLoadError::UnknownState(src));
            }
            if !declared.contains(&dst) {
                return Err(AutomatonLoadError::UnknownState(dst));
            }
            automaton.insert_edge(dst, src, c);
        }
        automaton.set_init(init);
        for terminal in terminals {
            if !declared.contains(&terminal) {
                return Err(AutomatonLoadError::UnknownState(terminal));
            }
            automaton.mark_terminal(terminal);
        }

        Ok(automaton)
    }
}
