//! # lfa
//!
//! `lfa` is a regular-expression matcher built from first principles: a
//! hand-written LL(1) parser turns an expression into a flat [`tree::SyntaxTree`],
//! Thompson's construction ([`automaton::Automaton::union`], [`automaton::Automaton::concat`],
//! [`automaton::Automaton::star`]) compiles that tree into a λ-NFA by structural
//! recursion, and an iterative depth-first simulator decides full-match
//! acceptance. A λ-free automaton can additionally be converted into an
//! equivalent DFA via the subset construction ([`automaton::Automaton::to_dfa`]).
//!
//! ## Usage
//!
//! ```rust
//! use lfa::regex::Regex;
//!
//! let re = Regex::new("ab(cd|ef)*").unwrap();
//! assert!(re.eval("abcdefefcdefef"));
//! assert!(re.eval("abcdef"));
//! assert!(!re.eval("abz"));
//! ```
//!
//! ## Dialect
//!
//! Literals (any byte other than `*|()-`), grouping `(...)`, alternation `|`,
//! Kleene star `*`, and implicit concatenation. The dash `-` is reserved as
//! the ε-marker at the automaton layer and should not appear in regex input.
//! No capture groups, backreferences, anchors, character classes, counted
//! repetition (`{m,n}`), lazy/greedy distinctions, or partial/searching
//! matches: matching is always full-string.
//!
//! ## Operations
//!
//! * [Parsing](parser::parse) an expression into a [`tree::SyntaxTree`]
//! * Compiling a tree into a λ-NFA via [`regex::Regex::new`], which drives the
//!   combinators in [`automaton`]
//! * Checking full-match acceptance with [`regex::Regex::eval`]
//! * Converting a λ-free [`automaton::Automaton`] to an equivalent DFA with
//!   [`automaton::Automaton::to_dfa`]
//! * [Loading](automaton::parse) an automaton from the NFA text format

pub mod automaton;
pub mod parser;
pub mod regex;
pub mod tree;
