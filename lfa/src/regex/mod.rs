//! The top-level facade: owns an expression string, parses it, compiles the
//! resulting syntax tree into a λ-NFA via Thompson's construction, and
//! answers full-match queries against it.
//!
//! ```
//! use lfa::regex::Regex;
//!
//! let re = Regex::new("ab(cd|ef)*").unwrap();
//! assert!(re.eval("abcdefefcdefef"));
//! assert!(!re.eval("abz"));
//! ```

use crate::automaton::Automaton;
use crate::parser::{self, ParseError};
use crate::tree::{NodeType, SyntaxTree};

/// A compiled regular expression: the source text, its syntax tree, and the
/// λ-NFA built from it. `eval` is full-match only (§6): the entire word must
/// be consumed at a terminal state.
#[derive(Debug, Clone)]
pub struct Regex {
    expression: String,
    tree: SyntaxTree,
    nfa: Automaton,
}

impl Regex {
    /// Parses `expr` and compiles it into a λ-NFA.
    pub fn new(expr: &str) -> Result<Regex, ParseError> {
        let tree = parser::parse(expr)?;
        let nfa = build_nfa(&tree);
        Ok(Regex {
            expression: expr.to_string(),
            tree,
            nfa,
        })
    }

    /// Re-parses `expr` and rebuilds both the syntax tree and the λ-NFA,
    /// replacing this regex's previous expression in place.
    pub fn set_expression(&mut self, expr: &str) -> Result<(), ParseError> {
        let tree = parser::parse(expr)?;
        let nfa = build_nfa(&tree);
        self.expression = expr.to_string();
        self.tree = tree;
        self.nfa = nfa;
        Ok(())
    }

    /// The expression this regex was last built from.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The syntax tree this regex was compiled from.
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// The compiled λ-NFA.
    pub fn nfa(&self) -> &Automaton {
        &self.nfa
    }

    /// True iff `word` is fully consumed by a run ending in a terminal state.
    pub fn eval(&self, word: &str) -> bool {
        self.nfa.accept(word.as_bytes())
    }
}

/// One stack entry in the explicit post-order walk: a tree node to visit,
/// plus whether its children have already been pushed (`emit`). Pushing a
/// node twice (once to expand its children, once to emit its own NFA once
/// they're on the automaton stack) is what lets this run without recursion.
struct Frame {
    node: usize,
    emit: bool,
}

/// Walks `tree` post-order with an explicit work stack and combines the
/// per-node automata with the Thompson combinators of [`crate::automaton`].
fn build_nfa(tree: &SyntaxTree) -> Automaton {
    let mut work = vec![Frame {
        node: tree.root_index(),
        emit: false,
    }];
    let mut automata: Vec<Automaton> = Vec::new();

    while let Some(frame) = work.pop() {
        let node = tree.node(frame.node);

        if !frame.emit {
            work.push(Frame {
                node: frame.node,
                emit: true,
            });
            // Push in reverse so the first (leftmost) child ends up on top
            // of the work stack and is therefore fully emitted first; its
            // automaton then sits *below* later siblings' on the automata
            // stack, matching the pop order the combinators below expect.
            for &child in node.children().iter().rev() {
                work.push(Frame {
                    node: child,
                    emit: false,
                });
            }
            continue;
        }

        match node.node_type() {
            NodeType::Literal => automata.push(Automaton::from_char(node.value())),
            NodeType::Star => {
                let a = automata.pop().expect("STAR node emitted with an empty automaton stack");
                automata.push(a.star());
            }
            NodeType::Concat => {
                let a1 = automata.pop().expect("CONCAT node emitted with an empty automaton stack");
                let a2 = automata.pop().expect("CONCAT node emitted with only one operand");
                automata.push(a2.concat(&a1));
            }
            NodeType::Or => {
                let a1 = automata.pop().expect("OR node emitted with an empty automaton stack");
                let a2 = automata.pop().expect("OR node emitted with only one operand");
                automata.push(a2.union(&a1));
            }
        }
    }

    automata.pop().expect("post-order walk produced no automaton")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_matches_only_itself() {
        let re = Regex::new("abc").unwrap();
        assert!(re.eval("abc"));
        assert!(!re.eval("ab"));
        assert!(!re.eval("abcd"));
    }

    #[test]
    fn star_allows_zero_or_more_repetitions() {
        let re = Regex::new("abc*").unwrap();
        assert!(re.eval("ab"));
        assert!(re.eval("abccc"));
        assert!(!re.eval("abz"));
    }

    #[test]
    fn alternation_and_grouping_compose_with_star() {
        let re = Regex::new("(ab|c)*").unwrap();
        assert!(re.eval("abcccababc"));
        assert!(re.eval(""));
        assert!(!re.eval("abd"));
    }

    #[test]
    fn nested_groups_and_stars() {
        let re = Regex::new("abc(def(hij)*)*").unwrap();
        assert!(re.eval("abcdefhijhijdefhijhij"));
        assert!(re.eval("abc"));
        assert!(!re.eval("abcdef hij"));
    }

    #[test]
    fn alternation_without_star_rejects_empty_word() {
        let re = Regex::new("a|b").unwrap();
        assert!(!re.eval(""));
        assert!(re.eval("a"));
        assert!(re.eval("b"));
    }

    #[test]
    fn propagates_parse_errors() {
        assert!(Regex::new("(a").is_err());
        assert!(Regex::new("").is_err());
    }

    #[test]
    fn set_expression_rebuilds_tree_and_nfa() {
        let mut re = Regex::new("a").unwrap();
        assert!(re.eval("a"));
        assert!(!re.eval("b"));

        re.set_expression("b*").unwrap();
        assert!(re.eval(""));
        assert!(re.eval("bbb"));
        assert!(!re.eval("a"));
    }

    #[test]
    fn set_expression_leaves_regex_unchanged_on_failure() {
        let mut re = Regex::new("a").unwrap();
        assert!(re.set_expression("(a").is_err());
        assert!(re.eval("a"));
        assert_eq!(re.expression(), "a");
    }

    #[test]
    fn concrete_scenarios_from_the_spec() {
        let cases: &[(&str, &str, bool)] = &[
            ("ab(cd|ef)*", "abcdefefcdefef", true),
            ("abcdefg", "abcdefg", true),
            ("(abc)*", "abcabcabc", true),
            ("abc*", "ab", true),
            ("abcc*", "abccc", true),
            ("(ab|c)*", "abcccababc", true),
            ("abc(def(hij)*)*", "abcdefhijhijdefhijhij", true),
            ("abc*", "abz", false),
            ("a|b", "", false),
            ("(a|b)*", "", true),
        ];
        for &(expr, word, expected) in cases {
            let re = Regex::new(expr).unwrap();
            assert_eq!(re.eval(word), expected, "regex {expr:?} on word {word:?}");
        }
    }
}
