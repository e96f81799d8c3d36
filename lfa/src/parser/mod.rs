//! A predictive LL(1) parser for the regex grammar:
//!
//! ```text
//! expr     -> concat expr'
//! expr'    -> '|' concat expr' | epsilon
//! concat   -> star concat'
//! concat'  -> star concat' | epsilon
//! star     -> primary star'
//! star'    -> '*' | epsilon
//! primary  -> literal | '(' expr ')'
//! ```
//!
//! The parser drives two stacks instead of building a parse tree and then
//! walking it: a production stack holding nonterminals, terminals and
//! synthetic *reduction markers*, and a value stack holding the indices of
//! [`crate::tree::SyntaxTree`] nodes built so far (or `None` standing in for
//! the grammar's epsilon, i.e. "nothing was produced here"). A reduction
//! marker fires exactly when enough of the value stack is in place to build
//! the AST node for the production it closes, so the tree comes out of a
//! single left-to-right pass with no separate semantic-action phase.

use crate::tree::{NodeType, SyntaxTree};
use thiserror::Error;

/// The parser failed to recognise the input as a regular expression: no
/// table entry for the current (nonterminal, lookahead) pair, a terminal
/// mismatch, premature end of input, or unbalanced parentheses all collapse
/// into this single kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{0:?} is not a valid regular expression: {1}")]
    ExpressionNotRegex(String, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Expr,
    ExprPrime,
    Concat,
    ConcatPrime,
    Star,
    StarPrime,
    Primary,

    StarT,
    OrT,
    LParenT,
    RParenT,
    LiteralT,
    EndT,

    MExpr,
    MExprPrime,
    MConcat,
    MConcatPrime,
    MStarPrime,
    MStar,
    MEnd,
}

fn terminal_for(byte: Option<u8>) -> Symbol {
    match byte {
        None => Symbol::EndT,
        Some(b'*') => Symbol::StarT,
        Some(b'|') => Symbol::OrT,
        Some(b'(') => Symbol::LParenT,
        Some(b')') => Symbol::RParenT,
        Some(_) => Symbol::LiteralT,
    }
}

/// The production table from the grammar above. Returns the right-hand side
/// to push (in left-to-right order; the caller reverses it for the stack),
/// or `Err` if there's no entry for this (nonterminal, lookahead) pair.
fn expand(nonterminal: Symbol, lookahead: Symbol) -> Result<Vec<Symbol>, ()> {
    use Symbol::*;
    Ok(match (nonterminal, lookahead) {
        (Expr, LParenT) | (Expr, LiteralT) => vec![Concat, ExprPrime, MExpr],

        (ExprPrime, OrT) => vec![OrT, Concat, ExprPrime, MExprPrime],
        (ExprPrime, RParenT) | (ExprPrime, EndT) => vec![],

        (Concat, LParenT) | (Concat, LiteralT) => vec![Star, ConcatPrime, MConcat],

        (ConcatPrime, OrT) | (ConcatPrime, RParenT) | (ConcatPrime, EndT) => vec![],
        (ConcatPrime, LParenT) | (ConcatPrime, LiteralT) => vec![Star, ConcatPrime, MConcatPrime],

        (Star, LParenT) | (Star, LiteralT) => vec![Primary, StarPrime, MStar],

        (StarPrime, StarT) => vec![StarT, MStarPrime],
        (StarPrime, OrT) | (StarPrime, LParenT) | (StarPrime, RParenT) | (StarPrime, LiteralT) | (StarPrime, EndT) => {
            vec![]
        }

        (Primary, LParenT) => vec![LParenT, Expr, RParenT],
        (Primary, LiteralT) => vec![LiteralT],

        _ => return Err(()),
    })
}

/// Pops two operands and combines them, skipping the wrapper node entirely
/// when one side is absent (the epsilon tail of an `expr'`/`concat'` chain)
/// rather than emitting a single-child node, an explicitly allowed reading
/// of the single-child OR/CONCAT case.
fn reduce_binary(value_stack: &mut Vec<Option<usize>>, tree: &mut SyntaxTree, node_type: NodeType) {
    let right = value_stack.pop().expect("reduction marker fired with an empty value stack");
    let left = value_stack.pop().expect("reduction marker fired with an empty value stack");
    let result = match (left, right) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(only),
        (Some(l), Some(r)) => {
            let node = tree.emplace(node_type, 0);
            tree.add_child(node, l);
            tree.add_child(node, r);
            Some(node)
        }
    };
    value_stack.push(result);
}

/// Fires only when `'*'` was actually matched (the `star'` epsilon branch
/// pushes nothing at all, since there's nothing to distinguish: `primary`'s
/// value is already sitting on top, waiting for the closing `M_STAR`).
fn reduce_star(value_stack: &mut Vec<Option<usize>>, tree: &mut SyntaxTree) {
    let child = value_stack
        .pop()
        .expect("M_STAR_PR fired with an empty value stack")
        .expect("primary never reduces to epsilon");
    let node = tree.emplace(NodeType::Star, 0);
    tree.add_child(node, child);
    value_stack.push(Some(node));
}

/// Parses `expr` into a [`SyntaxTree`], or fails with [`ParseError`].
pub fn parse(expr: &str) -> Result<SyntaxTree, ParseError> {
    let fail = |reason: &str| ParseError::ExpressionNotRegex(expr.to_string(), reason.to_string());

    let bytes = expr.as_bytes();
    let mut tree = SyntaxTree::new();
    let mut value_stack: Vec<Option<usize>> = Vec::new();
    let mut prod_stack = vec![Symbol::MEnd, Symbol::Expr];

    let mut pos = 0usize;
    let mut lookahead = terminal_for(bytes.first().copied());

    loop {
        let top = prod_stack
            .pop()
            .ok_or_else(|| fail("parser ran out of productions before reaching the end marker"))?;

        match top {
            Symbol::MEnd => {
                if lookahead != Symbol::EndT {
                    return Err(fail("unexpected trailing input (likely an unmatched ')')"));
                }
                break;
            }
            Symbol::MExpr | Symbol::MExprPrime => reduce_binary(&mut value_stack, &mut tree, NodeType::Or),
            Symbol::MConcat | Symbol::MConcatPrime => reduce_binary(&mut value_stack, &mut tree, NodeType::Concat),
            Symbol::MStarPrime => reduce_star(&mut value_stack, &mut tree),
            Symbol::MStar => {}
            Symbol::StarT | Symbol::OrT | Symbol::LParenT | Symbol::RParenT => {
                if top != lookahead {
                    return Err(fail("expected a different token than what appeared"));
                }
                pos += 1;
                lookahead = terminal_for(bytes.get(pos).copied());
            }
            Symbol::LiteralT => {
                if lookahead != Symbol::LiteralT {
                    return Err(fail("expected a literal character"));
                }
                let index = tree.emplace(NodeType::Literal, bytes[pos]);
                value_stack.push(Some(index));
                pos += 1;
                lookahead = terminal_for(bytes.get(pos).copied());
            }
            Symbol::EndT => unreachable!("EndT is only ever a lookahead, never a production symbol"),
            nonterminal => {
                let rhs = expand(nonterminal, lookahead)
                    .map_err(|_| fail("no production for this symbol at the current position"))?;
                if rhs.is_empty() {
                    match nonterminal {
                        Symbol::ExprPrime | Symbol::ConcatPrime => value_stack.push(None),
                        Symbol::StarPrime => {}
                        _ => unreachable!("only expr', concat' and star' have an epsilon production"),
                    }
                } else {
                    prod_stack.extend(rhs.into_iter().rev());
                }
            }
        }
    }

    match value_stack.pop() {
        Some(Some(_)) if value_stack.is_empty() => Ok(tree),
        _ => Err(fail("expression did not reduce to a single syntax tree")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeType;

    #[test]
    fn empty_input_is_rejected() {
        assert!(parse("").is_err());
    }

    #[test]
    fn single_literal_produces_a_single_node() {
        let tree = parse("a").unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(tree.root_index()).node_type(), NodeType::Literal);
        assert_eq!(tree.node(tree.root_index()).value(), b'a');
    }

    #[test]
    fn concatenation_is_implicit() {
        let tree = parse("ab").unwrap();
        let root = tree.node(tree.root_index());
        assert_eq!(root.node_type(), NodeType::Concat);
        assert_eq!(root.children().len(), 2);
    }

    #[test]
    fn alternation_builds_an_or_node() {
        let tree = parse("a|b").unwrap();
        let root = tree.node(tree.root_index());
        assert_eq!(root.node_type(), NodeType::Or);
        assert_eq!(root.children().len(), 2);
    }

    #[test]
    fn star_wraps_its_operand() {
        let tree = parse("a*").unwrap();
        let root = tree.node(tree.root_index());
        assert_eq!(root.node_type(), NodeType::Star);
        assert_eq!(root.children().len(), 1);
        assert_eq!(tree.node(root.children()[0]).node_type(), NodeType::Literal);
    }

    #[test]
    fn grouping_is_transparent_to_the_tree_shape() {
        let grouped = parse("(a|b)").unwrap();
        let plain = parse("a|b").unwrap();
        assert_eq!(
            grouped.node(grouped.root_index()).node_type(),
            plain.node(plain.root_index()).node_type()
        );
    }

    #[test]
    fn unmatched_parenthesis_is_rejected() {
        assert!(parse("(a").is_err());
        assert!(parse("a)").is_err());
    }

    #[test]
    fn reparsing_the_same_expression_is_idempotent() {
        let first = parse("ab(cd|ef)*").unwrap();
        let second = parse("ab(cd|ef)*").unwrap();
        assert_eq!(first, second);
    }
}
