use crate::{LfaArgs, ParseArgs};
use lfa::parser;
use lfa::tree::{NodeType, SyntaxTree};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0:?} is not a valid regular expression: {1}")]
    Regex(String, String),
}

pub fn run(main_args: &LfaArgs, args: &ParseArgs) -> Result<(), Error> {
    let tree = parser::parse(&args.regex).map_err(|e| Error::Regex(args.regex.clone(), e.to_string()))?;

    if !main_args.no_log {
        println!("Syntax tree for {:?} ({} node(s)):", args.regex, tree.len());
    }
    print_node(&tree, tree.root_index(), 0);

    Ok(())
}

fn print_node(tree: &SyntaxTree, index: usize, depth: usize) {
    let node = tree.node(index);
    let indent = "  ".repeat(depth);
    match node.node_type() {
        NodeType::Literal => println!("{indent}LITERAL {:?}", node.value() as char),
        NodeType::Concat => println!("{indent}CONCAT"),
        NodeType::Or => println!("{indent}OR"),
        NodeType::Star => println!("{indent}STAR"),
    }
    for &child in node.children() {
        print_node(tree, child, depth + 1);
    }
}
