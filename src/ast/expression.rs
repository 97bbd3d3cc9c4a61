use std::fmt;

use crate::lexer::Token;

/// Expression tree produced by the grammar.
///
/// Nodes own their children exclusively and are never mutated once built.
/// Operator tokens are kept verbatim so the tree can be dumped or printed
/// back to source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A literal, variable or name standing alone.
    Leaf(Token),
    Binary {
        left: Box<Node>,
        operator: Token,
        right: Box<Node>,
    },
    UnaryPrefix {
        operator: Token,
        operand: Box<Node>,
    },
    UnaryPostfix {
        operand: Box<Node>,
        operator: Token,
    },
    /// Tuple-like grouping: a parenthesized expression holds one child.
    Grouped(Vec<Node>),
    Call {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    /// `condition ? then : otherwise`, with `then` absent for `?:`.
    Ternary {
        condition: Box<Node>,
        question: Token,
        then: Option<Box<Node>>,
        colon: Token,
        otherwise: Box<Node>,
    },
}

impl Node {
    pub fn binary(left: Node, operator: Token, right: Node) -> Self {
        Node::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn prefix(operator: Token, operand: Node) -> Self {
        Node::UnaryPrefix {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn postfix(operand: Node, operator: Token) -> Self {
        Node::UnaryPostfix {
            operand: Box::new(operand),
            operator,
        }
    }

    pub fn call(callee: Node, arguments: Vec<Node>) -> Self {
        Node::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Structural dump used for comparisons in tests.
    ///
    /// Composite nodes render as `(child, child, ...)`, leaves and operator
    /// tokens as `KIND(lexeme)` or `'c'`.
    pub fn dump(&self) -> String {
        match self {
            Node::Leaf(token) => token.dump(),
            Node::Binary {
                left,
                operator,
                right,
            } => format!("({}, {}, {})", left.dump(), operator.dump(), right.dump()),
            Node::UnaryPrefix { operator, operand } => {
                format!("({}, {})", operator.dump(), operand.dump())
            }
            Node::UnaryPostfix { operand, operator } => {
                format!("({}, {})", operand.dump(), operator.dump())
            }
            Node::Grouped(children) => dump_list(children),
            Node::Call { callee, arguments } => {
                format!("({}, {})", callee.dump(), dump_list(arguments))
            }
            Node::Ternary {
                condition,
                question,
                then,
                colon,
                otherwise,
            } => match then {
                Some(then) => format!(
                    "({}, {}, {}, {}, {})",
                    condition.dump(),
                    question.dump(),
                    then.dump(),
                    colon.dump(),
                    otherwise.dump()
                ),
                None => format!(
                    "({}, {}, {}, {})",
                    condition.dump(),
                    question.dump(),
                    colon.dump(),
                    otherwise.dump()
                ),
            },
        }
    }
}

fn dump_list(nodes: &[Node]) -> String {
    let parts: Vec<String> = nodes.iter().map(Node::dump).collect();
    format!("({})", parts.join(", "))
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}
