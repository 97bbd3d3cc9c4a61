//! Printer from expression trees back to source text
//!
//! Tokens are written in their original order, separated by single spaces.
//! Groups and argument lists are the only places parentheses appear, so
//! re-lexing and re-parsing the output yields the same tree. Keeping a
//! space after every `(` also stops a group such as `( bool )` from being
//! read back as a cast.

use crate::ast::Node;
use crate::lexer::Token;

struct SourceWriter {
    buffer: String,
}

impl SourceWriter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn write_str(&mut self, s: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
        }
        self.buffer.push_str(s);
    }

    fn write_token(&mut self, token: &Token) {
        self.write_str(&token.lexeme);
    }

    fn write_list(&mut self, nodes: &[Node]) {
        self.write_str("(");
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write_str(",");
            }
            format_node(node, self);
        }
        self.write_str(")");
    }

    fn finish(self) -> String {
        self.buffer
    }
}

/// Renders `node` as expression source.
pub fn to_source(node: &Node) -> String {
    let mut writer = SourceWriter::new();
    format_node(node, &mut writer);
    writer.finish()
}

fn format_node(node: &Node, out: &mut SourceWriter) {
    match node {
        Node::Leaf(token) => out.write_token(token),
        Node::Binary {
            left,
            operator,
            right,
        } => {
            format_node(left, out);
            out.write_token(operator);
            format_node(right, out);
        }
        Node::UnaryPrefix { operator, operand } => {
            out.write_token(operator);
            format_node(operand, out);
        }
        Node::UnaryPostfix { operand, operator } => {
            format_node(operand, out);
            out.write_token(operator);
        }
        Node::Grouped(children) => out.write_list(children),
        Node::Call { callee, arguments } => {
            format_node(callee, out);
            out.write_list(arguments);
        }
        Node::Ternary {
            condition,
            question,
            then,
            colon,
            otherwise,
        } => {
            format_node(condition, out);
            out.write_token(question);
            if let Some(then) = then {
                format_node(then, out);
            }
            out.write_token(colon);
            format_node(otherwise, out);
        }
    }
}
