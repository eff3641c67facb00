use crate::ir::IrNode;

const HEADER: &str = "program:";
const INDENT: &str = "  ";

fn emit_node(node: &IrNode) -> String {
    match node {
        // The directive goes out raw: embedded quotes or backslashes are not escaped.
        IrNode::Print { text } => format!("{}print \"{}\"", INDENT, text),
        IrNode::WaitInput => format!("{}wait-input", INDENT),
    }
}

pub fn emit_ir(nodes: &[IrNode]) -> Vec<String> {
    let mut out = Vec::with_capacity(nodes.len() + 1);
    out.push(HEADER.to_string());
    out.extend(nodes.iter().map(emit_node));
    out
}
