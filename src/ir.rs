#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrNode {
    Print { text: String },
    WaitInput,
}

pub fn build(directives: Vec<String>, wait_input: bool) -> Vec<IrNode> {
    let mut nodes: Vec<IrNode> = directives
        .into_iter()
        .map(|text| IrNode::Print { text })
        .collect();
    if wait_input {
        nodes.push(IrNode::WaitInput);
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_appends_wait_input() {
        let nodes = build(vec!["a".to_string(), "b".to_string()], true);
        assert_eq!(
            nodes,
            vec![
                IrNode::Print { text: "a".to_string() },
                IrNode::Print { text: "b".to_string() },
                IrNode::WaitInput,
            ]
        );
    }

    #[test]
    fn test_build_without_wait_input() {
        assert!(build(Vec::new(), false).is_empty());
    }
}
