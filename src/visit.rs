//! Depth-first pre-order traversal of the R syntax tree.
//!
//! `SyntaxVisitor` dispatches every node to a kind-specific hook. Each hook
//! defaults to recursing into the node's children in source order; override
//! only the hooks you need. An override that does not call `visit_children`
//! prunes the whole subtree — do this when the subtree cannot contain a
//! violation, and call `RuleWalker::skip` so position tracking stays
//! consistent.

use air_r_syntax::{
    RBinaryExpression, RCall, RForStatement, RFunctionDefinition, RIdentifier, RIfStatement,
    RNamespaceExpression, RRepeatStatement, RStringValue, RSubset, RSubset2, RSyntaxKind,
    RSyntaxNode, RUnaryExpression, RWhileStatement,
};
use biome_rowan::AstNode;

pub trait SyntaxVisitor {
    /// Entry point: traverse the tree rooted at `root`.
    fn walk(&mut self, root: &RSyntaxNode) {
        self.visit_node(root);
    }

    /// Dispatch one node to its kind-specific hook. Kinds without a hook
    /// recurse directly.
    fn visit_node(&mut self, node: &RSyntaxNode) {
        match node.kind() {
            RSyntaxKind::R_CALL => {
                if let Some(node) = RCall::cast(node.clone()) {
                    return self.visit_call(&node);
                }
            }
            RSyntaxKind::R_BINARY_EXPRESSION => {
                if let Some(node) = RBinaryExpression::cast(node.clone()) {
                    return self.visit_binary_expression(&node);
                }
            }
            RSyntaxKind::R_UNARY_EXPRESSION => {
                if let Some(node) = RUnaryExpression::cast(node.clone()) {
                    return self.visit_unary_expression(&node);
                }
            }
            RSyntaxKind::R_IDENTIFIER => {
                if let Some(node) = RIdentifier::cast(node.clone()) {
                    return self.visit_identifier(&node);
                }
            }
            RSyntaxKind::R_STRING_VALUE => {
                if let Some(node) = RStringValue::cast(node.clone()) {
                    return self.visit_string_value(&node);
                }
            }
            RSyntaxKind::R_FUNCTION_DEFINITION => {
                if let Some(node) = RFunctionDefinition::cast(node.clone()) {
                    return self.visit_function_definition(&node);
                }
            }
            RSyntaxKind::R_IF_STATEMENT => {
                if let Some(node) = RIfStatement::cast(node.clone()) {
                    return self.visit_if_statement(&node);
                }
            }
            RSyntaxKind::R_FOR_STATEMENT => {
                if let Some(node) = RForStatement::cast(node.clone()) {
                    return self.visit_for_statement(&node);
                }
            }
            RSyntaxKind::R_WHILE_STATEMENT => {
                if let Some(node) = RWhileStatement::cast(node.clone()) {
                    return self.visit_while_statement(&node);
                }
            }
            RSyntaxKind::R_REPEAT_STATEMENT => {
                if let Some(node) = RRepeatStatement::cast(node.clone()) {
                    return self.visit_repeat_statement(&node);
                }
            }
            RSyntaxKind::R_SUBSET => {
                if let Some(node) = RSubset::cast(node.clone()) {
                    return self.visit_subset(&node);
                }
            }
            RSyntaxKind::R_SUBSET2 => {
                if let Some(node) = RSubset2::cast(node.clone()) {
                    return self.visit_subset2(&node);
                }
            }
            RSyntaxKind::R_NAMESPACE_EXPRESSION => {
                if let Some(node) = RNamespaceExpression::cast(node.clone()) {
                    return self.visit_namespace_expression(&node);
                }
            }
            _ => {}
        }
        self.visit_children(node);
    }

    /// Recurse into the node's children in source order.
    fn visit_children(&mut self, node: &RSyntaxNode) {
        for child in node.children() {
            self.visit_node(&child);
        }
    }

    fn visit_call(&mut self, node: &RCall) {
        self.visit_children(node.syntax());
    }

    fn visit_binary_expression(&mut self, node: &RBinaryExpression) {
        self.visit_children(node.syntax());
    }

    fn visit_unary_expression(&mut self, node: &RUnaryExpression) {
        self.visit_children(node.syntax());
    }

    fn visit_identifier(&mut self, node: &RIdentifier) {
        self.visit_children(node.syntax());
    }

    fn visit_string_value(&mut self, node: &RStringValue) {
        self.visit_children(node.syntax());
    }

    fn visit_function_definition(&mut self, node: &RFunctionDefinition) {
        self.visit_children(node.syntax());
    }

    fn visit_if_statement(&mut self, node: &RIfStatement) {
        self.visit_children(node.syntax());
    }

    fn visit_for_statement(&mut self, node: &RForStatement) {
        self.visit_children(node.syntax());
    }

    fn visit_while_statement(&mut self, node: &RWhileStatement) {
        self.visit_children(node.syntax());
    }

    fn visit_repeat_statement(&mut self, node: &RRepeatStatement) {
        self.visit_children(node.syntax());
    }

    fn visit_subset(&mut self, node: &RSubset) {
        self.visit_children(node.syntax());
    }

    fn visit_subset2(&mut self, node: &RSubset2) {
        self.visit_children(node.syntax());
    }

    fn visit_namespace_expression(&mut self, node: &RNamespaceExpression) {
        self.visit_children(node.syntax());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use air_r_parser::{RParserOptions, parse};

    fn root_of(code: &str) -> RSyntaxNode {
        let parsed = parse(code, RParserOptions::default());
        assert!(!parsed.has_error());
        parsed.syntax()
    }

    #[derive(Default)]
    struct IdentifierCollector {
        names: Vec<String>,
    }

    impl SyntaxVisitor for IdentifierCollector {
        fn visit_identifier(&mut self, node: &RIdentifier) {
            if let Ok(token) = node.name_token() {
                self.names.push(token.text_trimmed().to_string());
            }
            self.visit_children(node.syntax());
        }
    }

    #[test]
    fn test_identifiers_visited_in_source_order() {
        let mut collector = IdentifierCollector::default();
        collector.walk(&root_of("a <- b + c\nd(e)"));
        assert_eq!(collector.names, vec!["a", "b", "c", "d", "e"]);
    }

    #[derive(Default)]
    struct PreOrderSpans {
        spans: Vec<(usize, usize)>,
    }

    impl SyntaxVisitor for PreOrderSpans {
        fn visit_node(&mut self, node: &RSyntaxNode) {
            let range = node.text_trimmed_range();
            self.spans.push((range.start().into(), range.end().into()));
            self.visit_children(node);
        }
    }

    #[test]
    fn test_traversal_is_pre_order() {
        let mut visitor = PreOrderSpans::default();
        visitor.walk(&root_of("f(x + 1)"));
        // A parent is visited before anything it contains.
        for window in visitor.spans.windows(2) {
            let (prev, next) = (window[0], window[1]);
            assert!(
                next.0 >= prev.0,
                "visited {next:?} after {prev:?}, which starts later"
            );
        }
        // The call wrapping everything comes before the inner sum.
        assert!(visitor.spans.contains(&(0, 8)));
        assert!(visitor.spans.contains(&(2, 7)));
    }

    struct CallPruner {
        visited_inside_call: bool,
    }

    impl SyntaxVisitor for CallPruner {
        fn visit_call(&mut self, _node: &RCall) {
            // Declining to recurse skips the whole subtree.
        }

        fn visit_identifier(&mut self, node: &RIdentifier) {
            self.visited_inside_call = true;
            self.visit_children(node.syntax());
        }
    }

    #[test]
    fn test_pruned_subtree_fires_no_hooks() {
        let mut visitor = CallPruner { visited_inside_call: false };
        visitor.walk(&root_of("f(x + y)"));
        assert!(!visitor.visited_inside_call);
    }
}
