//! Taxonomy navigation nodes, used for breadcrumbs and topic trees.

use serde::{Deserialize, Serialize};

/// Descriptive part of a taxonomy node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDescription {
    pub title: String,
}

/// An entry in the content navigation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyNode {
    pub uri: String,
    pub description: NodeDescription,
    pub children: Vec<TaxonomyNode>,
}

impl TaxonomyNode {
    /// Creates a leaf node.
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            description: NodeDescription {
                title: title.into(),
            },
            children: Vec::new(),
        }
    }

    /// Attaches child nodes, keeping their order.
    pub fn with_children(mut self, children: Vec<TaxonomyNode>) -> Self {
        self.children = children;
        self
    }

    pub fn title(&self) -> &str {
        &self.description.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_shape() {
        let node = TaxonomyNode::new("Economy", "/economy");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"uri":"/economy","description":{"title":"Economy"},"children":[]}"#
        );
        assert_eq!(node.title(), "Economy");
    }

    #[test]
    fn test_nested_tree_round_trip() {
        let tree = TaxonomyNode::new("Economy", "/economy").with_children(vec![
            TaxonomyNode::new("Inflation and price indices", "/economy/inflationandpriceindices"),
            TaxonomyNode::new("Gross Domestic Product", "/economy/grossdomesticproductgdp"),
        ]);

        let json = serde_json::to_string(&tree).unwrap();
        let back: TaxonomyNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
        assert_eq!(back.children[1].title(), "Gross Domestic Product");
    }

    #[test]
    fn test_upstream_node_without_children() {
        let node: TaxonomyNode =
            serde_json::from_str(r#"{"uri":"/","description":{"title":"Home"}}"#).unwrap();
        assert!(node.children.is_empty());
    }
}
