// Shared source-file plumbing for extractors.

use tree_sitter::Node;

/// One emitted label with its resolved source position (1-based).
#[derive(Debug, Clone, PartialEq)]
pub struct ElementLabel {
    pub label: String,
    pub line: u32,
    pub column: u32,
}

/// A parsed file's identity and raw content. Extractors resolve node text
/// and positions through this instead of touching byte spans directly.
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: String, content: String) -> Self {
        Self { path, content }
    }

    /// Text covered by a node's byte span, handling UTF-8 boundaries lossily.
    pub fn node_text(&self, node: &Node) -> String {
        let start = node.start_byte();
        let end = node.end_byte();
        let bytes = self.content.as_bytes();
        if start < bytes.len() && end <= bytes.len() {
            String::from_utf8_lossy(&bytes[start..end]).to_string()
        } else {
            String::new()
        }
    }

    /// A node's (line, column), converted from tree-sitter's 0-based
    /// position to the 1-based convention of the report stream.
    pub fn line_col(&self, node: &Node) -> (u32, u32) {
        let pos = node.start_position();
        (pos.row as u32 + 1, pos.column as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::SourceFile;

    #[test]
    fn node_text_slices_the_span() {
        let code = "const x = 1;";
        let tree = crate::language::parse_source("test.tsx", code).unwrap();
        let source = SourceFile::new("test.tsx".to_string(), code.to_string());
        assert_eq!(source.node_text(&tree.root_node()), code);
    }

    #[test]
    fn line_col_is_one_based() {
        let code = "\nconst x = 1;";
        let tree = crate::language::parse_source("test.tsx", code).unwrap();
        let source = SourceFile::new("test.tsx".to_string(), code.to_string());
        let decl = tree.root_node().named_child(0).unwrap();
        assert_eq!(source.line_col(&decl), (2, 1));
    }
}
