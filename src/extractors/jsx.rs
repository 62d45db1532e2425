// JSX element labeler.
//
// Walks a parsed TSX tree and synthesizes one label per recognized
// interactive element. A label is the element's lexical path (enclosing
// declaration names, root first), an optional disambiguating fragment
// derived from attributes or content, and a random hex suffix.

use rand::RngCore;
use tree_sitter::{Node, Tree};

use crate::error::{LabelError, Result};
use crate::extractors::base::{ElementLabel, SourceFile};

/// Tag names the labeler recognizes. Exact, case-sensitive matches only.
const TEXT_INPUT_TAG: &str = "TextInput";
const TOUCHABLE_TAG: &str = "TouchableOpacity";

/// Attribute names considered by the TextInput branch.
const VALUE_ATTRS: [&str; 2] = ["defaultValue", "value"];

/// Raw-source substring marking an internal icon asset.
const ASSET_ICON_SOURCE: &str = "_asset.icon";
/// Signature token emitted for icon-asset leaves. Two or more of these in
/// one button's content mark the whole button as a pressable asset.
const ASSET_ICON_TOKEN: &str = "AssetIcon";

pub struct JsxLabelExtractor {
    source: SourceFile,
}

impl JsxLabelExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            source: SourceFile::new(file_path, content),
        }
    }

    /// Visit every node of the tree pre-order and collect labels for
    /// matched elements, in traversal order. The tree is never mutated.
    pub fn extract_labels(&self, tree: &Tree, rng: &mut dyn RngCore) -> Result<Vec<ElementLabel>> {
        let mut labels = Vec::new();
        self.visit_node(tree.root_node(), rng, &mut labels)?;
        Ok(labels)
    }

    fn visit_node(
        &self,
        node: Node,
        rng: &mut dyn RngCore,
        labels: &mut Vec<ElementLabel>,
    ) -> Result<()> {
        match node.kind() {
            "jsx_opening_element" | "jsx_self_closing_element" => {
                self.match_element(node, rng, labels)?;
            }
            _ => {}
        }

        // Recursion continues into children whether or not this node matched.
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit_node(child, rng, labels)?;
        }
        Ok(())
    }

    fn match_element(
        &self,
        node: Node,
        rng: &mut dyn RngCore,
        labels: &mut Vec<ElementLabel>,
    ) -> Result<()> {
        // Fragments (`<>`) carry no name node.
        let Some(name_node) = node.child_by_field_name("name") else {
            return Ok(());
        };
        let tag_name = self.source.node_text(&name_node);

        let label = match tag_name.as_str() {
            TEXT_INPUT_TAG => Some(self.text_input_label(node, &tag_name, rng)?),
            TOUCHABLE_TAG => self.touchable_label(node, &tag_name, rng)?,
            _ => None,
        };

        if let Some(label) = label {
            let (line, column) = self.source.line_col(&node);
            labels.push(ElementLabel {
                label,
                line,
                column,
            });
        }
        Ok(())
    }

    /// TextInput: lexical path, then `name=filler` pairs for any
    /// `defaultValue`/`value` attributes.
    fn text_input_label(&self, node: Node, tag_name: &str, rng: &mut dyn RngCore) -> Result<String> {
        let pairs = self.value_attribute_pairs(node);

        let mut label = self.lexical_path(tag_name, node)?;
        if !pairs.is_empty() {
            let joined = pairs
                .iter()
                .map(|(name, filler)| format!("{}={}", name, filler))
                .collect::<Vec<_>>()
                .join("__");
            label.push('|');
            label.push_str(&joined);
        }
        push_suffix(&mut label, rng);
        Ok(label)
    }

    /// TouchableOpacity: labeled only when the element sits inside a
    /// compound jsx_element; that element's content signature disambiguates.
    /// For an opening element the compound parent is the button itself, so
    /// the signature summarizes the button's own children.
    fn touchable_label(
        &self,
        node: Node,
        tag_name: &str,
        rng: &mut dyn RngCore,
    ) -> Result<Option<String>> {
        let Some(parent) = node.parent().filter(|p| p.kind() == "jsx_element") else {
            return Ok(None);
        };

        let tokens = self.signature_tokens(parent);

        let mut label = self.lexical_path(tag_name, node)?;
        if tokens.len() == 1 {
            label.push('|');
            label.push_str(&tokens[0].replace(['{', '}'], ""));
        }
        // Appended independently of the single-token fragment above.
        let markers = tokens.iter().filter(|t| *t == ASSET_ICON_TOKEN).count();
        if markers >= 2 {
            label.push_str("|PressableAsset");
        }
        push_suffix(&mut label, rng);
        Ok(Some(label))
    }

    /// Ascend the parent chain collecting enclosing declaration names and
    /// render them root-first, joined by `/`, the element's tag name last.
    /// A named function declaration always carries a name node; its absence
    /// violates the provider contract and fails the run.
    fn lexical_path(&self, tag_name: &str, node: Node) -> Result<String> {
        let mut stack = vec![tag_name.to_string()];
        let mut current = Some(node);
        while let Some(n) = current {
            match n.kind() {
                "variable_declarator" => {
                    if let Some(name) = n.child_by_field_name("name") {
                        stack.push(self.source.node_text(&name));
                    }
                }
                "function_declaration" => {
                    let name =
                        n.child_by_field_name("name")
                            .ok_or_else(|| LabelError::MissingName {
                                file: self.source.path.clone(),
                                line: n.start_position().row as u32 + 1,
                            })?;
                    stack.push(self.source.node_text(&name));
                }
                _ => {}
            }
            current = n.parent();
        }
        stack.reverse();
        Ok(stack.join("/"))
    }

    /// The element's `defaultValue`/`value` attributes paired with their
    /// normalized initializer text, in source order. Attributes with no
    /// resolvable name (spread expressions) are skipped; a bare attribute
    /// without an initializer yields an empty filler.
    fn value_attribute_pairs(&self, node: Node) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() != "jsx_attribute" {
                continue;
            }
            let Some(name_node) = child.named_child(0) else {
                continue;
            };
            let name = self.source.node_text(&name_node);
            if !VALUE_ATTRS.contains(&name.as_str()) {
                continue;
            }
            let filler = child
                .named_child(1)
                .map(|init| normalize_filler(&self.source.node_text(&init)))
                .unwrap_or_default();
            pairs.push((name, filler));
        }
        pairs
    }

    /// Flatten one compound element's content into normalized signature
    /// tokens, dropping entries that normalize to nothing.
    fn signature_tokens(&self, element: Node) -> Vec<String> {
        let mut raw = Vec::new();
        self.collect_signature(element, &mut raw);
        raw.iter()
            .map(|t| normalize_token(t))
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn collect_signature(&self, element: Node, out: &mut Vec<String>) {
        let mut cursor = element.walk();
        for child in element.children(&mut cursor) {
            match child.kind() {
                "jsx_element" => self.collect_signature(child, out),
                "jsx_text" | "jsx_expression" => out.push(self.source.node_text(&child)),
                "jsx_self_closing_element" => {
                    if let Some(token) = self.leaf_token(child) {
                        out.push(token);
                    }
                }
                _ => {}
            }
        }
    }

    /// A self-closing leaf summarizes to its tag name when it is sized
    /// explicitly, or to the icon-asset marker when its `source` points at
    /// an internal icon. Anything else contributes nothing.
    fn leaf_token(&self, node: Node) -> Option<String> {
        let mut names = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "jsx_attribute" {
                if let Some(name_node) = child.named_child(0) {
                    names.push(self.source.node_text(&name_node));
                }
            }
        }

        if names.iter().any(|n| n == "width" || n == "height") {
            return node
                .child_by_field_name("name")
                .map(|n| self.source.node_text(&n));
        }
        if names.iter().any(|n| n == "source")
            && self.source.node_text(&node).contains(ASSET_ICON_SOURCE)
        {
            return Some(ASSET_ICON_TOKEN.to_string());
        }
        None
    }
}

/// Append the random hex disambiguator: lowercase, unpadded, drawn from the
/// process-wide generator. Not unique and not reproducible across runs.
fn push_suffix(label: &mut String, rng: &mut dyn RngCore) {
    label.push_str(&format!("--{:x}", rng.next_u32()));
}

/// Attribute initializer text with structural punctuation flattened out:
/// every `[` and `.` becomes `-`, the first `]` is dropped, braces are
/// dropped.
fn normalize_filler(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut closed = false;
    for c in raw.chars() {
        match c {
            '[' | '.' => out.push('-'),
            ']' if !closed => closed = true,
            '{' | '}' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Trim a signature token and collapse its first `.` and first space.
fn normalize_token(raw: &str) -> String {
    raw.trim().replacen('.', "-", 1).replacen(' ', "_", 1)
}

#[cfg(test)]
mod tests {
    use super::{normalize_filler, normalize_token};

    #[test]
    fn filler_flattens_member_access() {
        assert_eq!(normalize_filler("{state.name}"), "state-name");
    }

    #[test]
    fn filler_drops_first_bracket_only() {
        assert_eq!(normalize_filler("{items[0].label}"), "items-0-label");
        assert_eq!(normalize_filler("a]b]c"), "ab]c");
    }

    #[test]
    fn token_collapses_first_dot_and_space() {
        assert_eq!(normalize_token("  Tap me now "), "Tap_me now");
        assert_eq!(normalize_token("v1.2.3"), "v1-2.3");
    }

    #[test]
    fn whitespace_only_token_normalizes_to_empty() {
        assert_eq!(normalize_token(" \n  "), "");
    }
}
