//! Tree-sitter configuration for the TSX grammar.

use tree_sitter::{Parser, Tree};

use crate::error::{LabelError, Result};

/// Build a parser configured for TSX source.
pub fn tsx_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_typescript::LANGUAGE_TSX.into())?;
    Ok(parser)
}

/// Parse one file's content. Tree-sitter parses permissively, so malformed
/// input still yields a best-effort tree containing ERROR nodes.
pub fn parse_source(file_path: &str, content: &str) -> Result<Tree> {
    let mut parser = tsx_parser()?;
    parser
        .parse(content, None)
        .ok_or_else(|| LabelError::Parse(file_path.to_string()))
}
