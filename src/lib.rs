//! jsx-labeler - structurally-scoped test labels for React Native JSX.
//!
//! Walks tree-sitter TSX parse trees and emits one traceable label per
//! recognized interactive element (TextInput, TouchableOpacity), scoped by
//! the element's enclosing declaration names.

pub mod error;
pub mod extractors;
pub mod language;
pub mod report;
pub mod scan;

#[cfg(test)]
pub mod tests;

// Re-export common types
pub use error::{LabelError, Result};
pub use extractors::{ElementLabel, JsxLabelExtractor};
