pub mod base;
pub mod jsx;

pub use base::{ElementLabel, SourceFile};
pub use jsx::JsxLabelExtractor;
