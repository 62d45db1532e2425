use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Grammar error: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob walk error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Parser produced no tree for {0}")]
    Parse(String),

    #[error("Function declaration at {file}:{line} has no name")]
    MissingName { file: String, line: u32 },
}

pub type Result<T> = std::result::Result<T, LabelError>;
