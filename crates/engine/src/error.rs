use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Thread pool creation failed: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Directory walker thread panicked")]
    WalkerPanicked,
}

impl EngineError {
    pub(crate) fn file_read(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
