use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the rename core and the request layer.
#[derive(Error, Debug)]
pub enum RolloverError {
    #[error("You need to select an input folder")]
    MissingInputFolder,

    #[error("You need to select an output folder")]
    MissingOutputFolder,

    #[error("No files are selected for renaming")]
    NoFilesSelected,

    #[error("Folder does not exist: {}", .0.display())]
    FolderNotFound(PathBuf),

    #[error("Nothing to rename!")]
    NothingToRename,

    #[error("Could not check '{}': {source}", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy '{}' to '{}': {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RolloverError>;

impl RolloverError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RolloverError::Config(msg.into())
    }

    /// True for the errors a caller reports before anything was computed.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            RolloverError::MissingInputFolder
                | RolloverError::MissingOutputFolder
                | RolloverError::NoFilesSelected
                | RolloverError::FolderNotFound(_)
        )
    }
}
