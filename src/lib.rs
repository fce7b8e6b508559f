// Rollover library - bulk year/suffix renaming into an output folder

pub mod error;
pub use error::{Result, RolloverError};

pub mod apply;
pub mod logging;
pub mod rename_engine;
pub mod request;
pub mod selection;
pub mod tui;

pub use apply::{apply_rename, ApplyReport};
pub use rename_engine::{compute, OptionsBuilder, RenameEngine, RenameMapping, RewriteOptions, YearWindow};
pub use request::{RenameOutcome, RenameRequest};
pub use selection::Selection;
