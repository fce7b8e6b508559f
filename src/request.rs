use std::path::PathBuf;

use log::info;

use crate::apply::{apply_rename, ApplyReport};
use crate::error::{Result, RolloverError};
use crate::rename_engine::{RenameEngine, RenameMapping, RewriteOptions, YearWindow};
use crate::selection::Selection;

pub const SAME_FOLDER_WARNING: &str =
    "I see you selected the input and output folder as the same folder. Is this correct?";

/// Everything the user chose for one rename, taken as a snapshot.
#[derive(Debug, Clone, Default)]
pub struct RenameRequest {
    pub input_folder: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub selection: Selection,
    pub options: RewriteOptions,
    /// Overrides the window derived from today's date.
    pub year_window: Option<YearWindow>,
}

#[derive(Debug, Clone)]
pub struct RenameOutcome {
    pub mapping: RenameMapping,
    pub report: ApplyReport,
}

impl RenameOutcome {
    pub fn status_message(&self) -> String {
        format!(
            "Successfully renamed {} file(s). Please reset to rename more files.",
            self.report.copied
        )
    }
}

impl RenameRequest {
    pub fn new(
        input_folder: Option<PathBuf>,
        output_folder: Option<PathBuf>,
        selection: Selection,
        options: RewriteOptions,
    ) -> Self {
        Self {
            input_folder,
            output_folder,
            selection,
            options,
            year_window: None,
        }
    }

    pub fn with_year_window(mut self, window: YearWindow) -> Self {
        self.year_window = Some(window);
        self
    }

    /// Checks the preconditions and returns the two folders.
    pub fn validate(&self) -> Result<(PathBuf, PathBuf)> {
        let input = self
            .input_folder
            .clone()
            .ok_or(RolloverError::MissingInputFolder)?;
        let output = self
            .output_folder
            .clone()
            .ok_or(RolloverError::MissingOutputFolder)?;

        if self.selection.selected_count() == 0 {
            return Err(RolloverError::NoFilesSelected);
        }
        if !input.is_dir() {
            return Err(RolloverError::FolderNotFound(input));
        }
        if !output.is_dir() {
            return Err(RolloverError::FolderNotFound(output));
        }

        Ok((input, output))
    }

    pub fn same_folder_warning(&self) -> Option<&'static str> {
        match (&self.input_folder, &self.output_folder) {
            (Some(input), Some(output)) if input == output => Some(SAME_FOLDER_WARNING),
            _ => None,
        }
    }

    pub fn preview(&self) -> Result<RenameMapping> {
        let (_, output) = self.validate()?;
        self.log();

        let mut engine = RenameEngine::new(self.options.clone())?;
        if let Some(window) = self.year_window {
            engine = engine.with_window(window);
        }
        engine.compute(&self.selection, &output)
    }

    pub fn execute(&self) -> Result<RenameOutcome> {
        let mapping = self.preview()?;
        if mapping.is_empty() {
            return Err(RolloverError::NothingToRename);
        }

        let (input, output) = self.validate()?;
        let report = apply_rename(&mapping, &input, &output)?;
        Ok(RenameOutcome { mapping, report })
    }

    fn log(&self) {
        let selected: Vec<&str> = self.selection.selected().collect();
        info!("Files selected for renaming: {:?}", selected);
        info!("Input folder: {:?}", self.input_folder);
        info!("Output folder: {:?}", self.output_folder);
        info!("Year enabled: {}", self.options.use_year);
        info!("Suffix enabled: {}", self.options.use_suffix);
        info!("Suffix selected: {:?}", self.options.suffix);
        info!("Year selected: {:?}", self.options.target_year);
    }
}
