use std::path::PathBuf;

use chrono::{Datelike, Local};
use log::{debug, error};
use ratatui::widgets::{ListState, ScrollbarState};

use crate::error::{Result, RolloverError};
use crate::rename_engine::{OptionsBuilder, RenameMapping, RewriteOptions, YearWindow};
use crate::request::{RenameRequest, SAME_FOLDER_WARNING};
use crate::selection::Selection;
use super::models::{ConfigInputMode, Feedback, FeedbackLevel, FileItem, ProcessingStatus};

#[derive(Debug)]
pub struct App {
    pub files: Vec<FileItem>,
    pub list_state: ListState,
    pub scroll_state: ScrollbarState,
    pub show_help: bool,
    pub show_preview: bool,
    pub config_input_mode: ConfigInputMode,
    pub input_folder: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub input_folder_input: String,
    pub output_folder_input: String,
    pub year_input: String,
    pub suffix_input: String,
    pub use_year: bool,
    pub use_suffix: bool,
    pub year_window: Option<YearWindow>,
    pub prepared: usize,
    pub feedback: Option<Feedback>,
    pub finished: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            files: Vec::new(),
            list_state,
            scroll_state: ScrollbarState::default(),
            show_help: false,
            show_preview: true,
            config_input_mode: ConfigInputMode::InputFolder,
            input_folder: None,
            output_folder: None,
            input_folder_input: String::new(),
            output_folder_input: String::new(),
            year_input: Local::now().year().to_string(),
            suffix_input: String::new(),
            use_year: false,
            use_suffix: false,
            year_window: None,
            prepared: 0,
            feedback: None,
            finished: false,
            should_quit: false,
        }
    }

    pub fn with_folders(input: Option<String>, output: Option<String>) -> Self {
        let mut app = Self::new();

        if let Some(output) = output {
            app.output_folder_input = output;
            app.load_output_folder();
        }
        if let Some(input) = input {
            app.input_folder_input = input;
            app.load_input_folder();
            if app.input_folder.is_some() {
                app.config_input_mode = ConfigInputMode::Files;
            }
        }

        app.refresh();
        app
    }

    pub fn selection(&self) -> Selection {
        self.files
            .iter()
            .map(|file| (file.name.clone(), file.selected))
            .collect()
    }

    pub fn options(&self) -> Result<RewriteOptions> {
        OptionsBuilder::new()
            .year(self.use_year.then(|| self.year_input.clone()))
            .suffix(self.use_suffix.then(|| self.suffix_input.clone()))
            .build()
    }

    pub fn request(&self) -> Result<RenameRequest> {
        let request = RenameRequest::new(
            self.input_folder.clone(),
            self.output_folder.clone(),
            self.selection(),
            self.options()?,
        );

        Ok(match self.year_window {
            Some(window) => request.with_year_window(window),
            None => request,
        })
    }

    pub fn load_input_folder(&mut self) {
        let text = self.input_folder_input.trim();
        if text.is_empty() {
            self.input_folder = None;
            self.files.clear();
            return;
        }

        let path = PathBuf::from(text);
        match Selection::from_directory(&path) {
            Ok(selection) => {
                self.files = selection
                    .iter()
                    .map(|(name, selected)| FileItem {
                        name: name.to_string(),
                        selected,
                        proposed: None,
                        status: ProcessingStatus::Pending,
                    })
                    .collect();
                debug!("Loaded {} file(s) from {}", self.files.len(), path.display());
                self.input_folder = Some(path);
                self.list_state.select(Some(0));
                self.scroll_state = ScrollbarState::new(self.files.len());
            }
            Err(e) => {
                self.input_folder = None;
                self.files.clear();
                self.set_feedback(FeedbackLevel::Error, e.to_string());
            }
        }
    }

    pub fn load_output_folder(&mut self) {
        let text = self.output_folder_input.trim();
        if text.is_empty() {
            self.output_folder = None;
            return;
        }

        let path = PathBuf::from(text);
        if path.is_dir() {
            self.output_folder = Some(path);
        } else {
            self.output_folder = None;
            self.set_feedback(
                FeedbackLevel::Error,
                RolloverError::FolderNotFound(path).to_string(),
            );
        }
    }

    /// Recomputes the live preview and the same-folder warning.
    pub fn refresh(&mut self) {
        let mapping = match self.preview() {
            Ok(mapping) => mapping,
            Err(e) if e.is_precondition() => None,
            Err(e) => {
                self.set_feedback(FeedbackLevel::Error, e.to_string());
                None
            }
        };

        for file in &mut self.files {
            file.proposed = mapping
                .as_ref()
                .and_then(|mapping| mapping.get(&file.name))
                .map(str::to_string);
            file.status = match (&mapping, &file.proposed) {
                (Some(_), None) => ProcessingStatus::Skipped,
                _ => ProcessingStatus::Pending,
            };
        }
        self.prepared = mapping.map(|mapping| mapping.len()).unwrap_or(0);

        self.validate_folder_choices();
    }

    fn preview(&self) -> Result<Option<RenameMapping>> {
        if self.input_folder.is_none() || self.output_folder.is_none() {
            return Ok(None);
        }
        self.request()?.preview().map(Some)
    }

    fn validate_folder_choices(&mut self) {
        let same = matches!(
            (&self.input_folder, &self.output_folder),
            (Some(input), Some(output)) if input == output
        );

        if same {
            self.set_feedback(FeedbackLevel::Warning, SAME_FOLDER_WARNING.to_string());
        } else if self
            .feedback
            .as_ref()
            .is_some_and(|feedback| feedback.text == SAME_FOLDER_WARNING)
        {
            self.feedback = None;
        }
    }

    pub fn rename(&mut self) {
        if self.finished {
            return;
        }
        self.feedback = None;

        let result = self.request().and_then(|request| request.execute());
        match result {
            Ok(outcome) => {
                self.set_feedback(FeedbackLevel::Success, outcome.status_message());
                self.finished = true;
                self.input_folder = None;
                self.input_folder_input.clear();
                self.files.clear();
                self.prepared = 0;
                self.list_state.select(Some(0));
                self.refresh();
            }
            Err(e) => {
                error!("Rename failed: {}", e);
                self.set_feedback(FeedbackLevel::Error, e.to_string());
            }
        }
    }

    pub fn reset(&mut self) {
        debug!("Resetting...");
        let window = self.year_window;
        *self = App::new();
        self.year_window = window;
    }

    pub fn next(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.files.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i);
    }

    pub fn previous(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.files.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i);
    }

    pub fn toggle_current(&mut self) {
        if let Some(file) = self
            .list_state
            .selected()
            .and_then(|i| self.files.get_mut(i))
        {
            file.selected = !file.selected;
            self.refresh();
        }
    }

    pub fn select_all(&mut self) {
        self.files.iter_mut().for_each(|file| file.selected = true);
        self.refresh();
    }

    pub fn select_none(&mut self) {
        self.files.iter_mut().for_each(|file| file.selected = false);
        self.refresh();
    }

    pub fn toggle_use_year(&mut self) {
        self.use_year = !self.use_year;
        self.refresh();
    }

    pub fn toggle_use_suffix(&mut self) {
        self.use_suffix = !self.use_suffix;
        self.refresh();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_preview(&mut self) {
        self.show_preview = !self.show_preview;
    }

    pub fn focus_next(&mut self) {
        self.config_input_mode = self.config_input_mode.next();
    }

    pub fn focus_previous(&mut self) {
        self.config_input_mode = self.config_input_mode.previous();
    }

    pub fn handle_char(&mut self, c: char) {
        match self.config_input_mode {
            ConfigInputMode::InputFolder => self.input_folder_input.push(c),
            ConfigInputMode::OutputFolder => self.output_folder_input.push(c),
            ConfigInputMode::Year => {
                self.year_input.push(c);
                self.refresh();
            }
            ConfigInputMode::Suffix => {
                self.suffix_input.push(c);
                self.refresh();
            }
            ConfigInputMode::Files => match c {
                ' ' => self.toggle_current(),
                'a' => self.select_all(),
                'n' => self.select_none(),
                'j' => self.next(),
                'k' => self.previous(),
                'p' => self.toggle_preview(),
                _ => {}
            },
        }
    }

    pub fn handle_backspace(&mut self) {
        match self.config_input_mode {
            ConfigInputMode::InputFolder => {
                self.input_folder_input.pop();
            }
            ConfigInputMode::OutputFolder => {
                self.output_folder_input.pop();
            }
            ConfigInputMode::Year => {
                self.year_input.pop();
                self.refresh();
            }
            ConfigInputMode::Suffix => {
                self.suffix_input.pop();
                self.refresh();
            }
            ConfigInputMode::Files => {}
        }
    }

    pub fn handle_enter(&mut self) {
        match self.config_input_mode {
            ConfigInputMode::InputFolder => {
                self.feedback = None;
                self.load_input_folder();
                self.refresh();
                self.focus_next();
            }
            ConfigInputMode::OutputFolder => {
                self.feedback = None;
                self.load_output_folder();
                self.refresh();
                self.focus_next();
            }
            ConfigInputMode::Year | ConfigInputMode::Suffix => self.focus_next(),
            ConfigInputMode::Files => self.toggle_current(),
        }
    }

    pub fn set_feedback(&mut self, level: FeedbackLevel, text: String) {
        self.feedback = Some(Feedback { level, text });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
