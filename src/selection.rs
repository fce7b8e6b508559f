use std::fs;
use std::path::Path;

use log::warn;

use crate::error::{Result, RolloverError};

/// Filenames of the input folder, each flagged selected or not, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    files: Vec<(String, bool)>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists the regular files directly inside `directory`, sorted by name, all selected.
    pub fn from_directory(directory: &Path) -> Result<Self> {
        if !directory.is_dir() {
            return Err(RolloverError::FolderNotFound(directory.to_path_buf()));
        }

        let mut names: Vec<String> = fs::read_dir(directory)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
            .filter_map(|entry| match entry.file_name().into_string() {
                Ok(name) => Some(name),
                Err(raw) => {
                    warn!("Skipping '{}': the name is not valid UTF-8", raw.to_string_lossy());
                    None
                }
            })
            .collect();
        names.sort();

        Ok(names.into_iter().map(|name| (name, true)).collect())
    }

    /// Sets the flag for `name`, appending it when not yet present.
    pub fn set(&mut self, name: &str, selected: bool) {
        match self.files.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = selected,
            None => self.files.push((name.to_string(), selected)),
        }
    }

    pub fn toggle(&mut self, name: &str) {
        if let Some(entry) = self.files.iter_mut().find(|(existing, _)| existing == name) {
            entry.1 = !entry.1;
        }
    }

    pub fn select_all(&mut self) {
        self.files.iter_mut().for_each(|entry| entry.1 = true);
    }

    pub fn select_none(&mut self) {
        self.files.iter_mut().for_each(|entry| entry.1 = false);
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.files
            .iter()
            .any(|(existing, selected)| existing == name && *selected)
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(name, _)| name.as_str())
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.files.iter().map(|(name, selected)| (name.as_str(), *selected))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FromIterator<(String, bool)> for Selection {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for (name, selected) in iter {
            selection.set(&name, selected);
        }
        selection
    }
}
