use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

use chrono::{Datelike, Local};
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RolloverError};
use crate::selection::Selection;

/// Years this far either side of the current one count as rewritable.
pub const YEAR_TOLERANCE: i32 = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteOptions {
    pub use_year: bool,
    pub use_suffix: bool,
    pub target_year: String,
    pub suffix: String,
}

/// Inclusive range of numbers treated as years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    pub lower: i32,
    pub upper: i32,
}

impl YearWindow {
    pub fn around(year: i32) -> Self {
        Self {
            lower: year - YEAR_TOLERANCE,
            upper: year + YEAR_TOLERANCE,
        }
    }

    pub fn current() -> Self {
        Self::around(Local::now().year())
    }

    pub fn contains(&self, year: i32) -> bool {
        self.lower <= year && year <= self.upper
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameEntry {
    pub original: String,
    pub proposed: String,
}

/// Original filename to proposed filename, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenameMapping {
    entries: Vec<RenameEntry>,
}

impl RenameMapping {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenameEntry> {
        self.entries.iter()
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.original == original)
            .map(|entry| entry.proposed.as_str())
    }

    fn push(&mut self, original: &str, proposed: String) {
        self.entries.push(RenameEntry {
            original: original.to_string(),
            proposed,
        });
    }
}

#[derive(Debug)]
pub struct RenameEngine {
    options: RewriteOptions,
    /// Pinned window; `None` means the current year at each call.
    window: Option<YearWindow>,
    year_pattern: Regex,
}

impl RenameEngine {
    pub fn new(options: RewriteOptions) -> Result<Self> {
        if options.use_year {
            check_filename_text("Target year", &options.target_year)?;
        }
        if options.use_suffix {
            check_filename_text("Suffix", &options.suffix)?;
        }
        let year_pattern = Regex::new(r"\d{4}")?;

        Ok(Self {
            options,
            window: None,
            year_pattern,
        })
    }

    pub fn with_window(mut self, window: YearWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    pub fn window(&self) -> YearWindow {
        self.window.unwrap_or_else(YearWindow::current)
    }

    /// Proposed name for `name` under the current options. No filesystem access.
    pub fn rewrite_name(&self, name: &str) -> String {
        self.rewrite_within(name, self.window())
    }

    fn rewrite_within(&self, name: &str, window: YearWindow) -> String {
        let mut proposed = name.to_string();
        if self.options.use_year {
            proposed = self.rename_year_within(&proposed, window);
        }
        if self.options.use_suffix {
            proposed = add_suffix(&proposed, &self.options.suffix);
        }
        proposed
    }

    pub fn rename_year(&self, name: &str) -> String {
        self.rename_year_within(name, self.window())
    }

    fn rename_year_within(&self, name: &str, window: YearWindow) -> String {
        let is_year = |text: &str| {
            text.parse::<i32>()
                .map(|year| window.contains(year))
                .unwrap_or(false)
        };
        let found: Vec<&str> = self
            .year_pattern
            .find_iter(name)
            .map(|m| m.as_str())
            .collect();
        let target = &self.options.target_year;

        let mut rewritten = name.to_string();
        match found.as_slice() {
            [only] if is_year(only) => {
                debug!("Replacing year {} in '{}'", only, name);
                return rewritten.replacen(only, target, 1);
            }
            [_, _, ..] => {
                // Plain removal, so "a_2024_2023" leaves "a__".
                for year in found.iter().filter(|text| is_year(text)) {
                    debug!("Removing year {} from '{}'", year, rewritten);
                    rewritten = rewritten.replace(year, "");
                }
            }
            _ => {}
        }

        add_suffix(&rewritten, &format!(" ({})", target))
    }

    /// Builds the mapping for every selected file whose destination is still free.
    pub fn compute(&self, selection: &Selection, output_folder: &Path) -> Result<RenameMapping> {
        if !output_folder.is_dir() {
            return Err(RolloverError::FolderNotFound(output_folder.to_path_buf()));
        }

        let window = self.window();
        let mut mapping = RenameMapping::default();
        let mut claimed = HashSet::new();

        for original in selection.selected() {
            let proposed = self.rewrite_within(original, window);
            if Path::new(&proposed).file_name() != Some(OsStr::new(&proposed)) {
                return Err(RolloverError::config(format!(
                    "'{}' would be renamed to '{}', which is not a plain file name",
                    original, proposed
                )));
            }
            let destination = output_folder.join(&proposed);

            let exists = destination
                .try_exists()
                .map_err(|source| RolloverError::Inspect {
                    path: destination.clone(),
                    source,
                })?;
            if exists {
                info!("Skipping '{}': '{}' already exists", original, destination.display());
                continue;
            }
            if !claimed.insert(proposed.clone()) {
                info!("Skipping '{}': '{}' is already claimed by another file", original, proposed);
                continue;
            }

            debug!("Prepared '{}' -> '{}'", original, proposed);
            mapping.push(original, proposed);
        }

        Ok(mapping)
    }
}

/// Computes the mapping with the year window taken from today's date.
///
/// Options are checked the same way `OptionsBuilder::build` checks them.
pub fn compute(
    selection: &Selection,
    options: &RewriteOptions,
    output_folder: &Path,
) -> Result<RenameMapping> {
    RenameEngine::new(options.clone())?.compute(selection, output_folder)
}

/// Splits at the last dot; the extension keeps its dot and is empty without one.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(index) => (&name[..index], &name[index..]),
        None => (name, ""),
    }
}

pub fn add_suffix(name: &str, suffix: &str) -> String {
    let (stem, extension) = split_extension(name);
    format!("{}{}{}", stem, suffix, extension)
}

// Builder for rewrite options
#[derive(Debug, Default)]
pub struct OptionsBuilder {
    target_year: Option<String>,
    suffix: Option<String>,
}

impl OptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Some` enables year rewriting with that target.
    pub fn year(mut self, year: Option<String>) -> Self {
        self.target_year = year;
        self
    }

    /// `Some` enables suffix appending with that text.
    pub fn suffix(mut self, suffix: Option<String>) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn build(self) -> Result<RewriteOptions> {
        if let Some(year) = &self.target_year {
            if year.trim().is_empty() {
                return Err(RolloverError::config(
                    "Target year is required when year rewriting is enabled",
                ));
            }
            check_filename_text("Target year", year)?;
        }
        if let Some(suffix) = &self.suffix {
            check_filename_text("Suffix", suffix)?;
        }

        Ok(RewriteOptions {
            use_year: self.target_year.is_some(),
            use_suffix: self.suffix.is_some(),
            target_year: self.target_year.unwrap_or_default(),
            suffix: self.suffix.unwrap_or_default(),
        })
    }
}

fn check_filename_text(label: &str, text: &str) -> Result<()> {
    if text.contains(['/', '\\']) {
        return Err(RolloverError::config(format!(
            "{} must not contain path separators: {:?}",
            label, text
        )));
    }
    Ok(())
}
