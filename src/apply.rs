use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use log::{debug, info, warn};

use crate::error::{Result, RolloverError};
use crate::rename_engine::RenameMapping;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub copied: usize,
}

/// Copies every mapped file from `input_folder` into `output_folder` under its new name.
///
/// Stops at the first failure. Files copied before it stay in place, and sources are
/// never touched.
pub fn apply_rename(
    mapping: &RenameMapping,
    input_folder: &Path,
    output_folder: &Path,
) -> Result<ApplyReport> {
    let mut report = ApplyReport::default();

    for entry in mapping.iter() {
        let from = input_folder.join(&entry.original);
        let to = output_folder.join(&entry.proposed);

        copy_new(&from, &to).map_err(|source| RolloverError::Copy {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;

        debug!("Copied '{}' to '{}'", from.display(), to.display());
        report.copied += 1;
    }

    info!("Copied {} file(s) into {}", report.copied, output_folder.display());
    Ok(report)
}

// Refuses to write over anything that showed up after the mapping was built.
fn copy_new(from: &Path, to: &Path) -> io::Result<()> {
    let mut source = File::open(from)?;
    let permissions = source.metadata()?.permissions();

    let mut destination = OpenOptions::new().write(true).create_new(true).open(to)?;
    let written = io::copy(&mut source, &mut destination).and_then(|_| destination.sync_all());
    drop(destination);
    let written = written.and_then(|()| fs::set_permissions(to, permissions));

    // A partial file would look like a collision on the next run.
    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(to) {
            warn!("Could not remove partial copy '{}': {}", to.display(), cleanup);
        }
        return Err(e);
    }
    Ok(())
}
