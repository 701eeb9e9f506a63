//! File-size report printed after a generator run

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TextureError};

/// One generated file and its size on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Recursively collect every `.jpg` file under `root`, sorted by path.
pub fn collect_jpeg_sizes(root: &Path) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    walk(root, &mut entries)?;
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

fn walk(dir: &Path, entries: &mut Vec<FileEntry>) -> Result<()> {
    let read_dir = fs::read_dir(dir).map_err(|e| TextureError::io(dir, e))?;
    for entry in read_dir {
        let entry = entry.map_err(|e| TextureError::io(dir, e))?;
        let path = entry.path();
        let metadata = entry.metadata().map_err(|e| TextureError::io(&path, e))?;

        if metadata.is_dir() {
            walk(&path, entries)?;
        } else if path.extension().is_some_and(|ext| ext == "jpg") {
            entries.push(FileEntry {
                path,
                bytes: metadata.len(),
            });
        }
    }
    Ok(())
}

/// One `  <path>: <bytes> bytes` line per entry
pub fn format_report(entries: &[FileEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("  {}: {} bytes\n", e.path.display(), e.bytes))
        .collect()
}

pub fn print_report(entries: &[FileEntry]) {
    print!("{}", format_report(entries));
}
