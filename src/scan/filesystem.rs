use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const COPY_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Copy files under `root`, sorted so batch output is stable.
pub fn list_copy_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() && is_copy_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

fn is_copy_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            COPY_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
