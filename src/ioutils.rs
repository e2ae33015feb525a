use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Relative file path to raw content, written under a target directory.
pub type NewFiles = BTreeMap<PathBuf, Vec<u8>>;

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Appends `content` to `dest_path`, creating the file when missing.
pub fn append_file<P: AsRef<Path>>(content: &[u8], dest_path: P) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dest_path.as_ref())?;
    file.write_all(content)?;
    Ok(())
}

/// Drops `.` components so `./a/b` and `a/b` name the same entry.
pub fn normalize_key<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref()
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Fails when `target` exists or one of its ancestors below `target_dir` is a file.
fn check_target(target_dir: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        return Err(Error::FileExists { path: target.display().to_string() });
    }
    let mut ancestor = target.parent();
    while let Some(dir) = ancestor {
        if dir == target_dir || dir.as_os_str().is_empty() {
            break;
        }
        if dir.is_file() {
            return Err(Error::DirectoryConflict { path: dir.display().to_string() });
        }
        ancestor = dir.parent();
    }
    Ok(())
}

/// Writes every entry of `files` below `target_dir`.
///
/// All paths are checked before anything is written, so a conflict leaves
/// the filesystem untouched. A failure during the write pass is not rolled
/// back and may leave earlier files in place.
pub fn safe_write_files<P: AsRef<Path>>(files: &NewFiles, target_dir: P) -> Result<()> {
    let target_dir = target_dir.as_ref();

    let mut targets = BTreeSet::new();
    for relative in files.keys() {
        let target = target_dir.join(normalize_key(relative));
        check_target(target_dir, &target)?;
        if !targets.insert(target.clone()) {
            return Err(Error::FileExists { path: target.display().to_string() });
        }
    }

    for (relative, content) in files {
        let target = target_dir.join(normalize_key(relative));
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                create_dir_all(parent)?;
            }
        }
        log::info!("Writing '{}'", target.display());
        append_file(content, &target)?;
    }
    Ok(())
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
