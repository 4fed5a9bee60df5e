//! Gathering of the input files of an extraction batch.
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Whatever};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A named batch of in-memory files,
/// read from one command line input.
#[derive(Debug)]
pub struct Batch {
    /// base name for the output directory
    pub name: String,
    /// entry name and full content of every file
    pub entries: Vec<(String, Vec<u8>)>,
}

/// Read every file of a ZIP archive, DICOM file or directory.
pub fn read_input(path: &Path) -> Result<Batch, Whatever> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "input".to_string());

    let entries = if path.is_dir() {
        read_directory(path)?
    } else if is_zip(path) {
        read_archive(path)?
    } else {
        let data = std::fs::read(path)
            .with_whatever_context(|_| format!("Could not read {}", path.display()))?;
        let entry_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());
        vec![(entry_name, data)]
    };

    Ok(Batch { name, entries })
}

fn is_zip(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

/// Whether the entry is a DICOMDIR index,
/// which holds no image.
fn is_dicomdir(entry_name: &str) -> bool {
    entry_name
        .rsplit(['/', '\\'])
        .next()
        .map(|name| name.eq_ignore_ascii_case("DICOMDIR"))
        .unwrap_or(false)
}

/// Largest buffer reserved up front for a ZIP entry.
const MAX_RESERVED_ENTRY_LEN: usize = 64 << 20;

/// Initial capacity for an entry declaring `size` bytes.
/// The declared size comes from the archive and is not trusted.
fn entry_capacity(size: u64) -> usize {
    usize::try_from(size)
        .unwrap_or(usize::MAX)
        .min(MAX_RESERVED_ENTRY_LEN)
}

fn read_archive(path: &Path) -> Result<Vec<(String, Vec<u8>)>, Whatever> {
    let file = File::open(path)
        .with_whatever_context(|_| format!("Could not open {}", path.display()))?;
    let mut archive = zip::ZipArchive::new(file)
        .with_whatever_context(|_| format!("Could not read ZIP archive {}", path.display()))?;

    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_whatever_context(|_| format!("Could not read entry #{} of {}", i, path.display()))?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        if is_dicomdir(&name) {
            debug!("Skipping {}", name);
            continue;
        }
        let mut data = Vec::with_capacity(entry_capacity(entry.size()));
        if let Err(e) = entry.read_to_end(&mut data) {
            warn!("Skipping entry {} of {}: {}", name, path.display(), e);
            continue;
        }
        entries.push((name, data));
    }
    Ok(entries)
}

fn read_directory(path: &Path) -> Result<Vec<(String, Vec<u8>)>, Whatever> {
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|f| !f.file_type().is_dir())
        .map(|f| f.into_path())
        .collect();
    files.sort();

    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        let name = file
            .strip_prefix(path)
            .unwrap_or(&file)
            .to_string_lossy()
            .into_owned();
        if is_dicomdir(&name) {
            debug!("Skipping {}", name);
            continue;
        }
        match std::fs::read(&file) {
            Ok(data) => entries.push((name, data)),
            Err(e) => warn!("Skipping {}: {}", file.display(), e),
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dicomdir_entries_are_recognized() {
        assert!(is_dicomdir("DICOMDIR"));
        assert!(is_dicomdir("study/dicomdir"));
        assert!(is_dicomdir("study\\DICOMDIR"));
        assert!(!is_dicomdir("study/DICOMDIR.dcm"));
        assert!(!is_dicomdir("IM0001"));
    }

    #[test]
    fn zip_extension_is_case_insensitive() {
        assert!(is_zip(Path::new("export.zip")));
        assert!(is_zip(Path::new("/tmp/EXPORT.ZIP")));
        assert!(!is_zip(Path::new("image.dcm")));
        assert!(!is_zip(Path::new("zip")));
    }

    #[test]
    fn declared_entry_size_is_capped() {
        assert_eq!(entry_capacity(1024), 1024);
        assert_eq!(entry_capacity(u64::MAX), MAX_RESERVED_ENTRY_LEN);
        assert_eq!(entry_capacity(1 << 40), MAX_RESERVED_ENTRY_LEN);
    }
}
