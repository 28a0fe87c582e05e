//! Reads logbook assets (scripts and the header image) from disk.
//!
//! There is no cache. Every call opens the file, reads it completely and
//! closes it again before returning, so an edited script is served as-is on
//! the next request.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::content;
use crate::error::{LogbookError, Result};
use crate::models::NamedAsset;

/// Loads files relative to a fixed asset root.
#[derive(Debug, Clone)]
pub struct AssetLoader {
    root: PathBuf,
}

/// The bytes of a [`NamedAsset`], ready to be sent as a download.
#[derive(Debug, Clone)]
pub struct Download {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    pub modified: Option<DateTime<Utc>>,
}

impl AssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read the whole file at `path` (relative to the root).
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        self.read(path.as_ref()).map(|(bytes, _)| bytes)
    }

    /// Load a catalogued asset together with its download metadata.
    pub fn download(&self, asset: &NamedAsset) -> Result<Download> {
        let (bytes, modified) = self.read(Path::new(asset.path))?;
        tracing::debug!(file = asset.file_name, size = bytes.len(), "Loaded asset");
        Ok(Download {
            file_name: asset.file_name,
            content_type: asset.content_type,
            bytes,
            modified,
        })
    }

    /// Resolve a download by file name. Names outside the catalogue are
    /// reported as missing files.
    pub fn find(&self, file_name: &str) -> Result<Download> {
        let asset = content::find_asset(file_name)
            .ok_or_else(|| LogbookError::FileNotFound(PathBuf::from(file_name)))?;
        self.download(asset)
    }

    fn read(&self, path: &Path) -> Result<(Vec<u8>, Option<DateTime<Utc>>)> {
        let full = self.root.join(path);
        let read_error = |source: io::Error| match source.kind() {
            io::ErrorKind::NotFound => LogbookError::FileNotFound(full.clone()),
            _ => LogbookError::ReadError {
                path: full.clone(),
                source,
            },
        };

        let mut file = File::open(&full).map_err(read_error)?;
        let metadata = file.metadata().map_err(read_error)?;
        if metadata.is_dir() {
            return Err(LogbookError::ReadError {
                path: full.clone(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "is a directory"),
            });
        }

        let mut bytes = Vec::with_capacity(metadata.len() as usize);
        file.read_to_end(&mut bytes).map_err(read_error)?;

        let modified = metadata.modified().ok().map(DateTime::<Utc>::from);
        Ok((bytes, modified))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let loader = AssetLoader::new(dir.path());

        let err = loader.load("gzip.sh").unwrap_err();
        assert!(matches!(err, LogbookError::FileNotFound(p) if p.ends_with("gzip.sh")));
    }

    #[test]
    fn directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        let loader = AssetLoader::new(dir.path());

        assert!(matches!(
            loader.load("assets"),
            Err(LogbookError::ReadError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_file_is_read_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gzip.sh");
        std::fs::write(&path, b"#!/bin/bash\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();
        // root ignores file modes
        if File::open(&path).is_ok() {
            return;
        }
        let loader = AssetLoader::new(dir.path());

        let err = loader.load("gzip.sh").unwrap_err();
        assert!(matches!(
            &err,
            LogbookError::ReadError { path, source }
                if path.ends_with("gzip.sh") && source.kind() == io::ErrorKind::PermissionDenied
        ));
        assert!(matches!(
            loader.download(&crate::content::GZIP),
            Err(LogbookError::ReadError { .. })
        ));
    }

    #[test]
    fn find_rejects_uncatalogued_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("secret.txt"), b"nope").unwrap();
        let loader = AssetLoader::new(dir.path());

        assert!(matches!(
            loader.find("secret.txt"),
            Err(LogbookError::FileNotFound(_))
        ));
    }
}
