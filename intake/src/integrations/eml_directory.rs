use shared_types::RawMessage;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use super::{parse_raw_message, MessageSource, SourceError};

/// Reads `*.eml` files from a directory in file name order.
///
/// The file stem becomes the message id.
pub struct EmlDirectorySource {
    pending: VecDeque<PathBuf>,
}

impl EmlDirectorySource {
    pub fn open(dir: &Path) -> Result<Self, SourceError> {
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("eml"))
            })
            .collect();
        paths.sort();

        tracing::info!("Found {} .eml files in {:?}", paths.len(), dir);

        Ok(Self {
            pending: paths.into(),
        })
    }
}

impl MessageSource for EmlDirectorySource {
    fn next_message(&mut self) -> Result<Option<RawMessage>, SourceError> {
        while let Some(path) = self.pending.pop_front() {
            let raw = fs::read(&path)?;
            let id = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();

            match parse_raw_message(&id, &raw) {
                Some(message) => return Ok(Some(message)),
                None => tracing::warn!("Failed to parse {:?}, skipping", path),
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::tests::APPLICATION_EML;

    #[test]
    fn test_yields_eml_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b-second.eml"), "Subject: Second\r\n\r\nbody\r\n").unwrap();
        fs::write(dir.path().join("a-first.eml"), APPLICATION_EML).unwrap();
        fs::write(dir.path().join("notes.txt"), "Subject: ignored\r\n\r\n").unwrap();

        let mut source = EmlDirectorySource::open(dir.path()).unwrap();

        let first = source.next_message().unwrap().unwrap();
        assert_eq!(first.id, "a-first");
        assert_eq!(first.attachments.len(), 1);

        let second = source.next_message().unwrap().unwrap();
        assert_eq!(second.id, "b-second");
        assert_eq!(second.subject, "Second");

        assert!(source.next_message().unwrap().is_none());
    }

    #[test]
    fn test_missing_directory_is_a_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = EmlDirectorySource::open(&dir.path().join("missing"));
        assert!(matches!(result, Err(SourceError::Io(_))));
    }
}
