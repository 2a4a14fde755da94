use std::fs;
use std::path::PathBuf;

use super::StoreError;

/// Writes raw attachment bytes under one directory, one file per (message, filename)
pub struct AttachmentStore {
    dir: PathBuf,
}

impl AttachmentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store the bytes and return the reference recorded in AttachmentPaths
    pub fn save(
        &self,
        message_id: &str,
        filename: &str,
        content: &[u8],
    ) -> Result<String, StoreError> {
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(format!(
            "{}_{}",
            sanitize_component(message_id),
            sanitize_component(filename)
        ));
        fs::write(&path, content)?;

        Ok(path.display().to_string())
    }
}

fn sanitize_component(value: &str) -> String {
    let cleaned: String = value
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "attachment".to_string()
    } else {
        cleaned
    }
}
