use crate::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// A decoded image written to a uniquely named file for a path-only model.
///
/// The file is deleted when the guard is dropped, so it never outlives the
/// request that created it, whether that request succeeds or fails.
#[derive(Debug)]
pub struct ScratchImage {
    path: PathBuf,
    removed: bool,
}

impl ScratchImage {
    pub async fn create(dir: &Path, bytes: &[u8]) -> Result<Self> {
        let path = dir.join(format!("temp_{}.jpg", Uuid::new_v4().simple()));

        // Guard first, so a partially written file is cleaned up too.
        let image = Self {
            path,
            removed: false,
        };
        tokio::fs::write(&image.path, bytes).await?;

        debug!("Wrote {} bytes to {}", bytes.len(), image.path.display());
        Ok(image)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the file now, surfacing any I/O error.
    pub async fn remove(mut self) -> Result<()> {
        tokio::fs::remove_file(&self.path).await?;
        self.removed = true;
        Ok(())
    }
}

impl Drop for ScratchImage {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        // Failure paths only: a single blocking unlink on the current worker.
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed scratch image {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to remove scratch image {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}
