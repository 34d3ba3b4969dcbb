use crate::constants::{ILLUSTRATIONS_SUBDIR, PHOTOS_SUBDIR};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A photo written by [`MediaLibrary::save_photo`]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoredPhoto {
    pub photo_id: String,
    pub file_url: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Illustration {
    pub name: String,
    pub url: String,
}

/// Photos and illustrations kept as plain files under the static directory.
///
/// Everything stored here is reachable through the `/static` file service,
/// so returned URLs are `/static/<subdir>/<file>`.
#[derive(Debug, Clone)]
pub struct MediaLibrary {
    static_dir: PathBuf,
}

impl MediaLibrary {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        MediaLibrary {
            static_dir: static_dir.into(),
        }
    }

    pub fn photos_dir(&self) -> PathBuf {
        self.static_dir.join(PHOTOS_SUBDIR)
    }

    pub fn illustrations_dir(&self) -> PathBuf {
        self.static_dir.join(ILLUSTRATIONS_SUBDIR)
    }

    /// Store an upload as `photos/<uuid><.ext>`. Only the extension of the
    /// client's file name is kept.
    pub async fn save_photo(&self, original_name: &str, bytes: &[u8]) -> io::Result<StoredPhoto> {
        let dir = self.photos_dir();
        tokio::fs::create_dir_all(&dir).await?;

        let photo_id = Uuid::new_v4().to_string();
        let file_name = match safe_extension(original_name) {
            Some(ext) => format!("{}.{}", photo_id, ext),
            None => photo_id.clone(),
        };

        tokio::fs::write(dir.join(&file_name), bytes).await?;
        tracing::info!(photo_id = %photo_id, size = bytes.len(), "Stored uploaded photo {}", file_name);

        Ok(StoredPhoto {
            photo_id,
            file_url: format!("/static/{}/{}", PHOTOS_SUBDIR, file_name),
        })
    }

    /// URLs of every stored photo, sorted. A missing directory is an empty list.
    pub async fn list_photos(&self) -> io::Result<Vec<String>> {
        let files = list_files(&self.photos_dir()).await?;
        Ok(files
            .into_iter()
            .map(|file| format!("/static/{}/{}", PHOTOS_SUBDIR, file))
            .collect())
    }

    pub async fn list_illustrations(&self) -> io::Result<Vec<Illustration>> {
        let files = list_files(&self.illustrations_dir()).await?;
        Ok(files
            .into_iter()
            .map(|file| Illustration {
                name: file_stem(&file),
                url: format!("/static/{}/{}", ILLUSTRATIONS_SUBDIR, file),
            })
            .collect())
    }
}

/// Extension of an uploaded file name, if it is short and alphanumeric
fn safe_extension(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    if ext.is_empty() || ext.len() > 10 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
        .to_string()
}

/// Regular file names in `dir`, sorted
async fn list_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            files.push(name.to_string());
        }
    }
    files.sort();
    Ok(files)
}
