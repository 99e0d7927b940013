use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::ExtractionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Declared media type of a [`Document`].
pub enum MediaType {
    /// A single raster image (one page).
    Image,
    /// A multi-page PDF container.
    Pdf,
    /// Already-digital UTF-8 text; no recognition needed.
    PlainText,
}

impl MediaType {
    const IMAGE_EXTENSIONS: &'static [&'static str] =
        &["png", "jpg", "jpeg", "tif", "tiff", "bmp", "webp", "gif"];

    /// Infers the media type from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        if Self::IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Image)
        } else if ext == "pdf" {
            Some(Self::Pdf)
        } else if ext == "txt" || ext == "text" {
            Some(Self::PlainText)
        } else {
            None
        }
    }

    /// Infers the media type from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ExtractionError> {
        let ext = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            ExtractionError::UnsupportedFormat {
                detail: format!("{} has no file extension", path.display()),
            }
        })?;

        Self::from_extension(ext).ok_or_else(|| ExtractionError::UnsupportedFormat {
            detail: format!("{} (.{ext})", path.display()),
        })
    }

    /// Extension used when spilling in-memory bytes to a temp file.
    pub fn default_extension(&self) -> &'static str {
        match self {
            MediaType::Image => "png",
            MediaType::Pdf => "pdf",
            MediaType::PlainText => "txt",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Pdf => write!(f, "pdf"),
            MediaType::PlainText => write!(f, "plain text"),
        }
    }
}

#[derive(Debug, Clone)]
/// Where a document's bytes live.
pub enum DocumentSource {
    Path(PathBuf),
    Bytes { name: String, data: Arc<[u8]> },
}

#[derive(Debug, Clone)]
/// Immutable reference to a source document plus its declared media type.
pub struct Document {
    source: DocumentSource,
    media_type: MediaType,
}

impl Document {
    /// References a file on disk, inferring its media type from the extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, ExtractionError> {
        let path = path.into();
        let media_type = MediaType::from_path(&path)?;
        Ok(Self {
            source: DocumentSource::Path(path),
            media_type,
        })
    }

    /// References a file on disk with an explicitly declared media type.
    pub fn with_media_type(path: impl Into<PathBuf>, media_type: MediaType) -> Self {
        Self {
            source: DocumentSource::Path(path.into()),
            media_type,
        }
    }

    /// Wraps an in-memory byte stream (e.g. an upload).
    pub fn from_bytes(name: impl Into<String>, data: impl Into<Arc<[u8]>>, media_type: MediaType) -> Self {
        Self {
            source: DocumentSource::Bytes {
                name: name.into(),
                data: data.into(),
            },
            media_type,
        }
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// File path, if the document lives on disk.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            DocumentSource::Path(path) => Some(path),
            DocumentSource::Bytes { .. } => None,
        }
    }

    /// Display name: the path for files, the given name for byte streams.
    pub fn label(&self) -> String {
        match &self.source {
            DocumentSource::Path(path) => path.display().to_string(),
            DocumentSource::Bytes { name, .. } => name.clone(),
        }
    }
}

/// Joins per-page text with a single space and trims the ends.
///
/// Blank pages contribute nothing, so they never produce doubled separators.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|page| page.as_ref().trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
