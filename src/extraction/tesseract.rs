//! OCR via the Tesseract and Poppler command-line tools.
//!
//! Images go straight to `tesseract <image> stdout`. PDFs are rasterized page by page with
//! `pdftoppm` into a scratch directory and each page is recognized in order. Plain-text
//! documents are read as-is.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, info};

use crate::constants::{DEFAULT_OCR_DPI, DEFAULT_OCR_LANG, DEFAULT_OCR_PSM};

use super::document::{Document, DocumentSource, MediaType, join_pages};
use super::error::ExtractionError;
use super::provider::TextExtractor;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Tool locations and recognition options for [`TesseractExtractor`].
pub struct TesseractConfig {
    /// `tesseract` executable (looked up on `PATH` when relative).
    pub tesseract_bin: PathBuf,
    /// `pdftoppm` executable from Poppler.
    pub pdftoppm_bin: PathBuf,
    /// Tesseract language codes, e.g. `eng` or `eng+fra`.
    pub language: String,
    /// Rasterization resolution for PDF pages.
    pub dpi: u32,
    /// Tesseract page segmentation mode.
    pub psm: u32,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            tesseract_bin: PathBuf::from("tesseract"),
            pdftoppm_bin: PathBuf::from("pdftoppm"),
            language: DEFAULT_OCR_LANG.to_string(),
            dpi: DEFAULT_OCR_DPI,
            psm: DEFAULT_OCR_PSM,
        }
    }
}

/// A document resolved to a readable path; byte streams are spilled to a scratch dir
/// that lives as long as this value.
struct Materialized {
    path: PathBuf,
    _scratch: Option<TempDir>,
}

#[derive(Debug, Clone, Default)]
/// [`TextExtractor`] backed by external OCR tools.
pub struct TesseractExtractor {
    config: TesseractConfig,
}

impl TesseractExtractor {
    pub fn new(config: TesseractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TesseractConfig {
        &self.config
    }

    async fn extract_plain_text(&self, document: &Document) -> Result<String, ExtractionError> {
        let bytes = match document.source() {
            DocumentSource::Path(path) => tokio::fs::read(path)
                .await
                .map_err(|e| ExtractionError::io(path, e))?,
            DocumentSource::Bytes { data, .. } => data.to_vec(),
        };

        Ok(String::from_utf8_lossy(&bytes).trim().to_string())
    }

    async fn ocr_image(&self, image: &Path) -> Result<String, ExtractionError> {
        let args: Vec<OsString> = vec![
            image.as_os_str().to_owned(),
            "stdout".into(),
            "-l".into(),
            self.config.language.clone().into(),
            "--psm".into(),
            self.config.psm.to_string().into(),
        ];

        let stdout = self.run(&self.config.tesseract_bin, &args).await?;
        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }

    async fn extract_pdf(&self, pdf: &Path, label: &str) -> Result<String, ExtractionError> {
        let scratch = scratch_dir()?;
        let prefix = scratch.path().join("page");

        let args: Vec<OsString> = vec![
            "-r".into(),
            self.config.dpi.to_string().into(),
            "-png".into(),
            pdf.as_os_str().to_owned(),
            prefix.into_os_string(),
        ];
        self.run(&self.config.pdftoppm_bin, &args).await?;

        let pages = rendered_pages(scratch.path()).await?;
        if pages.is_empty() {
            return Err(ExtractionError::EmptyDocument {
                document: label.to_string(),
            });
        }

        debug!(document = %label, pages = pages.len(), "PDF rasterized");

        let mut texts = Vec::with_capacity(pages.len());
        for page in &pages {
            texts.push(self.ocr_image(page).await?);
        }

        Ok(join_pages(&texts))
    }

    async fn run(&self, program: &Path, args: &[OsString]) -> Result<Vec<u8>, ExtractionError> {
        let program_name = program.display().to_string();
        debug!(program = %program_name, ?args, "Running extraction tool");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ExtractionError::CommandFailed {
                program: program_name.clone(),
                reason: if e.kind() == io::ErrorKind::NotFound {
                    "executable not found".to_string()
                } else {
                    e.to_string()
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::CommandFailed {
                program: program_name,
                reason: format!("{}: {}", output.status, stderr.trim()),
            });
        }

        Ok(output.stdout)
    }
}

impl TextExtractor for TesseractExtractor {
    async fn extract_text(&self, document: &Document) -> Result<String, ExtractionError> {
        let label = document.label();
        let media_type = document.media_type();

        let text = match media_type {
            MediaType::PlainText => self.extract_plain_text(document).await?,
            MediaType::Image => {
                let input = materialize(document).await?;
                self.ocr_image(&input.path).await?
            }
            MediaType::Pdf => {
                let input = materialize(document).await?;
                self.extract_pdf(&input.path, &label).await?
            }
        };

        info!(
            document = %label,
            media_type = %media_type,
            text_len = text.len(),
            "Text extracted"
        );

        Ok(text)
    }
}

fn scratch_dir() -> Result<TempDir, ExtractionError> {
    tempfile::Builder::new()
        .prefix("docsim-")
        .tempdir()
        .map_err(|e| ExtractionError::io(std::env::temp_dir(), e))
}

async fn materialize(document: &Document) -> Result<Materialized, ExtractionError> {
    match document.source() {
        DocumentSource::Path(path) => {
            let metadata = tokio::fs::metadata(path)
                .await
                .map_err(|e| ExtractionError::io(path, e))?;
            if !metadata.is_file() {
                return Err(ExtractionError::io(
                    path,
                    io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
                ));
            }
            Ok(Materialized {
                path: path.clone(),
                _scratch: None,
            })
        }
        DocumentSource::Bytes { data, .. } => {
            let scratch = scratch_dir()?;
            let path = scratch.path().join(format!(
                "input.{}",
                document.media_type().default_extension()
            ));
            tokio::fs::write(&path, &data[..])
                .await
                .map_err(|e| ExtractionError::io(&path, e))?;
            Ok(Materialized {
                path,
                _scratch: Some(scratch),
            })
        }
    }
}

/// Page images written by `pdftoppm`, in page order.
///
/// `pdftoppm` zero-pads page numbers to a common width, so lexical order is page order.
async fn rendered_pages(dir: &Path) -> Result<Vec<PathBuf>, ExtractionError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| ExtractionError::io(dir, e))?;

    let mut pages = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ExtractionError::io(dir, e))?
    {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "png") {
            pages.push(path);
        }
    }

    pages.sort();
    Ok(pages)
}
