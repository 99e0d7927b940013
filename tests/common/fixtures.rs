use std::path::{Path, PathBuf};

use docsim::{
    ComparisonPipeline, MiniLmConfig, MiniLmEmbedder, PipelineConfig, TesseractConfig,
    TesseractExtractor,
};

pub const ESSAY: &str = "The mitochondria is the powerhouse of the cell. \
    It converts nutrients into adenosine triphosphate through cellular respiration.";

pub const UNRELATED: &str = "Quarterly revenue grew by twelve percent, \
    driven mostly by subscription renewals in the northern region.";

/// Writes `contents` to `dir/name` and returns the full path.
pub fn write_document(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write fixture document");
    path
}

/// Tesseract backend pointed at binaries that cannot exist, so only plain-text documents
/// succeed.
pub fn offline_extractor() -> TesseractExtractor {
    TesseractExtractor::new(TesseractConfig {
        tesseract_bin: PathBuf::from("/nonexistent/bin/tesseract"),
        pdftoppm_bin: PathBuf::from("/nonexistent/bin/pdftoppm"),
        ..Default::default()
    })
}

pub fn stub_embedder() -> MiniLmEmbedder {
    MiniLmEmbedder::load(MiniLmConfig::stub()).expect("stub embedder loads")
}

pub fn stub_pipeline() -> ComparisonPipeline<TesseractExtractor, MiniLmEmbedder> {
    ComparisonPipeline::with_config(offline_extractor(), stub_embedder(), PipelineConfig::default())
}
