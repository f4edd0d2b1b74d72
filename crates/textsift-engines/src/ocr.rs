//! OCR through external tools: poppler's `pdftoppm` and `tesseract`
//!
//! Both are optional system executables. Availability is probed once with a
//! version query; a missing binary simply means the OCR strategy is absent.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use textsift_domain::traits::{PageRasterizer, TextRecognizer};
use textsift_domain::EngineError;
use tracing::debug;

/// Check whether an executable answers a version query
///
/// Some tools (`pdftoppm -v`) print their version to stderr and exit
/// non-zero, so `status_must_succeed` lets the caller accept any exit status
/// as long as the process could be spawned.
pub fn command_available(program: &str, version_arg: &str, status_must_succeed: bool) -> bool {
    Command::new(program)
        .arg(version_arg)
        .output()
        .map(|o| !status_must_succeed || o.status.success())
        .unwrap_or(false)
}

/// Renders PDF pages to PNG files with `pdftoppm`
#[derive(Debug, Clone)]
pub struct PdftoppmRasterizer {
    program: String,
    dpi: u32,
}

impl PdftoppmRasterizer {
    /// Create a rasterizer rendering at `dpi`
    pub fn new(dpi: u32) -> Self {
        Self {
            program: "pdftoppm".to_string(),
            dpi,
        }
    }

    /// Use a specific executable instead of `pdftoppm` from `PATH`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Whether the executable can be spawned
    pub fn is_available(&self) -> bool {
        command_available(&self.program, "-v", false)
    }
}

impl PageRasterizer for PdftoppmRasterizer {
    fn name(&self) -> &str {
        "pdftoppm"
    }

    fn rasterize(&self, path: &Path, output_dir: &Path) -> Result<Vec<PathBuf>, EngineError> {
        let output = Command::new(&self.program)
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg(path)
            .arg(output_dir.join("page"))
            .output()
            .map_err(|e| EngineError::new(self.name(), format!("failed to spawn: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EngineError::new(self.name(), stderr.trim().to_string()));
        }

        let mut images: Vec<PathBuf> = fs::read_dir(output_dir)
            .map_err(|e| EngineError::new(self.name(), format!("cannot list output: {}", e)))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
            .collect();

        images.sort_by_key(|p| page_number(p));

        debug!("pdftoppm rendered {} pages at {} dpi", images.len(), self.dpi);

        if images.is_empty() {
            return Err(EngineError::new(self.name(), "no page images were produced"));
        }

        Ok(images)
    }
}

/// Page number from a `page-<n>.png` file name; unparsable names sort last
fn page_number(path: &Path) -> (u64, PathBuf) {
    let number = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.rsplit_once('-'))
        .and_then(|(_, n)| n.parse::<u64>().ok())
        .unwrap_or(u64::MAX);
    (number, path.to_path_buf())
}

/// Recognizes page images with the `tesseract` CLI
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    program: String,
    language: String,
}

impl TesseractRecognizer {
    /// Create a recognizer for a tesseract language code (e.g. `eng`)
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            program: "tesseract".to_string(),
            language: language.into(),
        }
    }

    /// Use a specific executable instead of `tesseract` from `PATH`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Whether the executable answers `--version`
    pub fn is_available(&self) -> bool {
        command_available(&self.program, "--version", true)
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn recognize(&self, image: &Path) -> Result<String, EngineError> {
        let output = Command::new(&self.program)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| EngineError::new(self.name(), format!("failed to spawn: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EngineError::new(
                self.name(),
                format!("{} failed: {}", image.display(), stderr.trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING_PROGRAM: &str = "textsift-test-no-such-binary";

    #[test]
    fn test_missing_command_is_unavailable() {
        assert!(!command_available(MISSING_PROGRAM, "--version", true));
        assert!(!command_available(MISSING_PROGRAM, "-v", false));
    }

    #[test]
    fn test_missing_tools_report_unavailable() {
        assert!(!PdftoppmRasterizer::new(150).with_program(MISSING_PROGRAM).is_available());
        assert!(!TesseractRecognizer::new("eng").with_program(MISSING_PROGRAM).is_available());
    }

    #[test]
    fn test_spawn_failure_is_engine_error() {
        let dir = tempfile::tempdir().unwrap();
        let rasterizer = PdftoppmRasterizer::new(150).with_program(MISSING_PROGRAM);
        let err = rasterizer.rasterize(Path::new("in.pdf"), dir.path()).unwrap_err();
        assert_eq!(err.engine(), "pdftoppm");

        let recognizer = TesseractRecognizer::new("eng").with_program(MISSING_PROGRAM);
        let err = recognizer.recognize(Path::new("page-1.png")).unwrap_err();
        assert!(err.message().starts_with("failed to spawn"));
    }

    #[test]
    fn test_page_number_ordering() {
        let mut pages = vec![
            PathBuf::from("/tmp/page-10.png"),
            PathBuf::from("/tmp/page-2.png"),
            PathBuf::from("/tmp/page-1.png"),
        ];
        pages.sort_by_key(|p| page_number(p));
        assert_eq!(
            pages,
            vec![
                PathBuf::from("/tmp/page-1.png"),
                PathBuf::from("/tmp/page-2.png"),
                PathBuf::from("/tmp/page-10.png"),
            ]
        );
    }
}
