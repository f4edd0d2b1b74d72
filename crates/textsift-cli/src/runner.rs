//! Pipeline construction and time-limited execution.

use crate::cli::Cli;
use crate::config;
use crate::error::Result;
use std::sync::Arc;
use std::time::Duration;
use textsift_domain::SourceDocument;
use textsift_extractor::{Pipeline, PipelineOutput};
use tracing::{error, info};

/// Build the pipeline from the config file and command-line overrides.
pub fn build_pipeline(cli: &Cli) -> Result<Pipeline> {
    let mut config = config::load(cli.config.as_deref())?;
    if let Some(max_keywords) = cli.max_keywords {
        config.max_keywords = max_keywords;
    }
    Ok(Pipeline::detect(config)?)
}

/// Run the pipeline on a blocking thread, giving up after `limit`.
///
/// A timeout or a failed task yields the fallback output. The abandoned
/// blocking thread is not interrupted; the caller should shut the runtime
/// down without waiting for it.
pub async fn run_with_timeout(
    pipeline: Arc<Pipeline>,
    source: SourceDocument,
    limit: Duration,
) -> PipelineOutput {
    info!("Processing file: {}", source.path().display());

    let task = tokio::task::spawn_blocking(move || pipeline.run(&source));

    match tokio::time::timeout(limit, task).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            error!("Extraction task failed: {}", e);
            PipelineOutput::fallback()
        }
        Err(_) => {
            error!("Extraction timed out after {}s", limit.as_secs());
            PipelineOutput::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;
    use std::thread;
    use tempfile::NamedTempFile;
    use textsift_domain::traits::TextLayerEngine;
    use textsift_domain::EngineError;
    use textsift_extractor::{EngineRegistry, PipelineConfig, RunStatus};

    struct SlowTextLayer(Duration);

    impl TextLayerEngine for SlowTextLayer {
        fn name(&self) -> &str {
            "slow"
        }

        fn extract_document(&self, _path: &Path) -> std::result::Result<String, EngineError> {
            thread::sleep(self.0);
            Ok("Finally done.".to_string())
        }
    }

    fn pdf_fixture() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"%PDF-1.4").unwrap();
        file
    }

    fn slow_pipeline(delay: Duration) -> Arc<Pipeline> {
        let registry = EngineRegistry::empty().with_text_layer(SlowTextLayer(delay));
        Arc::new(Pipeline::new(registry, PipelineConfig::default()).unwrap())
    }

    #[tokio::test]
    async fn test_completes_within_limit() {
        let file = pdf_fixture();
        let source = SourceDocument::new(file.path(), "a.pdf");

        let output = run_with_timeout(
            slow_pipeline(Duration::from_millis(10)),
            source,
            Duration::from_secs(10),
        )
        .await;

        assert_eq!(output.status, RunStatus::Completed);
        assert_eq!(output.document.full_text, "Finally done.");
    }

    #[tokio::test]
    async fn test_timeout_yields_fallback() {
        let file = pdf_fixture();
        let source = SourceDocument::new(file.path(), "a.pdf");

        let output = run_with_timeout(
            slow_pipeline(Duration::from_secs(2)),
            source,
            Duration::from_millis(50),
        )
        .await;

        assert_eq!(output.status, RunStatus::Fallback);
        assert_eq!(output.document, textsift_extractor::fallback_document());
    }

    #[test]
    fn test_max_keywords_override() {
        use clap::Parser;

        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "max_keywords = 7\n[engines]\nocr = false\n").unwrap();

        let cli = Cli::parse_from([
            "textsift",
            "--config",
            config_path.to_str().unwrap(),
            "--max-keywords",
            "2",
        ]);
        let pipeline = build_pipeline(&cli).unwrap();
        assert_eq!(pipeline.config().max_keywords, 2);
        assert!(!pipeline.capabilities().ocr);
    }
}
