//! Command-line argument parsing.

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::path::PathBuf;
use textsift_domain::SourceDocument;
use tracing::Level;

/// Message reported when a positional argument is missing.
pub const USAGE_ERROR: &str = "Not enough arguments. Usage: textsift <file_path> <file_name>";

/// Textsift - Extract structured text from documents.
///
/// Prints one JSON document with the normalized text, its sentences, the most
/// frequent significant words and extraction statistics.
#[derive(Debug, Parser)]
#[command(name = "textsift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File to extract
    pub file_path: Option<PathBuf>,

    /// Original file name; its suffix declares the document type
    pub file_name: Option<String>,

    /// Configuration file path
    #[arg(short, long, env = "TEXTSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum number of important words (overrides the config file)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub max_keywords: Option<usize>,

    /// Wall-clock limit for the whole extraction
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print the available extraction engines and exit
    #[arg(long)]
    pub probe: bool,

    /// Log debug details to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The document to process, if both positionals were given.
    pub fn source(&self) -> Option<SourceDocument> {
        match (&self.file_path, &self.file_name) {
            (Some(path), Some(name)) => Some(SourceDocument::new(path.clone(), name)),
            _ => None,
        }
    }

    /// Default log level selected by the verbosity flags.
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textsift_domain::DocumentType;

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::parse_from(["textsift", "/tmp/upload-1", "Report.PDF"]);
        let source = cli.source().unwrap();
        assert_eq!(source.path(), PathBuf::from("/tmp/upload-1"));
        assert_eq!(source.declared_type(), DocumentType::Pdf);
        assert_eq!(cli.timeout_secs, 120);
    }

    #[test]
    fn test_missing_file_name() {
        let cli = Cli::parse_from(["textsift", "/tmp/upload-1"]);
        assert!(cli.source().is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "textsift",
            "--pretty",
            "--max-keywords",
            "5",
            "--timeout-secs",
            "30",
            "-v",
            "a.txt",
            "a.txt",
        ]);
        assert!(cli.pretty);
        assert_eq!(cli.max_keywords, Some(5));
        assert_eq!(cli.timeout_secs, 30);
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        assert!(Cli::try_parse_from(["textsift", "--timeout-secs", "0"]).is_err());
        assert!(Cli::try_parse_from(["textsift", "--max-keywords", "0"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["textsift", "-v", "-q"]).is_err());
        let cli = Cli::parse_from(["textsift", "-q"]);
        assert_eq!(cli.log_level(), Level::WARN);
    }
}
