//! Segment command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use cuealign_core::Segmenter;
use std::path::PathBuf;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Script files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file (terminators and output options)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let files = resolve_patterns(&self.input)?;
        log::info!("Segmenting {} file(s)", files.len());

        let segmenter = Segmenter::new(&config.alignment.segmenter);
        let mut formatter = create_formatter(self.format, self.output.as_deref(), &config.output)?;

        let mut progress = ProgressReporter::new(quiet);
        progress.start(files.len() as u64, "files");

        for path in &files {
            let script = FileReader::read_text(path)?;
            let segments = segmenter.segment(&script);
            let source = path.display().to_string();
            log::debug!("{source}: {} segments", segments.len());

            for segment in &segments {
                formatter.format_segment(&source, segment)?;
            }
            progress.tick(&source);
        }

        progress.finish();
        formatter.finish(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_segments_written_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("script.txt");
        let output = temp_dir.path().join("out.json");
        std::fs::write(&script, "Hello world. Testing one two.").unwrap();

        let args = SegmentArgs {
            input: vec![script.display().to_string()],
            output: Some(output.clone()),
            format: OutputFormat::Json,
            config: None,
        };
        args.execute(true).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["text"], "Hello world.");
    }

    #[test]
    fn test_custom_terminators_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let script = temp_dir.path().join("script.txt");
        let config = temp_dir.path().join("config.toml");
        let output = temp_dir.path().join("out.json");
        std::fs::write(&script, "one; two. three").unwrap();
        std::fs::write(&config, "[alignment.segmenter]\nterminators = [\";\"]\n").unwrap();

        let args = SegmentArgs {
            input: vec![script.display().to_string()],
            output: Some(output.clone()),
            format: OutputFormat::Json,
            config: Some(config),
        };
        args.execute(true).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        let texts: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["text"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(texts, vec!["one;", "two. three"]);
    }

    #[test]
    fn test_missing_input_fails() {
        let args = SegmentArgs {
            input: vec!["/nonexistent/*.txt".to_string()],
            output: None,
            format: OutputFormat::Text,
            config: None,
        };
        assert!(args.execute(true).is_err());
    }
}
