use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use labelscan_core::domain::common::{BackendConfig, DEFAULT_API_BASE, LabelScanConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "labelscan", version, about = "Ingredient label risk analysis client")]
pub struct Args {
    /// Base URL of the analysis backend
    #[arg(long, env = "LABELSCAN_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, value_enum, env = "LABELSCAN_FORMAT", default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Emit logs as JSON lines
    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,

    /// Filter used when RUST_LOG is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Analyze ingredient text, a label photo, or both at once
    Analyze(AnalyzeArgs),
    /// Check that the backend is reachable
    Health,
}

#[derive(Debug, Clone, clap::Args)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(true)
        .args(["text", "text_file", "image"])
))]
pub struct AnalyzeArgs {
    /// Ingredient list as free text
    #[arg(long, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the ingredient list from a file
    #[arg(long)]
    pub text_file: Option<PathBuf>,

    /// Photo of an ingredient label
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Also print the backend's per-ingredient narrative
    #[arg(long, default_value_t = false)]
    pub narrative: bool,
}

impl From<Args> for LabelScanConfig {
    fn from(args: Args) -> Self {
        LabelScanConfig {
            backend: BackendConfig {
                base_url: args.api_base,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_text_defaults() {
        let args = Args::try_parse_from(["labelscan", "analyze", "--text", "tuz, şeker"]).unwrap();

        assert_eq!(args.api_base, DEFAULT_API_BASE);
        assert_eq!(args.format, OutputFormat::Table);
        let Command::Analyze(analyze) = &args.command else {
            panic!("expected analyze");
        };
        assert_eq!(analyze.text.as_deref(), Some("tuz, şeker"));
        assert!(analyze.image.is_none());
        assert!(!analyze.narrative);
    }

    #[test]
    fn test_analyze_requires_some_input() {
        assert!(Args::try_parse_from(["labelscan", "analyze"]).is_err());
    }

    #[test]
    fn test_text_and_text_file_conflict() {
        let parsed = Args::try_parse_from([
            "labelscan",
            "analyze",
            "--text",
            "tuz",
            "--text-file",
            "list.txt",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_text_and_image_together() {
        let args = Args::try_parse_from([
            "labelscan",
            "--format",
            "json",
            "analyze",
            "--text",
            "tuz",
            "--image",
            "label.jpg",
        ])
        .unwrap();

        assert_eq!(args.format, OutputFormat::Json);
        let Command::Analyze(analyze) = &args.command else {
            panic!("expected analyze");
        };
        assert_eq!(analyze.image, Some(PathBuf::from("label.jpg")));
    }

    #[test]
    fn test_config_from_args() {
        let args = Args::try_parse_from([
            "labelscan",
            "--api-base",
            "http://backend:9000",
            "health",
        ])
        .unwrap();

        let config = LabelScanConfig::from(args);
        assert_eq!(config.backend.base_url, "http://backend:9000");
    }
}
