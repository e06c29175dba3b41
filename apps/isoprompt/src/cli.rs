//! Command-line surface: argument definitions and file I/O helpers.
//!
//! Mode and domain values are restricted to catalog keys by the parser, so an
//! unknown key never reaches the validator or the network.

use std::fs;
use std::path::{Path, PathBuf};

use clap::builder::PossibleValuesParser;
use clap::{ArgGroup, Parser};

use crate::catalog::DEFAULT_MODE;
use crate::config::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::errors::{IsoPromptError, Result};
use crate::optimizer::OptimizeOptions;
use crate::{available_domain_names, available_mode_names};

const PREVIEW_CHARS: usize = 100;

const EXAMPLES: &str = "\
Examples:
  isoprompt --prompt \"write a blog post about AI\"

  # With domain specialization
  isoprompt --prompt \"optimize our supply chain\" --domain supply_chain

  # With mode selection
  isoprompt --prompt \"marketing campaign ideas\" --mode creative --refine

  # File I/O
  isoprompt --input basic_prompt.txt --output optimized_prompt.txt";

/// AI-powered prompt optimization tool.
///
/// Transforms a basic prompt into an optimized, production-ready prompt
/// tuned by mode (reasoning style) and domain (subject specialization).
/// Requires OPENAI_API_KEY in the environment or in a .env file.
#[derive(Parser, Debug)]
#[command(name = "isoprompt")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
#[command(group(ArgGroup::new("source").required(true).args(["prompt", "input"])))]
pub struct Cli {
    /// Basic prompt to optimize
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// File containing the basic prompt
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Save the optimized prompt to a file instead of printing it
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Optimization mode
    #[arg(
        short,
        long,
        default_value = DEFAULT_MODE,
        value_parser = PossibleValuesParser::new(available_mode_names())
    )]
    pub mode: String,

    /// Domain specialization (default: general_knowledge)
    #[arg(
        short,
        long,
        value_parser = PossibleValuesParser::new(available_domain_names()),
        hide_possible_values = true
    )]
    pub domain: Option<String>,

    /// Apply additional refinement to the optimized prompt (reserved)
    #[arg(short, long)]
    pub refine: bool,

    /// Model used for optimization
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Temperature for optimization, between 0.0 and 2.0
    #[arg(short, long, default_value_t = DEFAULT_TEMPERATURE, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Show detailed output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The prompt text from `--prompt` or `--input`, rejected when blank.
    pub fn user_input(&self) -> Result<String> {
        let text = match (&self.prompt, &self.input) {
            (Some(prompt), _) => prompt.clone(),
            (None, Some(path)) => read_prompt(path)?,
            (None, None) => String::new(),
        };

        if text.trim().is_empty() {
            return Err(IsoPromptError::EmptyInput);
        }
        Ok(text)
    }

    pub fn to_options(&self) -> OptimizeOptions {
        OptimizeOptions {
            mode: self.mode.clone(),
            domain: self.domain.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            verbose: self.verbose,
        }
    }
}

/// Reads a UTF-8 prompt file and trims it.
pub fn read_prompt(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map(|text| text.trim().to_string())
        .map_err(|e| IsoPromptError::io(path, e))
}

/// Writes the prompt, creating missing parent directories.
/// Returns the absolute path written.
pub fn save_prompt(prompt: &str, path: &Path) -> Result<PathBuf> {
    let output_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| IsoPromptError::io(path, e))?
            .join(path)
    };

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|e| IsoPromptError::io(parent, e))?;
    }
    fs::write(&output_path, prompt).map_err(|e| IsoPromptError::io(&output_path, e))?;

    Ok(output_path)
}

/// Short single-line preview for verbose output.
pub fn input_preview(user_input: &str) -> String {
    let head: String = user_input.chars().take(PREVIEW_CHARS).collect();
    if head.len() < user_input.len() {
        format!("INPUT: [{head}...]")
    } else {
        format!("INPUT: [{head}]")
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("isoprompt").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--prompt", "hello"]).unwrap();
        assert_eq!(cli.mode, "simple");
        assert_eq!(cli.domain, None);
        assert_eq!(cli.model, DEFAULT_MODEL);
        assert_eq!(cli.temperature, DEFAULT_TEMPERATURE);
        assert!(!cli.verbose && !cli.refine);
        assert_eq!(cli.to_options(), OptimizeOptions::default());
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&[
            "-p", "x", "-m", "creative", "-d", "marketing", "-r", "-t", "1.5", "-v", "-o", "out.txt",
        ])
        .unwrap();
        assert_eq!(cli.mode, "creative");
        assert_eq!(cli.domain.as_deref(), Some("marketing"));
        assert!(cli.refine && cli.verbose);
        assert_eq!(cli.temperature, 1.5);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_source_is_required() {
        let err = parse(&["--mode", "simple"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_prompt_and_input_are_exclusive() {
        let err = parse(&["--prompt", "x", "--input", "f.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_unknown_mode_rejected_by_parser() {
        let err = parse(&["--prompt", "x", "--mode", "not-a-mode"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_unknown_domain_rejected_by_parser() {
        let err = parse(&["--prompt", "x", "--domain", "alchemy"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_out_of_range_temperature_reaches_validator() {
        // The parser accepts any float; range checking is the validator's job
        let cli = parse(&["--prompt", "x", "-t", "-0.1"]).unwrap();
        assert_eq!(cli.temperature, -0.1);
        let err = crate::validate_config(&cli.to_options().to_config()).unwrap_err();
        assert!(matches!(err, IsoPromptError::InvalidTemperature(_)));
    }

    #[test]
    fn test_version_flag() {
        let err = parse(&["--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_blank_prompt_is_empty_input() {
        let cli = parse(&["--prompt", "   "]).unwrap();
        assert!(matches!(cli.user_input(), Err(IsoPromptError::EmptyInput)));
    }

    #[test]
    fn test_input_file_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.txt");
        fs::write(&path, "\n  summarize this report \n").unwrap();

        let cli = parse(&["--input", path.to_str().unwrap()]).unwrap();
        assert_eq!(cli.user_input().unwrap(), "summarize this report");
    }

    #[test]
    fn test_missing_input_file_names_path() {
        let cli = parse(&["--input", "definitely-missing.txt"]).unwrap();
        let err = cli.user_input().unwrap_err();
        assert!(matches!(err, IsoPromptError::Io { .. }));
        assert!(err.to_string().contains("definitely-missing.txt"));
    }

    #[test]
    fn test_save_prompt_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/deeper/out.txt");

        let written = save_prompt("optimized", &target).unwrap();
        assert_eq!(written, target);
        assert_eq!(fs::read_to_string(&target).unwrap(), "optimized");
    }

    #[test]
    fn test_input_preview_truncates_on_char_boundary() {
        assert_eq!(input_preview("short"), "INPUT: [short]");

        let long = "é".repeat(150);
        let preview = input_preview(&long);
        assert!(preview.ends_with("...]"));
        assert_eq!(preview.chars().filter(|&c| c == 'é').count(), 100);
    }
}
