//! Reflow command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use textbreak_core::{Config, CountingPolicy, Output, Reflower};

use super::{PolicyArg, RunOptions};
use crate::clipboard::{copy_result, Clipboard, SystemClipboard};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_sources, InputSource};
use crate::output::{formatter_for, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the reflow command
#[derive(Debug, Args)]
pub struct ReflowArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Take the input text from the system clipboard
    #[arg(long, conflicts_with = "input")]
    pub from_clipboard: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Counted characters per line
    #[arg(short, long, value_name = "N", env = "TEXTBREAK_WIDTH")]
    pub width: Option<usize>,

    /// Counting policy
    #[arg(short, long, value_enum, env = "TEXTBREAK_POLICY")]
    pub policy: Option<PolicyArg>,

    /// Put every sentence in its own paragraph before wrapping
    #[arg(long, conflicts_with = "no_sentences")]
    pub sentences: bool,

    /// Wrap the text as written
    #[arg(long)]
    pub no_sentences: bool,

    /// Copy the reflowed text to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Reflow multiple files in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ReflowArgs {
    /// Execute the reflow command against the system clipboard
    pub fn execute(&self, options: RunOptions) -> CliResult<()> {
        let mut clipboard = SystemClipboard;
        self.execute_with(options, &mut clipboard)
    }

    /// Execute the reflow command with the given clipboard
    pub fn execute_with(
        &self,
        options: RunOptions,
        clipboard: &mut dyn Clipboard,
    ) -> CliResult<()> {
        let file_config = CliConfig::load_or_default(self.config.as_deref())?;
        let reflower = self.build_reflower(&file_config)?;
        let format = self.format.unwrap_or(file_config.output.default_format);

        log::info!(
            "Reflowing with line budget {} and policy {}",
            reflower.config().line_budget(),
            reflower.config().policy()
        );

        let sources = resolve_sources(&self.input, self.from_clipboard, clipboard)?;
        log::debug!("Resolved {} input source(s)", sources.len());

        let outputs = self.reflow_sources(&reflower, &sources, options.quiet)?;

        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = formatter_for(format, writer, file_config.output.pretty_json);
        for (source, output) in sources.iter().zip(&outputs) {
            formatter.write_document(&source.label(), output)?;
        }
        formatter.finish()?;

        if !options.quiet {
            for (source, output) in sources.iter().zip(&outputs) {
                if sources.len() > 1 {
                    eprintln!("{}: {}", source.label(), output.summary());
                } else {
                    eprintln!("{}", output.summary());
                }
            }
        }

        if self.copy || file_config.output.copy_to_clipboard {
            let text = outputs
                .iter()
                .map(Output::text)
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n");
            if copy_result(clipboard, &text)? && !options.quiet {
                eprintln!("Copied result to clipboard");
            }
        }

        Ok(())
    }

    /// Merge flags over the configuration file into a core reflower
    fn build_reflower(&self, file_config: &CliConfig) -> Result<Reflower, CliError> {
        let normalize = if self.no_sentences {
            false
        } else if self.sentences {
            true
        } else {
            file_config.reflow.separate_sentences
        };
        let policy = self
            .policy
            .map(CountingPolicy::from)
            .unwrap_or(file_config.reflow.policy);

        let config = Config::builder()
            .line_budget(self.width.unwrap_or(file_config.reflow.line_budget))
            .policy(policy)
            .normalize_sentences(normalize)
            .build()?;
        Ok(Reflower::with_config(config)?)
    }

    fn reflow_sources(
        &self,
        reflower: &Reflower,
        sources: &[InputSource],
        quiet: bool,
    ) -> Result<Vec<Output>> {
        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(sources.len() as u64);

        let reflow_one = |source: &InputSource| -> Result<Output> {
            let text = source.read_text()?;
            if text.trim().is_empty() {
                log::warn!("{}: input text is empty", source.label());
            }
            let output = reflower.process_text(&text);
            progress.file_completed(&source.label());
            Ok(output)
        };

        let outputs = if self.parallel && sources.len() > 1 {
            sources.par_iter().map(reflow_one).collect::<Result<Vec<_>>>()
        } else {
            sources.iter().map(reflow_one).collect::<Result<Vec<_>>>()
        };
        progress.finish();
        outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(input: &str, output: PathBuf) -> ReflowArgs {
        ReflowArgs {
            input: vec![input.to_string()],
            from_clipboard: false,
            output: Some(output),
            format: None,
            width: None,
            policy: None,
            sentences: false,
            no_sentences: false,
            copy: false,
            parallel: false,
            config: None,
        }
    }

    const QUIET: RunOptions = RunOptions { quiet: true };

    #[test]
    fn test_reflow_file_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("memo.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "안녕하세요 저는 개발자입니다").unwrap();

        let mut args = args_for(input.to_str().unwrap(), output.clone());
        args.width = Some(5);
        args.policy = Some(PolicyArg::KoreanOnly);
        args.no_sentences = true;

        args.execute_with(QUIET, &mut MemoryClipboard::new()).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, "안녕하세요\n저는\n개발자입니\n다\n");
    }

    #[test]
    fn test_config_file_supplies_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("memo.txt");
        let output = temp_dir.path().join("out.txt");
        let config = temp_dir.path().join("textbreak.toml");
        fs::write(&input, "가나다라 마바사").unwrap();
        fs::write(
            &config,
            "[reflow]\nline_budget = 4\npolicy = \"korean-only\"\nseparate_sentences = false\n",
        )
        .unwrap();

        let mut args = args_for(input.to_str().unwrap(), output.clone());
        args.config = Some(config);
        args.execute_with(QUIET, &mut MemoryClipboard::new()).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "가나다라\n마바사\n");
    }

    #[test]
    fn test_width_flag_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("memo.txt");
        let output = temp_dir.path().join("out.txt");
        let config = temp_dir.path().join("textbreak.toml");
        fs::write(&input, "가나다라 마바사").unwrap();
        fs::write(&config, "[reflow]\nline_budget = 4\n").unwrap();

        let mut args = args_for(input.to_str().unwrap(), output.clone());
        args.config = Some(config);
        args.width = Some(18);
        args.execute_with(QUIET, &mut MemoryClipboard::new()).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "가나다라 마바사\n");
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("memo.txt");
        fs::write(&input, "가나다").unwrap();

        let mut args = args_for(input.to_str().unwrap(), temp_dir.path().join("out.txt"));
        args.width = Some(0);

        let err = args
            .execute_with(QUIET, &mut MemoryClipboard::new())
            .unwrap_err();
        assert!(err.to_string().contains("line_budget must be greater than 0"));
    }

    #[test]
    fn test_clipboard_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.txt");
        let mut clipboard = MemoryClipboard::new();
        clipboard.write("첫 문장입니다. 둘째 문장입니다.");

        let mut args = args_for("unused", output.clone());
        args.input.clear();
        args.from_clipboard = true;
        args.copy = true;
        args.execute_with(QUIET, &mut clipboard).unwrap();

        let expected = "첫 문장입니다.\n\n둘째 문장입니다.";
        assert_eq!(clipboard.content(), Some(expected));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            format!("{expected}\n")
        );
    }

    #[test]
    fn test_blank_result_keeps_clipboard_content() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("blank.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "  \n\n").unwrap();

        let mut clipboard = MemoryClipboard::new();
        clipboard.write("사용자가 복사해 둔 내용");

        let mut args = args_for(input.to_str().unwrap(), output.clone());
        args.copy = true;
        args.execute_with(QUIET, &mut clipboard).unwrap();

        assert_eq!(clipboard.content(), Some("사용자가 복사해 둔 내용"));
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_unavailable_clipboard_fails_after_writing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("memo.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "가나다").unwrap();

        let mut args = args_for(input.to_str().unwrap(), output.clone());
        args.copy = true;

        let err = args
            .execute_with(QUIET, &mut MemoryClipboard::unavailable())
            .unwrap_err();
        assert!(err.to_string().contains("Clipboard unavailable"));
        assert_eq!(fs::read_to_string(&output).unwrap(), "가나다\n");
    }

    #[test]
    fn test_parallel_multiple_files_keep_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "가나다").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "라마바").unwrap();
        let output = temp_dir.path().join("out.txt");
        let pattern = temp_dir.path().join("*.txt");

        let mut args = args_for(pattern.to_str().unwrap(), output.clone());
        args.parallel = true;
        args.execute_with(QUIET, &mut MemoryClipboard::new()).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "가나다\n\n라마바\n");
    }
}
