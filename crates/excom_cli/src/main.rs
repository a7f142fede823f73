//! excom: Extract comments from source files.
//!
//! Usage:
//!   excom [options] <file>...
//!
//! Prints one line per comment fragment as `file:line:column: text`, or
//! one JSON object per line with `--format json`.

use clap::{Parser as ClapParser, ValueEnum};
use excom_core::{ScanError, SourceLines, TabWidth};
use excom_scanner::{scan_file, AnyScanner, CommentRecord, Dialect};
use miette::{IntoDiagnostic, WrapErr};
use rayon::prelude::*;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "excom", about = "excom - extract comments from C, Python and markup sources", version)]
struct Cli {
    /// Source files to scan.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Columns per tab when reporting comment offsets.
    #[arg(short = 't', long = "tab-width")]
    tab_width: Option<usize>,

    /// Path to an excom.json config file.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Scan every file as this dialect (c, py, xml) instead of going by extension.
    #[arg(long)]
    dialect: Option<Dialect>,

    /// Log debug output to stderr.
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// The outcome of scanning one file. `None` means no scanner applies.
struct FileReport {
    path: PathBuf,
    result: Result<Option<Vec<CommentRecord>>, ScanError>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    file: String,
    #[serde(flatten)]
    record: &'a CommentRecord,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(report) => {
            eprintln!("{:?}", report);
            process::exit(2);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> miette::Result<i32> {
    let cwd = std::env::current_dir().into_diagnostic()?;
    let options = excom_options::load_options(cli.config.as_deref(), &cwd)
        .into_diagnostic()
        .wrap_err("failed to load options")?
        .with_tab_width(cli.tab_width);
    let tabs = options.tab_width().into_diagnostic()?;
    tracing::debug!("tab width {}", tabs);

    // Each file gets its own scanner; reports come back in input order.
    let reports: Vec<FileReport> = cli
        .files
        .par_iter()
        .map(|path| FileReport {
            path: path.clone(),
            result: scan_one(path, cli.dialect, tabs),
        })
        .collect();

    let use_color = cli.format == OutputFormat::Text && stdout_is_terminal();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut exit_code = 0;

    for report in &reports {
        match &report.result {
            Ok(Some(records)) => {
                for record in records {
                    let line = match cli.format {
                        OutputFormat::Text => render_text(&report.path, record, use_color),
                        OutputFormat::Json => render_json(&report.path, record).into_diagnostic()?,
                    };
                    writeln!(out, "{}", line).into_diagnostic()?;
                }
            }
            Ok(None) => {
                tracing::warn!("skipping {}: unsupported file type", report.path.display());
            }
            Err(e) => {
                print_error(&format!("{}: {}", report.path.display(), e));
                exit_code = 1;
            }
        }
    }

    Ok(exit_code)
}

fn scan_one(
    path: &Path,
    dialect: Option<Dialect>,
    tabs: TabWidth,
) -> Result<Option<Vec<CommentRecord>>, ScanError> {
    let scanner = match dialect {
        Some(dialect) => Some(AnyScanner::new(dialect, SourceLines::open(path)?, tabs)),
        None => scan_file(path, tabs)?,
    };
    scanner
        .map(|s| {
            tracing::debug!("{}: {} scanner", path.display(), s.dialect());
            s.collect::<Result<Vec<_>, _>>()
        })
        .transpose()
}

fn render_text(path: &Path, record: &CommentRecord, use_color: bool) -> String {
    if use_color {
        format!(
            "{}{}{}{}:{}:{}{}: {}",
            CYAN,
            path.display(),
            RESET,
            GRAY,
            record.line,
            record.column,
            RESET,
            record.trimmed_text()
        )
    } else {
        format!("{}:{}", path.display(), record)
    }
}

fn render_json(path: &Path, record: &CommentRecord) -> serde_json::Result<String> {
    serde_json::to_string(&JsonRecord {
        file: path.display().to_string(),
        record,
    })
}

fn print_error(msg: &str) {
    if stderr_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn stdout_is_terminal() -> bool {
    is_terminal(1)
}

fn stderr_is_terminal() -> bool {
    is_terminal(2)
}

fn is_terminal(fd: i32) -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(fd) != 0 }
    }
    #[cfg(not(unix))]
    {
        let _ = fd;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_plain() {
        let record = CommentRecord::new(" hello\n", 3, 9);
        assert_eq!(
            render_text(Path::new("src/a.c"), &record, false),
            "src/a.c:3:9:  hello"
        );
    }

    #[test]
    fn test_render_json() {
        let record = CommentRecord::new(" note\n", 1, 8);
        let json = render_json(Path::new("a.py"), &record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["file"], "a.py");
        assert_eq!(value["text"], " note\n");
        assert_eq!(value["line"], 1);
        assert_eq!(value["column"], 8);
    }

    #[test]
    fn test_scan_one_unsupported() {
        let result = scan_one(Path::new("no/such/file.rs"), None, TabWidth::DEFAULT);
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_scan_one_forced_dialect_opens_file() {
        let result = scan_one(
            Path::new("no/such/file.rs"),
            Some(Dialect::CStyle),
            TabWidth::DEFAULT,
        );
        assert!(matches!(result, Err(ScanError::Open { .. })));
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["excom", "-t", "8", "--format", "json", "--dialect", "py", "x.txt"]);
        assert_eq!(cli.tab_width, Some(8));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.dialect, Some(Dialect::PyStyle));
        assert_eq!(cli.files, vec![PathBuf::from("x.txt")]);
    }
}
