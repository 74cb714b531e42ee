//! tabtsv CLI - Markdown / HTML / Word tables to tab-delimited text

#[cfg(feature = "cli")]
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use tabtsv::{
    convert_tables_inline, detect_format, extract_tables, format_as_markdown, format_as_tsv,
    format_from_path,
    files::{self, FileSink, OutputSink, StdoutSink},
    utils::ClipboardSink,
    ConversionError, ConversionResult, ExtractedTable, SourceFormat, TsvOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tabtsv")]
#[command(version)]
#[command(about = "Convert Markdown, HTML and Word tables to tab-delimited text", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: suppress status messages on stderr
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Replace Markdown pipe tables with tab-delimited lines inside the document
    Inline {
        /// Input Markdown file
        input: PathBuf,

        /// Output file (default: <name>_inline.<ext>)
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Modify the input file in place
        #[arg(long)]
        in_place: bool,
    },

    /// Extract every table from a Markdown, HTML or Word document
    Extract {
        /// Input file (Markdown, HTML or .docx)
        input: Option<PathBuf>,

        /// Read from stdin instead of a file
        #[arg(long, conflicts_with = "input")]
        stdin: bool,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exclude section headers from output
        #[arg(long)]
        no_headers: bool,

        /// Force input format (auto-detected by default)
        #[arg(long, value_enum)]
        format: Option<InputFormat>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
        to: OutputFormat,

        /// Save each table to a separate file (requires --output)
        #[arg(long, requires = "output")]
        per_table: bool,

        /// Copy result to clipboard
        #[arg(long)]
        clipboard: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    /// Markdown pipe tables
    Markdown,
    /// HTML <table> elements
    Html,
    /// Word document
    Docx,
}

#[cfg(feature = "cli")]
impl From<InputFormat> for SourceFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Markdown => SourceFormat::Markdown,
            InputFormat::Html => SourceFormat::Html,
            InputFormat::Docx => SourceFormat::Docx,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Tab-separated values
    Tsv,
    /// Markdown pipe tables
    Markdown,
}

#[cfg(feature = "cli")]
impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Tsv => ".txt",
            OutputFormat::Markdown => ".md",
        }
    }

    fn render(self, tables: &[ExtractedTable], options: &TsvOptions) -> String {
        match self {
            OutputFormat::Tsv => format_as_tsv(tables, options),
            OutputFormat::Markdown => format_as_markdown(tables),
        }
    }
}

/// Status lines on stderr, silenced by `--quiet`
#[cfg(feature = "cli")]
struct Reporter {
    quiet: bool,
}

#[cfg(feature = "cli")]
impl Reporter {
    fn status(&self, message: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("{}", message.as_ref());
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let reporter = Reporter { quiet: cli.quiet };

    if let Err(e) = handle_command(cli.command, &reporter) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn handle_command(cmd: Commands, reporter: &Reporter) -> ConversionResult<()> {
    match cmd {
        Commands::Inline {
            input,
            output,
            in_place,
        } => {
            ensure_exists(&input);
            let text = files::read_text(Some(input.as_path()))?;
            let result = convert_tables_inline(&text);

            let out_path = if in_place {
                input.clone()
            } else {
                output.unwrap_or_else(|| files::inline_output_path(&input))
            };

            let mut sink = FileSink::new(&out_path);
            sink.write_output(&result.text)?;
            reporter.status(format!(
                "✓ Converted {} table(s) -> tabs in: {}",
                result.tables_converted,
                sink.describe()
            ));
        }

        Commands::Extract {
            input,
            stdin,
            output,
            no_headers,
            format,
            to,
            per_table,
            clipboard,
        } => {
            let (tables, detected) = match (input, stdin) {
                (_, true) => read_stdin_tables(format.map(SourceFormat::from))?,
                (Some(path), false) => {
                    ensure_exists(&path);
                    read_file_tables(&path, format.map(SourceFormat::from))?
                }
                (None, false) => Cli::command()
                    .error(
                        clap::error::ErrorKind::MissingRequiredArgument,
                        "Input file required (or use --stdin)",
                    )
                    .exit(),
            };
            reporter.status(format!("Detected {} format", detected));

            if tables.is_empty() {
                eprintln!("Warning: No tables found in input file");
                return Ok(());
            }
            reporter.status(format!("Found {} table(s) in input file", tables.len()));

            let options = TsvOptions {
                include_headers: !no_headers,
                normalize_columns: detected != SourceFormat::Markdown,
            };

            if per_table {
                if let Some(ref base) = output {
                    write_per_table(&tables, base, to, &options, reporter)?;
                    return Ok(());
                }
            }

            let content = to.render(&tables, &options);

            if clipboard {
                match ClipboardSink::new().write_output(&content) {
                    Ok(()) => reporter.status("✓ Copied to clipboard!"),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        eprintln!();
                        eprintln!("Content:");
                        StdoutSink.write_output(&content)?;
                    }
                }
            } else if let Some(path) = output {
                let mut sink = FileSink::new(path);
                sink.write_output(&content)?;
                reporter.status(format!("✓ Saved to: {}", sink.describe()));
            } else {
                StdoutSink.write_output(&content)?;
            }
        }

        Commands::Info => {
            println!("tabtsv - Markdown / HTML / Word tables to tab-delimited text");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Inline Markdown table rewrite (code fences preserved)");
            println!("  ✓ Markdown pipe table extraction");
            println!("  ✓ HTML table extraction (colspan, entities, <br>)");
            println!("  ✓ Word (.docx) table extraction");
            println!("  ✓ TSV or Markdown output, one file per table");
            println!(
                "  {} Clipboard output",
                if cfg!(feature = "clipboard") { "✓" } else { "✗" }
            );
            println!();
        }
    }

    Ok(())
}

/// Exit with the standard message when the input file is missing.
#[cfg(feature = "cli")]
fn ensure_exists(path: &Path) {
    if !path.exists() {
        eprintln!("Error: Input file not found: {}", path.display());
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn read_stdin_tables(
    forced: Option<SourceFormat>,
) -> ConversionResult<(Vec<ExtractedTable>, SourceFormat)> {
    if forced == Some(SourceFormat::Docx) {
        return Err(ConversionError::invalid(
            "Word documents cannot be read from stdin; pass the file path",
        ));
    }
    let content = files::read_text(None)?;
    let format = forced.unwrap_or_else(|| detect_format(&content, None));
    Ok((extract_tables(content.as_bytes(), format)?, format))
}

#[cfg(feature = "cli")]
fn read_file_tables(
    path: &Path,
    forced: Option<SourceFormat>,
) -> ConversionResult<(Vec<ExtractedTable>, SourceFormat)> {
    let docx_ext = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("docx"));
    if forced == Some(SourceFormat::Docx) && !docx_ext {
        log::warn!("file does not have a .docx extension: {}", path.display());
    }

    let bytes = files::read_bytes(path)?;
    let format = match forced.or_else(|| format_from_path(path)) {
        Some(format) => format,
        None => detect_format(&String::from_utf8_lossy(&bytes), None),
    };
    Ok((extract_tables(&bytes, format)?, format))
}

#[cfg(feature = "cli")]
fn write_per_table(
    tables: &[ExtractedTable],
    base: &Path,
    to: OutputFormat,
    options: &TsvOptions,
    reporter: &Reporter,
) -> ConversionResult<()> {
    for (i, table) in tables.iter().enumerate() {
        let path = files::per_table_path(base, i + 1, to.extension());
        let mut sink = FileSink::new(&path);
        sink.write_output(&to.render(std::slice::from_ref(table), options))?;
        reporter.status(format!("✓ Saved: {}", sink.describe()));
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabtsv --features cli");
    eprintln!("  tabtsv <COMMAND> [OPTIONS]");
}
