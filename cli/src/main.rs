//! pdfpages CLI - print the text of every page of a PDF

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use pdfpages::{DocumentInfo, ExtractOptions, DEFAULT_INPUT};

#[derive(Parser)]
#[command(name = "pdfpages")]
#[command(version)]
#[command(about = "Print the page count and the text of every page of a PDF", long_about = None)]
struct Cli {
    /// Input PDF file (defaults to the course assignment in the current directory)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the text of every page
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output JSON instead of labelled lines
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text { input, pages }) => cmd_text(&input, pages.as_deref()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            let input = cli.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            cmd_text(&input, cli.pages.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Print the page report. Extraction failures become the report's error
/// line on stdout; only output failures reach the caller.
fn cmd_text(input: &Path, pages: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let options = match pages {
        Some(spec) => match ExtractOptions::new().with_page_spec(spec) {
            Ok(options) => options,
            Err(e) => {
                pdfpages::report::report_failure(&mut out, &e)?;
                return Ok(());
            }
        },
        None => ExtractOptions::default(),
    };

    log::debug!("Extracting {} with {:?}", input.display(), options);
    pdfpages::run(input, &options, &mut out)?;
    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let info = DocumentInfo::from_path(input)?;

    if json {
        println!("{}", info.to_json(true)?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", "Document Information".cyan().bold())?;
    writeln!(out, "{}", "─".repeat(40).dimmed())?;

    writeln!(out, "{}: {}", "File".bold(), input.display())?;
    writeln!(out, "{}: PDF {}", "Format".bold(), info.pdf_version)?;
    writeln!(out, "{}: {}", "Pages".bold(), info.page_count)?;

    let fields = [
        ("Title", &info.title),
        ("Author", &info.author),
        ("Subject", &info.subject),
        ("Keywords", &info.keywords),
        ("Creator", &info.creator),
        ("Producer", &info.producer),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            writeln!(out, "{}: {}", label.bold(), value)?;
        }
    }

    if let Some(ref created) = info.created {
        writeln!(out, "{}: {}", "Created".bold(), created)?;
    }
    if let Some(ref modified) = info.modified {
        writeln!(out, "{}: {}", "Modified".bold(), modified)?;
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfpages".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Page-by-page PDF text extraction tool");
}
