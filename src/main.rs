//! CLI tool for adding or updating PDF document metadata.
//!
//! This binary is a thin wrapper around the addpdfmetadata crate: it parses
//! the command line, runs one merge-and-save pass, and prints a summary of
//! the four managed fields.

use addpdfmetadata::{
    EditorConfig, KeywordSource, MetadataError, MetadataUpdate, PdfMetadataEditor, Result,
};
use clap::Parser;
use std::path::PathBuf;
use std::process;

/// Add or update PDF metadata (Title, Author, Subject, Keywords).
#[derive(Debug, Parser)]
#[command(name = "addpdfmetadata", version, about)]
struct Cli {
    /// Path to the source PDF (e.g. resume.pdf)
    input_pdf: PathBuf,

    /// Path to write the updated PDF
    output_pdf: PathBuf,

    /// Document Title
    #[arg(long, value_name = "STRING")]
    title: Option<String>,

    /// Document Author
    #[arg(long, value_name = "STRING")]
    author: Option<String>,

    /// Document Subject
    #[arg(long, value_name = "STRING")]
    subject: Option<String>,

    /// Comma-separated keywords
    #[arg(long, value_name = "STRING", group = "keyword_source")]
    keywords: Option<String>,

    /// Text file containing keywords (comma or newline separated)
    #[arg(long, value_name = "PATH", group = "keyword_source")]
    keywords_file: Option<PathBuf>,

    /// Allow writing output_pdf even if it already exists
    #[arg(long)]
    overwrite: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {}
        Err(MetadataError::OutputExists(path)) => {
            eprintln!(
                "Error: {} already exists. Use --overwrite to replace it.",
                path.display()
            );
            process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Refuse to clobber the output before the input is even opened.
    if cli.output_pdf.exists() && !cli.overwrite {
        return Err(MetadataError::OutputExists(cli.output_pdf.clone()));
    }

    let config = EditorConfig {
        overwrite: cli.overwrite,
        ..Default::default()
    };
    let mut editor = PdfMetadataEditor::with_config(&cli.input_pdf, config)?;

    let update = MetadataUpdate {
        title: cli.title.clone(),
        author: cli.author.clone(),
        subject: cli.subject.clone(),
        keywords: keyword_source(cli).map(|source| source.resolve()).transpose()?,
    };
    editor.apply(&update)?;
    editor.save(&cli.output_pdf)?;

    let info = editor.info();
    println!("Updated metadata written to: {}", cli.output_pdf.display());
    println!("Summary:");
    println!("  Title   : {}", field(&info.title));
    println!("  Author  : {}", field(&info.author));
    println!("  Subject : {}", field(&info.subject));
    println!("  Keywords: {}", field(&info.keywords));

    Ok(())
}

/// The keyword source selected on the command line, if any. clap has
/// already rejected the case where both flags are present.
fn keyword_source(cli: &Cli) -> Option<KeywordSource> {
    if let Some(keywords) = &cli.keywords {
        Some(KeywordSource::Inline(keywords.clone()))
    } else {
        cli.keywords_file.clone().map(KeywordSource::File)
    }
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(not set)")
}
